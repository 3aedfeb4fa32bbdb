use serde::{Deserialize, Serialize};

/// One scanned Keel source file: module name, state variables, events, and
/// function declarations in source order. Rebuilt from scratch for every
/// compilation; nothing here outlives one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceModule {
    pub name: String,
    pub state: Vec<StateVariable>,
    pub events: Vec<String>,
    pub functions: Vec<FunctionDecl>,
}

impl SourceModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Vec::new(),
            events: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Declared state variable names, used by the mutability classifier.
    /// Declarations whose name could not be extracted are skipped.
    pub fn state_names(&self) -> Vec<&str> {
        self.state
            .iter()
            .map(|v| v.name.as_str())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// A persistent variable declared inside the module's `state { ... }` block.
/// The declaration text is carried verbatim; only the name is extracted, for
/// matching during classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateVariable {
    pub name: String,
    pub decl: String,
}

/// A constructor or function: its header line plus the raw body lines between
/// the opening brace and its match (exclusive of the header, inclusive of the
/// closing-brace line).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub header: String,
    pub body: Vec<String>,
    pub is_constructor: bool,
}

impl FunctionDecl {
    pub fn new(header: impl Into<String>, is_constructor: bool) -> Self {
        Self {
            header: header.into(),
            body: Vec::new(),
            is_constructor,
        }
    }
}
