use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    External,
    Internal,
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::External => "external",
            Visibility::Internal => "internal",
            Visibility::Private => "private",
        }
    }
}

/// Side-effect class of a function body, derived from its state and
/// environment access pattern. `NonPayable` is Solidity's unannotated
/// default for state-mutating functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutability {
    Pure,
    View,
    NonPayable,
}

impl Mutability {
    /// The keyword to insert into a header, if any. Mutating functions carry
    /// no annotation in the target grammar.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Mutability::Pure => Some("pure"),
            Mutability::View => Some("view"),
            Mutability::NonPayable => None,
        }
    }
}
