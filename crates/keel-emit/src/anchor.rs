use keel_core::types::rename_primitives;
use keel_core::SourceModule;

/// Enumerate a module's state, events, and function signatures into an Anchor
/// program skeleton. No body translation and no mutability analysis happen
/// here; this emitter exists so a Keel module's shape can be carried onto
/// Solana while the EVM path stays the primary target.
pub struct AnchorEmitter<'a> {
    module: &'a SourceModule,
}

impl<'a> AnchorEmitter<'a> {
    pub fn new(module: &'a SourceModule) -> Self {
        Self { module }
    }

    pub fn emit_to_string(&self) -> String {
        let mut out = String::new();
        out.push_str("use anchor_lang::prelude::*;\n\n");
        out.push_str("// Generated by the Keel compiler; review before deployment.\n");

        let functions: Vec<(String, Vec<(String, &'static str)>)> = self
            .module
            .functions
            .iter()
            .filter(|decl| !decl.is_constructor)
            .filter_map(|decl| parse_signature(&decl.header))
            .collect();

        for (name, _) in &functions {
            out.push_str("#[derive(Accounts)]\n");
            out.push_str(&format!("pub struct {}Ctx<'info> {{\n", name));
            out.push_str("    #[account(mut)]\n");
            out.push_str("    pub signer: Signer<'info>,\n");
            out.push_str("}\n\n");
        }

        out.push_str("#[account]\n");
        out.push_str("pub struct State {\n");
        for var in &self.module.state {
            if let Some((name, ty)) = parse_state_field(&var.decl) {
                out.push_str(&format!("    pub {}: {},\n", name, ty));
            }
        }
        // TODO: mappings are skipped; they need an account-backed map on Solana
        out.push_str("}\n\n");

        for event in &self.module.events {
            if let Some((name, params)) = parse_event(event) {
                out.push_str("#[event]\n");
                out.push_str(&format!("pub struct {} {{\n", name));
                for (param, ty) in params {
                    out.push_str(&format!("    pub {}: {},\n", param, ty));
                }
                out.push_str("}\n\n");
            }
        }

        out.push_str("#[program]\n");
        out.push_str(&format!("pub mod {} {{\n", self.module.name.to_lowercase()));
        out.push_str("    use super::*;\n");
        for (name, args) in &functions {
            out.push('\n');
            out.push_str(&format!("    pub fn {}(ctx: Context<{}Ctx>", name, name));
            for (arg, ty) in args {
                out.push_str(&format!(", {}: {}", arg, ty));
            }
            out.push_str(") -> Result<()> {\n");
            out.push_str("        Ok(())\n");
            out.push_str("    }\n");
        }
        out.push_str("}\n");
        out
    }
}

/// Map a Keel/Solidity type token onto the Anchor-side Rust type.
fn rust_type(raw: &str) -> &'static str {
    let t = rename_primitives(raw).to_ascii_lowercase();
    if t.contains("address") {
        "Pubkey"
    } else if t.contains("uint256") || t == "uint" {
        "u64"
    } else if t.contains("uint8") {
        "u8"
    } else if t.contains("string") {
        "String"
    } else if t.contains("bool") {
        "bool"
    } else {
        "String"
    }
}

/// Parse one `name: type` or `type name` field, mapping the type.
fn split_field(entry: &str) -> Option<(String, &'static str)> {
    let entry = entry.trim();
    if let Some((name, ty)) = entry.split_once(':') {
        let name = name.trim();
        let ty = ty.trim();
        if name.is_empty() || ty.is_empty() {
            return None;
        }
        return Some((name.to_string(), rust_type(ty)));
    }
    let mut words = entry.split_whitespace();
    let ty = words.next()?;
    let name = words.next()?;
    Some((name.to_string(), rust_type(ty)))
}

/// A state declaration as an account field; mappings are not representable.
fn parse_state_field(decl: &str) -> Option<(String, &'static str)> {
    if decl.contains("mapping(") {
        return None;
    }
    let decl = decl.split(';').next().unwrap_or(decl);
    split_field(decl)
}

/// `event Name(param, param);` into a name plus mapped parameters.
fn parse_event(line: &str) -> Option<(String, Vec<(String, &'static str)>)> {
    let rest = line.trim().strip_prefix("event ")?;
    let open = rest.find('(')?;
    let close = rest.rfind(')')?;
    let name = rest[..open].trim();
    if name.is_empty() {
        return None;
    }
    let params = rest[open + 1..close]
        .split(',')
        .filter_map(|param| split_field(&param.replace("indexed ", "")))
        .collect();
    Some((name.to_string(), params))
}

/// Function name and mapped arguments from a header line.
fn parse_signature(header: &str) -> Option<(String, Vec<(String, &'static str)>)> {
    let rest = header.trim().strip_prefix("function ")?;
    let open = rest.find('(')?;
    let close = rest[open..].find(')')? + open;
    let name = rest[..open].trim();
    if name.is_empty() {
        return None;
    }
    let args = rest[open + 1..close]
        .split(',')
        .filter_map(split_field)
        .collect();
    Some((name.to_string(), args))
}
