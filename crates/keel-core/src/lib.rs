/*! Core type and module model for the Keel contract language.
 *
 * Keel modules are line-oriented: one logical statement per line, a single state
 * block, event declarations, and brace-delimited function bodies. This crate holds
 * the pieces every stage shares — the scanned module model, type-token
 * decomposition, and the visibility/mutability vocabulary of the Solidity target.
 */

pub mod function;
pub mod module;
pub mod types;

pub use function::{Mutability, Visibility};
pub use module::{FunctionDecl, SourceModule, StateVariable};
pub use types::TypeToken;

#[cfg(test)]
mod tests;
