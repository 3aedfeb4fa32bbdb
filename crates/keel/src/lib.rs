/*! Unified interface for compiling Keel modules.
 *
 * Single import for the whole pipeline: scanning a source file into its module
 * structure, rewriting bodies into Solidity, and emitting the supported
 * targets. Batteries-included entry point for build tooling.
 */

pub use keel_core as core;
pub use keel_emit as emit;
pub use keel_parser as parser;
pub use keel_transform as transform;

pub use keel_core::{FunctionDecl, Mutability, SourceModule, StateVariable, TypeToken, Visibility};

pub use keel_parser::scan_module;

pub use keel_transform::{rewrite_function, RewrittenFunction};

pub use keel_emit::{emit as emit_target, AnchorEmitter, EmitError, SolidityEmitter, Target};

/// Compile Keel source text straight to Solidity.
pub fn compile_to_solidity(source: &str, fallback_name: &str) -> String {
    let module = scan_module(source, fallback_name);
    SolidityEmitter::new(&module).emit_to_string()
}
