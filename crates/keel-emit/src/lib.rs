/*! Turn scanned Keel modules into target-language source.
 *
 * The Solidity emitter is the real engine: it drives the per-function rewrite
 * pipeline and assembles a complete translation unit. The Anchor emitter is a
 * far simpler enumeration of state, events, and signatures into a program
 * skeleton. Both share the core type decomposition; neither ever rejects a
 * module — unrecognized lines degrade to passthrough.
 */

pub mod anchor;
pub mod solidity;

pub use anchor::AnchorEmitter;
pub use solidity::SolidityEmitter;

use keel_core::SourceModule;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("unsupported emission target: {0}")]
    UnsupportedTarget(String),
}

pub type Result<T> = std::result::Result<T, EmitError>;

/// An emission target. `Cosmos` is recognized but not implemented; requesting
/// it reports [`EmitError::UnsupportedTarget`] without affecting other targets
/// of the same invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Evm,
    Solana,
    Cosmos,
}

impl Target {
    pub fn extension(&self) -> &'static str {
        match self {
            Target::Evm => "sol",
            Target::Solana => "rs",
            Target::Cosmos => "go",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::Evm => "evm",
            Target::Solana => "solana",
            Target::Cosmos => "cosmos",
        }
    }
}

/// Emit one module for one target, returning the generated source text.
pub fn emit(module: &SourceModule, target: Target) -> Result<String> {
    match target {
        Target::Evm => Ok(SolidityEmitter::new(module).emit_to_string()),
        Target::Solana => Ok(AnchorEmitter::new(module).emit_to_string()),
        Target::Cosmos => Err(EmitError::UnsupportedTarget(
            Target::Cosmos.name().to_string(),
        )),
    }
}
