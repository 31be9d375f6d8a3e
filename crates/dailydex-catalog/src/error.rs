//! Error types for dailydex-catalog

use dailydex_core::CreatureId;
use thiserror::Error;

/// Catalog loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Duplicate creature: {0}")]
    DuplicateCreature(CreatureId),

    #[error("Evolution target of {from} does not exist: {to}")]
    UnknownEvolutionTarget { from: CreatureId, to: CreatureId },

    #[error("Branching line {0} needs at least two targets")]
    DegenerateBranch(CreatureId),

    #[error("Catalog has no creatures")]
    Empty,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
