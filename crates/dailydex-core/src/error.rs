//! Error types for dailydex-core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date key: {0}")]
    InvalidDateKey(String),

    #[error("Deck is full ({capacity} slots)")]
    DeckFull { capacity: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
