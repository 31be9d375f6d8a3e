//! Dailydex Catalog - creature definitions loaded from RON
//!
//! Provides:
//! - A `Loader` for catalog files (string, single file, or directory)
//! - Referential validation of evolution targets
//! - The built-in catalog embedded in the crate

mod error;
mod loader;

pub use error::{Error, Result};
pub use loader::{builtin, Loader};
