//! Dailydex DB - persistence layer using native_db
//!
//! Provides the narrow store surface the core treats as a collaborator:
//! - Collection ("dex") entries keyed by base creature ID
//! - Roster ("deck") entries, saved as a whole list
//! - Per-date daily state keyed by the canonical date string
//! - The single streak record
//!
//! One database holds one user's state; concurrent writers are not
//! supported and rows carry no version stamps.

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use store::Store;
