//! Identity types for catalog slots

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog slot number of a creature (1-based, ascending)
///
/// The base ID of an owned creature never changes; evolution only moves
/// the separate "current form" ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub u16);

impl CreatureId {
    /// Create a new creature ID
    pub fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw slot number
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

impl From<u16> for CreatureId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_id() {
        let id = CreatureId::new(25);
        assert_eq!(id.raw(), 25);
        assert_eq!(format!("{}", id), "#025");
        assert_eq!(format!("{}", CreatureId::new(151)), "#151");
    }

    #[test]
    fn test_ordering() {
        assert!(CreatureId::new(1) < CreatureId::new(2));
    }
}
