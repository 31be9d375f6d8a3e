//! Collection and roster rows.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use dailydex_core::{CreatureId, DateKey, DeckEntry, DexEntry};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored collection entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredDexEntry {
    /// Primary key - base creature ID.
    #[primary_key]
    pub base_id: u16,
    /// Current (possibly evolved) form.
    pub current_id: u16,
    /// Evolution stage (0..=2).
    pub stage: u8,
    /// Resolved branch-evolution target, if fixed.
    pub branch_choice: Option<u16>,
    /// Rare-variant flag.
    pub shiny: bool,
    /// RFC 3339 registration instant.
    pub registered_at: String,
    /// Canonical registration date.
    pub registered_on: String,
}

impl StoredDexEntry {
    /// Create from a core DexEntry.
    pub fn from_entry(entry: &DexEntry) -> Self {
        Self {
            base_id: entry.base_id.raw(),
            current_id: entry.current_id.raw(),
            stage: entry.stage,
            branch_choice: entry.branch_choice.map(|id| id.raw()),
            shiny: entry.shiny,
            registered_at: entry.registered_at.to_rfc3339(),
            registered_on: entry.registered_on.to_string(),
        }
    }

    /// Convert to a core DexEntry.
    pub fn to_entry(&self) -> Result<DexEntry> {
        let registered_at = DateTime::parse_from_rfc3339(&self.registered_at)
            .map_err(|e| Error::Corrupt(format!("dex entry {}: {}", self.base_id, e)))?
            .with_timezone(&Utc);
        let registered_on = DateKey::parse(&self.registered_on)
            .map_err(|e| Error::Corrupt(format!("dex entry {}: {}", self.base_id, e)))?;
        Ok(DexEntry {
            base_id: CreatureId::new(self.base_id),
            current_id: CreatureId::new(self.current_id),
            stage: self.stage,
            branch_choice: self.branch_choice.map(CreatureId::new),
            shiny: self.shiny,
            registered_at,
            registered_on,
        })
    }
}

/// Stored roster entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredDeckEntry {
    /// Primary key - caught creature ID.
    #[primary_key]
    pub caught_id: u16,
    /// Current (possibly evolved) form.
    pub current_id: u16,
    /// Level (1..=9).
    pub level: u8,
    /// Evolution stage (0..=2).
    pub stage: u8,
    /// Resolved branch-evolution target, if fixed.
    pub branch_choice: Option<u16>,
    /// Canonical date the creature joined the roster.
    pub added_on: String,
}

impl StoredDeckEntry {
    /// Create from a core DeckEntry.
    pub fn from_entry(entry: &DeckEntry) -> Self {
        Self {
            caught_id: entry.caught_id.raw(),
            current_id: entry.current_id.raw(),
            level: entry.level,
            stage: entry.stage,
            branch_choice: entry.branch_choice.map(|id| id.raw()),
            added_on: entry.added_on.to_string(),
        }
    }

    /// Convert to a core DeckEntry.
    pub fn to_entry(&self) -> Result<DeckEntry> {
        let added_on = DateKey::parse(&self.added_on)
            .map_err(|e| Error::Corrupt(format!("deck entry {}: {}", self.caught_id, e)))?;
        Ok(DeckEntry {
            caught_id: CreatureId::new(self.caught_id),
            current_id: CreatureId::new(self.current_id),
            level: self.level,
            stage: self.stage,
            branch_choice: self.branch_choice.map(CreatureId::new),
            added_on,
        })
    }
}
