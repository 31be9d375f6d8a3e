//! The permanent collection ("dex")

use crate::creature::Catalog;
use crate::date::DateKey;
use crate::identity::CreatureId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One registered creature; exactly one entry exists per base ID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DexEntry {
    /// Permanent catalog slot; never changes after registration
    pub base_id: CreatureId,
    /// Current (possibly evolved) form
    pub current_id: CreatureId,
    /// Evolution progress: 0 = base, 2 = final
    pub stage: u8,
    /// Resolved branch-evolution target, fixed on first branch evolution
    pub branch_choice: Option<CreatureId>,
    /// Rare-variant flag, immutable once set at registration
    pub shiny: bool,
    /// Wall-clock registration instant
    pub registered_at: DateTime<Utc>,
    /// Calendar day of registration
    pub registered_on: DateKey,
}

impl DexEntry {
    /// Register a freshly caught creature at its base form
    pub fn new(
        base_id: CreatureId,
        shiny: bool,
        registered_at: DateTime<Utc>,
        registered_on: DateKey,
    ) -> Self {
        Self {
            base_id,
            current_id: base_id,
            stage: 0,
            branch_choice: None,
            shiny,
            registered_at,
            registered_on,
        }
    }
}

/// The collection, keyed by base ID
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dex {
    entries: IndexMap<CreatureId, DexEntry>,
}

impl Dex {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored entries; later duplicates of a base ID are
    /// dropped, keeping the first registration
    pub fn from_entries(entries: impl IntoIterator<Item = DexEntry>) -> Self {
        let mut dex = Self::new();
        for entry in entries {
            dex.register(entry);
        }
        dex
    }

    /// Add an entry. Returns false (and changes nothing) when the base ID
    /// is already registered.
    pub fn register(&mut self, entry: DexEntry) -> bool {
        if self.entries.contains_key(&entry.base_id) {
            return false;
        }
        self.entries.insert(entry.base_id, entry);
        true
    }

    /// Get an entry by base ID
    pub fn get(&self, base_id: CreatureId) -> Option<&DexEntry> {
        self.entries.get(&base_id)
    }

    /// Get a mutable entry by base ID
    pub fn get_mut(&mut self, base_id: CreatureId) -> Option<&mut DexEntry> {
        self.entries.get_mut(&base_id)
    }

    /// Check whether a base ID is registered
    pub fn contains(&self, base_id: CreatureId) -> bool {
        self.entries.contains_key(&base_id)
    }

    /// IDs already collected, for candidate filtering
    pub fn collected_ids(&self) -> HashSet<CreatureId> {
        self.entries.keys().copied().collect()
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &DexEntry> {
        self.entries.values()
    }

    /// Number of registered creatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every catalog slot is filled
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        !catalog.is_empty() && catalog.ids().all(|id| self.entries.contains_key(&id))
    }
}
