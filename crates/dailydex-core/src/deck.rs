//! The active roster ("deck")

use crate::date::DateKey;
use crate::error::{Error, Result};
use crate::identity::CreatureId;
use serde::{Deserialize, Serialize};

/// Maximum live roster slots
pub const DECK_CAPACITY: usize = 3;

/// Level ceiling for roster creatures
pub const MAX_LEVEL: u8 = 9;

/// A roster slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Base ID of the caught creature; the stable roster key
    pub caught_id: CreatureId,
    /// Current (possibly evolved) form
    pub current_id: CreatureId,
    /// 1..=MAX_LEVEL; only ever increases
    pub level: u8,
    /// Evolution progress: 0 = base, 2 = final
    pub stage: u8,
    /// Resolved branch-evolution target, fixed on first branch evolution
    pub branch_choice: Option<CreatureId>,
    /// Calendar day the creature joined the roster
    pub added_on: DateKey,
}

impl DeckEntry {
    /// A freshly caught creature joins at level 1, base form
    pub fn new(caught_id: CreatureId, added_on: DateKey) -> Self {
        Self {
            caught_id,
            current_id: caught_id,
            level: 1,
            stage: 0,
            branch_choice: None,
            added_on,
        }
    }
}

/// The roster: at most `DECK_CAPACITY` entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored entries; anything beyond capacity is dropped
    pub fn from_entries(mut entries: Vec<DeckEntry>) -> Self {
        entries.truncate(DECK_CAPACITY);
        Self { entries }
    }

    /// Add a creature to the roster
    pub fn add(&mut self, entry: DeckEntry) -> Result<()> {
        if self.entries.len() >= DECK_CAPACITY {
            return Err(Error::DeckFull {
                capacity: DECK_CAPACITY,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Release a creature; returns the removed entry when it was present
    pub fn release(&mut self, caught_id: CreatureId) -> Option<DeckEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.caught_id == caught_id)?;
        Some(self.entries.remove(idx))
    }

    /// Get a roster entry by its caught ID
    pub fn get(&self, caught_id: CreatureId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| e.caught_id == caught_id)
    }

    /// Get a mutable roster entry by its caught ID
    pub fn get_mut(&mut self, caught_id: CreatureId) -> Option<&mut DeckEntry> {
        self.entries.iter_mut().find(|e| e.caught_id == caught_id)
    }

    /// Roster entries in slot order
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Iterate the roster in slot order
    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the roster is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.entries.len() >= DECK_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u16) -> DeckEntry {
        DeckEntry::new(CreatureId::new(id), DateKey::new(2025, 1, 1))
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut deck = Deck::new();
        deck.add(entry(1)).unwrap();
        deck.add(entry(2)).unwrap();
        deck.add(entry(3)).unwrap();
        assert!(deck.is_full());

        assert!(matches!(
            deck.add(entry(4)),
            Err(Error::DeckFull { capacity: 3 })
        ));
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_release_frees_a_slot() {
        let mut deck = Deck::from_entries(vec![entry(1), entry(2), entry(3)]);
        let released = deck.release(CreatureId::new(2)).unwrap();
        assert_eq!(released.caught_id, CreatureId::new(2));
        assert_eq!(deck.len(), 2);

        deck.add(entry(4)).unwrap();
        assert!(deck.is_full());

        assert!(deck.release(CreatureId::new(99)).is_none());
    }

    #[test]
    fn test_from_entries_truncates() {
        let deck = Deck::from_entries(vec![entry(1), entry(2), entry(3), entry(4)]);
        assert_eq!(deck.len(), DECK_CAPACITY);
        assert!(deck.get(CreatureId::new(4)).is_none());
    }

    #[test]
    fn test_new_entry_defaults() {
        let e = entry(7);
        assert_eq!(e.level, 1);
        assert_eq!(e.stage, 0);
        assert_eq!(e.current_id, e.caught_id);
    }
}
