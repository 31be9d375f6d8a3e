//! Evolution and leveling state machine
//!
//! Evolution is always an explicit, player-triggered action. Ineligible
//! requests are no-ops returning `None`; nothing here panics or errors.
//! Stages only move forward and stop at 2.

use crate::creature::{Catalog, CreatureDef};
use crate::daily::DailyState;
use crate::deck::{Deck, DeckEntry, MAX_LEVEL};
use crate::dex::DexEntry;
use crate::identity::CreatureId;
use crate::rng::DailyRng;
use serde::{Deserialize, Serialize};

/// Final evolution stage
pub const MAX_STAGE: u8 = 2;

/// Roster level at which the first evolution window opens
pub const FIRST_EVOLUTION_LEVEL: u8 = 3;

/// A completed evolution step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub from: CreatureId,
    pub to: CreatureId,
    /// Stage reached by this step
    pub stage: u8,
}

/// Raise a roster creature's level by one, up to the ceiling.
///
/// Returns the new level, or `None` when already at the ceiling.
pub fn level_up(entry: &mut DeckEntry) -> Option<u8> {
    if entry.level >= MAX_LEVEL {
        return None;
    }
    entry.level += 1;
    Some(entry.level)
}

/// Evolution rules evaluated against a catalog
#[derive(Debug, Clone, Copy)]
pub struct EvolutionEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> EvolutionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// First evolution opens at base stage in the level 3..=8 window.
    ///
    /// Reaching level 9 at base stage closes the window for good: the
    /// missed opportunity is terminal.
    pub fn can_evolve_first(&self, entry: &DeckEntry) -> bool {
        if entry.stage != 0 {
            return false;
        }
        if entry.level < FIRST_EVOLUTION_LEVEL || entry.level >= MAX_LEVEL {
            return false;
        }
        self.catalog
            .get(entry.caught_id)
            .is_some_and(CreatureDef::can_evolve)
    }

    /// Second evolution needs the level ceiling and an evolvable current
    /// form
    pub fn can_evolve_second(&self, entry: &DeckEntry) -> bool {
        entry.stage == 1
            && entry.level >= MAX_LEVEL
            && self
                .catalog
                .get(entry.current_id)
                .is_some_and(|def| def.evolves_to.is_some())
    }

    /// Whether any evolution is currently available for a roster entry
    pub fn can_evolve(&self, entry: &DeckEntry) -> bool {
        self.can_evolve_first(entry) || self.can_evolve_second(entry)
    }

    /// Resolve the first-evolution target. A branching line rolls once and
    /// the choice sticks to the entry; it is never re-rolled.
    fn first_target(
        &self,
        branch_choice: &mut Option<CreatureId>,
        def: &CreatureDef,
        rng: &mut DailyRng,
    ) -> Option<CreatureId> {
        if let Some(chosen) = *branch_choice {
            return Some(chosen);
        }
        if def.is_branching() {
            let chosen = rng.pick(&def.branch_evolutions).copied()?;
            *branch_choice = Some(chosen);
            return Some(chosen);
        }
        def.evolves_to
    }

    /// Evolve a roster entry if eligible; a no-op (`None`) otherwise
    pub fn evolve_in_deck(
        &self,
        entry: &mut DeckEntry,
        rng: &mut DailyRng,
    ) -> Option<Evolution> {
        let to = if self.can_evolve_first(entry) {
            let def = self.catalog.get(entry.caught_id)?;
            self.first_target(&mut entry.branch_choice, def, rng)?
        } else if self.can_evolve_second(entry) {
            self.catalog.get(entry.current_id)?.evolves_to?
        } else {
            return None;
        };
        if !self.catalog.contains(to) {
            return None;
        }

        let from = entry.current_id;
        entry.current_id = to;
        entry.stage += 1;
        Some(Evolution {
            from,
            to,
            stage: entry.stage,
        })
    }

    /// Evolve a collection entry on request. Not level-gated; only the
    /// stage ceiling and target availability apply.
    pub fn evolve_in_dex(&self, entry: &mut DexEntry, rng: &mut DailyRng) -> Option<Evolution> {
        if entry.stage >= MAX_STAGE {
            return None;
        }
        let to = if entry.stage == 0 {
            let def = self.catalog.get(entry.base_id)?;
            self.first_target(&mut entry.branch_choice, def, rng)?
        } else {
            self.catalog.get(entry.current_id)?.evolves_to?
        };
        if !self.catalog.contains(to) {
            return None;
        }

        let from = entry.current_id;
        entry.current_id = to;
        entry.stage += 1;
        Some(Evolution {
            from,
            to,
            stage: entry.stage,
        })
    }

    /// Handle a duplicate encounter: the matching roster entry levels up,
    /// at most once per calendar day. Duplicates of undecked creatures are
    /// dropped silently.
    pub fn on_duplicate(
        &self,
        deck: &mut Deck,
        daily: &mut DailyState,
        base_id: CreatureId,
    ) -> Option<u8> {
        if daily.is_leveled_up_today {
            return None;
        }
        let entry = deck.get_mut(base_id)?;
        let new_level = level_up(entry)?;
        daily.mark_leveled_up();
        Some(new_level)
    }
}
