//! Referral bonus boundary
//!
//! The counter itself lives outside the core (it may be a networked
//! service); this module defines its contract and the draw a claimed
//! bonus produces.

use crate::creature::{Catalog, CreatureDef};
use crate::date::DateKey;
use crate::identity::CreatureId;
use crate::rng::DailyRng;
use std::collections::HashSet;

/// External counted-event service granting bonus catches.
///
/// Implementations may cap the per-day count; the reference service allows
/// at most three unclaimed bonuses per date. Claims are consumed one at a
/// time so each claim maps to exactly one draw.
pub trait BonusCounter {
    /// Bonuses available to claim for the given date
    fn unclaimed_count(&self, date: &DateKey) -> u32;

    /// Consume one bonus; false when none remain
    fn claim_one(&mut self, date: &DateKey) -> bool;
}

/// Draw the creature granted by one claimed bonus: uniformly random among
/// the not-yet-collected catalog, falling back to the full catalog once
/// the collection is complete. `None` only for an empty catalog.
pub fn bonus_draw<'a>(
    catalog: &'a Catalog,
    collected: &HashSet<CreatureId>,
    rng: &mut DailyRng,
) -> Option<&'a CreatureDef> {
    let remaining: Vec<&CreatureDef> = catalog
        .iter()
        .filter(|d| !collected.contains(&d.id))
        .collect();
    if remaining.is_empty() {
        let all: Vec<&CreatureDef> = catalog.iter().collect();
        return rng.pick(&all).copied();
    }
    rng.pick(&remaining).copied()
}
