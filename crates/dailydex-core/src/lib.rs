//! Dailydex Core - deterministic engines for a daily creature-collection habit
//!
//! This crate provides the data model and the algorithmic core:
//! - Creature definitions and the ascending-ID catalog
//! - Color-affinity classification from hex colors
//! - Date-seeded deterministic RNG
//! - The daily recommendation engine
//! - Evolution, leveling, and streak state machines
//!
//! Everything operates on explicit state passed in by the caller; there are
//! no ambient globals and no wall-clock reads in the scoring paths. A
//! calendar date is always an input, never derived.

mod bonus;
mod color;
mod creature;
mod daily;
mod date;
mod deck;
mod dex;
mod error;
mod evolution;
mod identity;
mod input;
mod recommend;
mod rng;
mod streak;

pub use bonus::{bonus_draw, BonusCounter};
pub use color::{classify_hex, ColorKeywords};
pub use creature::{Catalog, ColorAffinity, CreatureDef, DisplayForm, ElementType, Rarity};
pub use daily::{CreatureSnapshot, DailyState, Mission, MISSION_COUNT};
pub use date::DateKey;
pub use deck::{Deck, DeckEntry, DECK_CAPACITY, MAX_LEVEL};
pub use dex::{Dex, DexEntry};
pub use error::{Error, Result};
pub use evolution::{level_up, Evolution, EvolutionEngine, FIRST_EVOLUTION_LEVEL, MAX_STAGE};
pub use identity::CreatureId;
pub use input::{Mood, StyleTag, UserInput};
pub use recommend::{recommend, recommend_weighted, Recommendation, ScoreWeights};
pub use rng::DailyRng;
pub use streak::{StreakState, SHINY_STREAK_THRESHOLD};
