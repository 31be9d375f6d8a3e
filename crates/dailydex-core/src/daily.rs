//! Per-day state

use crate::creature::{CreatureDef, ElementType};
use crate::date::DateKey;
use crate::identity::CreatureId;
use crate::input::UserInput;
use serde::{Deserialize, Serialize};

/// Missions per day
pub const MISSION_COUNT: usize = 3;

/// One self-reported mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub text: String,
    pub done: bool,
}

impl Mission {
    /// A fresh, unfinished mission
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// Snapshot of the day's recommended creature, denormalized so rendering
/// needs no second catalog lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureSnapshot {
    pub id: CreatureId,
    pub name: String,
    pub types: Vec<ElementType>,
    pub flavor: String,
}

impl CreatureSnapshot {
    /// Snapshot a catalog definition
    pub fn from_def(def: &CreatureDef) -> Self {
        Self {
            id: def.id,
            name: def.name.clone(),
            types: def.types.clone(),
            flavor: def.flavor.clone(),
        }
    }
}

/// Everything recorded for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyState {
    pub date: DateKey,
    pub input: UserInput,
    pub missions: [Mission; MISSION_COUNT],
    pub result: CreatureSnapshot,
    /// Derived: AND of all mission `done` flags
    pub all_missions_done: bool,
    /// Set once the creature is registered into the collection; never
    /// cleared afterwards
    pub is_registered: bool,
    /// Whether today's duplicate level-up allowance has been spent
    pub is_leveled_up_today: bool,
    /// Rare-variant flag for the day's catch
    pub shiny: bool,
}

impl DailyState {
    /// Start a fresh day from the submitted input and recommendation
    pub fn new(
        date: DateKey,
        input: UserInput,
        mission_texts: [String; MISSION_COUNT],
        result: CreatureSnapshot,
    ) -> Self {
        Self {
            date,
            input,
            missions: mission_texts.map(Mission::new),
            result,
            all_missions_done: false,
            is_registered: false,
            is_leveled_up_today: false,
            shiny: false,
        }
    }

    /// Set one mission's done flag and recompute the aggregate.
    ///
    /// Rejected (returns false) once the day is registered or when the
    /// index is out of range.
    pub fn set_mission_done(&mut self, index: usize, done: bool) -> bool {
        if self.is_registered {
            return false;
        }
        let Some(mission) = self.missions.get_mut(index) else {
            return false;
        };
        mission.done = done;
        self.all_missions_done = self.missions.iter().all(|m| m.done);
        true
    }

    /// Mark the day's creature as registered into the collection
    pub fn mark_registered(&mut self) {
        self.is_registered = true;
    }

    /// Spend the day's duplicate level-up allowance
    pub fn mark_leveled_up(&mut self) {
        self.is_leveled_up_today = true;
    }

    /// Flag the day's catch as the rare variant
    pub fn mark_shiny(&mut self) {
        self.shiny = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Mood, StyleTag};

    fn state() -> DailyState {
        DailyState::new(
            DateKey::new(2025, 1, 1),
            UserInput {
                main_color: "#FF6B6B".to_string(),
                sub_color: "#48DBFB".to_string(),
                mood: Mood::Normal,
                mood_note: None,
                style_tags: vec![StyleTag::Casual],
            },
            [
                "Drink water".to_string(),
                "Walk 30 minutes".to_string(),
                "Read 10 pages".to_string(),
            ],
            CreatureSnapshot {
                id: CreatureId::new(25),
                name: "Pikachu".to_string(),
                types: vec![ElementType::Electric],
                flavor: String::new(),
            },
        )
    }

    #[test]
    fn test_all_done_is_derived() {
        let mut s = state();
        assert!(!s.all_missions_done);

        s.set_mission_done(0, true);
        s.set_mission_done(1, true);
        assert!(!s.all_missions_done);

        s.set_mission_done(2, true);
        assert!(s.all_missions_done);

        // Unchecking drops the aggregate again
        s.set_mission_done(1, false);
        assert!(!s.all_missions_done);
    }

    #[test]
    fn test_missions_freeze_after_registration() {
        let mut s = state();
        s.mark_registered();
        assert!(!s.set_mission_done(0, true));
        assert!(!s.missions[0].done);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut s = state();
        assert!(!s.set_mission_done(MISSION_COUNT, true));
    }
}
