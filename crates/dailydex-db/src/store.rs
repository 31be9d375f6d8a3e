//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use dailydex_core::{DailyState, DateKey, DeckEntry, DexEntry, StreakState};
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredDexEntry>().unwrap();
    models.define::<StoredDeckEntry>().unwrap();
    models.define::<StoredDailyState>().unwrap();
    models.define::<StoredStreak>().unwrap();
    models
});

/// Database store for a single user's persistent state.
pub struct Store {
    db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    // Collection

    /// Save (upsert) one collection entry.
    pub fn save_dex_entry(&self, entry: &DexEntry) -> Result<()> {
        let stored = StoredDexEntry::from_entry(entry);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the whole collection, ascending by base ID.
    pub fn load_dex(&self) -> Result<Vec<DexEntry>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredDexEntry>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredDexEntry>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        rows.iter().map(StoredDexEntry::to_entry).collect()
    }

    // Roster

    /// Replace the whole roster. The roster is saved as a unit, so stale
    /// slots from a previous save are removed first.
    pub fn save_deck(&self, entries: &[DeckEntry]) -> Result<()> {
        // Collect existing keys first, then rewrite in one transaction
        let existing_ids: Vec<u16> = {
            let r = self.db.r_transaction()?;
            let scan = r.scan().primary::<StoredDeckEntry>()?;
            let iter = scan.all()?;
            let rows: std::result::Result<Vec<StoredDeckEntry>, _> = iter.collect();
            let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
            rows.into_iter().map(|row| row.caught_id).collect()
        };

        let rw = self.db.rw_transaction()?;
        for id in existing_ids {
            if let Some(row) = rw.get().primary::<StoredDeckEntry>(id)? {
                rw.remove(row)?;
            }
        }
        for entry in entries {
            rw.upsert(StoredDeckEntry::from_entry(entry))?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Load the roster.
    pub fn load_deck(&self) -> Result<Vec<DeckEntry>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredDeckEntry>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<StoredDeckEntry>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        rows.iter().map(StoredDeckEntry::to_entry).collect()
    }

    // Daily state

    /// Save (upsert) the state for one calendar date.
    pub fn save_daily(&self, state: &DailyState) -> Result<()> {
        let stored = StoredDailyState::from_state(state);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the state for one calendar date, if any was recorded.
    pub fn load_daily(&self, date: &DateKey) -> Result<Option<DailyState>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredDailyState> = r.get().primary(date.to_string())?;
        stored.map(|s| s.to_state()).transpose()
    }

    // Streak

    /// Save the streak record.
    pub fn save_streak(&self, state: &StreakState) -> Result<()> {
        let stored = StoredStreak::from_state(state);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the streak record, or the default when none has been saved.
    pub fn load_streak(&self) -> Result<StreakState> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredStreak> = r.get().primary("streak".to_string())?;
        stored
            .map(|s| s.to_state())
            .transpose()
            .map(Option::unwrap_or_default)
    }

    // Best-effort writes
    //
    // Write failures do not roll back in-memory state; they are logged
    // and the session carries on.

    /// Best-effort `save_dex_entry`.
    pub fn record_dex_entry(&self, entry: &DexEntry) {
        if let Err(err) = self.save_dex_entry(entry) {
            warn!(base_id = %entry.base_id, %err, "collection write failed");
        }
    }

    /// Best-effort `save_deck`.
    pub fn record_deck(&self, entries: &[DeckEntry]) {
        if let Err(err) = self.save_deck(entries) {
            warn!(%err, "roster write failed");
        }
    }

    /// Best-effort `save_daily`.
    pub fn record_daily(&self, state: &DailyState) {
        if let Err(err) = self.save_daily(state) {
            warn!(date = %state.date, %err, "daily state write failed");
        }
    }

    /// Best-effort `save_streak`.
    pub fn record_streak(&self, state: &StreakState) {
        if let Err(err) = self.save_streak(state) {
            warn!(%err, "streak write failed");
        }
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dailydex_core::{
        CreatureId, CreatureSnapshot, ElementType, Mood, StreakState, StyleTag, UserInput,
    };

    fn dex_entry() -> DexEntry {
        let mut entry = DexEntry::new(
            CreatureId::new(133),
            true,
            Utc.with_ymd_and_hms(2025, 1, 7, 21, 30, 0).unwrap(),
            DateKey::new(2025, 1, 7),
        );
        entry.current_id = CreatureId::new(196);
        entry.stage = 1;
        entry.branch_choice = Some(CreatureId::new(196));
        entry
    }

    fn daily_state(date: DateKey) -> DailyState {
        DailyState::new(
            date,
            UserInput {
                main_color: "#FF6B6B".to_string(),
                sub_color: "#48DBFB".to_string(),
                mood: Mood::Excited,
                mood_note: Some("good day".to_string()),
                style_tags: vec![StyleTag::Sporty],
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
                flavor: "Sparks fly.".to_string(),
            },
        )
    }

    #[test]
    fn test_dex_round_trip() {
        let store = Store::in_memory().unwrap();
        let entry = dex_entry();

        store.save_dex_entry(&entry).unwrap();
        let loaded = store.load_dex().unwrap();
        assert_eq!(loaded, vec![entry]);
    }

    #[test]
    fn test_deck_save_replaces() {
        let store = Store::in_memory().unwrap();
        let date = DateKey::new(2025, 1, 1);

        let first = vec![
            DeckEntry::new(CreatureId::new(1), date),
            DeckEntry::new(CreatureId::new(4), date),
        ];
        store.save_deck(&first).unwrap();
        assert_eq!(store.load_deck().unwrap().len(), 2);

        // A later save is the whole roster; the released slot disappears
        let second = vec![DeckEntry::new(CreatureId::new(7), date)];
        store.save_deck(&second).unwrap();
        let loaded = store.load_deck().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].caught_id, CreatureId::new(7));
    }

    #[test]
    fn test_daily_round_trip_and_absence() {
        let store = Store::in_memory().unwrap();
        let date = DateKey::new(2025, 1, 9);

        assert!(store.load_daily(&date).unwrap().is_none());

        let mut state = daily_state(date);
        state.set_mission_done(0, true);
        store.save_daily(&state).unwrap();

        let loaded = store.load_daily(&date).unwrap().unwrap();
        assert_eq!(loaded.date, date);
        assert!(loaded.missions[0].done);
        assert!(!loaded.all_missions_done);

        // Other dates stay untouched
        assert!(store.load_daily(&date.next_day()).unwrap().is_none());
    }

    #[test]
    fn test_streak_defaults_then_round_trips() {
        let store = Store::in_memory().unwrap();

        assert_eq!(store.load_streak().unwrap(), StreakState::default());

        let state = StreakState {
            last_completed: Some(DateKey::new(2025, 2, 3)),
            count: 4,
        };
        store.save_streak(&state).unwrap();
        assert_eq!(store.load_streak().unwrap(), state);
    }
}
