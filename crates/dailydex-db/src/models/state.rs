//! Daily-state and streak rows.

use crate::error::{Error, Result};
use dailydex_core::{DailyState, DateKey, StreakState};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored daily state, one row per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredDailyState {
    /// Primary key - canonical `YYYY-MM-DD` date string.
    #[primary_key]
    pub date: String,
    /// Serialized state.
    pub data: Vec<u8>,
}

impl StoredDailyState {
    /// Create from a core DailyState.
    pub fn from_state(state: &DailyState) -> Self {
        let data = bincode::serialize(state).unwrap_or_default();
        Self {
            date: state.date.to_string(),
            data,
        }
    }

    /// Convert to a core DailyState.
    pub fn to_state(&self) -> Result<DailyState> {
        bincode::deserialize(&self.data)
            .map_err(|e| Error::Corrupt(format!("daily state {}: {}", self.date, e)))
    }
}

/// The single streak row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 4, version = 1)]
#[native_db]
pub struct StoredStreak {
    /// Always "streak" - single row.
    #[primary_key]
    pub id: String,
    /// Canonical date of the last fully-completed day.
    pub last_completed: Option<String>,
    /// Consecutive-day count.
    pub count: u32,
}

impl StoredStreak {
    /// Create from a core StreakState.
    pub fn from_state(state: &StreakState) -> Self {
        Self {
            id: "streak".to_string(),
            last_completed: state.last_completed.map(|d| d.to_string()),
            count: state.count,
        }
    }

    /// Convert to a core StreakState.
    pub fn to_state(&self) -> Result<StreakState> {
        let last_completed = match &self.last_completed {
            Some(s) => Some(
                DateKey::parse(s).map_err(|e| Error::Corrupt(format!("streak record: {}", e)))?,
            ),
            None => None,
        };
        Ok(StreakState {
            last_completed,
            count: self.count,
        })
    }
}
