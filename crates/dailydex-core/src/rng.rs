//! Deterministic daily random number generator
//!
//! A 32-bit FNV-1a hash of the canonical date string seeds a Mulberry32
//! stream: same date, same sequence, on every platform and across process
//! restarts. Never use std or OS randomness in scoring or evolution paths.

use crate::date::DateKey;
use serde::{Deserialize, Serialize};

/// Mulberry32 state increment
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;

/// FNV-1a 32-bit hash
fn fnv1a_32(s: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// A deterministic random number generator keyed by calendar date
///
/// Mulberry32 is small, fast, and has well-defined 32-bit wrapping
/// semantics, which keeps the stream identical across languages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRng {
    state: u32,
}

impl DailyRng {
    /// Create an RNG seeded from a calendar date
    pub fn for_date(date: &DateKey) -> Self {
        Self {
            state: fnv1a_32(&date.to_string()),
        }
    }

    /// Create an RNG with an explicit seed
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Restore an RNG from a saved state
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Get the current state (useful for saving/loading)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate the next raw u32 value (one Mulberry32 round)
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(z | 1);
        z ^= z.wrapping_add((z ^ (z >> 7)).wrapping_mul(z | 61));
        z ^ (z >> 14)
    }

    /// Generate a random f64 in range [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Pick a random element from a slice
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            None
        } else {
            let i = self.next_u32() as usize % slice.len();
            Some(&slice[i])
        }
    }
}
