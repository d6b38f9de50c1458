//! Tick model
//!
//! One externally recorded observation of a round's multiplier trajectory:
//! - `ms`: millisecond offset from round start
//! - `multiplier`: the multiplier the server reported at that offset
//! - `crashed`: whether the server flagged this tick as the crash point
//!
//! The tick sequence is append-only while a round runs and frozen once the
//! round settles. The engine never mutates ticks; it only replays against
//! them.

use serde::{Deserialize, Serialize};

/// A recorded trajectory observation
///
/// # Example
/// ```
/// use crash_core_rs::Tick;
///
/// let tick = Tick { ms: 100, multiplier: 1.2, crashed: false };
/// assert!(!tick.crashed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Millisecond offset from round start
    pub ms: u64,

    /// Reported multiplier at this offset
    pub multiplier: f64,

    /// Whether the server recorded the crash at this tick
    pub crashed: bool,
}

impl Tick {
    /// Convenience constructor, mostly for tests and tooling
    pub fn new(ms: u64, multiplier: f64, crashed: bool) -> Self {
        Self { ms, multiplier, crashed }
    }
}
