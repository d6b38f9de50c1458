//! Round verification record
//!
//! The wire shape served at `GET /rounds/{roundNo}/verify`. Fetching this
//! record is I/O and lives outside this crate; everything computed *from* it
//! is pure and lives here. Given identical `vrfResult`, `parameters` and
//! `ticks`, every compliant implementation must derive the same verdict.

use serde::{Deserialize, Serialize};

use super::params::PathParams;
use super::tick::Tick;

/// A settled round as served by the verification endpoint
///
/// # Example
/// ```
/// use crash_core_rs::RoundRecord;
///
/// let json = r#"{
///     "roundNo": 42,
///     "vrfResult": "01020304",
///     "tickCid": "ipfs://bafy.../ticks.json",
///     "parameters": { "alpha": 0.25, "beta": 0.8, "sigma": 0.4 },
///     "ticks": [ { "ms": 0, "multiplier": 1.0, "crashed": false } ]
/// }"#;
/// let record: RoundRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.round_no, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Sequential round number
    pub round_no: u64,

    /// Committed VRF output, hex encoded
    pub vrf_result: String,

    /// Content-addressed pointer to the archived tick sequence
    pub tick_cid: String,

    /// Path parameters of the governing ruleset version
    pub parameters: PathParams,

    /// Full recorded tick sequence, ordered by `ms`
    pub ticks: Vec<Tick>,
}

impl RoundRecord {
    /// Millisecond offset of the recorded crash tick, if the server flagged
    /// one (first flagged tick wins)
    pub fn claimed_crash_ms(&self) -> Option<u64> {
        self.ticks.iter().find(|tick| tick.crashed).map(|tick| tick.ms)
    }

    /// Peak reported multiplier, floored at the baseline of 1
    pub fn claimed_max_multiplier(&self) -> f64 {
        self.ticks
            .iter()
            .map(|tick| tick.multiplier)
            .fold(1.0, f64::max)
    }
}
