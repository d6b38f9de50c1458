//! Round verification
//!
//! Compares a deterministic reconstruction against the outcome the operator
//! recorded for a settled round. The comparison is deliberately two scalars,
//! crash time (exact) and peak multiplier (within an absolute tolerance),
//! matching the published fairness contract. It is NOT a tick-by-tick replay
//! of the full trajectory; strengthening it would change the contract and
//! needs a ruleset version bump.

use serde::Serialize;
use thiserror::Error;

use crate::models::round::RoundRecord;
use crate::path::{reconstruct, PathError, PathResult};
use crate::rng::{Seed, SeedError};

/// Absolute tolerance for the peak-multiplier comparison.
///
/// Absorbs floating-point and reporting-granularity drift. Fixed ruleset
/// constant; moves only with a version bump.
pub const MAX_MULTIPLIER_TOLERANCE: f64 = 0.05;

/// Errors from round verification
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("invalid committed seed: {0}")]
    Seed(#[from] SeedError),

    #[error("path reconstruction failed: {0}")]
    Path(#[from] PathError),
}

/// Verdict plus the evidence it was derived from
///
/// The boolean is the contract; the remaining fields let reporting surfaces
/// (CLI, FFI, web) show *why* a round passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerificationOutcome {
    /// Whether the recorded outcome is consistent with the committed seed
    pub verified: bool,

    /// Reconstructed crash time and peak
    pub result: PathResult,

    /// Crash tick the server recorded, if any
    pub claimed_crash_ms: Option<u64>,

    /// Peak multiplier the server recorded, floored at 1
    pub claimed_max_multiplier: f64,
}

/// Verify a settled round against its committed seed
///
/// Decodes the hex seed, replays the path over the recorded ticks, and
/// compares crash time (exact, including the both-absent case) and peak
/// multiplier (absolute tolerance [`MAX_MULTIPLIER_TOLERANCE`]).
///
/// # Example
/// ```
/// use crash_core_rs::{verify_round, PathParams, RoundRecord, Tick};
///
/// let record = RoundRecord {
///     round_no: 7,
///     vrf_result: "01020304".to_string(),
///     tick_cid: String::new(),
///     parameters: PathParams { alpha: 0.25, beta: 0.8, sigma: 0.4 },
///     ticks: vec![Tick::new(0, 1.0, false)],
/// };
/// let outcome = verify_round(&record).unwrap();
/// assert!(outcome.verified);
/// ```
pub fn verify_round(record: &RoundRecord) -> Result<VerificationOutcome, VerifyError> {
    let seed = Seed::from_hex(&record.vrf_result)?;
    let result = reconstruct(&seed, &record.parameters, &record.ticks)?;

    let claimed_crash_ms = record.claimed_crash_ms();
    let claimed_max_multiplier = record.claimed_max_multiplier();

    let verified = result.crash_at_ms == claimed_crash_ms
        && (result.max_multiplier - claimed_max_multiplier).abs() < MAX_MULTIPLIER_TOLERANCE;

    Ok(VerificationOutcome {
        verified,
        result,
        claimed_crash_ms,
        claimed_max_multiplier,
    })
}
