//! Path reconstruction
//!
//! Replays the committed noise stream against a recorded tick sequence and
//! derives the round's crash time and peak multiplier. The model does not
//! regenerate the tick multipliers themselves (those are externally recorded
//! observations); it checks whether the drift-and-noise process implied by
//! the committed seed is consistent with the recorded trajectory.
//!
//! Per tick, in recorded order:
//!
//! ```text
//! noise     = gaussian() * sigma * beta     (one sample = two RNG draws)
//! drift     = alpha * (multiplier - 1)
//! projected = max(0, 1 + drift + noise)
//! crash     = first tick where projected <= CRASH_THRESHOLD
//! ```
//!
//! # Critical Invariants
//!
//! - **Determinism**: same seed + params + ticks → bit-identical result
//! - **First crossing**: once the crash time is set it never changes
//! - **Max floor**: the peak multiplier is never below 1 nor below any
//!   reported tick multiplier
//! - **Purity**: inputs are never mutated; the only state is the local RNG

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::params::{ParamsError, PathParams};
use crate::models::tick::Tick;
use crate::rng::{sample_standard_normal, Seed, SeedRng};

/// Projected multiplier at or below this value counts as a crash.
///
/// Fixed ruleset constant with no documented derivation. Changing it would
/// re-score historical rounds, so it moves only with a ruleset version bump.
pub const CRASH_THRESHOLD: f64 = 0.01;

/// Errors from path reconstruction
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error(transparent)]
    InvalidParams(#[from] ParamsError),

    #[error("tick {index} out of order: ms {ms} does not follow {previous_ms}")]
    UnorderedTicks { index: usize, ms: u64, previous_ms: u64 },
}

/// Derived summary of a tick sequence
///
/// # Example
/// ```
/// use crash_core_rs::{reconstruct, PathParams, Seed};
///
/// let seed = Seed::from_hex("01020304").unwrap();
/// let params = PathParams { alpha: 0.25, beta: 0.8, sigma: 0.4 };
/// let result = reconstruct(&seed, &params, &[]).unwrap();
/// assert_eq!(result.crash_at_ms, None);
/// assert_eq!(result.max_multiplier, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Millisecond offset of the first crash crossing, if any
    pub crash_at_ms: Option<u64>,

    /// Peak reported multiplier, floored at 1
    pub max_multiplier: f64,
}

/// Replay the committed stream over a recorded tick sequence
///
/// The gaussian stream is consumed positionally (the n-th tick always pairs
/// with the n-th sample), so out-of-order or duplicate `ms` values are
/// rejected rather than sorted: sorting would silently re-pair ticks with
/// different draws and change the outcome.
///
/// # Errors
///
/// - [`PathError::InvalidParams`] if any coefficient is NaN or infinite
/// - [`PathError::UnorderedTicks`] if `ms` values are not strictly increasing
pub fn reconstruct(
    seed: &Seed,
    params: &PathParams,
    ticks: &[Tick],
) -> Result<PathResult, PathError> {
    params.validate()?;
    check_tick_order(ticks)?;

    let mut rng = SeedRng::from_seed(seed.as_bytes());
    let mut max_multiplier = 1.0_f64;
    let mut crash_at_ms: Option<u64> = None;

    for tick in ticks {
        let noise = sample_standard_normal(&mut rng) * params.sigma * params.beta;
        let drift = params.alpha * (tick.multiplier - 1.0);
        let projected = (1.0 + drift + noise).max(0.0);

        // Peak tracks the *reported* multiplier, not the projection.
        if tick.multiplier > max_multiplier {
            max_multiplier = tick.multiplier;
        }

        if crash_at_ms.is_none() && projected <= CRASH_THRESHOLD {
            crash_at_ms = Some(tick.ms);
        }
    }

    Ok(PathResult { crash_at_ms, max_multiplier })
}

fn check_tick_order(ticks: &[Tick]) -> Result<(), PathError> {
    for (index, pair) in ticks.windows(2).enumerate() {
        if pair[1].ms <= pair[0].ms {
            return Err(PathError::UnorderedTicks {
                index: index + 1,
                ms: pair[1].ms,
                previous_ms: pair[0].ms,
            });
        }
    }
    Ok(())
}
