//! Crash Game Core - Provably-Fair Trajectory Engine
//!
//! Deterministic replay and verification of crash-game rounds. A round's
//! noise is committed in advance through a VRF seed; this crate expands that
//! seed into the exact stream the round used, replays it against the
//! recorded tick sequence, and reports whether the recorded outcome is
//! consistent with the committed randomness.
//!
//! # Architecture
//!
//! - **rng**: seed decoding, xorshift32 generator, gaussian sampler
//! - **models**: domain types (Tick, PathParams, Ruleset, RoundRecord)
//! - **path**: drift + noise replay deriving crash time and peak multiplier
//! - **verify**: verdict against the operator-recorded outcome
//! - **archive**: content digests for archived tick sequences
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (committed seed, one generator per call)
//! 2. Reconstruction and verification are pure: inputs are never mutated
//! 3. Ruleset constants are frozen; changes require a version bump

// Module declarations
pub mod archive;
pub mod models;
pub mod path;
pub mod rng;
pub mod verify;

// Re-exports for convenience
pub use archive::{digest_matches, tick_archive_digest, ArchiveError};
pub use models::{
    params::{ParamsError, PathParams},
    round::RoundRecord,
    ruleset::Ruleset,
    tick::Tick,
};
pub use path::{reconstruct, PathError, PathResult, CRASH_THRESHOLD};
pub use rng::{sample_standard_normal, Seed, SeedError, SeedRng};
pub use verify::{verify_round, VerificationOutcome, VerifyError, MAX_MULTIPLIER_TOLERANCE};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn crash_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::recompute_path, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::verify_round_json, m)?)?;
    Ok(())
}
