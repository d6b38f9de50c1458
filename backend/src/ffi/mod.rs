//! PyO3 bindings
//!
//! Minimal FFI surface exposing the pure engine to Python operator tooling
//! (audit scripts, batch re-verification of historical rounds). Everything
//! here is a thin wrapper: parse, call the Rust function, map errors to
//! `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::params::PathParams;
use crate::models::round::RoundRecord;
use crate::models::tick::Tick;
use crate::path::reconstruct;
use crate::rng::Seed;
use crate::verify::verify_round;

/// Recompute a path summary from raw inputs
///
/// `ticks_json` is the wire-format tick array. Returns
/// `(crash_at_ms, max_multiplier)`.
#[pyfunction]
pub fn recompute_path(
    seed_hex: &str,
    alpha: f64,
    beta: f64,
    sigma: f64,
    ticks_json: &str,
) -> PyResult<(Option<u64>, f64)> {
    let seed = Seed::from_hex(seed_hex).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let ticks: Vec<Tick> =
        serde_json::from_str(ticks_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let params = PathParams { alpha, beta, sigma };

    let result = reconstruct(&seed, &params, &ticks)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((result.crash_at_ms, result.max_multiplier))
}

/// Verify a full round record (wire-format JSON), returning the verdict
#[pyfunction]
pub fn verify_round_json(record_json: &str) -> PyResult<bool> {
    let record: RoundRecord =
        serde_json::from_str(record_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let outcome = verify_round(&record).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(outcome.verified)
}
