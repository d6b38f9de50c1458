//! Path parameters
//!
//! The drift/volatility constants a ruleset version fixes for every round it
//! governs. Identical parameters and inputs must always yield identical
//! reconstructions, so the values are validated up front: a NaN or infinite
//! coefficient would otherwise propagate silently through every projected
//! multiplier and poison the verdict.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parameter validation
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("path parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// Drift and noise coefficients for path reconstruction
///
/// - `alpha`: drift coefficient, scales how far a reported multiplier sits
///   from the baseline of 1
/// - `beta`: volatility scale applied to the noise term
/// - `sigma`: standard deviation of the injected noise
///
/// # Example
/// ```
/// use crash_core_rs::PathParams;
///
/// let params = PathParams { alpha: 0.25, beta: 0.8, sigma: 0.4 };
/// assert!(params.validate().is_ok());
///
/// let bad = PathParams { alpha: f64::NAN, ..params };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// Drift coefficient
    pub alpha: f64,

    /// Volatility scale
    pub beta: f64,

    /// Noise standard deviation
    pub sigma: f64,
}

impl PathParams {
    /// Reject non-finite coefficients before any reconstruction work
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("sigma", self.sigma)] {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}
