//! Ruleset versions
//!
//! A ruleset version is a named, frozen bundle of path parameters. Rounds
//! record which version governed them; changing any constant (including the
//! crash threshold or verification tolerance) requires a new version, never
//! an in-place edit, or historical rounds would stop verifying.
//!
//! Callers construct the ruleset they need once at process start and pass it
//! by reference; there is deliberately no cached global.

use serde::{Deserialize, Serialize};

use super::params::PathParams;

/// Named path-parameter bundles
///
/// # Example
/// ```
/// use crash_core_rs::Ruleset;
///
/// let params = Ruleset::V1.params();
/// assert_eq!(params.alpha, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Production constants of the original deployment
    V1,
}

impl Ruleset {
    /// The path parameters this version fixes
    pub fn params(self) -> PathParams {
        match self {
            Ruleset::V1 => PathParams { alpha: 0.25, beta: 0.8, sigma: 0.4 },
        }
    }

    /// Stable version name for display and storage
    pub fn name(self) -> &'static str {
        match self {
            Ruleset::V1 => "v1",
        }
    }
}
