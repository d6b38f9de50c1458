//! Deterministic random number generation
//!
//! Expands a committed VRF seed into the noise stream that drives path
//! reconstruction. CRITICAL: All randomness in the engine MUST go through
//! this module, and every reconstruction owns its own generator instance.

mod gaussian;
mod seed;
mod xorshift;

pub use gaussian::sample_standard_normal;
pub use seed::{Seed, SeedError};
pub use xorshift::SeedRng;
