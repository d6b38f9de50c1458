//! xorshift32 random number generator seeded from VRF output
//!
//! This is the generator that made a round's path unpredictable in advance:
//! its entire state is derived from the committed seed bytes, so anyone
//! holding the seed can regenerate the exact noise stream the round used.
//!
//! # Algorithm
//!
//! Classic xorshift32 (shift-13 / shift-17 / shift-5). Draws are normalised
//! by dividing the 32-bit state by `0xFFFF_FFFF`. The seed bytes are folded
//! into a fixed non-zero base constant, so even an all-zero seed yields a
//! non-degenerate state.
//!
//! # Determinism
//!
//! Same seed bytes → same sequence of draws, indefinitely. This is CRITICAL:
//! the provably-fair contract is exactly that any third party can replay the
//! stream bit-for-bit from the committed seed.

use serde::{Deserialize, Serialize};

/// Base state the seed bytes are folded into. Non-zero, so the generator
/// never degenerates even when every seed byte is zero.
const SEED_FOLD_BASE: u32 = 0xDEAD_BEEF;

/// Deterministic generator over a committed seed
///
/// One instance per logical reconstruction: the state is mutated in place on
/// every draw and must never be shared across concurrent verifications.
///
/// # Example
/// ```
/// use crash_core_rs::SeedRng;
///
/// let mut rng = SeedRng::from_seed(&[1, 2, 3, 4]);
/// let draw = rng.next_f64();
/// assert!((0.0..1.0).contains(&draw));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRng {
    /// Internal state (32-bit, never zero)
    state: u32,
}

impl SeedRng {
    /// Create a generator from raw seed bytes
    ///
    /// Each byte is XORed into the base constant after a left shift of
    /// `(index % 24)` bits, matching the committed-stream definition the
    /// reference verifier uses.
    ///
    /// # Example
    /// ```
    /// use crash_core_rs::SeedRng;
    ///
    /// // An all-zero seed still yields a usable generator
    /// let rng = SeedRng::from_seed(&[0; 8]);
    /// assert_ne!(rng.state(), 0);
    /// ```
    pub fn from_seed(seed: &[u8]) -> Self {
        let state = seed
            .iter()
            .enumerate()
            .fold(SEED_FOLD_BASE, |acc, (index, &byte)| {
                acc ^ (u32::from(byte) << (index % 24))
            });
        Self { state }
    }

    /// Draw the next value in `[0, 1)`
    ///
    /// Advances the internal state with one xorshift32 step and normalises
    /// the result by `0xFFFF_FFFF`. The shift/XOR sequence is fixed by the
    /// committed-stream definition and must never change without a ruleset
    /// version bump.
    ///
    /// # Example
    /// ```
    /// use crash_core_rs::SeedRng;
    ///
    /// let mut a = SeedRng::from_seed(&[1, 2, 3, 4]);
    /// let mut b = SeedRng::from_seed(&[1, 2, 3, 4]);
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        f64::from(x) / f64::from(u32::MAX)
    }

    /// Get the current generator state (for inspection and tests)
    pub fn state(&self) -> u32 {
        self.state
    }
}
