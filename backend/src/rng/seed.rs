//! Committed seed handling
//!
//! The randomness oracle publishes its VRF result as a hex string. This
//! module decodes it into the opaque byte sequence that seeds the generator.
//! Malformed hex is a fatal input error: there is no zero-fill fallback,
//! because a silently substituted seed would make any verdict meaningless.

use thiserror::Error;

/// Errors that can occur while decoding a committed seed
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("seed is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Opaque committed seed bytes
///
/// Pure input: never mutated, fully determines every downstream draw.
///
/// # Example
/// ```
/// use crash_core_rs::Seed;
///
/// let seed = Seed::from_hex("01020304").unwrap();
/// assert_eq!(seed.as_bytes(), &[1, 2, 3, 4]);
///
/// // Odd-length hex is rejected outright
/// assert!(Seed::from_hex("abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Decode a seed from the oracle's hex string
    pub fn from_hex(hex_str: &str) -> Result<Self, SeedError> {
        Ok(Self(hex::decode(hex_str)?))
    }

    /// Wrap raw seed bytes directly (tests and FFI callers that already
    /// hold bytes)
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the seed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
