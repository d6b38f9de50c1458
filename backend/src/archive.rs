//! Tick archive digests
//!
//! Settled tick sequences are archived at a content-addressed pointer
//! (`tickCid`). This module computes the SHA-256 digest of the canonical
//! tick encoding so a verifier can confirm the ticks it replayed are the
//! ticks that were archived. Integrity only: it says nothing about the
//! authenticity of the seed, which belongs to the randomness oracle.
//!
//! Canonical form: the compact JSON array encoding of the ticks in wire
//! field order (`ms`, `multiplier`, `crashed`), no whitespace.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::tick::Tick;

/// Errors from archive digest computation
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("tick encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// SHA-256 hex digest of the canonical tick encoding
///
/// # Example
/// ```
/// use crash_core_rs::{tick_archive_digest, Tick};
///
/// let ticks = vec![Tick::new(0, 1.0, false)];
/// let digest = tick_archive_digest(&ticks).unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn tick_archive_digest(ticks: &[Tick]) -> Result<String, ArchiveError> {
    let encoded = serde_json::to_vec(ticks)?;
    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Whether a recorded content pointer ends in the digest of the given ticks
///
/// Pointers are URL-shaped (`ipfs://.../<digest>` or a CDN path); only the
/// final segment is compared.
pub fn digest_matches(ticks: &[Tick], cid: &str) -> Result<bool, ArchiveError> {
    let digest = tick_archive_digest(ticks)?;
    let tail = cid.rsplit('/').next().unwrap_or(cid);
    Ok(tail.eq_ignore_ascii_case(&digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ticks() -> Vec<Tick> {
        vec![
            Tick::new(0, 1.0, false),
            Tick::new(100, 1.2, false),
            Tick::new(200, 0.5, true),
        ]
    }

    #[test]
    fn test_digest_is_stable() {
        // Reference digest of the canonical encoding; a change here means the
        // canonical form changed and archived pointers would stop matching.
        let digest = tick_archive_digest(&sample_ticks()).unwrap();
        assert_eq!(
            digest,
            "61d4b366565a9924c9e3242432c421ead9e04a16529998b8f4f4a83e4f2ef8c2"
        );
    }

    #[test]
    fn test_digest_changes_with_content() {
        let mut ticks = sample_ticks();
        ticks[1].multiplier = 1.3;
        assert_ne!(
            tick_archive_digest(&ticks).unwrap(),
            tick_archive_digest(&sample_ticks()).unwrap()
        );
    }

    #[test]
    fn test_digest_matches_final_segment() {
        let ticks = sample_ticks();
        let digest = tick_archive_digest(&ticks).unwrap();
        let cid = format!("ipfs://bafybucket/rounds/7/{}", digest);
        assert!(digest_matches(&ticks, &cid).unwrap());
        assert!(!digest_matches(&ticks, "ipfs://bafybucket/rounds/7/other").unwrap());
    }

    #[test]
    fn test_bare_digest_pointer() {
        let ticks = sample_ticks();
        let digest = tick_archive_digest(&ticks).unwrap();
        assert!(digest_matches(&ticks, &digest).unwrap());
    }
}
