//! Standard-normal sampling over the seeded generator
//!
//! Box–Muller transform, cosine branch only. The paired sine-branch sample
//! is discarded rather than cached: every call consumes exactly two uniform
//! draws, which keeps the draw count per tick fixed and the stream position
//! independent of call history.

use super::SeedRng;

/// Sample one standard-normal value from the seeded stream
///
/// Consumes exactly two generator draws. Both uniforms are floored at machine
/// epsilon so the logarithm never sees zero; the result is finite for every
/// in-range input.
///
/// # Example
/// ```
/// use crash_core_rs::{sample_standard_normal, SeedRng};
///
/// let mut rng = SeedRng::from_seed(&[9, 9, 9, 9]);
/// let z = sample_standard_normal(&mut rng);
/// assert!(z.is_finite());
/// ```
pub fn sample_standard_normal(rng: &mut SeedRng) -> f64 {
    let u1 = rng.next_f64().max(f64::EPSILON);
    let u2 = rng.next_f64().max(f64::EPSILON);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumes_exactly_two_draws() {
        let mut sampled = SeedRng::from_seed(&[1, 2, 3, 4]);
        let mut manual = SeedRng::from_seed(&[1, 2, 3, 4]);

        sample_standard_normal(&mut sampled);
        manual.next_f64();
        manual.next_f64();

        assert_eq!(
            sampled.state(),
            manual.state(),
            "gaussian sample must consume exactly two uniform draws"
        );
    }

    #[test]
    fn test_known_seed_first_sample() {
        let mut rng = SeedRng::from_seed(&[1, 2, 3, 4]);
        let z = sample_standard_normal(&mut rng);
        assert!(
            (z - 0.781_543_758_918_380_7).abs() < 1e-12,
            "first sample diverged from reference stream: {}",
            z
        );
    }
}
