//! Random sampling primitives shared by the planner and executor.
//!
//! Every function takes the generator explicitly so each cycle can own a
//! seeded stream.
use crate::error::{Result, SimError};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Uniform index in `[0, n)`. `n` must be positive.
pub fn uniform_index<R: Rng + ?Sized>(rng: &mut R, n: usize) -> usize {
    debug_assert!(n > 0, "uniform_index needs at least one candidate");
    rng.gen_range(0..n)
}

/// One draw from Normal(mean, stddev). `stddev` must be finite and non-negative.
pub fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mean: f64, stddev: f64) -> Result<f64> {
    // rand_distr only rejects non-finite deviations
    if stddev < 0.0 {
        return Err(SimError::Distribution(format!(
            "standard deviation must be non-negative, got {}",
            stddev
        )));
    }
    let normal = Normal::new(mean, stddev).map_err(|e| SimError::Distribution(e.to_string()))?;
    Ok(normal.sample(rng))
}

/// Actual capacity for a sprint: Normal(predicted, fraction * predicted),
/// clamped at zero and truncated to whole points.
pub fn sample_capacity<R: Rng + ?Sized>(
    rng: &mut R,
    predicted: u32,
    stddev_fraction: f64,
) -> Result<u32> {
    let mean = predicted as f64;
    let sample = normal_sample(rng, mean, mean * stddev_fraction)?;
    Ok(sample.max(0.0) as u32)
}
