use rand::rngs::StdRng;
use rand::SeedableRng;
use velocity_sim::sampling::{normal_sample, sample_capacity, uniform_index};
use velocity_sim::SimError;

#[test]
fn test_uniform_index_covers_all_candidates() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [0usize; 5];
    for _ in 0..5000 {
        let i = uniform_index(&mut rng, 5);
        assert!(i < 5, "index out of range: {}", i);
        seen[i] += 1;
    }
    for (i, &count) in seen.iter().enumerate() {
        // Expect ~1000 each
        assert!(
            count > 800 && count < 1200,
            "candidate {} drawn {} times",
            i,
            count
        );
    }
}

#[test]
fn test_normal_sample_mean_and_spread() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 20_000;
    let samples: Vec<f64> = (0..n)
        .map(|_| normal_sample(&mut rng, 50.0, 10.0).unwrap())
        .collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
    assert!((mean - 50.0).abs() < 0.5, "mean {}", mean);
    assert!((var.sqrt() - 10.0).abs() < 0.5, "stddev {}", var.sqrt());
}

#[test]
fn test_normal_sample_rejects_negative_stddev() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = normal_sample(&mut rng, 10.0, -1.0).unwrap_err();
    assert!(matches!(err, SimError::Distribution(_)));
}

#[test]
fn test_sample_capacity_without_variance_is_prediction() {
    let mut rng = StdRng::seed_from_u64(3);
    for predicted in [1, 25, 50, 137] {
        assert_eq!(sample_capacity(&mut rng, predicted, 0.0).unwrap(), predicted);
    }
}

#[test]
fn test_sample_capacity_clamps_negative_draws_to_zero() {
    // stddev = 5x the mean, so roughly 40% of raw draws are negative
    let mut rng = StdRng::seed_from_u64(5);
    let zeros = (0..1000)
        .map(|_| sample_capacity(&mut rng, 20, 5.0).unwrap())
        .filter(|&c| c == 0)
        .count();
    assert!(zeros > 200, "expected many clamped draws, got {}", zeros);
}
