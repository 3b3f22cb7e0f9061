// src/rng.rs
//! Random Number Sources for GBM Simulation
//!
//! Every sampling operation in this crate takes an explicit `&mut R: Rng`
//! handle; nothing reads a process-global generator. Callers pick one of
//! two instantiations:
//!
//! 1. **Seeded** (`seeded`): same seed and call sequence → bit-identical
//!    draws. Used by distribution validation and by tests.
//! 2. **Entropy** (`from_entropy`): seeded from OS entropy, not reproducible
//!    run-to-run. Used for production path generation and pricing.
//!
//! Repeated calls against the same handle continue its stream, so two
//! consecutive operations never reuse the same draws.
//!
//! A future parallel driver must give each worker its own stream
//! (`stream`), never a shared generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Reproducible generator owned by the calling context.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Non-reproducible generator seeded from OS entropy.
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Seeded generator when `seed` is given, entropy otherwise.
pub fn from_optional_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded(seed),
        None => from_entropy(),
    }
}

/// Independent stream `stream_id` derived from `base_seed`.
///
/// The 256-bit seed holds both inputs verbatim, so distinct
/// `(base_seed, stream_id)` pairs never share a seed; the splitmix64-mixed
/// words fill the remaining bits.
pub fn stream(base_seed: u64, stream_id: u64) -> StdRng {
    let words = [
        base_seed,
        stream_id,
        splitmix64(base_seed),
        splitmix64(stream_id ^ splitmix64(base_seed)),
    ];
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    for (chunk, word) in seed.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    StdRng::from_seed(seed)
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// One standard normal variate Z ~ N(0, 1).
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_reproducibility() {
        let mut rng1 = seeded(42);
        let mut rng2 = seeded(42);

        for _ in 0..100 {
            assert_eq!(get_normal_draw(&mut rng1), get_normal_draw(&mut rng2));
        }
    }

    #[test]
    fn test_different_streams() {
        let mut rng1 = stream(42, 0);
        let mut rng2 = stream(42, 1);

        let vals1: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng1)).collect();
        let vals2: Vec<f64> = (0..10).map(|_| get_normal_draw(&mut rng2)).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_streams_do_not_collide_across_base_seeds() {
        let draws = |mut rng: StdRng| -> Vec<f64> { (0..10).map(|_| get_normal_draw(&mut rng)).collect() };

        assert_ne!(draws(stream(42, 1)), draws(stream(43, 0)));
        assert_ne!(draws(stream(0, 1)), draws(stream(1, 0)));
        assert_eq!(draws(stream(42, 1)), draws(stream(42, 1)));
    }

    #[test]
    fn test_shared_handle_advances() {
        let mut rng = seeded(7);
        let first: Vec<f64> = (0..5).map(|_| get_normal_draw(&mut rng)).collect();
        let second: Vec<f64> = (0..5).map(|_| get_normal_draw(&mut rng)).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_normal_distribution() {
        let mut rng = seeded(42);

        let samples: Vec<f64> = (0..10000).map(|_| get_normal_draw(&mut rng)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance =
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;

        assert!(mean.abs() < 0.05, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance - 1.0).abs() < 0.05,
            "Variance should be close to 1, got {}",
            variance
        );
    }

    #[test]
    fn test_optional_seed() {
        let mut a = from_optional_seed(Some(9));
        let mut b = seeded(9);
        assert_eq!(get_normal_draw(&mut a), get_normal_draw(&mut b));
    }
}
