// src/mc/sampler.rs
//! Exact terminal-price sampling
//!
//! ```text
//! S_T = S_0 * exp((μ - σ²/2)T + σ√T * Z),  Z ~ N(0,1)
//! ```
//!
//! One normal draw per sample and no intermediate time steps, so unlike
//! `solvers::path` there is no discretization error.

use crate::error::{validation::*, GbmResult};
use crate::models::gbm::Gbm;
use crate::rng;
use rand::Rng;

/// Draw `n` independent terminal prices at horizon `t`.
pub fn sample_terminal<R: Rng + ?Sized>(
    s0: f64,
    mu: f64,
    sigma: f64,
    t: f64,
    n: usize,
    rng: &mut R,
) -> GbmResult<Vec<f64>> {
    validate_positive("s0", s0)?;
    validate_finite("mu", mu)?;
    validate_non_negative("sigma", sigma)?;
    validate_positive("t", t)?;
    validate_count("n", n)?;

    let model = Gbm::new(mu, sigma);
    Ok((0..n)
        .map(|_| model.exact_terminal(s0, t, rng::get_normal_draw(rng)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::{mean, sample_variance};
    use crate::rng;

    #[test]
    fn test_sample_count_and_positivity() {
        let mut rng = rng::seeded(1);
        let samples = sample_terminal(100.0, 0.05, 0.4, 2.0, 5_000, &mut rng).unwrap();
        assert_eq!(samples.len(), 5_000);
        assert!(samples.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn test_log_moments_match_lognormal_law() {
        let (s0, mu, sigma, t) = (100.0, 0.04, 0.3, 0.5);
        let mut rng = rng::seeded(17);
        let samples = sample_terminal(s0, mu, sigma, t, 200_000, &mut rng).unwrap();
        let logs: Vec<f64> = samples.iter().map(|s| s.ln()).collect();

        let expected_mean = s0.ln() + (mu - 0.5 * sigma * sigma) * t;
        assert!((mean(&logs) - expected_mean).abs() < 0.005);
        assert!((sample_variance(&logs) - sigma * sigma * t).abs() < 0.002);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let mut rng = rng::seeded(4);
        let samples = sample_terminal(100.0, 0.1, 0.0, 1.0, 10, &mut rng).unwrap();
        let expected = 100.0 * 0.1f64.exp();
        assert!(samples.iter().all(|&s| (s - expected).abs() < 1e-9));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = rng::seeded(1);
        assert!(sample_terminal(100.0, 0.05, 0.2, 1.0, 0, &mut rng).is_err());
        assert!(sample_terminal(100.0, 0.05, 0.2, 0.0, 10, &mut rng).is_err());
        assert!(sample_terminal(-1.0, 0.05, 0.2, 1.0, 10, &mut rng).is_err());
        assert!(sample_terminal(100.0, 0.05, -0.2, 1.0, 10, &mut rng).is_err());
    }
}
