// src/mc/mc_engine.rs
use crate::error::{validation::*, GbmError, GbmResult};
use crate::mc::payoffs::{self, OptionSpec};
use crate::mc::sampler;
use crate::models::gbm::MarketParameters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A price from either the Monte Carlo engine or the closed form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub value: f64,
    /// Paths behind the estimate; `None` for an analytical price.
    pub sample_count: Option<usize>,
    /// Standard error of the discounted payoff mean; `None` for an analytical price.
    pub standard_error: Option<f64>,
}

impl PriceEstimate {
    pub fn analytical(value: f64) -> Self {
        PriceEstimate {
            value,
            sample_count: None,
            standard_error: None,
        }
    }

    pub fn is_analytical(&self) -> bool {
        self.sample_count.is_none()
    }
}

/// Plain Monte Carlo price of a European option under GBM
///
/// # Math Framework
///
/// ```text
/// S_T^(i) = S_0 * exp((μ - σ²/2)T + σ√T * Z_i),   i = 1..n
/// V ≈ e^(-rT) * (1/n) Σ payoff(S_T^(i))
/// ```
///
/// # Precondition
///
/// Risk-neutral pricing needs `params.mu == params.r`. This is the caller's
/// responsibility (see `MarketParameters::risk_neutral`); the drift is used
/// as given. No variance reduction is applied, so the error shrinks as
/// O(1/√n).
///
/// # Errors
///
/// - `InvalidParameters` / `InvalidConfiguration` for bad inputs or `n == 0`
/// - `NumericalDegenerate` if the estimate is not finite
pub fn mc_price<R: Rng + ?Sized>(
    params: &MarketParameters,
    option: &OptionSpec,
    n: usize,
    rng: &mut R,
) -> GbmResult<PriceEstimate> {
    params.validate()?;
    option.validate()?;
    validate_count("n", n)?;

    let t = option.maturity_years;
    let terminals = sampler::sample_terminal(params.s0, params.mu, params.sigma, t, n, rng)?;
    let payoffs = payoffs::payoffs(option.kind, option.strike, &terminals)?;
    drop(terminals);

    let discount = (-params.r * t).exp();
    let mean_payoff = payoffs.iter().sum::<f64>() / n as f64;
    let estimated_price = discount * mean_payoff;

    let standard_error = if n > 1 {
        let sum_sq_dev = payoffs
            .iter()
            .map(|p| (p - mean_payoff).powi(2))
            .sum::<f64>();
        Some(discount * (sum_sq_dev / ((n - 1) as f64 * n as f64)).sqrt())
    } else {
        None
    };

    if !estimated_price.is_finite() {
        return Err(GbmError::NumericalDegenerate {
            method: "Monte Carlo".to_string(),
            reason: format!("Price estimate is not finite: {}", estimated_price),
        });
    }

    debug!(
        n,
        kind = %option.kind,
        price = estimated_price,
        risk_neutral = params.is_risk_neutral(),
        "monte carlo estimate"
    );

    Ok(PriceEstimate {
        value: estimated_price,
        sample_count: Some(n),
        standard_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::payoffs::OptionKind;
    use crate::rng;

    fn market() -> MarketParameters {
        MarketParameters::risk_neutral(100.0, 0.2, 0.05).unwrap()
    }

    #[test]
    fn test_estimate_metadata() {
        let option = OptionSpec::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let est = mc_price(&market(), &option, 1_000, &mut rng::seeded(1)).unwrap();
        assert_eq!(est.sample_count, Some(1_000));
        assert!(est.standard_error.unwrap() > 0.0);
        assert!(!est.is_analytical());
        assert!(est.value > 0.0);
    }

    #[test]
    fn test_analytical_estimate_has_no_sample_count() {
        let est = PriceEstimate::analytical(5.41);
        assert!(est.is_analytical());
        assert_eq!(est.sample_count, None);
        assert_eq!(est.standard_error, None);
    }

    #[test]
    fn test_single_sample_has_no_standard_error() {
        let option = OptionSpec::new(OptionKind::Put, 100.0, 1.0).unwrap();
        let est = mc_price(&market(), &option, 1, &mut rng::seeded(1)).unwrap();
        assert_eq!(est.standard_error, None);
        assert!(est.value >= 0.0);
    }

    #[test]
    fn test_zero_volatility_prices_intrinsic_forward() {
        let params = MarketParameters::risk_neutral(100.0, 0.0, 0.05).unwrap();
        let option = OptionSpec::new(OptionKind::Call, 90.0, 1.0).unwrap();
        let est = mc_price(&params, &option, 100, &mut rng::seeded(2)).unwrap();
        let expected = 100.0 - 90.0 * (-0.05f64).exp();
        assert!((est.value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_estimates_reproducible() {
        let option = OptionSpec::new(OptionKind::Call, 110.0, 0.5).unwrap();
        let a = mc_price(&market(), &option, 10_000, &mut rng::seeded(77)).unwrap();
        let b = mc_price(&market(), &option, 10_000, &mut rng::seeded(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_zero_paths() {
        let option = OptionSpec::new(OptionKind::Call, 100.0, 1.0).unwrap();
        let err = mc_price(&market(), &option, 0, &mut rng::seeded(1)).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
