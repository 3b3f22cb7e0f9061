// src/analytics/distribution.rs
//! Empirical terminal-price distribution of the Euler path generator
//! against the exact lognormal law of GBM.
//!
//! Under exact GBM,
//! ```text
//! ln S_T ~ N( ln S_0 + (μ - σ²/2)T , σ²T )
//! ```
//! The empirical side deliberately runs the discretized path generator, so
//! any gap between the two reflects Euler-Maruyama bias plus sampling noise.
//! Nothing here issues a pass/fail verdict.

use crate::error::{validation::*, GbmError, GbmResult};
use crate::math_utils::{linspace, mean, sample_variance};
use crate::models::gbm::MarketParameters;
use crate::solvers::path::{generate_path, TimeSpec};
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, LogNormal};
use tracing::debug;

/// Theoretical density evaluated on an ordered grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    pub x: Vec<f64>,
    pub pdf: Vec<f64>,
}

/// Final price of `runs` independent Euler paths.
pub fn empirical_terminals<R: Rng + ?Sized>(
    params: &MarketParameters,
    time_spec: &TimeSpec,
    runs: usize,
    rng: &mut R,
) -> GbmResult<Vec<f64>> {
    validate_count("runs", runs)?;
    let mut finals = Vec::with_capacity(runs);
    for _ in 0..runs {
        finals.push(generate_path(params, time_spec, rng)?.terminal());
    }
    debug!(runs, points = time_spec.grid_points(), "collected empirical terminal prices");
    Ok(finals)
}

/// Lognormal density with location `ln(s0) + (μ - σ²/2)T` and scale `σ√T`,
/// evaluated on `points` evenly spaced values between the sample's min and max.
pub fn theoretical_lognormal_density(
    s0: f64,
    mu: f64,
    sigma: f64,
    t: f64,
    samples: &[f64],
    points: usize,
) -> GbmResult<DensityCurve> {
    validate_positive("s0", s0)?;
    validate_finite("mu", mu)?;
    validate_non_negative("sigma", sigma)?;
    validate_positive("t", t)?;
    validate_count("points", points)?;
    if samples.is_empty() {
        return Err(GbmError::InvalidConfiguration {
            field: "samples".to_string(),
            reason: "density support needs at least one sample".to_string(),
        });
    }

    let location = s0.ln() + (mu - 0.5 * sigma * sigma) * t;
    let scale = sigma * t.sqrt();
    let law = LogNormal::new(location, scale).map_err(|e| GbmError::NumericalDegenerate {
        method: "lognormal density".to_string(),
        reason: format!("location = {}, scale = {}: {}", location, scale, e),
    })?;

    let lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let x = linspace(lo, hi, points);
    let pdf = x.iter().map(|&v| law.pdf(v)).collect();
    Ok(DensityCurve { x, pdf })
}

/// Sample moments of `ln(price)` next to their theoretical values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogPriceSummary {
    pub sample_mean: f64,
    pub sample_variance: f64,
    pub theoretical_mean: f64,
    pub theoretical_variance: f64,
}

impl LogPriceSummary {
    pub fn from_prices(prices: &[f64], params: &MarketParameters, t: f64) -> GbmResult<Self> {
        params.validate()?;
        validate_positive("t", t)?;
        if prices.len() < 2 {
            return Err(GbmError::InvalidConfiguration {
                field: "prices".to_string(),
                reason: "need at least two prices for a variance".to_string(),
            });
        }
        if let Some(&bad) = prices.iter().find(|&&p| p.is_nan() || p <= 0.0) {
            return Err(GbmError::InvalidParameters {
                parameter: "price".to_string(),
                value: bad,
                constraint: "log-price needs strictly positive prices".to_string(),
            });
        }

        let logs: Vec<f64> = prices.iter().map(|p| p.ln()).collect();
        let model = params.gbm();
        Ok(LogPriceSummary {
            sample_mean: mean(&logs),
            sample_variance: sample_variance(&logs),
            theoretical_mean: model.log_mean(params.s0, t),
            theoretical_variance: model.log_variance(t),
        })
    }

    pub fn mean_error(&self) -> f64 {
        self.sample_mean - self.theoretical_mean
    }

    pub fn variance_error(&self) -> f64 {
        self.sample_variance - self.theoretical_variance
    }
}
