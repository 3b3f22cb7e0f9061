// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! and a European option has the closed-form value
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! C  = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P  = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//! where Φ is the standard normal CDF.

use crate::error::{validation::*, GbmError, GbmResult};
use crate::math_utils::norm_cdf;
use crate::mc::payoffs::OptionKind;

fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes European call option price
///
/// Unchecked: `sigma * sqrt(t)` must be non-zero.
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// Unchecked: `sigma * sqrt(t)` must be non-zero.
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Validated closed-form price.
///
/// # Errors
///
/// - `InvalidParameters` for non-positive `s0`, `strike`, `t`, negative or
///   non-finite `sigma`, non-finite `r`
/// - `NumericalDegenerate` when `σ√T == 0`, where `d₁` is undefined
pub fn bs_price(s0: f64, sigma: f64, t: f64, r: f64, kind: OptionKind, strike: f64) -> GbmResult<f64> {
    validate_positive("s0", s0)?;
    validate_non_negative("sigma", sigma)?;
    validate_positive("t", t)?;
    validate_finite("r", r)?;
    validate_positive("strike", strike)?;

    let vol_sqrt_t = sigma * t.sqrt();
    if vol_sqrt_t == 0.0 {
        return Err(GbmError::NumericalDegenerate {
            method: "Black-Scholes".to_string(),
            reason: format!("σ√T = 0 (sigma = {}, t = {}); d1 is undefined", sigma, t),
        });
    }

    let price = match kind {
        OptionKind::Call => bs_call_price(s0, strike, r, sigma, t),
        OptionKind::Put => bs_put_price(s0, strike, r, sigma, t),
    };
    Ok(price)
}
