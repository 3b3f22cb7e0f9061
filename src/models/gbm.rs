// src/models/gbm.rs
//! Geometric Brownian Motion
//!
//! ```text
//! dS_t / S_t = μ dt + σ dW_t
//! ```
//!
//! Two ways of moving the process forward live here and are kept apart:
//! - `step_with_dw`: Euler-Maruyama relative step `S ← S (1 + μΔt + σΔW)`,
//!   which carries discretization error that grows with Δt.
//! - `exact_terminal`: closed-form lognormal draw
//!   `S_T = S_0 exp((μ - σ²/2)T + σ√T Z)` with no discretization error.

use super::model::SdeModel;
use crate::error::{validation::*, GbmResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Market inputs shared by every simulation and pricing routine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    pub s0: f64,    // Initial price
    pub mu: f64,    // Real-world drift
    pub sigma: f64, // Volatility
    pub r: f64,     // Risk-free rate
}

impl MarketParameters {
    pub fn new(s0: f64, mu: f64, sigma: f64, r: f64) -> GbmResult<Self> {
        let params = MarketParameters { s0, mu, sigma, r };
        params.validate()?;
        Ok(params)
    }

    /// Same market with the drift replaced by the risk-free rate.
    pub fn risk_neutral(s0: f64, sigma: f64, r: f64) -> GbmResult<Self> {
        Self::new(s0, r, sigma, r)
    }

    pub fn validate(&self) -> GbmResult<()> {
        validate_positive("s0", self.s0)?;
        validate_finite("mu", self.mu)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_finite("r", self.r)?;
        Ok(())
    }

    /// Whether the drift equals the risk-free rate, as Monte Carlo pricing assumes.
    pub fn is_risk_neutral(&self) -> bool {
        self.mu == self.r
    }

    pub fn gbm(&self) -> Gbm {
        Gbm::new(self.mu, self.sigma)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    /// Exact lognormal terminal price after time `t` for the normal draw `z`.
    pub fn exact_terminal(&self, s0: f64, t: f64, z: f64) -> f64 {
        let drift_term = (self.mu - 0.5 * self.sigma * self.sigma) * t;
        let diffusion_term = self.sigma * t.sqrt();
        s0 * (drift_term + diffusion_term * z).exp()
    }

    /// Mean of ln(S_T) under the exact solution.
    pub fn log_mean(&self, s0: f64, t: f64) -> f64 {
        s0.ln() + (self.mu - 0.5 * self.sigma * self.sigma) * t
    }

    /// Variance of ln(S_T) under the exact solution.
    pub fn log_variance(&self, t: f64) -> f64 {
        self.sigma * self.sigma * t
    }
}

impl SdeModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    /// Euler-Maruyama increment `a(S)Δt + b(S)ΔW`, i.e. `S (μΔt + σΔW)`.
    /// Not the exact step.
    fn step_with_dw(&self, s_current: &mut f64, t_current: f64, dt: f64, dw: f64) {
        let s = *s_current;
        let next = s + self.drift(s, t_current) * dt + self.diffusion(s, t_current) * dw;
        if next <= 0.0 {
            warn!(previous = s, next, "Euler step drives the price non-positive");
        }
        *s_current = next;
    }
}
