// src/config.rs
//! Run configurations for the three reporting workflows.
//!
//! Each config has a `Default` with the reference parameter set, a
//! `validate()` and the typed inputs the core expects. All can be loaded
//! from TOML; missing fields fall back to the defaults.

use crate::error::{validation::*, GbmError, GbmResult};
use crate::mc::payoffs::{OptionKind, OptionSpec};
use crate::models::gbm::MarketParameters;
use crate::solvers::path::TimeSpec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Simulated sample paths plus the zero-uncertainty curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
    pub dt_days: f64,
    pub horizon_years: f64,
    pub paths: usize,
    pub expected_points: usize,
    pub seed: Option<u64>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            s0: 100.0,
            mu: 0.2,
            sigma: 0.2,
            dt_days: 1.0,
            horizon_years: 5.0,
            paths: 10,
            expected_points: 1000,
            seed: None,
        }
    }
}

impl PathsConfig {
    pub fn validate(&self) -> GbmResult<()> {
        self.market()?;
        self.time_spec()?;
        validate_count("paths", self.paths)?;
        if self.expected_points < 2 {
            return Err(GbmError::InvalidConfiguration {
                field: "expected_points".to_string(),
                reason: "expected path needs at least 2 points".to_string(),
            });
        }
        Ok(())
    }

    pub fn market(&self) -> GbmResult<MarketParameters> {
        MarketParameters::new(self.s0, self.mu, self.sigma, 0.0)
    }

    pub fn time_spec(&self) -> GbmResult<TimeSpec> {
        TimeSpec::new(self.dt_days, self.horizon_years)
    }
}

/// Monte Carlo vs Black-Scholes sweep over trial counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    pub s0: f64,
    pub sigma: f64,
    pub maturity_years: f64,
    pub r: f64,
    pub kind: OptionKind,
    pub strike: f64,
    pub trial_counts: Vec<usize>,
    pub seed: Option<u64>,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            s0: 100.0,
            sigma: 0.3,
            maturity_years: 0.5,
            r: 0.04,
            kind: OptionKind::Call,
            strike: 110.0,
            trial_counts: vec![
                100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000, 5_000_000,
                10_000_000, 50_000_000,
            ],
            seed: None,
        }
    }
}

impl ConvergenceConfig {
    pub fn validate(&self) -> GbmResult<()> {
        self.market()?;
        self.option()?;
        if self.trial_counts.is_empty() {
            return Err(GbmError::InvalidConfiguration {
                field: "trial_counts".to_string(),
                reason: "at least one trial count is required".to_string(),
            });
        }
        for &n in &self.trial_counts {
            validate_count("trial_counts", n)?;
        }
        Ok(())
    }

    /// Risk-neutral market: the drift is set to `r`.
    pub fn market(&self) -> GbmResult<MarketParameters> {
        MarketParameters::risk_neutral(self.s0, self.sigma, self.r)
    }

    pub fn option(&self) -> GbmResult<OptionSpec> {
        OptionSpec::new(self.kind, self.strike, self.maturity_years)
    }
}

/// Empirical terminal distribution of the Euler generator vs the lognormal law.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
    pub dt_days: f64,
    pub horizon_years: f64,
    pub runs: usize,
    pub support_points: usize,
    pub seed: u64,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        DistributionConfig {
            s0: 100.0,
            mu: 0.2,
            sigma: 0.1,
            dt_days: 1.0,
            horizon_years: 3.0,
            runs: 10_000,
            support_points: 1000,
            seed: 123,
        }
    }
}

impl DistributionConfig {
    pub fn validate(&self) -> GbmResult<()> {
        self.market()?;
        self.time_spec()?;
        validate_count("runs", self.runs)?;
        validate_count("support_points", self.support_points)?;
        Ok(())
    }

    pub fn market(&self) -> GbmResult<MarketParameters> {
        MarketParameters::new(self.s0, self.mu, self.sigma, 0.0)
    }

    pub fn time_spec(&self) -> GbmResult<TimeSpec> {
        TimeSpec::new(self.dt_days, self.horizon_years)
    }
}

pub fn from_toml_str<T: DeserializeOwned>(text: &str) -> GbmResult<T> {
    Ok(toml::from_str(text)?)
}

pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> GbmResult<T> {
    let text = std::fs::read_to_string(path)?;
    from_toml_str(&text)
}
