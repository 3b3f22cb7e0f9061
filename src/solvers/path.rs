// src/solvers/path.rs
//! Discretized GBM sample paths
//!
//! Paths are produced on the half-open grid `{ i·Δt : i ≥ 0, i·Δt < T }`
//! with `Δt = dt_days / 365` years. The first price is always `s0` and each
//! following price is one Euler-Maruyama step from the previous one, so a
//! grid of `k` points yields `k - 1` steps. A horizon no longer than one step
//! gives the single-point path `[s0]`.

use super::euler_maruyama::EulerMaruyama;
use crate::error::{validation::*, GbmResult};
use crate::math_utils::linspace;
use crate::models::gbm::MarketParameters;
use crate::GbmError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Largest time grid a `TimeSpec` may describe.
pub const MAX_GRID_POINTS: usize = u32::MAX as usize;

/// Discretization step (in days) and simulated duration (in years).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSpec {
    pub dt_days: f64,
    pub horizon_years: f64,
}

impl TimeSpec {
    pub fn new(dt_days: f64, horizon_years: f64) -> GbmResult<Self> {
        let spec = TimeSpec {
            dt_days,
            horizon_years,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> GbmResult<()> {
        validate_positive("dt_days", self.dt_days)?;
        validate_positive("horizon_years", self.horizon_years)?;

        let intervals = self.horizon_years / self.dt_years();
        if !intervals.is_finite() || intervals > MAX_GRID_POINTS as f64 {
            return Err(GbmError::InvalidParameters {
                parameter: "dt_days".to_string(),
                value: self.dt_days,
                constraint: format!(
                    "horizon / step = {} exceeds the maximum grid size ({})",
                    intervals, MAX_GRID_POINTS
                ),
            });
        }
        Ok(())
    }

    /// Step length in years.
    pub fn dt_years(&self) -> f64 {
        self.dt_days / DAYS_PER_YEAR
    }

    /// Number of grid points `i·Δt` strictly below the horizon (always ≥ 1).
    ///
    /// Capped at `MAX_GRID_POINTS`; `validate` rejects specs that would exceed it.
    pub fn grid_points(&self) -> usize {
        let dt = self.dt_years();
        let ratio = self.horizon_years / dt;
        if !ratio.is_finite() || ratio >= MAX_GRID_POINTS as f64 {
            return MAX_GRID_POINTS;
        }
        let mut count = (ratio.ceil() as usize).max(1);
        while count > 1 && (count - 1) as f64 * dt >= self.horizon_years {
            count -= 1;
        }
        while count < MAX_GRID_POINTS && (count as f64) * dt < self.horizon_years {
            count += 1;
        }
        count
    }

    /// Number of Euler steps taken along the grid.
    pub fn steps(&self) -> usize {
        self.grid_points() - 1
    }

    pub fn grid(&self) -> Vec<f64> {
        let dt = self.dt_years();
        (0..self.grid_points()).map(|i| i as f64 * dt).collect()
    }
}

/// Ordered `(time, price)` samples of one trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePath {
    times: Vec<f64>,
    prices: Vec<f64>,
}

impl SamplePath {
    fn new(times: Vec<f64>, prices: Vec<f64>) -> Self {
        debug_assert_eq!(times.len(), prices.len());
        SamplePath { times, prices }
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn initial(&self) -> f64 {
        self.prices[0]
    }

    /// Price at the last grid point.
    pub fn terminal(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.prices.iter().copied())
    }
}

/// Simulate one GBM path with the Euler-Maruyama relative recursion.
pub fn generate_path<R: Rng + ?Sized>(
    params: &MarketParameters,
    time_spec: &TimeSpec,
    rng: &mut R,
) -> GbmResult<SamplePath> {
    params.validate()?;
    time_spec.validate()?;
    Ok(simulate(params, time_spec, rng))
}

/// Simulate `count` independent paths, each continuing the same random stream.
pub fn generate_paths<R: Rng + ?Sized>(
    params: &MarketParameters,
    time_spec: &TimeSpec,
    count: usize,
    rng: &mut R,
) -> GbmResult<Vec<SamplePath>> {
    params.validate()?;
    time_spec.validate()?;
    validate_count("paths", count)?;
    debug!(
        count,
        points = time_spec.grid_points(),
        "generating GBM sample paths"
    );
    Ok((0..count).map(|_| simulate(params, time_spec, rng)).collect())
}

fn simulate<R: Rng + ?Sized>(
    params: &MarketParameters,
    time_spec: &TimeSpec,
    rng: &mut R,
) -> SamplePath {
    let model = params.gbm();
    let dt = time_spec.dt_years();
    let times = time_spec.grid();

    let mut prices = Vec::with_capacity(times.len());
    let mut current_s = params.s0;
    prices.push(current_s);
    for &t in &times[..times.len() - 1] {
        EulerMaruyama::step(&model, &mut current_s, t, dt, rng);
        prices.push(current_s);
    }

    SamplePath::new(times, prices)
}

/// Zero-uncertainty trajectory `s0·e^{μt}` on `points` evenly spaced times over `[0, T]`.
pub fn expected_path(s0: f64, mu: f64, horizon_years: f64, points: usize) -> GbmResult<SamplePath> {
    validate_positive("s0", s0)?;
    validate_finite("mu", mu)?;
    validate_positive("horizon_years", horizon_years)?;
    if points < 2 {
        return Err(GbmError::InvalidConfiguration {
            field: "points".to_string(),
            reason: "expected path needs at least 2 points".to_string(),
        });
    }

    let times = linspace(0.0, horizon_years, points);
    let values = times.iter().map(|t| s0 * (mu * t).exp()).collect();
    Ok(SamplePath::new(times, values))
}
