// src/analytics/convergence.rs
//! Monte Carlo vs Black-Scholes convergence study
//!
//! The closed-form price is computed once; each requested trial count is
//! then simulated independently, in the order given, with fresh draws from
//! the caller's random source.

use crate::analytics::bs_analytic;
use crate::error::{validation::*, GbmError, GbmResult};
use crate::mc::mc_engine;
use crate::mc::payoffs::OptionSpec;
use crate::models::gbm::MarketParameters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One line of the convergence table, columns `n, simulated, analytical, abs_diff, pct_diff`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceRow {
    pub n: usize,
    pub simulated: f64,
    pub analytical: f64,
    /// `analytical - simulated` (signed)
    pub abs_diff: f64,
    /// `abs_diff * 100 / analytical`; NaN when the analytical price is zero
    pub pct_diff: f64,
}

impl ConvergenceRow {
    pub fn new(n: usize, simulated: f64, analytical: f64) -> Self {
        let abs_diff = analytical - simulated;
        let pct_diff = if analytical == 0.0 {
            f64::NAN
        } else {
            abs_diff * 100.0 / analytical
        };
        ConvergenceRow {
            n,
            simulated,
            analytical,
            abs_diff,
            pct_diff,
        }
    }

    pub fn has_defined_pct_diff(&self) -> bool {
        !self.pct_diff.is_nan()
    }
}

/// Price `option` by Monte Carlo for every count in `trial_counts` and compare
/// each estimate with the Black-Scholes value.
///
/// `params.mu` should equal `params.r` (risk-neutral drift).
pub fn run_convergence_study<R: Rng + ?Sized>(
    params: &MarketParameters,
    option: &OptionSpec,
    trial_counts: &[usize],
    rng: &mut R,
) -> GbmResult<Vec<ConvergenceRow>> {
    params.validate()?;
    option.validate()?;
    if trial_counts.is_empty() {
        return Err(GbmError::InvalidConfiguration {
            field: "trial_counts".to_string(),
            reason: "at least one trial count is required".to_string(),
        });
    }
    for &n in trial_counts {
        validate_count("trial_counts", n)?;
    }

    let analytical = bs_analytic::bs_price(
        params.s0,
        params.sigma,
        option.maturity_years,
        params.r,
        option.kind,
        option.strike,
    )?;
    debug!(analytical, rows = trial_counts.len(), "starting convergence study");

    let mut rows = Vec::with_capacity(trial_counts.len());
    for &n in trial_counts {
        let simulated = mc_engine::mc_price(params, option, n, rng)?.value;
        let row = ConvergenceRow::new(n, simulated, analytical);
        trace!(n, simulated, abs_diff = row.abs_diff, pct_diff = row.pct_diff, "convergence row");
        rows.push(row);
    }
    Ok(rows)
}
