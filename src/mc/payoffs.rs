//! European Option Payoffs
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! The option kind is a closed set; anything else is rejected when parsed.

use crate::error::{validation::*, GbmError, GbmResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Map the numeric mode used by older parameter sets (1 = call, 2 = put).
    pub fn from_mode(mode: i32) -> GbmResult<Self> {
        match mode {
            1 => Ok(OptionKind::Call),
            2 => Ok(OptionKind::Put),
            other => Err(GbmError::UnsupportedOptionKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = GbmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" | "1" => Ok(OptionKind::Call),
            "put" | "p" | "2" => Ok(OptionKind::Put),
            _ => Err(GbmError::UnsupportedOptionKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// European option contract terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub kind: OptionKind,
    pub strike: f64,
    pub maturity_years: f64,
}

impl OptionSpec {
    pub fn new(kind: OptionKind, strike: f64, maturity_years: f64) -> GbmResult<Self> {
        let spec = OptionSpec {
            kind,
            strike,
            maturity_years,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> GbmResult<()> {
        validate_positive("strike", self.strike)?;
        validate_positive("maturity_years", self.maturity_years)?;
        Ok(())
    }
}

/// Payoff of a single terminal price.
pub fn payoff(kind: OptionKind, strike: f64, terminal_price: f64) -> f64 {
    match kind {
        OptionKind::Call => (terminal_price - strike).max(0.0),
        OptionKind::Put => (strike - terminal_price).max(0.0),
    }
}

/// Elementwise payoffs of a set of terminal prices.
pub fn payoffs(kind: OptionKind, strike: f64, terminal_prices: &[f64]) -> GbmResult<Vec<f64>> {
    validate_positive("strike", strike)?;
    Ok(terminal_prices
        .iter()
        .map(|&price| payoff(kind, strike, price))
        .collect())
}
