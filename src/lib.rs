//! # gbm-mc: GBM Simulation and Monte Carlo Option Pricing
//!
//! Simulates asset prices under Geometric Brownian Motion, prices European
//! options by plain Monte Carlo and checks the results against the
//! Black-Scholes-Merton closed form.
//!
//! ## Components
//!
//! - **Path generation** (`solvers::path`): Euler-Maruyama sample paths on a
//!   daily-style time grid
//! - **Terminal sampling** (`mc::sampler`): exact lognormal draws at maturity
//! - **Payoffs** (`mc::payoffs`): European call/put
//! - **Monte Carlo pricing** (`mc::mc_engine`): sample → payoff → discount
//! - **Black-Scholes** (`analytics::bs_analytic`): closed-form reference
//! - **Convergence study** (`analytics::convergence`): MC vs BSM over trial counts
//! - **Distribution check** (`analytics::distribution`): Euler terminals vs the
//!   lognormal density
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_mc::analytics::bs_analytic::bs_price;
//! use gbm_mc::mc::mc_engine::mc_price;
//! use gbm_mc::mc::payoffs::{OptionKind, OptionSpec};
//! use gbm_mc::models::gbm::MarketParameters;
//! use gbm_mc::rng;
//!
//! let market = MarketParameters::risk_neutral(100.0, 0.3, 0.04).unwrap();
//! let option = OptionSpec::new(OptionKind::Call, 110.0, 0.5).unwrap();
//!
//! let mut rng = rng::seeded(42);
//! let estimate = mc_price(&market, &option, 100_000, &mut rng).unwrap();
//! let exact = bs_price(100.0, 0.3, 0.5, 0.04, OptionKind::Call, 110.0).unwrap();
//! assert!((estimate.value - exact).abs() < 0.2);
//! ```
//!
//! Every sampling function takes its random source explicitly; use
//! `rng::seeded` for reproducible runs and `rng::from_entropy` otherwise.

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;
pub mod solvers;

pub use error::{GbmError, GbmResult};
