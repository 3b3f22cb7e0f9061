// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! with `ΔW_n = √Δt · Z_n`, `Z_n ~ N(0,1)` independent. For GBM this is the
//! relative recursion `S_{n+1} = S_n (1 + μΔt + σ√Δt Z_n)`.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size

use crate::models::model::SdeModel;
use crate::rng;
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single Euler-Maruyama step
    ///
    /// Draws `Z ~ N(0,1)` from `rng`, forms `ΔW = √Δt · Z` and lets the model
    /// apply its update to `s` in place.
    pub fn step<M: SdeModel, R: Rng + ?Sized>(
        model: &M,
        s: &mut f64,
        t: f64,
        dt: f64,
        rng: &mut R,
    ) {
        let normal_draw = rng::get_normal_draw(rng);
        model.step_with_dw(s, t, dt, dt.sqrt() * normal_draw);
    }
}
