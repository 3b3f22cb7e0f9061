pub mod bs_analytic;
pub mod convergence;
pub mod distribution;
