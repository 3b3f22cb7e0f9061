// src/models/model.rs

/// Coefficients of a one-dimensional SDE `dX_t = a(X_t, t) dt + b(X_t, t) dW_t`.
pub trait SdeModel {
    fn drift(&self, s: f64, t: f64) -> f64;
    fn diffusion(&self, s: f64, t: f64) -> f64;

    /// Advance `s_current` by one Euler-Maruyama step given the Wiener increment `dw`.
    fn step_with_dw(&self, s_current: &mut f64, t_current: f64, dt: f64, dw: f64) {
        *s_current += self.drift(*s_current, t_current) * dt
            + self.diffusion(*s_current, t_current) * dw;
    }
}
