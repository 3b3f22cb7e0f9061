// tests/integration_test.rs
use gbm_mc::analytics::bs_analytic;
use gbm_mc::analytics::convergence::run_convergence_study;
use gbm_mc::mc::mc_engine::mc_price;
use gbm_mc::mc::payoffs::{OptionKind, OptionSpec};
use gbm_mc::models::gbm::MarketParameters;
use gbm_mc::rng;
use gbm_mc::GbmError;

const S0: f64 = 100.0;
const SIGMA: f64 = 0.3;
const T: f64 = 0.5;
const R: f64 = 0.04;
const K: f64 = 110.0;

fn market() -> MarketParameters {
    MarketParameters::risk_neutral(S0, SIGMA, R).expect("valid market")
}

#[test]
fn test_bsm_reference_scenario() {
    let call = bs_analytic::bs_price(S0, SIGMA, T, R, OptionKind::Call, K).unwrap();
    let put = bs_analytic::bs_price(S0, SIGMA, T, R, OptionKind::Put, K).unwrap();

    println!("\nBSM call: {}, put: {}", call, put);

    assert!((call - 5.4115).abs() < 1e-2, "call = {}", call);
    assert!((put - 13.2333).abs() < 1e-2, "put = {}", put);
    assert!((call - put - (S0 - K * (-R * T).exp())).abs() < 1e-10);
}

#[test]
fn test_bs_mc_vs_analytic_ten_million_paths() {
    let option = OptionSpec::new(OptionKind::Call, K, T).unwrap();
    let analytic_price = bs_analytic::bs_price(S0, SIGMA, T, R, OptionKind::Call, K).unwrap();

    let estimate = mc_price(&market(), &option, 10_000_000, &mut rng::seeded(42))
        .expect("Valid configuration");
    let abs_error = (estimate.value - analytic_price).abs();

    println!("\nMC Price: {}", estimate.value);
    println!("Analytic Price: {}", analytic_price);
    println!("Standard error: {:?}", estimate.standard_error);

    assert!(abs_error < 0.05, "MC price {} too far from {}", estimate.value, analytic_price);
}

#[test]
fn test_put_mc_vs_analytic() {
    let option = OptionSpec::new(OptionKind::Put, K, T).unwrap();
    let analytic_price = bs_analytic::bs_price(S0, SIGMA, T, R, OptionKind::Put, K).unwrap();

    let estimate = mc_price(&market(), &option, 1_000_000, &mut rng::seeded(7)).unwrap();
    let rel_error = (estimate.value - analytic_price).abs() / analytic_price;

    assert!(rel_error < 0.01, "Relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_mc_error_shrinks_with_sample_count() {
    let option = OptionSpec::new(OptionKind::Call, K, T).unwrap();
    let analytic_price = bs_analytic::bs_price(S0, SIGMA, T, R, OptionKind::Call, K).unwrap();
    let mut rng = rng::seeded(2024);

    let trials = 20;
    let mut small_err = 0.0;
    let mut large_err = 0.0;
    for _ in 0..trials {
        small_err += (mc_price(&market(), &option, 1_000, &mut rng).unwrap().value - analytic_price).abs();
        large_err += (mc_price(&market(), &option, 100_000, &mut rng).unwrap().value - analytic_price).abs();
    }
    small_err /= trials as f64;
    large_err /= trials as f64;

    println!("\nMean |error| n=1e3: {}, n=1e5: {}", small_err, large_err);
    assert!(large_err < small_err);

    let big = mc_price(&market(), &option, 1_000_000, &mut rng::seeded(42)).unwrap();
    let rel_error = (big.value - analytic_price).abs() / analytic_price;
    assert!(rel_error < 0.01, "Relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_convergence_study_table() {
    let option = OptionSpec::new(OptionKind::Call, K, T).unwrap();
    let counts = [100, 1_000, 10_000, 100_000, 1_000_000];
    let rows = run_convergence_study(&market(), &option, &counts, &mut rng::seeded(11)).unwrap();

    assert_eq!(rows.len(), counts.len());
    for (row, &n) in rows.iter().zip(&counts) {
        assert_eq!(row.n, n);
        assert!((row.abs_diff - (row.analytical - row.simulated)).abs() < 1e-12);
        assert!((row.pct_diff - row.abs_diff * 100.0 / row.analytical).abs() < 1e-9);
    }

    let last = rows.last().unwrap();
    assert!(last.pct_diff.abs() < 1.0, "pct_diff at 1e6 = {}", last.pct_diff);
}

#[test]
fn test_degenerate_and_invalid_inputs_are_distinguishable() {
    let flat = MarketParameters::risk_neutral(S0, 0.0, R).unwrap();
    let option = OptionSpec::new(OptionKind::Call, K, T).unwrap();

    let err = run_convergence_study(&flat, &option, &[100], &mut rng::seeded(1)).unwrap_err();
    assert!(matches!(err, GbmError::NumericalDegenerate { .. }));

    let err = run_convergence_study(&market(), &option, &[0], &mut rng::seeded(1)).unwrap_err();
    assert!(err.is_invalid_input());

    assert!(matches!(
        OptionKind::from_mode(3),
        Err(GbmError::UnsupportedOptionKind { .. })
    ));
}
