// scripts/gbm_report.rs
use clap::{Parser, Subcommand};
use gbm_mc::analytics::convergence::run_convergence_study;
use gbm_mc::analytics::distribution::{
    empirical_terminals, theoretical_lognormal_density, LogPriceSummary,
};
use gbm_mc::config::{self, ConvergenceConfig, DistributionConfig, PathsConfig};
use gbm_mc::math_utils::Timer;
use gbm_mc::output;
use gbm_mc::rng;
use gbm_mc::solvers::path::{expected_path, generate_paths};
use gbm_mc::GbmResult;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// GBM simulation and Monte Carlo / Black-Scholes reports as CSV
#[derive(Parser)]
#[command(name = "gbm-report")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML file overriding the default parameters of the chosen report
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write CSV here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulated price paths (path_id,time,price)
    Paths {
        /// Number of paths
        #[arg(long)]
        paths: Option<usize>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the zero-uncertainty curve s0·e^{μt} instead of random paths
        #[arg(long)]
        expected: bool,
    },

    /// Monte Carlo vs Black-Scholes table (n,simulated,analytical,abs_diff,pct_diff)
    Convergence {
        /// Comma-separated trial counts
        #[arg(long, value_delimiter = ',')]
        trials: Option<Vec<usize>>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Lognormal density over the empirical terminal range (x,pdf)
    Distribution {
        /// Number of simulated paths
        #[arg(long)]
        runs: Option<usize>,

        /// Seed of the validation stream
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the empirical samples (run,price,log_price) to this file
        #[arg(long)]
        samples: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!(
        started_at = %chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        "gbm-report"
    );

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_or_default<T: DeserializeOwned + Default>(path: &Option<PathBuf>) -> GbmResult<T> {
    match path {
        Some(path) => config::load_toml(path),
        None => Ok(T::default()),
    }
}

fn open_output(path: &Option<PathBuf>) -> GbmResult<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn run(cli: Cli) -> GbmResult<()> {
    let mut timer = Timer::new();
    timer.start();

    match cli.command {
        Commands::Paths {
            paths,
            seed,
            expected,
        } => {
            let mut cfg: PathsConfig = load_or_default(&cli.config)?;
            if let Some(paths) = paths {
                cfg.paths = paths;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            cfg.validate()?;

            let out = open_output(&cli.output)?;
            if expected {
                let curve = expected_path(cfg.s0, cfg.mu, cfg.horizon_years, cfg.expected_points)?;
                output::write_expected_path_csv(out, &curve)?;
            } else {
                let mut rng = rng::from_optional_seed(cfg.seed);
                let sampled =
                    generate_paths(&cfg.market()?, &cfg.time_spec()?, cfg.paths, &mut rng)?;
                output::write_paths_csv(out, &sampled)?;
            }
        }
        Commands::Convergence { trials, seed } => {
            let mut cfg: ConvergenceConfig = load_or_default(&cli.config)?;
            if let Some(trials) = trials {
                cfg.trial_counts = trials;
            }
            if seed.is_some() {
                cfg.seed = seed;
            }
            cfg.validate()?;

            info!(
                kind = %cfg.kind,
                s0 = cfg.s0,
                r = cfg.r,
                sigma = cfg.sigma,
                strike = cfg.strike,
                maturity_years = cfg.maturity_years,
                "convergence of Monte Carlo and Black-Scholes-Merton prices"
            );
            let mut rng = rng::from_optional_seed(cfg.seed);
            let rows =
                run_convergence_study(&cfg.market()?, &cfg.option()?, &cfg.trial_counts, &mut rng)?;
            output::write_convergence_csv(open_output(&cli.output)?, &rows)?;
        }
        Commands::Distribution {
            runs,
            seed,
            samples,
        } => {
            let mut cfg: DistributionConfig = load_or_default(&cli.config)?;
            if let Some(runs) = runs {
                cfg.runs = runs;
            }
            if let Some(seed) = seed {
                cfg.seed = seed;
            }
            cfg.validate()?;

            let market = cfg.market()?;
            let time_spec = cfg.time_spec()?;
            let mut rng = rng::seeded(cfg.seed);
            let finals = empirical_terminals(&market, &time_spec, cfg.runs, &mut rng)?;

            let summary = LogPriceSummary::from_prices(&finals, &market, cfg.horizon_years)?;
            info!(
                sample_mean = summary.sample_mean,
                theoretical_mean = summary.theoretical_mean,
                sample_variance = summary.sample_variance,
                theoretical_variance = summary.theoretical_variance,
                "log-price moments"
            );

            if let Some(path) = samples {
                output::write_samples_csv(BufWriter::new(File::create(path)?), &finals)?;
            }
            let curve = theoretical_lognormal_density(
                cfg.s0,
                cfg.mu,
                cfg.sigma,
                cfg.horizon_years,
                &finals,
                cfg.support_points,
            )?;
            output::write_density_csv(open_output(&cli.output)?, &curve)?;
        }
    }

    info!(elapsed_ms = timer.elapsed_ms(), "report complete");
    Ok(())
}
