// src/output.rs
//! CSV emitters for the reporting layer. The numeric core never formats;
//! these turn its sequences into tables on any `io::Write`.

use crate::analytics::convergence::ConvergenceRow;
use crate::analytics::distribution::DensityCurve;
use crate::error::GbmResult;
use crate::solvers::path::SamplePath;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PathRecord {
    path_id: usize,
    time: f64,
    price: f64,
}

#[derive(Serialize)]
struct ExpectedRecord {
    time: f64,
    expected: f64,
}

#[derive(Serialize)]
struct DensityRecord {
    x: f64,
    pdf: f64,
}

#[derive(Serialize)]
struct SampleRecord {
    run: usize,
    price: f64,
    log_price: f64,
}

pub fn write_paths_csv<W: Write>(writer: W, paths: &[SamplePath]) -> GbmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (path_id, path) in paths.iter().enumerate() {
        for (time, price) in path.iter() {
            wtr.serialize(PathRecord {
                path_id,
                time,
                price,
            })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_expected_path_csv<W: Write>(writer: W, expected: &SamplePath) -> GbmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (time, value) in expected.iter() {
        wtr.serialize(ExpectedRecord {
            time,
            expected: value,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_density_csv<W: Write>(writer: W, curve: &DensityCurve) -> GbmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (&x, &pdf) in curve.x.iter().zip(&curve.pdf) {
        wtr.serialize(DensityRecord { x, pdf })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_samples_csv<W: Write>(writer: W, prices: &[f64]) -> GbmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (run, &price) in prices.iter().enumerate() {
        wtr.serialize(SampleRecord {
            run,
            price,
            log_price: price.ln(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Columns: `n,simulated,analytical,abs_diff,pct_diff`.
pub fn write_convergence_csv<W: Write>(writer: W, rows: &[ConvergenceRow]) -> GbmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
