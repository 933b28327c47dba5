//! Deviation survey to wellbore path converter.
//!
//! Reads a delimited survey listing (MD, inclination, azimuth), normalizes
//! it, integrates the 3-D path, and writes the result as CSV or JSON.
//!
//! Usage:
//!   cargo run --bin survey-to-path -- data/survey.csv
//!   cargo run --bin survey-to-path -- data/survey.csv --method aa --td 3200
//!   cargo run --bin survey-to-path -- data/survey.csv --json -o path.json

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wellpath::{compute_position, DeviationSurvey, PathMethod, WellConfig};

/// Deviation survey to wellbore path converter.
#[derive(Parser)]
#[command(name = "survey-to-path")]
struct Args {
    /// Path to the survey listing (delimited text, skippable header).
    survey: PathBuf,

    /// Path computation method: average_angle | balanced_tangential |
    /// minimum_curvature (or aa | bt | mc). Overrides the config file.
    #[arg(long, short)]
    method: Option<String>,

    /// Target total depth; extends or clips the last station.
    /// Overrides the config file.
    #[arg(long)]
    td: Option<f64>,

    /// Emit JSON instead of CSV.
    #[arg(long)]
    json: bool,

    /// Output path. Defaults to stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Config file path. Defaults to the standard search order
    /// ($WELLPATH_CONFIG, ./wellpath.toml, built-in defaults).
    #[arg(long, env = "WELLPATH_CONFIG")]
    config: Option<PathBuf>,
}

/// One output row: the station and its computed position.
#[derive(Serialize)]
struct PathRow {
    md: f64,
    inc: f64,
    azi: f64,
    northing: f64,
    easting: f64,
    tvd: f64,
}

#[derive(Serialize)]
struct PathReport {
    well: String,
    method: String,
    stations: Vec<PathRow>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => WellConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WellConfig::load(),
    };

    let method = match &args.method {
        Some(name) => name.parse::<PathMethod>()?,
        None => config.solver.method,
    };
    let target_td = args.td.or(config.solver.target_td);

    let raw = wellpath::load_survey(&args.survey)
        .with_context(|| format!("loading survey {}", args.survey.display()))?;
    info!(stations = raw.len(), "survey loaded");

    let survey = DeviationSurvey::normalize(&raw, target_td).context("normalizing survey")?;
    let log = compute_position(&survey, method);

    let rows: Vec<PathRow> = survey
        .stations()
        .iter()
        .zip(log.points())
        .map(|(s, p)| PathRow {
            md: s.md,
            inc: s.inc,
            azi: s.azi,
            northing: p.northing,
            easting: p.easting,
            tvd: p.tvd,
        })
        .collect();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    if args.json {
        let report = PathReport {
            well: config.well.name,
            method: method.to_string(),
            stations: rows,
        };
        serde_json::to_writer_pretty(&mut out, &report).context("writing JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "md,inc,azi,northing,easting,tvd")?;
        for r in &rows {
            writeln!(
                out,
                "{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
                r.md, r.inc, r.azi, r.northing, r.easting, r.tvd
            )?;
        }
    }
    out.flush()?;

    if let Some(last) = log.last_point() {
        info!(
            method = %method,
            stations = log.len(),
            tvd = format!("{:.1}", last.tvd),
            northing = format!("{:.1}", last.northing),
            easting = format!("{:.1}", last.easting),
            "path computed"
        );
    }

    Ok(())
}
