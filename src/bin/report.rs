//! Ply report CLI - constituent table in, results report and plots out

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use ply_homogenization::io::{self, Labels, Timings};
use ply_homogenization::prelude::*;

#[derive(Parser)]
#[command(name = "ply-report")]
#[command(version, about = "Homogenized mechanical properties of a composite ply")]
struct Cli {
    /// Constituent table (.xlsx, .csv) or JSON ply input (.json)
    #[arg(short, long, default_value = "renfort_matrice.xlsx")]
    input: PathBuf,

    /// Text report path
    #[arg(short, long, default_value = "resultats.txt")]
    output: PathBuf,

    /// SVG plot of the angle sweep
    #[arg(short, long, default_value = "proprietes.svg")]
    plot: PathBuf,

    /// Optional CSV export of the angle sweep
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Ply surface in m² used for the constituent masses
    #[arg(short, long, default_value_t = 1.0)]
    surface: f64,

    /// Angle increment of the sweep in degrees
    #[arg(long, default_value_t = 1)]
    step: i32,
}

fn load_input(path: &Path) -> anyhow::Result<(PlyInput, Labels)> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let text = std::fs::read_to_string(path)?;
        let input: PlyInput = serde_json::from_str(&text)?;
        return Ok((input, Labels::default()));
    }

    let table = io::load_table(path)?;
    Ok((PlyInput::try_from(&table.columns)?, table.labels))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut timings = Timings::default();

    let started = Instant::now();
    let (input, labels) = load_input(&cli.input)
        .with_context(|| format!("reading constituents from {}", cli.input.display()))?;
    timings.extraction = started.elapsed();

    let started = Instant::now();
    let ply = Ply::new(input.clone()).context("invalid constituent data")?;
    let report = ply.report(cli.surface).context("homogenization failed")?;
    let options = SweepOptions::default().with_step(cli.step);
    let sweep = angle_sweep(&ply, &options).context("angle sweep failed")?;
    timings.computation = started.elapsed();

    let started = Instant::now();
    io::write_svg(&cli.plot, &sweep)
        .with_context(|| format!("writing plot to {}", cli.plot.display()))?;
    timings.plotting = started.elapsed();

    let started = Instant::now();
    if let Some(csv) = &cli.csv {
        io::write_sweep_csv(csv, &sweep)
            .with_context(|| format!("writing sweep to {}", csv.display()))?;
    }
    // Excludes the report file itself
    timings.writing = started.elapsed();
    let text = io::render_report(&input, &report, &labels, Some(&timings));
    io::write_report(&cli.output, &text)
        .with_context(|| format!("writing report to {}", cli.output.display()))?;

    let ud = report.unidirectional.rounded();
    println!(
        "UD ply: El={} Et={} Glt={} MPa, Nult={} (Vf = {}%)",
        ud.el,
        ud.et,
        ud.glt,
        ud.nult,
        report.vf * 100.0
    );
    println!(
        "Report: {}  Plot: {}",
        cli.output.display(),
        cli.plot.display()
    );
    Ok(())
}
