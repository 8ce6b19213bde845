//! Plain-text results report and CSV export of angle sweeps

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::Serialize;

use super::spreadsheet::Labels;
use crate::constituents::PlyInput;
use crate::error::PlyResult;
use crate::results::{round_to, AngleSweep, PlyReport};

/// Wall-clock time spent in each stage of a run
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Timings {
    pub extraction: Duration,
    pub computation: Duration,
    pub plotting: Duration,
    pub writing: Duration,
}

impl Timings {
    pub fn total(&self) -> Duration {
        self.extraction + self.computation + self.plotting + self.writing
    }
}

const RULE: &str = "----------------------";

fn table(out: &mut String, title: &str, headers: &[&str], values: &[f64]) {
    let widths: Vec<usize> = headers
        .iter()
        .zip(values)
        .map(|(h, v)| h.len().max(v.to_string().len()))
        .collect();

    let _ = write!(out, "{:<16}", "");
    for (h, w) in headers.iter().zip(&widths) {
        let _ = write!(out, "  {:>w$}", h, w = *w);
    }
    let _ = write!(out, "\n{:<16}", title);
    for (v, w) in values.iter().zip(&widths) {
        let _ = write!(out, "  {:>w$}", v, w = *w);
    }
    out.push('\n');
}

/// Render the full results report
pub fn render_report(
    input: &PlyInput,
    report: &PlyReport,
    labels: &Labels,
    timings: Option<&Timings>,
) -> String {
    let mut out = String::new();
    let ud = report.unidirectional.rounded();
    let mat = report.mat.rounded();
    let fabric = report.fabric.rounded();
    let masses = report.masses.rounded();

    let _ = writeln!(out, "{RULE}\n-------------RESULTS\n{RULE}\n\n");
    out.push_str("Homogenized mechanical properties of the composite ply.\n");
    out.push_str("The micromechanics estimates predict the ply constants from the\n");
    out.push_str("mechanical properties of each constituent.\n\n\n\n");

    let _ = writeln!(out, "-----Input data\n{RULE}\n");
    let _ = writeln!(
        out,
        "Fiber volume fraction: {} %\n",
        (report.vf * 100.0).round()
    );
    let _ = writeln!(
        out,
        "{:<16}  {:>10}  {:>10}  {:>10}  {:>6}  {:>8}  {:>6}",
        "Component", "El", "Et", "Glt", "Nult", "Rho", "Msf"
    );
    for (name, c) in labels.components.iter().zip([&input.matrix, &input.reinforcement]) {
        let _ = writeln!(
            out,
            "{:<16}  {:>10}  {:>10}  {:>10}  {:>6}  {:>8}  {:>6}",
            name, c.el, c.et, c.glt, c.nult, c.rho, c.msf
        );
    }

    let _ = writeln!(out, "\n\n\n-----Output data\n{RULE}");
    let _ = writeln!(out, "Ply thickness: {} mm", round_to(report.thickness, 3));
    let _ = writeln!(
        out,
        "Fiber mass: {} g for {} m²",
        masses.fiber, report.surface
    );
    let _ = writeln!(out, "Resin mass: {} g for {} m²", masses.resin, report.surface);
    let _ = writeln!(out, "Ply density: {} kg/m3\n\n", round_to(report.density, 1));

    out.push_str("--> UD homogenization\n");
    table(
        &mut out,
        "UD results",
        &["El", "Et", "Glt", "Gtt", "Nult", "Nutl", "Nutt"],
        &[ud.el, ud.et, ud.glt, ud.gtt, ud.nult, ud.nutl, ud.nutt],
    );

    out.push_str("\n\n--> Mat homogenization\n");
    table(&mut out, "Mat results", &["E", "G", "Nu"], &[mat.e, mat.g, mat.nu]);

    out.push_str("\n\n--> Fabric homogenization\n");
    let _ = writeln!(
        out,
        "Balance: {} = {}, {} = {}",
        labels.balance[0], input.balance.warp, labels.balance[1], input.balance.weft
    );
    table(
        &mut out,
        "Fabric results",
        &["El", "Et", "Glt", "Nult"],
        &[fabric.el, fabric.et, fabric.glt, fabric.nult],
    );

    if let Some(t) = timings {
        let _ = writeln!(out, "\n\n\n-----Information\n{RULE}\n");
        for (name, d) in [
            ("data extraction", t.extraction),
            ("computation", t.computation),
            ("plotting", t.plotting),
            ("writing", t.writing),
            ("total", t.total()),
        ] {
            let _ = writeln!(out, "{:<16}: {:.3} seconds", name, d.as_secs_f64());
        }
    }

    out
}

/// Write the rendered report to `path`
pub fn write_report<P: AsRef<Path>>(path: P, text: &str) -> PlyResult<()> {
    fs::write(path.as_ref(), text)?;
    info!("report written to {}", path.as_ref().display());
    Ok(())
}

/// Write the sweep as `angle,ex,ey,gxy,nuxy` rows
pub fn write_sweep_csv<P: AsRef<Path>>(path: P, sweep: &AngleSweep) -> PlyResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(["angle", "ex", "ey", "gxy", "nuxy"])?;
    for s in sweep.samples() {
        writer.serialize((s.angle, s.ex, s.ey, s.gxy, s.nuxy))?;
    }
    writer.flush()?;
    info!("{} sweep rows written to {}", sweep.len(), path.as_ref().display());
    Ok(())
}
