//! Four-panel SVG figure of apparent constants versus orientation

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::error::PlyResult;
use crate::results::AngleSweep;

const WIDTH: f64 = 1440.0;
const HEIGHT: f64 = 640.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;
const X_TICK_STEP: f64 = 45.0;
const Y_TICKS: usize = 5;

/// Horizontal axis snapped to multiples of 45 degrees around the swept angles
#[derive(Debug, Clone, Copy, PartialEq)]
struct AngleAxis {
    lo: f64,
    hi: f64,
    tick_step: f64,
}

impl AngleAxis {
    fn from_angles(angles: &[i32]) -> Self {
        let (Some(&min), Some(&max)) = (angles.iter().min(), angles.iter().max()) else {
            return Self {
                lo: -90.0,
                hi: 90.0,
                tick_step: X_TICK_STEP,
            };
        };
        let lo = (min as f64 / X_TICK_STEP).floor() * X_TICK_STEP;
        let mut hi = (max as f64 / X_TICK_STEP).ceil() * X_TICK_STEP;
        if hi <= lo {
            hi = lo + X_TICK_STEP;
        }
        let tick_step = if hi - lo > 360.0 {
            2.0 * X_TICK_STEP
        } else {
            X_TICK_STEP
        };
        Self { lo, hi, tick_step }
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        let count = ((self.hi - self.lo) / self.tick_step).round() as usize;
        (0..=count).map(move |i| self.lo + i as f64 * self.tick_step)
    }
}

struct Panel<'a> {
    label: &'a str,
    values: &'a [f64],
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON * hi.abs().max(1.0) {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        return (lo - pad, hi + pad);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}

fn draw_panel(out: &mut String, angles: &[i32], axis: &AngleAxis, panel: &Panel) {
    let Panel {
        label,
        values,
        x0,
        y0,
        w,
        h,
    } = *panel;
    let (lo, hi) = value_range(values);
    let sx = |angle: f64| x0 + (angle - axis.lo) / (axis.hi - axis.lo) * w;
    let sy = |v: f64| y0 + h - (v - lo) / (hi - lo) * h;

    let _ = writeln!(
        out,
        r#"<rect x="{x0:.1}" y="{y0:.1}" width="{w:.1}" height="{h:.1}" fill="white" stroke="black"/>"#
    );

    for tick in axis.ticks() {
        let x = sx(tick);
        let _ = writeln!(
            out,
            r##"<line x1="{x:.1}" y1="{y0:.1}" x2="{x:.1}" y2="{:.1}" stroke="#cccccc" stroke-dasharray="4 3"/>"##,
            y0 + h
        );
        let _ = writeln!(
            out,
            r#"<text x="{x:.1}" y="{:.1}" font-size="11" text-anchor="middle">{tick}</text>"#,
            y0 + h + 14.0
        );
    }

    for i in 0..=Y_TICKS {
        let v = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
        let y = sy(v);
        let _ = writeln!(
            out,
            r##"<line x1="{x0:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#cccccc" stroke-dasharray="4 3"/>"##,
            x0 + w
        );
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-size="11" text-anchor="end">{}</text>"#,
            x0 - 6.0,
            y + 4.0,
            format_tick(v)
        );
    }

    let points: Vec<String> = angles
        .iter()
        .zip(values)
        .filter(|(_, v)| v.is_finite())
        .map(|(&a, &v)| format!("{:.2},{:.2}", sx(a as f64), sy(v)))
        .collect();
    let _ = writeln!(
        out,
        r##"<polyline points="{}" fill="none" stroke="#1f77b4" stroke-width="1"/>"##,
        points.join(" ")
    );

    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle">angle (°)</text>"#,
        x0 + w / 2.0,
        y0 + h + 32.0
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" transform="rotate(-90 {:.1} {:.1})">{label}</text>"#,
        x0 - 60.0,
        y0 + h / 2.0,
        x0 - 60.0,
        y0 + h / 2.0
    );
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
    }
}

/// Render Ex, Ey, Gxy and Nuxy against angle as a 2x2 SVG figure
pub fn render_svg(sweep: &AngleSweep) -> String {
    let cell_w = WIDTH / 2.0;
    let cell_h = (HEIGHT - MARGIN_TOP) / 2.0;
    let series: [(&str, &[f64]); 4] = [
        ("Ex (MPa)", &sweep.ex),
        ("Ey (MPa)", &sweep.ey),
        ("Gxy (MPa)", &sweep.gxy),
        ("Nuxy", &sweep.nuxy),
    ];

    let axis = AngleAxis::from_angles(&sweep.angles);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        out,
        r#"<text x="{:.1}" y="28" font-size="16" text-anchor="middle">Ply properties versus orientation angle</text>"#,
        WIDTH / 2.0
    );

    for (i, (label, values)) in series.into_iter().enumerate() {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let panel = Panel {
            label,
            values,
            x0: col * cell_w + MARGIN_LEFT,
            y0: MARGIN_TOP + row * cell_h + 10.0,
            w: cell_w - MARGIN_LEFT - MARGIN_RIGHT,
            h: cell_h - MARGIN_BOTTOM - 10.0,
        };
        draw_panel(&mut out, &sweep.angles, &axis, &panel);
    }

    out.push_str("</svg>\n");
    out
}

/// Render the sweep and write it to `path`
pub fn write_svg<P: AsRef<Path>>(path: P, sweep: &AngleSweep) -> PlyResult<()> {
    fs::write(path.as_ref(), render_svg(sweep))?;
    info!("plot written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{angle_sweep, SweepOptions};
    use crate::constituents::PlyInput;
    use crate::ply::Ply;

    #[test]
    fn test_svg_has_four_panels() {
        let ply = Ply::new(PlyInput::glass_epoxy()).unwrap();
        let sweep = angle_sweep(&ply, &SweepOptions::default()).unwrap();
        let svg = render_svg(&sweep);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 4);
        assert_eq!(svg.matches("<rect").count(), 4);
        for label in ["Ex (MPa)", "Ey (MPa)", "Gxy (MPa)", "Nuxy"] {
            assert!(svg.contains(label), "missing {}", label);
        }
        assert_eq!(svg.matches(">-45</text>").count(), 4);
    }

    #[test]
    fn test_axis_follows_custom_sweep() {
        let ply = Ply::new(PlyInput::glass_epoxy()).unwrap();
        let options = SweepOptions::default().range(0, 360).with_step(5);
        let sweep = angle_sweep(&ply, &options).unwrap();
        let svg = render_svg(&sweep);

        assert_eq!(svg.matches(">360</text>").count(), 4);
        assert_eq!(svg.matches(">-45</text>").count(), 0);

        // Every plotted x coordinate stays inside its panel
        let panel_right = WIDTH - MARGIN_RIGHT;
        for line in svg.lines().filter(|l| l.starts_with("<polyline")) {
            let points = line.split('"').nth(1).unwrap();
            for point in points.split(' ') {
                let x: f64 = point.split(',').next().unwrap().parse().unwrap();
                assert!((MARGIN_LEFT - 0.01..=panel_right + 0.01).contains(&x), "x = {}", x);
            }
        }
    }

    #[test]
    fn test_axis_snaps_to_45_degrees() {
        let default = AngleAxis::from_angles(&(-90..90).collect::<Vec<_>>());
        assert_eq!((default.lo, default.hi), (-90.0, 90.0));
        assert_eq!(default.ticks().count(), 5);

        let single = AngleAxis::from_angles(&[45]);
        assert_eq!((single.lo, single.hi), (45.0, 90.0));

        let wide = AngleAxis::from_angles(&[-360, 359]);
        assert_eq!(wide.tick_step, 90.0);
        assert_eq!(wide.ticks().last(), Some(360.0));
    }

    #[test]
    fn test_flat_series_range() {
        let (lo, hi) = value_range(&[2.0, 2.0, 2.0]);
        assert!(lo < 2.0 && hi > 2.0);
        assert_eq!(value_range(&[]), (0.0, 1.0));
    }
}
