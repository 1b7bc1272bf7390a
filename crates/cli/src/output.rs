//! Output sinks: bracketed tuple text, JSON reports, and point files.

use anyhow::{Context, Result};
use graham::geom2::{contains_eps, signed_area};
use graham::Vec2;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// `[(x1, y1), (x2, y2), ...]`; `[]` when empty.
pub fn format_tuples(points: &[Vec2<f64>]) -> String {
    let body = points
        .iter()
        .map(|p| format!("({}, {})", format_coord(p.x), format_coord(p.y)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

/// Shortest round-trip digits; exponent form (`1e+20`, `2.5e-07`) when the
/// decimal exponent is below -4 or at least 16, plain decimal otherwise.
pub fn format_coord(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v}");
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    if exp < -4 || exp >= 16 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        format!("{v}")
    }
}

/// Point file in the text input format (count line, then one `x y` pair per line).
pub fn format_point_file(points: &[Vec2<f64>]) -> String {
    let mut out = String::with_capacity(16 + points.len() * 24);
    let _ = writeln!(out, "{}", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

/// Machine-readable hull result.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HullReport {
    pub input: String,
    pub n_input: usize,
    /// Hull vertices in sweep output order.
    pub hull: Vec<[f64; 2]>,
    pub area: f64,
}

impl HullReport {
    pub fn new(input: &Path, n_input: usize, hull: &[Vec2<f64>]) -> Self {
        Self {
            input: input.to_string_lossy().into_owned(),
            n_input,
            hull: hull.iter().map(|p| [p.x, p.y]).collect(),
            area: signed_area(hull).abs(),
        }
    }
}

/// Write `report` as pretty JSON, creating parent directories.
pub fn write_report(path: &Path, report: &HullReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Input points lying outside `hull` (beyond a slack scaled to the coordinate magnitude).
pub fn points_outside(points: &[Vec2<f64>], hull: &[Vec2<f64>]) -> Vec<Vec2<f64>> {
    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0_f64, f64::max);
    let eps = 1e-9 * scale * scale;
    points
        .iter()
        .filter(|p| !contains_eps(hull, **p, eps))
        .copied()
        .collect()
}
