//! Point sources: whitespace text (`n` then `n` coordinate pairs) or `x`/`y` tables.
//!
//! Everything that can be wrong with an input is rejected here, so the hull
//! code only ever sees finite, already-parsed points.

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use graham::Vec2;
use polars::prelude::*;
use std::path::Path;

/// Requested input format; `Auto` picks by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Auto,
    Text,
    Csv,
    Parquet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SourceKind {
    Text,
    Csv,
    Parquet,
}

impl InputFormat {
    fn resolve(self, path: &Path) -> SourceKind {
        match self {
            InputFormat::Text => SourceKind::Text,
            InputFormat::Csv => SourceKind::Csv,
            InputFormat::Parquet => SourceKind::Parquet,
            InputFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceKind::Csv,
                Some(ext) if ext.eq_ignore_ascii_case("parquet") => SourceKind::Parquet,
                _ => SourceKind::Text,
            },
        }
    }
}

/// Read all points from `path`.
pub fn read_points(path: &Path, format: InputFormat) -> Result<Vec<Vec2<f64>>> {
    std::fs::metadata(path)
        .with_context(|| format!("cannot open point file {}", path.display()))?;
    let kind = format.resolve(path);
    tracing::debug!(path = %path.display(), ?kind, "reading points");
    match kind {
        SourceKind::Text => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot open point file {}", path.display()))?;
            parse_points(&text).with_context(|| format!("parsing {}", path.display()))
        }
        SourceKind::Csv => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?;
            read_table(lf).with_context(|| format!("reading csv {}", path.display()))
        }
        SourceKind::Parquet => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            read_table(lf).with_context(|| format!("reading parquet {}", path.display()))
        }
    }
}

/// Parse the text format: a point count followed by that many `x y` pairs.
///
/// Tokens may be separated by any whitespace. Tokens after the declared points
/// are ignored with a warning.
pub fn parse_points(text: &str) -> Result<Vec<Vec2<f64>>> {
    let mut tokens = text.split_whitespace();
    let count = tokens
        .next()
        .ok_or_else(|| anyhow!("empty input: expected a point count"))?;
    let n: usize = count
        .parse()
        .with_context(|| format!("invalid point count {count:?}"))?;
    let mut points = Vec::with_capacity(n.min(1 << 20));
    for i in 0..n {
        let x = next_coord(&mut tokens, i, "x")?;
        let y = next_coord(&mut tokens, i, "y")?;
        points.push(Vec2::new(x, y));
    }
    let extra = tokens.count();
    if extra > 0 {
        tracing::warn!(extra, declared = n, "ignoring trailing tokens");
    }
    Ok(points)
}

fn next_coord<'a, I>(tokens: &mut I, index: usize, axis: &str) -> Result<f64>
where
    I: Iterator<Item = &'a str>,
{
    let tok = tokens
        .next()
        .ok_or_else(|| anyhow!("point {index}: missing {axis} coordinate"))?;
    let v: f64 = tok
        .parse()
        .with_context(|| format!("point {index}: invalid {axis} coordinate {tok:?}"))?;
    if !v.is_finite() {
        bail!("point {index}: non-finite {axis} coordinate {tok:?}");
    }
    Ok(v)
}

fn read_table(lf: LazyFrame) -> Result<Vec<Vec2<f64>>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), "table loaded");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(Vec2::new(x, y)),
            (Some(_), Some(_)) => Err(anyhow!("row {row}: non-finite coordinate")),
            _ => Err(anyhow!("row {row}: missing x or y")),
        })
        .collect()
}
