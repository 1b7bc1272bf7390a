use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use graham::sample::{draw_cloud, CloudCfg, PointCount, ReplayToken};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod output;
mod provenance;

use input::{read_points, InputFormat};
use output::{format_point_file, format_tuples, points_outside, write_report, HullReport};

#[derive(Parser)]
#[command(name = "graham")]
#[command(about = "Convex hulls of 2D point sets (Graham scan)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a point file and print it to stdout
    Run(RunArgs),
    /// Write a reproducible random point file in the text format
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct RunArgs {
    /// Point file: `n` followed by `n` pairs, or a table with `x`,`y` columns
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,
    /// Print a JSON report instead of the tuple list
    #[arg(long)]
    json: bool,
    /// Also write the JSON report (plus provenance sidecar) to this path
    #[arg(long)]
    out: Option<PathBuf>,
    /// Fail if any input point lies outside the computed hull
    #[arg(long)]
    verify: bool,
}

#[derive(Args)]
struct SampleArgs {
    #[arg(long)]
    out: PathBuf,
    /// Points on the outer circle (all hull vertices)
    #[arg(long, default_value_t = 12)]
    ring: usize,
    /// Points strictly inside
    #[arg(long, default_value_t = 100)]
    interior: usize,
    #[arg(long, default_value_t = 1000.0)]
    radius: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(args),
        Action::Sample(args) => sample(args),
        Action::Report => report(),
    }
}

fn run(args: RunArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), format = ?args.format, "run");
    let points = read_points(&args.input, args.format)?;
    let n_input = points.len();

    let start = Instant::now();
    let hull = graham::hull_of(&points);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(n_input, n_hull = hull.len(), elapsed_ms, "hull");
    if hull.is_empty() {
        tracing::warn!(n_input, "fewer than three points: hull is empty");
    }

    if args.verify && !hull.is_empty() {
        let outside = points_outside(&points, &hull);
        if !outside.is_empty() {
            bail!(
                "{} input point(s) outside the hull, first {:?}",
                outside.len(),
                outside[0]
            );
        }
        tracing::info!(n_input, "containment verified");
    }

    let report = HullReport::new(&args.input, n_input, &hull);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_tuples(&hull));
    }

    if let Some(out) = args.out {
        write_report(&out, &report)?;
        let prov = provenance::write_sidecar(
            &out,
            serde_json::json!({
                "input": report.input,
                "n_input": n_input,
                "n_hull": hull.len(),
            }),
        )?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote report");
    }
    Ok(())
}

fn sample(args: SampleArgs) -> Result<()> {
    tracing::info!(
        out = %args.out.display(),
        ring = args.ring,
        interior = args.interior,
        seed = args.seed,
        index = args.index,
        "sample"
    );
    if !(args.radius.is_finite() && args.radius > 0.0) {
        bail!("radius must be positive and finite, got {}", args.radius);
    }
    let cfg = CloudCfg {
        ring: PointCount::Fixed(args.ring),
        interior: PointCount::Fixed(args.interior),
        radius: args.radius,
        ..CloudCfg::default()
    };
    let tok = ReplayToken {
        seed: args.seed,
        index: args.index,
    };
    let points = draw_cloud(cfg, tok);
    write_text(&args.out, &format_point_file(&points))?;
    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::summary())?);
    Ok(())
}
