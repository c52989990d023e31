use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use lineq::prelude::*;

mod provenance;

#[derive(Parser)]
#[command(name = "lineq")]
#[command(about = "Two-point line solver: slope, intercept, classification, distance")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// The two input points, shared by `solve` and `figure`.
#[derive(Args)]
struct PointArgs {
    #[arg(long, allow_hyphen_values = true)]
    x1: f64,
    #[arg(long, allow_hyphen_values = true)]
    y1: f64,
    #[arg(long, allow_hyphen_values = true)]
    x2: f64,
    #[arg(long, allow_hyphen_values = true)]
    y2: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Solve the line through two points and print a report
    Solve {
        #[command(flatten)]
        points: PointArgs,
        /// Emit a JSON document instead of text
        #[arg(long)]
        json: bool,
    },
    /// Sample the line across a padded window and write an (x, y) CSV table
    Figure {
        #[command(flatten)]
        points: PointArgs,
        #[arg(long)]
        out: String,
        /// Number of samples across the window
        #[arg(long, default_value_t = DEFAULT_SAMPLES)]
        samples: usize,
        /// Window padding around the two points, in axis units
        #[arg(long, default_value_t = DEFAULT_PAD)]
        pad: f64,
    },
    /// Solve reproducible random point pairs and write a CSV table
    Batch {
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Points are drawn uniformly from [-extent, extent]²
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve { points, json } => solve(points, json),
        Action::Figure {
            points,
            out,
            samples,
            pad,
        } => figure(points, out, samples, pad),
        Action::Batch {
            count,
            seed,
            extent,
            out,
        } => batch(count, seed, extent, out),
    }
}

/// Validate the boundary: the core is total over finite reals, so NaN and
/// infinity are rejected here and never reach it.
fn validated_points(points: &PointArgs) -> Result<(Vec2<f64>, Vec2<f64>)> {
    for (name, v) in [
        ("x1", points.x1),
        ("y1", points.y1),
        ("x2", points.x2),
        ("y2", points.y2),
    ] {
        if !v.is_finite() {
            bail!("{name} must be a finite number, got {v}");
        }
    }
    Ok((
        Vec2::new(points.x1, points.y1),
        Vec2::new(points.x2, points.y2),
    ))
}

#[derive(serde::Serialize)]
struct SolveReport {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    slope: Option<f64>,
    vertical: bool,
    coincident: bool,
    intercept: Option<f64>,
    classification: String,
    distance: f64,
    equation: String,
}

fn solve(points: PointArgs, json: bool) -> Result<()> {
    let (p, q) = validated_points(&points)?;
    let d = solve_line(p, q);
    let eq = equation(d.slope, p);
    tracing::info!(slope = ?d.slope, class = %d.class, distance = d.distance, "solve");

    if json {
        let report = SolveReport {
            x1: p.x,
            y1: p.y,
            x2: q.x,
            y2: q.y,
            slope: d.slope.finite(),
            vertical: d.slope.is_vertical(),
            coincident: d.is_degenerate(),
            intercept: d.intercept,
            classification: d.class.to_string(),
            distance: d.distance,
            equation: eq,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if d.is_degenerate() {
        println!("coincident points: the segment has zero length and no direction");
    } else if let Some(m) = d.slope.finite() {
        println!("slope (m): {m:.4}");
        println!("equation: {eq}");
        println!("interpretation: the line is {}", d.class);
    } else {
        println!("vertical line: the two points share an x-coordinate");
        println!("equation: {eq}");
    }
    println!("distance between points: {:.4}", d.distance);
    Ok(())
}

fn figure(points: PointArgs, out: String, samples: usize, pad: f64) -> Result<()> {
    let (p, q) = validated_points(&points)?;
    let window = PlotWindow::around(p, q, pad);
    let pts = sample_line(p, q, &window, samples);
    let xs: Vec<f64> = pts.iter().map(|v| v.x).collect();
    let ys: Vec<f64> = pts.iter().map(|v| v.y).collect();
    let mut df = df!("x" => &xs, "y" => &ys)?;
    write_csv(&out, &mut df)?;
    tracing::info!(rows = df.height(), out, "figure");

    let d = solve_line(p, q);
    provenance::write_sidecar(
        &out,
        json!({
            "x1": p.x, "y1": p.y, "x2": q.x, "y2": q.y,
            "samples": samples,
            "pad": pad,
            "equation": equation_with_precision(d.slope, p, 2),
        }),
    )?;
    Ok(())
}

fn batch(count: u64, seed: u64, extent: f64, out: String) -> Result<()> {
    let bounds = Bounds2::centered(extent);
    let n = count as usize;
    let mut x1s = Vec::with_capacity(n);
    let mut y1s = Vec::with_capacity(n);
    let mut x2s = Vec::with_capacity(n);
    let mut y2s = Vec::with_capacity(n);
    let mut slopes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut intercepts: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut classes: Vec<String> = Vec::with_capacity(n);
    let mut distances = Vec::with_capacity(n);
    let mut equations: Vec<String> = Vec::with_capacity(n);

    for index in 0..count {
        let (p, q) = draw_point_pair(bounds, ReplayToken { seed, index });
        let d = solve_line(p, q);
        x1s.push(p.x);
        y1s.push(p.y);
        x2s.push(q.x);
        y2s.push(q.y);
        slopes.push(d.slope.finite());
        intercepts.push(d.intercept);
        classes.push(d.class.to_string());
        distances.push(d.distance);
        equations.push(equation(d.slope, p));
    }

    let mut df = df!(
        "x1" => &x1s,
        "y1" => &y1s,
        "x2" => &x2s,
        "y2" => &y2s,
        "slope" => &slopes,
        "intercept" => &intercepts,
        "class" => &classes,
        "distance" => &distances,
        "equation" => &equations
    )?;
    write_csv(&out, &mut df)?;
    tracing::info!(rows = df.height(), out, "batch");

    provenance::write_sidecar(
        &out,
        json!({
            "count": count,
            "seed": seed,
            "extent": extent,
        }),
    )?;
    Ok(())
}

fn write_csv(out: &str, df: &mut DataFrame) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = fs::File::create(out_path)?;
    CsvWriter::new(&mut file).finish(df)?;
    Ok(())
}
