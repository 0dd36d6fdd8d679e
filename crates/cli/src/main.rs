use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use anglehull::angle_hull::CuttingStrategy;
use anglehull::geometry::{Angle, Point};
use anglehull::rand::{circle, scatter, ReplayToken, ScatterCfg};
use anglehull::{build_hull, generate_angle_hull};

mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex and angle hull queries over point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Write the hull polygon here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit the arcs of an angle hull as JSON
    AngleHull {
        #[arg(long)]
        input: PathBuf,
        /// Aperture angle in degrees, strictly between 0 and 180
        #[arg(long)]
        alpha_deg: f64,
        /// Emit the trimmed arcs instead of the overlapping ones
        #[arg(long)]
        cut: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate demo points
    Gen {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 1000)]
        width: i32,
        #[arg(long, default_value_t = 1000)]
        height: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Place the points on a circle instead of scattering them
        #[arg(long)]
        on_circle: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out } => hull(input, out),
        Action::AngleHull {
            input,
            alpha_deg,
            cut,
            out,
        } => angle_hull(input, alpha_deg, cut, out),
        Action::Gen {
            count,
            width,
            height,
            seed,
            on_circle,
            out,
        } => generate(count, width, height, seed, on_circle, out),
    }
}

fn hull(input: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let points = io::read_points(&input)?;
    let hull = build_hull(&points);
    let vertices = hull.points();
    tracing::info!(
        input = %input.display(),
        points = points.len(),
        vertices = vertices.len(),
        "hull"
    );
    emit_points(&vertices, out)
}

fn angle_hull(input: PathBuf, alpha_deg: f64, cut: bool, out: Option<PathBuf>) -> Result<()> {
    let points = io::read_points(&input)?;
    let hull = build_hull(&points);
    let strategy = if cut {
        CuttingStrategy::Cut
    } else {
        CuttingStrategy::Uncut
    };
    let angle_hull = generate_angle_hull(&hull, Angle::from_deg(alpha_deg))
        .context("angle hull generation failed")?;
    let arcs: Vec<serde_json::Value> = angle_hull
        .map_with(
            |arc| {
                serde_json::json!({
                    "center": { "x": arc.center().x, "y": arc.center().y },
                    "radius": arc.radius(),
                    "start_rad": arc.start().rad(),
                    "extent_rad": arc.extent().rad(),
                })
            },
            strategy,
        )
        .collect();
    tracing::info!(
        input = %input.display(),
        alpha_deg,
        arcs = arcs.len(),
        cut,
        "angle_hull"
    );
    let body = serde_json::to_string_pretty(&serde_json::Value::Array(arcs))?;
    match out {
        Some(path) => {
            std::fs::write(&path, body).with_context(|| format!("cannot write {}", path.display()))
        }
        None => {
            println!("{body}");
            Ok(())
        }
    }
}

fn generate(
    count: usize,
    width: i32,
    height: i32,
    seed: u64,
    on_circle: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let tok = ReplayToken { seed, index: 0 };
    let points = if on_circle {
        let radius = f64::from(width.min(height)) / 2.5;
        circle(count, Point::new(width / 2, height / 2), radius, tok)
    } else {
        scatter(
            ScatterCfg {
                count,
                width,
                height,
            },
            tok,
        )
    };
    tracing::info!(count = points.len(), seed, on_circle, "gen");
    emit_points(&points, out)
}

fn emit_points(points: &[Point], out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => io::write_points(&path, points),
        None => {
            for p in points {
                println!("{} {}", p.x, p.y);
            }
            Ok(())
        }
    }
}
