use anyhow::Context;
use bridge::server::{default_bind_address, ReportBridge};
use clap::Parser;
use generator::terrain::TerrainConfig;
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use trenchcore::math::PrecisionHelper;
use trenchcore::Direction;
use workflow::config::{JobConfig, JobOverrides};
use workflow::export::{render, write_report, ReportFormat};
use workflow::runner::Runner;

mod bridge;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Trench excavation profile driver")]
struct Args {
    /// Load a trench job from YAML
    #[arg(long)]
    job: Option<PathBuf>,
    /// Distance between the two reference points (m)
    #[arg(long)]
    distance: Option<f64>,
    /// Elevation of reference point A (m)
    #[arg(long, allow_hyphen_values = true)]
    height_a: Option<f64>,
    /// Elevation of reference point B (m)
    #[arg(long, allow_hyphen_values = true)]
    height_b: Option<f64>,
    /// Spacing between control points (m)
    #[arg(long)]
    step: Option<f64>,
    /// Trench slope in percent, replacing the slope between A and B
    #[arg(long, allow_hyphen_values = true)]
    slope: Option<f64>,
    /// Reference point distances are measured from: a or b
    #[arg(long)]
    direction: Option<Direction>,
    /// Measured surface elevations, comma separated, in control-point order
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    surface: Option<Vec<f64>>,
    /// Fill unmeasured control points with a synthetic terrain
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    /// Seed for the synthetic terrain
    #[arg(long)]
    seed: Option<u64>,
    /// Only list the control points to survey
    #[arg(long, default_value_t = false)]
    plan: bool,
    /// Write the report to this file (.json paths are always JSON)
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    format: ReportFormat,
    /// Keep the HTTP report bridge alive for incoming jobs
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long, default_value_t = default_bind_address())]
    bind: SocketAddr,
}

impl Args {
    fn overrides(&self) -> JobOverrides {
        JobOverrides {
            total_distance: self.distance,
            height_a: self.height_a,
            height_b: self.height_b,
            step: self.step,
            slope_override_percent: self.slope,
            direction: self.direction,
            surface: self.surface.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut job = if let Some(path) = &args.job {
        JobConfig::load(path)?
    } else {
        JobConfig::default()
    };
    job.apply_overrides(&args.overrides());
    if args.synthetic || args.seed.is_some() {
        let terrain = job.terrain.get_or_insert_with(TerrainConfig::default);
        if let Some(seed) = args.seed {
            terrain.seed = seed;
        }
    }

    let runner = Runner::new(job.clone());

    if args.plan {
        let points = runner.plan()?;
        println!(
            "{} control points, {}:",
            points.len(),
            job.trench.direction
        );
        for (index, point) in points.iter().enumerate() {
            println!(
                "  #{:<3} {}m from {}",
                index,
                PrecisionHelper::display(point.distance),
                job.trench.direction.label()
            );
        }
        return Ok(());
    }

    let result = runner.execute()?;
    info!(
        "computed {} profile values from {} control points",
        result.results.len(),
        result.points.len()
    );
    print!("{}", render(&result.report, args.format)?);

    if let Some(path) = &args.report {
        write_report(&result.report, args.format, path)?;
        println!("Report written to {}", path.display());
    }

    if args.serve {
        let bridge = ReportBridge::new();
        bridge.publish(&result.report)?;
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for the report bridge")?;
        runtime.block_on(bridge.serve(args.bind))?;
    }

    Ok(())
}
