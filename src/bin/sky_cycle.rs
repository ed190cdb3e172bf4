//! Sky Cycle Inspector
//!
//! Builds the constellation schedule for a seed and prints what is visible on
//! each day, either as text or JSON.

use std::path::PathBuf;

use astral_cycle::constellation::ConstellationRegistry;
use astral_cycle::core::error::Result;
use astral_cycle::core::{Calendar, CycleSlot, DimensionId, SkyConfig};
use astral_cycle::sky::{DimensionInfo, SkyRegistry, StaticEnvironment};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Sky Cycle Inspector - print the constellation schedule of a world seed
#[derive(Parser, Debug)]
#[command(name = "sky_cycle")]
#[command(about = "Print which constellations are visible on each day for a world seed")]
struct Args {
    /// World seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Constellation registry file
    #[arg(long, default_value = "data/constellations.toml")]
    registry: PathBuf,

    /// Optional sky config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// First day to print
    #[arg(long, default_value_t = 0)]
    start_day: u64,

    /// Number of days to print
    #[arg(long, default_value_t = 8)]
    days: u64,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DayReport {
    day: i64,
    slot: u8,
    visible: Vec<VisibleConstellation>,
}

#[derive(Serialize)]
struct VisibleConstellation {
    name: String,
    tier: String,
    distribution: f32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astral_cycle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SkyConfig::load_file(path)?,
        None => SkyConfig::default(),
    };
    let constellations = ConstellationRegistry::load_file(&args.registry)?;
    let day_length = config.day_length;
    let mut sky = SkyRegistry::new(constellations.into(), config);

    let dimension = DimensionId(0);
    let mut env = StaticEnvironment::new().with_dimension(dimension, DimensionInfo::new(args.seed));
    let mut calendar = Calendar::at(args.start_day.saturating_mul(day_length), day_length);

    let mut reports = Vec::with_capacity(args.days as usize);
    for _ in 0..args.days {
        env.set_world_time(dimension, calendar.world_time());
        sky.update(&env, dimension);
        reports.push(report_day(&sky, dimension, calendar.day_index()));
        calendar.advance_day();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Seed {} ({} constellations)", args.seed, sky.constellations().len());
        for report in &reports {
            println!("\nDay {} (slot {})", report.day, report.slot);
            if report.visible.is_empty() {
                println!("  (nothing visible)");
            }
            for entry in &report.visible {
                println!("  {:<12} {:<6} {:.3}", entry.name, entry.tier, entry.distribution);
            }
        }
    }

    Ok(())
}

fn report_day(sky: &SkyRegistry, dimension: DimensionId, day: i64) -> DayReport {
    let constellations = sky.constellations();
    let visible = sky
        .visible(dimension)
        .into_iter()
        .filter_map(|id| constellations.get(id))
        .map(|c| VisibleConstellation {
            name: c.name.clone(),
            tier: format!("{:?}", c.tier).to_lowercase(),
            distribution: sky.distribution(dimension, c.id),
        })
        .collect();

    DayReport {
        day,
        slot: CycleSlot::from_day(day).value(),
        visible,
    }
}
