//! Headless lure simulator.
//!
//! Arms one decoy in the middle of a region, scatters pursuers around it and
//! logs how close they get to the spawned wanderer.
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use decoy_steering::decoy::tile_at;
use decoy_steering::rng::seeded;
use decoy_steering::{
    init_logging, Region, RegionId, Simulation, SteeringConfig, SteeringController,
};
use glam::Vec2;
use log::info;
use rand::Rng;

/// Simulate pursuers chasing a lure wanderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Seed for every random draw
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,
    /// Number of pursuers
    #[arg(short, long, default_value_t = 4)]
    pursuers: usize,
    /// Region width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Region height in pixels
    #[arg(long, default_value_t = 960.0)]
    height: f32,
    /// JSON file overriding steering parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config.as_deref().map_or_else(
        || Ok(SteeringConfig::default()),
        |path| {
            SteeringConfig::load(path).with_context(|| format!("loading {}", path.display()))
        },
    )?;

    ensure!(
        [args.width, args.height].iter().all(|v| v.is_finite() && *v > 0.0),
        "region must have a positive finite size, got {}x{}",
        args.width,
        args.height
    );
    let size = Vec2::new(args.width, args.height);
    let id = RegionId(0);
    let mut region = Region::new(id, size);
    let tile = tile_at(size / 2.0);
    region
        .arm_decoy(tile)
        .with_context(|| format!("arming decoy on tile {tile}"))?;

    let mut sim = Simulation::new(SteeringController::new(config));
    sim.insert_region(region);

    let mut rng = seeded(args.seed);
    for _ in 0..args.pursuers {
        let start = Vec2::new(rng.gen_range(0.0..size.x), rng.gen_range(0.0..size.y));
        sim.add_pursuer(id, start);
    }

    for _ in 0..args.ticks {
        sim.tick(&mut rng);
    }

    let region = sim.region(id).context("region vanished")?;
    for (index, pursuer) in sim.pursuers().iter().enumerate() {
        let position = pursuer.agent.position;
        let Some(quarry) = region.nearest_wanderer(position) else {
            info!("Pursuer {index} at {position:?} has nothing to chase");
            continue;
        };
        info!(
            "Pursuer {index} at {position:?} is {:.1}px from {}",
            position.distance(quarry.position()),
            quarry.handle
        );
    }
    info!("Simulated {} ticks", sim.tick_count());
    Ok(())
}
