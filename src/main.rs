use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::info;
use serde::Deserialize;
use serde_json::Value;
use workout_rs::{
    config::ResolverConfig, gym::Gym, inventory::normalize_with, requirement::Requirement,
};

#[derive(Parser)]
struct Args {
    /// JSON file describing the equipment on hand.
    #[arg(short, long)]
    inventory: PathBuf,

    /// Only list weights for these equipment tags (e.g. `barbell`, `dumbbells`).
    #[arg(short, long = "equipment")]
    equipment: Vec<String>,

    /// Target weights with a category suffix, e.g. `60b`, `24d`, `16k`.
    #[arg(value_parser = clap::value_parser!(Requirement))]
    requirements: Vec<Requirement>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let raw: Value = serde_json::from_str(
        &fs::read_to_string(&args.inventory)
            .with_context(|| format!("reading {}", args.inventory.display()))?,
    )
    .with_context(|| format!("parsing {}", args.inventory.display()))?;

    let config = match raw.get("config") {
        Some(config) => ResolverConfig::deserialize(config).context("parsing config")?,
        None => ResolverConfig::default(),
    };
    let gym = Gym::with_config(normalize_with(&raw, &config)?, config);

    info!(
        "equipment: {}",
        gym.available_equipment_kinds().iter().join(", ")
    );

    if args.requirements.is_empty() {
        if args.equipment.is_empty() {
            let weights = gym.weights();
            println!("Available weights:");
            for (category, weights) in weights.iter_all().sorted_by_key(|(category, _)| **category) {
                println!("{category}: {}", weights.iter().join(", "));
            }
        } else {
            println!(
                "{}: {}",
                args.equipment.join(", "),
                gym.achievable_weights(args.equipment.as_slice()).iter().join(", ")
            );
        }
        return Ok(());
    }

    for (requirement, loadout) in args.requirements.iter().zip(gym.resolve(&args.requirements)) {
        println!("{requirement}");
        println!("  - {loadout}");
    }

    Ok(())
}
