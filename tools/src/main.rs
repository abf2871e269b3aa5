//! race-runner: headless runner for the hippodrome simulation.
//!
//! Usage:
//!   race-runner --seed 42 --steps 20 --horses 8
//!   race-runner --seed 42 --steps 20 --horses 8 --json

use anyhow::Result;
use hippodrome_core::{names, report::RaceReport, Hippodrome, RaceRng};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let steps = parse_arg(&args, "--steps", 20u64);
    let horses = parse_arg(&args, "--horses", 8usize);
    let json = args.iter().any(|a| a == "--json");

    if !json {
        println!("Hippodrome — race-runner");
        println!("  seed:   {seed}");
        println!("  steps:  {steps}");
        println!("  horses: {horses}");
        println!();
    }

    let mut rng = RaceRng::seed_from(seed);
    let field = names::random_field(horses, 1.0, 3.0, &mut rng)?;
    let mut race = Hippodrome::new(Some(field))?;

    for step in 1..=steps {
        race.step(&mut rng);
        log::info!("step {step}/{steps}: {} leads at {:.3}",
            race.winner().name(), race.winner().distance());
    }

    let report = RaceReport::from_race(&race, seed, steps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_standings(&report);
    }

    Ok(())
}

fn print_standings(report: &RaceReport) {
    println!("Final standings after {} steps:", report.steps);
    for standing in &report.standings {
        println!(
            "  {:>2}. {:<24} speed {:>5.2}  distance {:>8.3}",
            standing.place, standing.name, standing.speed, standing.distance
        );
    }
    println!();
    println!("Winner: {}", report.winner);
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
