//! Deterministic horse-name generation from a curated list.
//!
//! Same seed = same field. Used by the runner and by tests that need
//! a populated field without caring who is in it.

use crate::error::RaceResult;
use crate::horse::Horse;
use crate::rng::{RaceRng, StepSampler};

/// Pick a name deterministically from the curated list.
pub fn random_name(rng: &mut RaceRng) -> String {
    let names = name_list();
    let index = rng.next_u64_below(names.len() as u64) as usize;
    names[index].to_string()
}

/// Generate a field of `n` horses with distinct numbered names and
/// speeds drawn uniformly from `[min_speed, max_speed]`.
///
/// Names are suffixed with their gate number so a large field never
/// produces duplicate entries.
pub fn random_field(n: usize, min_speed: f64, max_speed: f64, rng: &mut RaceRng) -> RaceResult<Vec<Horse>> {
    let mut field = Vec::with_capacity(n);
    for gate in 1..=n {
        let name = format!("{} #{gate}", random_name(rng));
        let speed = rng.sample(min_speed, max_speed);
        field.push(Horse::new(Some(name), speed)?);
    }
    Ok(field)
}

/// Curated list of horse names.
fn name_list() -> &'static [&'static str] {
    &[
        "Bucephalus",
        "Secretariat",
        "Seabiscuit",
        "Man o' War",
        "Zenyatta",
        "Frankel",
        "Phar Lap",
        "Red Rum",
        "Shergar",
        "Eclipse",
        "Citation",
        "Kelso",
        "Ruffian",
        "Affirmed",
        "Seattle Slew",
        "Northern Dancer",
        "Nijinsky",
        "Kincsem",
        "Winx",
        "Makybe Diva",
        "Desert Orchid",
        "Arkle",
        "Black Caviar",
        "American Pharoah",
        "Justify",
        "Enable",
        "Galileo",
        "Sea The Stars",
        "Brigadier Gerard",
        "Mill Reef",
        "Dancing Brave",
        "Sunday Silence",
    ]
}
