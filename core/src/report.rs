//! Serializable race standings for outer surfaces (the runner's
//! `--json` output).

use crate::hippodrome::Hippodrome;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub place: usize,
    pub name: String,
    pub speed: f64,
    pub distance: f64,
}

/// A point-in-time snapshot of a race: seed, steps run so far, the
/// field sorted by distance descending, and the winner's name.
#[derive(Debug, Clone, Serialize)]
pub struct RaceReport {
    pub seed: u64,
    pub steps: u64,
    pub winner: String,
    pub standings: Vec<Standing>,
}

impl RaceReport {
    pub fn from_race(race: &Hippodrome, seed: u64, steps: u64) -> Self {
        let mut ranked: Vec<_> = race.horses().iter().collect();
        // Stable sort, so equal distances keep field order — the same
        // tie-break winner() uses.
        ranked.sort_by(|a, b| b.distance().total_cmp(&a.distance()));

        let standings = ranked
            .iter()
            .enumerate()
            .map(|(i, horse)| Standing {
                place: i + 1,
                name: horse.name().to_string(),
                speed: horse.speed(),
                distance: horse.distance(),
            })
            .collect();

        Self {
            seed,
            steps,
            winner: race.winner().name().to_string(),
            standings,
        }
    }
}
