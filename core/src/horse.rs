//! A single race entrant.

use crate::error::{RaceError, RaceResult};
use crate::rng::StepSampler;
use serde::Serialize;

/// Lower bound of the step multiplier range.
pub const STEP_MIN: f64 = 0.2;
/// Upper bound of the step multiplier range.
pub const STEP_MAX: f64 = 0.9;

/// An entrant with a name, a speed, and the distance covered so far.
///
/// Name and speed are fixed at construction; distance only ever grows,
/// and only through [`Horse::step`]. A `Horse` that exists is valid —
/// every constructor rejects bad input before the value comes into
/// existence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Horse {
    name: String,
    speed: f64,
    distance: f64,
}

impl Horse {
    /// Create a horse at the starting line (distance 0).
    ///
    /// The name is `Option` because absence is a distinct failure from
    /// blankness, with its own message.
    pub fn new(name: Option<String>, speed: f64) -> RaceResult<Self> {
        Self::with_distance(name, speed, 0.0)
    }

    /// Create a horse some way into the race.
    pub fn with_distance(name: Option<String>, speed: f64, distance: f64) -> RaceResult<Self> {
        let name = name.ok_or(RaceError::NullName)?;
        if name.trim().is_empty() {
            return Err(RaceError::BlankName);
        }
        if speed < 0.0 {
            return Err(RaceError::NegativeSpeed);
        }
        if distance < 0.0 {
            return Err(RaceError::NegativeDistance);
        }
        // Stored verbatim — surrounding whitespace is preserved.
        Ok(Self {
            name,
            speed,
            distance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Advance one step: draw a multiplier `r` from [STEP_MIN, STEP_MAX]
    /// and add `speed * r` to the distance. This is the entire update
    /// rule — no bounds, no collisions, no finish line.
    pub fn step(&mut self, sampler: &mut dyn StepSampler) {
        let r = sampler.sample(STEP_MIN, STEP_MAX);
        self.distance += self.speed * r;
        log::debug!(
            "{} stepped with r={r:.4}, distance now {:.4}",
            self.name,
            self.distance
        );
    }
}
