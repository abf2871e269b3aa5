//! hippodrome-core — a deterministic toy horse-race simulation.
//!
//! Two components: [`horse::Horse`] holds a name, a speed, and the
//! distance it has covered so far; [`hippodrome::Hippodrome`] holds a
//! fixed field of horses, advances them all by one randomized step at
//! a time, and reports the current leader.
//!
//! RULE: Nothing in this crate calls a platform RNG. Every random step
//! multiplier flows through the [`rng::StepSampler`] seam, so a race
//! is fully reproducible from a single seed and tests can pin the
//! exact value a step uses.

pub mod error;
pub mod hippodrome;
pub mod horse;
pub mod names;
pub mod report;
pub mod rng;

pub use error::{RaceError, RaceResult};
pub use hippodrome::Hippodrome;
pub use horse::Horse;
pub use rng::{RaceRng, StepSampler};
