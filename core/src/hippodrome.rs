//! The race itself — a fixed field of horses advanced as a batch.

use crate::error::{RaceError, RaceResult};
use crate::horse::Horse;
use crate::rng::StepSampler;

/// An ordered, fixed-membership field of at least one horse.
///
/// Membership never changes after construction; only each horse's own
/// distance does. Horses are advanced strictly in field order, so a
/// race driven by a seeded [`crate::RaceRng`] is fully reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct Hippodrome {
    horses: Vec<Horse>,
}

impl Hippodrome {
    /// Build a race over the given field.
    ///
    /// The vector is stored as supplied: same elements, same order, no
    /// copy. Fails on an absent or empty field.
    pub fn new(horses: Option<Vec<Horse>>) -> RaceResult<Self> {
        let horses = horses.ok_or(RaceError::NullHorses)?;
        if horses.is_empty() {
            return Err(RaceError::EmptyHorses);
        }
        Ok(Self { horses })
    }

    /// The field, in the order it was supplied.
    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    /// Advance every horse by exactly one step, in field order.
    pub fn step(&mut self, sampler: &mut dyn StepSampler) {
        for horse in &mut self.horses {
            horse.step(sampler);
        }
        log::debug!("step complete, leader is {}", self.winner().name());
    }

    /// The horse that has covered the most distance so far.
    ///
    /// On equal distances the earlier horse in field order wins: the
    /// scan only replaces the leader on a strictly greater distance.
    /// (`Iterator::max_by` keeps the last maximum, which is the wrong
    /// tie-break here, so the loop is written out.)
    pub fn winner(&self) -> &Horse {
        let mut leader = &self.horses[0];
        for horse in &self.horses[1..] {
            if horse.distance() > leader.distance() {
                leader = horse;
            }
        }
        leader
    }
}
