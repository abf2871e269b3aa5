//! Hippodrome construction, fan-out, and winner contract tests.

use hippodrome_core::rng::StepSampler;
use hippodrome_core::{Hippodrome, Horse, RaceError};

/// Sampler that counts draws — the stand-in for a mock: one step per
/// horse means one draw per horse.
struct CountingSampler {
    draws: u64,
}

impl StepSampler for CountingSampler {
    fn sample(&mut self, _lo: f64, _hi: f64) -> f64 {
        self.draws += 1;
        0.5
    }
}

fn horse(name: &str, speed: f64) -> Horse {
    Horse::new(Some(name.to_string()), speed).unwrap()
}

fn horse_at(name: &str, speed: f64, distance: f64) -> Horse {
    Horse::with_distance(Some(name.to_string()), speed, distance).unwrap()
}

#[test]
fn null_field_is_rejected() {
    let err = Hippodrome::new(None).unwrap_err();
    assert_eq!(err, RaceError::NullHorses);
    assert_eq!(err.to_string(), "Horses cannot be null.");
}

#[test]
fn empty_field_is_rejected() {
    let err = Hippodrome::new(Some(Vec::new())).unwrap_err();
    assert_eq!(err, RaceError::EmptyHorses);
    assert_eq!(err.to_string(), "Horses cannot be empty.");
}

#[test]
fn horses_returns_the_field_as_supplied() {
    let field: Vec<Horse> = (1..=30).map(|i| horse(&format!("Horse_{i}"), 0.1)).collect();

    let race = Hippodrome::new(Some(field.clone())).unwrap();

    assert_eq!(race.horses(), field.as_slice(),
        "field must come back element-for-element in supplied order");
}

#[test]
fn step_advances_every_horse_exactly_once() {
    let field: Vec<Horse> = (1..=50).map(|i| horse(&format!("Horse_{i}"), 1.0)).collect();
    let mut race = Hippodrome::new(Some(field)).unwrap();
    let mut sampler = CountingSampler { draws: 0 };

    race.step(&mut sampler);

    assert_eq!(sampler.draws, 50, "expected one draw per horse");
    for h in race.horses() {
        assert_eq!(h.distance(), 0.5, "every horse must have taken its step");
    }
}

#[test]
fn winner_is_the_horse_with_max_distance() {
    let race = Hippodrome::new(Some(vec![
        horse_at("ValidName1", 0.1, 0.1),
        horse_at("ValidName2", 0.1, 0.4),
        horse_at("ValidName3", 0.1, 0.2),
    ]))
    .unwrap();

    assert_eq!(race.winner().name(), "ValidName2");
    assert_eq!(race.winner().distance(), 0.4);
}

#[test]
fn winner_tie_goes_to_the_earlier_gate() {
    let race = Hippodrome::new(Some(vec![
        horse_at("First", 0.1, 0.4),
        horse_at("Second", 0.1, 0.4),
        horse_at("Third", 0.1, 0.1),
    ]))
    .unwrap();

    assert_eq!(race.winner().name(), "First");
}

#[test]
fn single_horse_wins_its_own_race() {
    let race = Hippodrome::new(Some(vec![horse("Solo", 1.0)])).unwrap();
    assert_eq!(race.winner().name(), "Solo");
}

#[test]
fn faster_horse_leads_after_equal_steps() {
    let mut race = Hippodrome::new(Some(vec![
        horse("Slow", 1.0),
        horse("Fast", 2.0),
    ]))
    .unwrap();
    let mut sampler = CountingSampler { draws: 0 };

    for _ in 0..10 {
        race.step(&mut sampler);
    }

    assert_eq!(race.winner().name(), "Fast");
}
