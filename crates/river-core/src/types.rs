//! Core type definitions for the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sex of an organism, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Choose a sex uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Sex::Female => 'F',
            Sex::Male => 'M',
        }
    }
}

/// Species tag. Behavioral differences between the two species are
/// handled by matching on variant pairs rather than virtual dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Fish,
    Bear,
}

impl Species {
    /// Maximum age, inclusive. An organism past this is dead.
    pub fn max_age(&self) -> u32 {
        match self {
            Species::Fish => 5,
            Species::Bear => 9,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Species::Fish => 'F',
            Species::Bear => 'B',
        }
    }
}

/// Per-cell movement choice for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Drift {
    Stay,
    Left,
    Right,
}

impl Drift {
    /// Choose a drift uniformly among the three options.
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3u32) {
            0 => Drift::Stay,
            1 => Drift::Left,
            _ => Drift::Right,
        }
    }
}
