//! Organism state and lifecycle.

use crate::types::{Sex, Species};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength table for bears, indexed by age 0..=9.
const BEAR_STRENGTH: [u32; 10] = [1, 2, 3, 4, 5, 4, 3, 2, 1, 0];

/// Strength of a bear at the given age. Ages outside the table map to 0.
/// Fish have no strength concept; this is only consulted when two bears meet.
pub fn bear_strength(age: u32) -> u32 {
    BEAR_STRENGTH.get(age as usize).copied().unwrap_or(0)
}

/// An organism occupying one river cell.
///
/// Age stays within `0..=species.max_age()` at every observable point;
/// aging past the maximum removes the organism from the river instead
/// of ever representing an out-of-range age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub species: Species,
    pub sex: Sex,
    age: u32,
}

impl Organism {
    /// A newborn of the given species, age 0.
    pub fn newborn(species: Species, sex: Sex) -> Self {
        Self {
            species,
            sex,
            age: 0,
        }
    }

    /// An organism at an explicit age, for scenario setup.
    pub fn with_age(species: Species, sex: Sex, age: u32) -> Self {
        debug_assert!(age <= species.max_age());
        Self { species, sex, age }
    }

    /// An organism with uniformly random sex and age in `[0, max_age]`,
    /// used for the initial river population.
    pub fn random(species: Species, rng: &mut impl Rng) -> Self {
        Self {
            species,
            sex: Sex::random(rng),
            age: rng.gen_range(0..=species.max_age()),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// True iff the organism has reached its species maximum age.
    pub fn at_max_age(&self) -> bool {
        self.age == self.species.max_age()
    }

    /// Ages the organism by one year. Returns true if it survives the
    /// tick; false (age unchanged) signals death by old age, and the
    /// caller must clear the cell.
    pub fn grow_older(&mut self) -> bool {
        if self.age < self.species.max_age() {
            self.age += 1;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Organism {
    /// Three-field code: species letter, sex letter, unpadded age.
    /// A 7-year-old female bear renders as `BF7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.species.letter(), self.sex.letter(), self.age)
    }
}
