//! Circular one-dimensional grid of organism cells.

use rand::Rng;
use river_core::{Error, Organism, Result, Sex, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Population counts for one river snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub fish: usize,
    pub bears: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.fish + self.bears
    }
}

/// A circular river of fixed length. Each cell holds at most one
/// organism; index -1 wraps to the last cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct River {
    cells: Vec<Option<Organism>>,
}

impl River {
    /// Generate a random river of the given length. Each cell is
    /// independently empty, a random-age fish, or a random-age bear
    /// with probability 1/3 each.
    pub fn random(length: usize, rng: &mut impl Rng) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidLength(length));
        }
        let cells = (0..length)
            .map(|_| match rng.gen_range(0..3u32) {
                0 => None,
                1 => Some(Organism::random(Species::Fish, rng)),
                _ => Some(Organism::random(Species::Bear, rng)),
            })
            .collect();
        Ok(Self { cells })
    }

    /// Build a river from explicit cells, for scenario setup.
    pub fn with_cells(cells: Vec<Option<Organism>>) -> Result<Self> {
        if cells.is_empty() {
            return Err(Error::InvalidLength(0));
        }
        Ok(Self { cells })
    }

    /// Number of cells, fixed for the river's lifetime.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Circular index resolution: -1 wraps to `len - 1`, `len` to 0.
    pub fn wrap(&self, index: isize) -> usize {
        let n = self.cells.len() as isize;
        (((index % n) + n) % n) as usize
    }

    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.cells[index].as_ref()
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Organism> {
        self.cells[index].as_mut()
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    pub(crate) fn put(&mut self, index: usize, organism: Organism) {
        self.cells[index] = Some(organism);
    }

    /// Number of unoccupied cells, computed by scanning.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Population counts by species.
    pub fn census(&self) -> Census {
        let mut census = Census { fish: 0, bears: 0 };
        for organism in self.cells.iter().flatten() {
            match organism.species {
                Species::Fish => census.fish += 1,
                Species::Bear => census.bears += 1,
            }
        }
        census
    }

    /// Place a newborn of the given species, with uniformly random sex,
    /// into a uniformly random empty cell. Returns false without
    /// mutating anything when the river is full.
    pub fn spawn_newborn(&mut self, species: Species, rng: &mut impl Rng) -> bool {
        let empty = self.empty_count();
        if empty == 0 {
            return false;
        }
        let target = rng.gen_range(0..empty);
        let slot = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .nth(target)
            .map(|(i, _)| i)
            .expect("target is within the empty-cell count");
        self.cells[slot] = Some(Organism::newborn(species, Sex::random(rng)));
        true
    }
}

impl fmt::Display for River {
    /// Snapshot format: cells left to right separated by one space,
    /// `---` for an empty cell, the organism code otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match cell {
                None => write!(f, "---")?,
                Some(organism) => write!(f, "{organism}")?,
            }
        }
        Ok(())
    }
}
