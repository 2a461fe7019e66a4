//! Step engine driving the river through discrete cycles.
//!
//! One cycle is two strictly ordered phases: every organism ages first
//! (removing those past their species lifespan), then cells are scanned
//! left to right and each surviving organism drifts, fights, or
//! reproduces exactly once.

use crate::grid::River;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use river_core::{bear_strength, Drift, Result, RiverConfig, Species};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

pub struct Simulation {
    river: River,
    rng: ChaCha8Rng,
    config: RiverConfig,
    cycle: u64,
}

impl Simulation {
    /// Validates the config, seeds the generator, and populates a
    /// random river.
    pub fn new(config: RiverConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let river = River::random(config.length, &mut rng)?;
        Ok(Self {
            river,
            rng,
            config,
            cycle: 0,
        })
    }

    pub fn river(&self) -> &River {
        &self.river
    }

    /// Cycles completed so far.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Execute one full cycle: aging, then drift/interaction.
    pub fn step(&mut self) {
        age_phase(&mut self.river);
        drift_phase(&mut self.river, &mut self.rng);
        self.cycle += 1;

        let census = self.river.census();
        debug!(
            cycle = self.cycle,
            fish = census.fish,
            bears = census.bears,
            empty = self.river.empty_count(),
            "cycle complete"
        );
    }

    /// Run the configured number of cycles and report the final state.
    pub fn run(&mut self) -> SimulationSummary {
        info!(
            length = self.config.length,
            cycles = self.config.cycles,
            seed = self.config.seed,
            "starting river simulation"
        );

        for _ in 0..self.config.cycles {
            self.step();
        }

        let census = self.river.census();
        let summary = SimulationSummary {
            cycles: self.cycle,
            fish: census.fish,
            bears: census.bears,
            empty: self.river.empty_count(),
        };
        info!(
            cycles = summary.cycles,
            fish = summary.fish,
            bears = summary.bears,
            empty = summary.empty,
            "simulation finished"
        );
        summary
    }
}

/// Final population counts after a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub cycles: u64,
    pub fish: usize,
    pub bears: usize,
    pub empty: usize,
}

/// Phase 1: every occupied cell ages exactly once. An organism already
/// at its species maximum dies and its cell is cleared.
fn age_phase(river: &mut River) {
    for i in 0..river.len() {
        let survived = match river.cell_mut(i) {
            Some(organism) => organism.grow_older(),
            None => continue,
        };
        if !survived {
            trace!(cell = i, "removed at max age");
            river.clear(i);
        }
    }
}

/// Phase 2: left-to-right scan. Cells that became a move destination
/// earlier in this cycle are marked in `resolved` and skipped, so no
/// organism acts twice within one cycle.
fn drift_phase<R: Rng>(river: &mut River, rng: &mut R) {
    let mut resolved = vec![false; river.len()];
    for i in 0..river.len() {
        if resolved[i] || river.get(i).is_none() {
            continue;
        }
        let drift = Drift::random(rng);
        resolve_drift(river, i, drift, &mut resolved, rng);
    }
}

/// Applies one cell's drift decision. Move destinations are marked in
/// `resolved`; a death in place marks nothing.
fn resolve_drift<R: Rng>(
    river: &mut River,
    i: usize,
    drift: Drift,
    resolved: &mut [bool],
    rng: &mut R,
) {
    let target = match drift {
        Drift::Stay => return,
        Drift::Left => river.wrap(i as isize - 1),
        Drift::Right => river.wrap(i as isize + 1),
    };
    // A single-cell river wraps onto itself; nothing to resolve.
    if target == i {
        return;
    }

    let current = match river.get(i) {
        Some(organism) => *organism,
        None => return,
    };

    match river.get(target).copied() {
        None => {
            river.clear(i);
            river.put(target, current);
            resolved[target] = true;
        }
        Some(neighbor) if current.species != neighbor.species => {
            // Bear meets fish: the fish dies, whichever of them moved.
            if current.species == Species::Bear {
                river.clear(i);
                river.put(target, current);
                resolved[target] = true;
                trace!(cell = i, target, "bear took a fish's cell");
            } else {
                river.clear(i);
                trace!(cell = i, target, "fish drifted into a bear");
            }
        }
        Some(neighbor) if current.sex == neighbor.sex => {
            // Same species, same sex. Fish coexist; bears test strength.
            if current.species == Species::Bear {
                let mine = bear_strength(current.age());
                let theirs = bear_strength(neighbor.age());
                if mine < theirs {
                    river.clear(i);
                } else if mine > theirs {
                    river.clear(i);
                    river.put(target, current);
                    resolved[target] = true;
                }
                // Equal strength: both stay.
            }
        }
        Some(_) => {
            // Same species, opposite sex: neither parent moves; a
            // newborn lands in a random empty cell elsewhere, or
            // nowhere when the river is full.
            let born = river.spawn_newborn(current.species, rng);
            trace!(cell = i, target, born, "reproduction event");
        }
    }
}
