//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Simulation parameters supplied by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiverConfig {
    /// Number of cells in the river (must be at least 1)
    pub length: usize,
    /// Number of cycles to run (must be at least 1)
    pub cycles: u64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for RiverConfig {
    fn default() -> Self {
        Self {
            length: 20,
            cycles: 10,
            seed: 0,
        }
    }
}

impl RiverConfig {
    /// Rejects degenerate simulations up front instead of silently
    /// running them.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidLength(self.length));
        }
        if self.cycles == 0 {
            return Err(Error::InvalidCycleCount(self.cycles));
        }
        Ok(())
    }
}
