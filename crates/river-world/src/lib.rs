//! River simulation engine.
//!
//! This module implements the circular one-dimensional river where fish
//! and bears move, fight, and reproduce.

pub mod grid;
pub mod simulation;

pub use grid::{Census, River};
pub use simulation::{Simulation, SimulationSummary};
