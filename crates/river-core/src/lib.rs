//! Core types and utilities for the river ecosystem simulation.

pub mod config;
pub mod error;
pub mod organism;
pub mod types;

pub use config::RiverConfig;
pub use error::{Error, Result};
pub use organism::{bear_strength, Organism};
pub use types::*;
