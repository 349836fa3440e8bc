//! Rating Convergence - Elo simulation over a synthetic population
//!
//! This crate repeatedly matches players with fixed hidden skills, updates
//! their visible Elo ratings from the outcomes, and records per-round
//! standings and per-game results to observe how ratings converge to skill.

pub mod config;
pub mod error;
pub mod rating;
pub mod roster;
pub mod simulation;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Result, SimulationError};
pub use types::*;

// Re-export key components
pub use rating::{EloRatingCalculator, RatingCalculator};
pub use roster::Roster;
pub use simulation::{CsvRecorder, RecordSink, RunSummary, Simulation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
