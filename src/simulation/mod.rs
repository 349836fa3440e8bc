//! Match simulation and the run loop
//!
//! This module plays individual race-to-N matches, drives the round loop
//! over the roster, records its output streams, and summarises how far the
//! ratings converged.

pub mod match_play;
pub mod recorder;
pub mod runner;
pub mod statistics;

// Re-export commonly used types
pub use match_play::{play_match, DEFAULT_POINTS_TO_WIN};
pub use recorder::{CsvRecorder, MemoryRecorder, RecordSink};
pub use runner::{RoundOutcome, Simulation};
pub use statistics::{pearson_correlation, LeaderSummary, RunSummary};
