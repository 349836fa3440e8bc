//! Configuration management for the rating simulation
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, and default values matching the reference run.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, OutputSettings, ServiceSettings, SimulationSettings};
pub use rating::RatingConfig;
