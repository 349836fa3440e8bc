//! Error types for the rating simulation
//!
//! Fallible operations return `anyhow::Result`; the variants below are the
//! specific failure conditions callers may want to match on.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific simulation scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("Insufficient population: need {required} players, have {available}")]
    InsufficientPopulation { required: usize, available: usize },

    #[error("Invalid win probability: {value}")]
    InvalidProbability { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Output error on {path}: {message}")]
    OutputError { path: String, message: String },
}
