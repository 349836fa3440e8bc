//! Rating system configuration

use serde::{Deserialize, Serialize};

/// Elo rating parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating every player starts at
    pub initial_rating: f64,
    /// Multiplier applied to (actual - expected) score
    pub k_factor: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            k_factor: 32.0,
        }
    }
}
