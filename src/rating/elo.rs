//! Elo rating calculator
//!
//! The delta is `K * (actual - expected)` where actual is player 1's share
//! of the points scored. Ratings are unbounded; nothing is clamped.

use crate::config::RatingConfig;
use crate::error::{Result, SimulationError};
use crate::rating::calculator::RatingCalculator;
use crate::types::MatchScore;

/// Elo calculator with a fixed K-factor
#[derive(Debug, Clone)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo calculator
    pub fn new(config: RatingConfig) -> Result<Self> {
        if !config.k_factor.is_finite() || config.k_factor <= 0.0 {
            return Err(SimulationError::ConfigurationError {
                message: format!("K-factor must be positive, got {}", config.k_factor),
            }
            .into());
        }

        Ok(Self { config })
    }

    pub fn k_factor(&self) -> f64 {
        self.config.k_factor
    }
}

impl Default for EloRatingCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    fn rating_delta(&self, expected_p1: f64, score: MatchScore) -> f64 {
        self.config.k_factor * (score.p1_ratio() - expected_p1)
    }
}
