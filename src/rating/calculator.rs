//! Rating calculator trait and implementations
//!
//! This module defines the interface for turning a match outcome into a
//! rating adjustment, plus a frozen-rating calculator for control runs.

use crate::types::{MatchScore, Player, RatingChange};

/// Trait for calculating rating changes after matches
pub trait RatingCalculator {
    /// Rating assigned to every player at the start of a run
    fn initial_rating(&self) -> f64;

    /// Adjustment for player 1; player 2 receives the negation
    ///
    /// # Arguments
    /// * `expected_p1` - Pre-match rating-view probability that player 1 wins
    /// * `score` - Final match score
    fn rating_delta(&self, expected_p1: f64, score: MatchScore) -> f64;

    /// Apply the zero-sum update to both participants
    fn apply(
        &self,
        p1: &mut Player,
        p2: &mut Player,
        expected_p1: f64,
        score: MatchScore,
    ) -> [RatingChange; 2] {
        let delta = self.rating_delta(expected_p1, score);

        let p1_change = RatingChange {
            player_id: p1.id(),
            old_rating: p1.rating,
            new_rating: p1.rating + delta,
        };
        let p2_change = RatingChange {
            player_id: p2.id(),
            old_rating: p2.rating,
            new_rating: p2.rating - delta,
        };

        p1.rating = p1_change.new_rating;
        p2.rating = p2_change.new_rating;

        [p1_change, p2_change]
    }
}

/// Calculator that never moves ratings
#[derive(Debug, Clone)]
pub struct NoOpRatingCalculator {
    initial_rating: f64,
}

impl NoOpRatingCalculator {
    pub fn new(initial_rating: f64) -> Self {
        Self { initial_rating }
    }
}

impl Default for NoOpRatingCalculator {
    fn default() -> Self {
        Self::new(1000.0)
    }
}

impl RatingCalculator for NoOpRatingCalculator {
    fn initial_rating(&self) -> f64 {
        self.initial_rating
    }

    fn rating_delta(&self, _expected_p1: f64, _score: MatchScore) -> f64 {
        0.0
    }
}
