//! Rating system using the Elo logistic model
//!
//! This module provides the win-probability model shared by the skill and
//! rating views, and the calculators that turn match outcomes into rating
//! adjustments.

pub mod calculator;
pub mod elo;
pub mod probability;

// Re-export commonly used types
pub use calculator::{NoOpRatingCalculator, RatingCalculator};
pub use elo::EloRatingCalculator;
pub use probability::{
    get_probability, get_probability_rating, get_probability_skill, win_probability,
};
