//! Common types used throughout the simulation

use serde::{Deserialize, Serialize};

/// Player identity, the position in initialization order
pub type PlayerId = usize;

/// Round index, 0-based
pub type Round = u64;

/// A synthetic player with a hidden skill and a visible rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    skill: i64,
    pub rating: f64,
}

impl Player {
    pub fn new(id: PlayerId, skill: i64, rating: f64) -> Self {
        Self { id, skill, rating }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Fixed at construction
    pub fn skill(&self) -> i64 {
        self.skill
    }

    /// Value of the given attribute as used by the win-probability model
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Skill => self.skill as f64,
            Attribute::Rating => self.rating,
        }
    }
}

/// Which player attribute a win probability is computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Hidden ground truth, drives outcomes
    Skill,
    /// Visible estimate, drives the expected score
    Rating,
}

/// Final score of a race-to-N match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub p1: u32,
    pub p2: u32,
}

impl MatchScore {
    pub fn total_points(&self) -> u32 {
        self.p1 + self.p2
    }

    /// Share of points taken by player 1
    pub fn p1_ratio(&self) -> f64 {
        let total = self.total_points();
        if total == 0 {
            return 0.5;
        }
        self.p1 as f64 / total as f64
    }
}

/// Rating change information for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}

/// One row of the games stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub round: Round,
    pub p1: PlayerId,
    pub p2: PlayerId,
    pub prob_p1_win_skill: f64,
    pub prob_p1_win_rating: f64,
    pub p1_score: u32,
    pub p2_score: u32,
}

/// One row of the players stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub round: Round,
    pub id: PlayerId,
    pub skill: i64,
    pub rating: f64,
    pub rank: usize,
}
