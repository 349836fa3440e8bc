//! Convergence statistics for a finished run
//!
//! These measure how closely the visible ratings track the hidden skills.

use crate::roster::Roster;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Summary of a completed simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of rounds played
    pub rounds: u64,
    /// Number of players in the roster
    pub population_size: usize,
    /// Pearson correlation between skill and rating
    pub skill_rating_correlation: f64,
    /// Mean |rating - centred skill|, centred skill being skill shifted so
    /// that its mean equals the initial rating
    pub mean_absolute_error: f64,
    /// Sum of all ratings
    pub total_rating: f64,
    /// Highest-rated player at the end of the run
    pub leader: Option<LeaderSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSummary {
    pub id: PlayerId,
    pub skill: i64,
    pub rating: f64,
}

impl RunSummary {
    pub fn from_roster(roster: &Roster, rounds: u64, initial_rating: f64) -> Self {
        let skills: Vec<f64> = roster.players().iter().map(|p| p.skill() as f64).collect();
        let ratings: Vec<f64> = roster.players().iter().map(|p| p.rating).collect();

        let mean_skill = mean(&skills);
        let mean_absolute_error = if ratings.is_empty() {
            0.0
        } else {
            skills
                .iter()
                .zip(&ratings)
                .map(|(s, r)| (r - (s - mean_skill + initial_rating)).abs())
                .sum::<f64>()
                / ratings.len() as f64
        };

        Self {
            rounds,
            population_size: roster.len(),
            skill_rating_correlation: pearson_correlation(&skills, &ratings),
            mean_absolute_error,
            total_rating: roster.total_rating(),
            leader: roster.leader().map(|p| LeaderSummary {
                id: p.id(),
                skill: p.skill(),
                rating: p.rating,
            }),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation; 0.0 when either series has no variance
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }

    let mean_x = mean(&xs[..n]);
    let mean_y = mean(&ys[..n]);

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys).take(n) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return 0.0;
    }
    covariance / (variance_x.sqrt() * variance_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::init_players;

    #[test]
    fn test_pearson_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson_correlation(&xs, &[2.0, 4.0, 6.0, 8.0]) - 1.0).abs() < 1e-12);
        assert!((pearson_correlation(&xs, &[8.0, 6.0, 4.0, 2.0]) + 1.0).abs() < 1e-12);
        assert_eq!(pearson_correlation(&xs, &[5.0; 4]), 0.0);
        assert_eq!(pearson_correlation(&[1.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_summary_of_fresh_roster() {
        let roster = Roster::new(init_players(5, 800, 2, 1000.0));
        let summary = RunSummary::from_roster(&roster, 0, 1000.0);

        // Centred skills are 996..1004, all ratings are 1000
        assert!((summary.mean_absolute_error - 2.4).abs() < 1e-12);
        assert_eq!(summary.skill_rating_correlation, 0.0);
        assert_eq!(summary.total_rating, 5000.0);
        assert_eq!(summary.population_size, 5);
    }

    #[test]
    fn test_summary_of_converged_roster() {
        let mut players = init_players(4, 800, 2, 1000.0);
        for p in &mut players {
            p.rating = p.skill() as f64 - 803.0 + 1000.0;
        }
        let roster = Roster::new(players);
        let summary = RunSummary::from_roster(&roster, 10, 1000.0);

        assert!(summary.mean_absolute_error < 1e-9);
        assert!((summary.skill_rating_correlation - 1.0).abs() < 1e-12);
        assert_eq!(summary.leader.unwrap().id, 3);
    }
}
