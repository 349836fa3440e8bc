//! Race-to-N match simulation
//!
//! Every point is an independent Bernoulli trial with the same parameter
//! for the whole match.

use crate::error::{Result, SimulationError};
use crate::types::MatchScore;
use rand::Rng;

/// Points needed to take a match in the reference format
pub const DEFAULT_POINTS_TO_WIN: u32 = 10;

/// Play points until one side reaches `points_to_win`
///
/// A point goes to player 1 when a uniform draw in `[0, 1)` is below
/// `prob_p1_point`. The degenerate inputs terminate immediately: `0.0` hands
/// every point to player 2 and `1.0` every point to player 1. Values outside
/// `[0, 1]` (including NaN) are rejected.
pub fn play_match<R: Rng + ?Sized>(
    prob_p1_point: f64,
    points_to_win: u32,
    rng: &mut R,
) -> Result<MatchScore> {
    if !(0.0..=1.0).contains(&prob_p1_point) {
        return Err(SimulationError::InvalidProbability {
            value: prob_p1_point,
        }
        .into());
    }

    let mut score = MatchScore { p1: 0, p2: 0 };
    while score.p1 < points_to_win && score.p2 < points_to_win {
        if rng.gen::<f64>() < prob_p1_point {
            score.p1 += 1;
        } else {
            score.p2 += 1;
        }
    }

    Ok(score)
}
