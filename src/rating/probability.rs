//! Logistic win-probability model
//!
//! `P(a beats b) = T(a) / (T(a) + T(b))` with `T(x) = 10^(x / 400)`.

use crate::types::{Attribute, Player};

/// Scale of the logistic curve: a 400 point gap is 10:1 odds
pub const LOGISTIC_SCALE: f64 = 400.0;

/// `10^(x / 400)`
pub fn transform(x: f64) -> f64 {
    10f64.powf(x / LOGISTIC_SCALE)
}

/// Probability that a side with attribute `a` beats one with attribute `b`
///
/// Evaluated in difference form, which equals the ratio of transforms but
/// does not overflow for large attribute values. Equal inputs give exactly 0.5.
pub fn win_probability(a: f64, b: f64) -> f64 {
    1.0 / (1.0 + transform(b - a))
}

/// Probability that `p1` beats `p2` over the chosen attribute
pub fn get_probability(p1: &Player, p2: &Player, attribute: Attribute) -> f64 {
    win_probability(p1.attribute(attribute), p2.attribute(attribute))
}

/// Ground-truth view, used to generate outcomes
pub fn get_probability_skill(p1: &Player, p2: &Player) -> f64 {
    get_probability(p1, p2, Attribute::Skill)
}

/// Estimated view, used as the expected score in rating updates
pub fn get_probability_rating(p1: &Player, p2: &Player) -> f64 {
    get_probability(p1, p2, Attribute::Rating)
}
