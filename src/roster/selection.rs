//! Random participant selection
//!
//! Draws distinct roster indices uniformly at random by rejection sampling:
//! each draw is repeated until it differs from every index already taken.

use crate::error::{Result, SimulationError};
use rand::Rng;

fn ensure_population(available: usize, required: usize) -> Result<()> {
    if available < required {
        return Err(SimulationError::InsufficientPopulation {
            required,
            available,
        }
        .into());
    }
    Ok(())
}

/// Draw two distinct indices in `[0, len)`
pub fn select_pair<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<(usize, usize)> {
    ensure_population(len, 2)?;

    let first = rng.gen_range(0..len);
    let mut second = first;
    while second == first {
        second = rng.gen_range(0..len);
    }

    Ok((first, second))
}

/// Draw `count` distinct indices in `[0, len)`, in draw order
pub fn select_distinct<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    ensure_population(len, count)?;

    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count {
        let candidate = rng.gen_range(0..len);
        if !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }

    Ok(chosen)
}

/// Draw four distinct indices, for four-player match formats
pub fn select_four<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<[usize; 4]> {
    let chosen = select_distinct(len, 4, rng)?;
    Ok([chosen[0], chosen[1], chosen[2], chosen[3]])
}
