//! Player roster management
//!
//! This module owns the fixed population of synthetic players, builds it
//! with its deterministic skill spread, and draws distinct random
//! participants for each match.

pub mod population;
pub mod selection;

// Re-export commonly used types
pub use population::{init_players, Roster};
pub use selection::{select_distinct, select_four, select_pair};
