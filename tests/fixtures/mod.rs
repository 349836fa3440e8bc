//! Shared helpers for integration tests

use rating_convergence::config::{AppConfig, SimulationSettings};
use std::path::Path;

/// Four players (skills 800..806), ten rounds, fixed seed
pub fn small_settings(seed: u64) -> SimulationSettings {
    SimulationSettings {
        population_size: 4,
        rounds: 10,
        seed: Some(seed),
        ..SimulationSettings::default()
    }
}

/// Config writing both output files into `dir`
pub fn config_in(dir: &Path, settings: SimulationSettings) -> AppConfig {
    let mut config = AppConfig {
        simulation: settings,
        ..AppConfig::default()
    };
    config.output.players_path = dir.join("players.csv");
    config.output.games_path = dir.join("games.csv");
    config
}

/// Header line and data rows of a CSV file split into fields
pub fn read_csv(path: &Path) -> (String, Vec<Vec<String>>) {
    let contents = std::fs::read_to_string(path).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap_or_default().to_string();
    let rows = lines
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    (header, rows)
}
