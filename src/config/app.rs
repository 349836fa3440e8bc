//! Main application configuration
//!
//! This module defines the configuration structures for the simulation run,
//! including TOML file loading, environment variable overrides and validation.

use crate::config::rating::RatingConfig;
use crate::error::SimulationError;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub simulation: SimulationSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of players in the roster
    pub population_size: usize,
    /// Number of matches to play
    pub rounds: u64,
    /// Emit a progress event every this many rounds
    pub progress_interval: u64,
    /// Skill of player 0
    pub skill_base: i64,
    /// Skill spacing between consecutive ids
    pub skill_step: i64,
    /// Points needed to win a match
    pub points_to_win: u32,
    /// Seed for a reproducible run, entropy when absent
    pub seed: Option<u64>,
    pub rating: RatingConfig,
}

/// Output file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub players_path: PathBuf,
    pub games_path: PathBuf,
    /// Optional JSON run summary
    pub summary_path: Option<PathBuf>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            population_size: 201,
            rounds: 100_000,
            progress_interval: 1000,
            skill_base: 800,
            skill_step: 2,
            points_to_win: 10,
            seed: None,
            rating: RatingConfig::default(),
        }
    }
}

impl SimulationSettings {
    /// Skills of the first and last player, `None` if the spread overflows `i64`
    pub fn skill_range(&self) -> Option<(i64, i64)> {
        let last_id = i64::try_from(self.population_size.checked_sub(1)?).ok()?;
        let last = self
            .skill_step
            .checked_mul(last_id)
            .and_then(|spread| spread.checked_add(self.skill_base))?;
        Some((self.skill_base, last))
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            players_path: PathBuf::from("players.csv"),
            games_path: PathBuf::from("games.csv"),
            summary_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from a TOML file; absent fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Build a configuration over defaults from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        let sim = &mut config.simulation;
        if let Some(value) = parse_var(&lookup, "SIM_POPULATION_SIZE")? {
            sim.population_size = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_ROUNDS")? {
            sim.rounds = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_PROGRESS_INTERVAL")? {
            sim.progress_interval = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_SKILL_BASE")? {
            sim.skill_base = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_SKILL_STEP")? {
            sim.skill_step = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_POINTS_TO_WIN")? {
            sim.points_to_win = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_SEED")? {
            sim.seed = Some(value);
        }
        if let Some(value) = parse_var(&lookup, "SIM_INITIAL_RATING")? {
            sim.rating.initial_rating = value;
        }
        if let Some(value) = parse_var(&lookup, "SIM_K_FACTOR")? {
            sim.rating.k_factor = value;
        }

        if let Some(path) = lookup("SIM_PLAYERS_PATH") {
            config.output.players_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SIM_GAMES_PATH") {
            config.output.games_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SIM_SUMMARY_PATH") {
            config.output.summary_path = Some(PathBuf::from(path));
        }

        validate_config(&config)?;
        Ok(config)
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("Invalid {} value: {}", name, raw)),
        None => Ok(None),
    }
}

fn config_error(message: &str) -> anyhow::Error {
    SimulationError::ConfigurationError {
        message: message.to_string(),
    }
    .into()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    let sim = &config.simulation;
    if sim.population_size < 2 {
        return Err(config_error("Population size must be at least 2"));
    }
    if sim.skill_range().is_none() {
        return Err(config_error("Skill spread overflows the skill range"));
    }
    if sim.rounds == 0 {
        return Err(config_error("Round count must be greater than 0"));
    }
    if sim.progress_interval == 0 {
        return Err(config_error("Progress interval must be greater than 0"));
    }
    if sim.points_to_win == 0 {
        return Err(config_error("Points to win must be greater than 0"));
    }
    if !sim.rating.initial_rating.is_finite() {
        return Err(config_error("Initial rating must be finite"));
    }
    if !sim.rating.k_factor.is_finite() || sim.rating.k_factor <= 0.0 {
        return Err(config_error("K-factor must be positive"));
    }

    if config.output.players_path.as_os_str().is_empty() {
        return Err(config_error("Players output path cannot be empty"));
    }
    if config.output.games_path.as_os_str().is_empty() {
        return Err(config_error("Games output path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_match_reference_run() {
        let config = AppConfig::default();
        assert_eq!(config.simulation.population_size, 201);
        assert_eq!(config.simulation.rounds, 100_000);
        assert_eq!(config.simulation.progress_interval, 1000);
        assert_eq!(config.simulation.rating.k_factor, 32.0);
        assert_eq!(config.simulation.rating.initial_rating, 1000.0);
        assert_eq!(config.output.players_path, PathBuf::from("players.csv"));
        assert_eq!(config.output.games_path, PathBuf::from("games.csv"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SIM_POPULATION_SIZE", "4"),
            ("SIM_ROUNDS", "10"),
            ("SIM_SEED", "7"),
            ("SIM_K_FACTOR", "16"),
            ("SIM_GAMES_PATH", "/tmp/g.csv"),
        ]))
        .unwrap();

        assert_eq!(config.simulation.population_size, 4);
        assert_eq!(config.simulation.rounds, 10);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.rating.k_factor, 16.0);
        assert_eq!(config.output.games_path, PathBuf::from("/tmp/g.csv"));
        assert_eq!(config.output.players_path, PathBuf::from("players.csv"));
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = AppConfig::from_lookup(lookup_from(&[("SIM_ROUNDS", "many")])).unwrap_err();
        assert!(err.to_string().contains("SIM_ROUNDS"));
    }

    #[test]
    fn test_toml_partial_document() {
        let config = AppConfig::from_toml_str(
            r#"
            [simulation]
            population_size = 4
            rounds = 10

            [simulation.rating]
            k_factor = 24.0
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.population_size, 4);
        assert_eq!(config.simulation.rating.k_factor, 24.0);
        assert_eq!(config.simulation.rating.initial_rating, 1000.0);
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_skill_range() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.skill_range(), Some((800, 1200)));

        let settings = SimulationSettings {
            skill_base: i64::MAX - 10,
            skill_step: 5,
            population_size: 3,
            ..SimulationSettings::default()
        };
        assert_eq!(settings.skill_range(), Some((i64::MAX - 10, i64::MAX)));

        let settings = SimulationSettings {
            skill_base: i64::MIN,
            skill_step: -1,
            population_size: 2,
            ..SimulationSettings::default()
        };
        assert_eq!(settings.skill_range(), None);
    }

    #[test]
    fn test_toml_rejects_overflowing_skill_step() {
        let err = AppConfig::from_toml_str(
            r#"
            [simulation]
            population_size = 4
            skill_step = 9223372036854775807
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Skill spread"));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.simulation.population_size = 1;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.simulation.rating.k_factor = f64::NAN;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.simulation.population_size = 4;
        config.simulation.skill_step = i64::MAX;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimulationError>(),
            Some(SimulationError::ConfigurationError { .. })
        ));

        let mut config = AppConfig::default();
        config.simulation.progress_interval = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimulationError>(),
            Some(SimulationError::ConfigurationError { .. })
        ));
    }
}
