//! Main entry point for the rating convergence simulation
//!
//! Loads configuration, initializes logging, runs the full simulation into
//! the players and games files, and reports how far ratings converged.

use anyhow::{Context, Result};
use clap::Parser;
use rating_convergence::config::{validate_config, AppConfig};
use rating_convergence::simulation::{CsvRecorder, RunSummary, Simulation};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Rating Convergence - Elo simulation over players with hidden skill
#[derive(Parser)]
#[command(
    name = "rating-convergence",
    version,
    about = "Simulate Elo rating convergence over a synthetic player population",
    long_about = "Plays repeated race-to-10 matches between randomly paired players whose \
                 outcomes follow fixed hidden skills, updates Elo ratings from the results, \
                 and writes per-round standings and per-game records as CSV."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error); progress lines are info"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Random seed override
    #[arg(long, value_name = "SEED", help = "Seed the random number generator")]
    seed: Option<u64>,

    /// Round count override
    #[arg(long, value_name = "N", help = "Number of rounds to simulate")]
    rounds: Option<u64>,

    /// Population size override
    #[arg(long, value_name = "N", help = "Number of players in the roster")]
    population: Option<usize>,

    /// Players file override
    #[arg(long, value_name = "FILE", help = "Output path for per-round standings")]
    players_out: Option<PathBuf>,

    /// Games file override
    #[arg(long, value_name = "FILE", help = "Output path for per-game records")]
    games_out: Option<PathBuf>,

    /// Summary file
    #[arg(long, value_name = "FILE", help = "Write the run summary as JSON")]
    summary_out: Option<PathBuf>,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without simulating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner with run parameters
fn display_startup_banner(config: &AppConfig) {
    let sim = &config.simulation;
    info!("Rating Convergence Simulation v{}", rating_convergence::VERSION);
    info!("   Population: {}", sim.population_size);
    info!("   Rounds: {}", sim.rounds);
    info!(
        "   Skills: {} + {} * id",
        sim.skill_base, sim.skill_step
    );
    info!(
        "   Initial rating: {}, K-factor: {}",
        sim.rating.initial_rating, sim.rating.k_factor
    );
    match sim.seed {
        Some(seed) => info!("   Seed: {}", seed),
        None => info!("   Seed: entropy"),
    }
    info!("   Players file: {}", config.output.players_path.display());
    info!("   Games file: {}", config.output.games_path.display());
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }

    if let Some(rounds) = args.rounds {
        config.simulation.rounds = rounds;
    }

    if let Some(population) = args.population {
        config.simulation.population_size = population;
    }

    if let Some(path) = &args.players_out {
        config.output.players_path = path.clone();
    }

    if let Some(path) = &args.games_out {
        config.output.games_path = path.clone();
    }

    if let Some(path) = &args.summary_out {
        config.output.summary_path = Some(path.clone());
    }

    validate_config(&config)?;
    Ok(config)
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary to {}", path.display()))
}

fn run(config: &AppConfig) -> Result<RunSummary> {
    let mut recorder =
        CsvRecorder::create(&config.output.players_path, &config.output.games_path)?;
    let mut simulation = Simulation::from_settings(config.simulation.clone())?;
    let summary = simulation.run(&mut recorder)?;

    if let Some(path) = &config.output.summary_path {
        write_summary(path, &summary)?;
    }

    Ok(summary)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    if args.dry_run {
        info!("Configuration validation successful");
        println!("{}", toml::to_string_pretty(&config)?);
        info!("Dry run completed - exiting without simulating");
        return Ok(());
    }

    match run(&config) {
        Ok(summary) => {
            info!(
                rounds = summary.rounds,
                correlation = summary.skill_rating_correlation,
                mean_absolute_error = summary.mean_absolute_error,
                "Simulation complete"
            );
            if let Some(leader) = &summary.leader {
                info!(
                    "   Leader: player {} (skill {}, rating {:.1})",
                    leader.id, leader.skill, leader.rating
                );
            }
            Ok(())
        }
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
