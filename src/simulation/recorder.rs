//! Output streams for game and player records
//!
//! The run loop talks to a [`RecordSink`]; [`CsvRecorder`] writes the two
//! comma-separated files and [`MemoryRecorder`] keeps rows in memory.

use crate::error::{Result, SimulationError};
use crate::types::{GameRecord, PlayerRecord};
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const PLAYERS_HEADER: &str = "round,id,skill,rating,rank";
pub const GAMES_HEADER: &str = "round,p1,p2,prob_p1_win_skill,prob_p1_win_rating,p1_score,p2_score";

/// Destination for simulation records
pub trait RecordSink {
    /// Called once before the first round
    fn begin(&mut self) -> Result<()>;

    /// One game row per round
    fn record_game(&mut self, game: &GameRecord) -> Result<()>;

    /// One player row per roster member, in rank order
    fn record_standings(&mut self, standings: &[PlayerRecord]) -> Result<()>;

    /// Flush everything; called on success and failure paths alike
    fn finish(&mut self) -> Result<()>;
}

/// Writer for the players and games CSV files
pub struct CsvRecorder<W: Write> {
    players: W,
    games: W,
    players_label: String,
    games_label: String,
}

impl CsvRecorder<BufWriter<File>> {
    /// Create (truncating) both output files
    pub fn create(players_path: &Path, games_path: &Path) -> Result<Self> {
        let players = create_file(players_path)?;
        let games = create_file(games_path)?;

        Ok(Self {
            players: BufWriter::new(players),
            games: BufWriter::new(games),
            players_label: players_path.display().to_string(),
            games_label: games_path.display().to_string(),
        })
    }
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| {
        SimulationError::OutputError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

impl<W: Write> CsvRecorder<W> {
    /// Wrap arbitrary writers, labelled for error messages
    pub fn from_writers(players: W, games: W) -> Self {
        Self {
            players,
            games,
            players_label: "players stream".to_string(),
            games_label: "games stream".to_string(),
        }
    }

    /// Give back the underlying writers
    pub fn into_inner(self) -> (W, W) {
        (self.players, self.games)
    }
}

impl<W: Write> RecordSink for CsvRecorder<W> {
    fn begin(&mut self) -> Result<()> {
        writeln!(self.players, "{PLAYERS_HEADER}")
            .with_context(|| format!("Failed to write header to {}", self.players_label))?;
        writeln!(self.games, "{GAMES_HEADER}")
            .with_context(|| format!("Failed to write header to {}", self.games_label))?;
        Ok(())
    }

    fn record_game(&mut self, game: &GameRecord) -> Result<()> {
        writeln!(
            self.games,
            "{},{},{},{:.6},{:.6},{},{}",
            game.round,
            game.p1,
            game.p2,
            game.prob_p1_win_skill,
            game.prob_p1_win_rating,
            game.p1_score,
            game.p2_score
        )
        .with_context(|| format!("Failed to write game row to {}", self.games_label))
    }

    fn record_standings(&mut self, standings: &[PlayerRecord]) -> Result<()> {
        for row in standings {
            writeln!(
                self.players,
                "{},{},{},{:.6},{}",
                row.round, row.id, row.skill, row.rating, row.rank
            )
            .with_context(|| format!("Failed to write player row to {}", self.players_label))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let players = self
            .players
            .flush()
            .with_context(|| format!("Failed to flush {}", self.players_label));
        let games = self
            .games
            .flush()
            .with_context(|| format!("Failed to flush {}", self.games_label));
        players?;
        games?;
        Ok(())
    }
}

/// In-memory sink
#[derive(Debug, Default, Clone)]
pub struct MemoryRecorder {
    pub games: Vec<GameRecord>,
    pub players: Vec<PlayerRecord>,
    pub finished: bool,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemoryRecorder {
    fn begin(&mut self) -> Result<()> {
        self.games.clear();
        self.players.clear();
        self.finished = false;
        Ok(())
    }

    fn record_game(&mut self, game: &GameRecord) -> Result<()> {
        self.games.push(game.clone());
        Ok(())
    }

    fn record_standings(&mut self, standings: &[PlayerRecord]) -> Result<()> {
        self.players.extend_from_slice(standings);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
