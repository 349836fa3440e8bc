//! The simulation run loop
//!
//! Each round draws two distinct players, computes both probability views,
//! plays a match whose outcome is generated from skill, rates it against the
//! rating-view expectation, and records the game and the fresh standings.

use crate::config::SimulationSettings;
use crate::error::{Result, SimulationError};
use crate::rating::{
    get_probability_rating, get_probability_skill, EloRatingCalculator, RatingCalculator,
};
use crate::roster::{init_players, select_pair, Roster};
use crate::simulation::match_play::play_match;
use crate::simulation::recorder::RecordSink;
use crate::simulation::statistics::RunSummary;
use crate::types::{GameRecord, PlayerRecord, RatingChange, Round};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Everything produced by a single round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub game: GameRecord,
    pub changes: [RatingChange; 2],
}

/// Simulation state owned by the run loop
pub struct Simulation<C: RatingCalculator = EloRatingCalculator, R: Rng = StdRng> {
    settings: SimulationSettings,
    roster: Roster,
    calculator: C,
    rng: R,
}

impl Simulation<EloRatingCalculator, StdRng> {
    /// Elo calculator and a `StdRng` seeded from the settings, or from entropy
    pub fn from_settings(settings: SimulationSettings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let calculator = EloRatingCalculator::new(settings.rating.clone())?;
        Self::new(settings, calculator, rng)
    }
}

impl<C: RatingCalculator, R: Rng> Simulation<C, R> {
    pub fn new(settings: SimulationSettings, calculator: C, rng: R) -> Result<Self> {
        if settings.population_size < 2 {
            return Err(SimulationError::InsufficientPopulation {
                required: 2,
                available: settings.population_size,
            }
            .into());
        }
        if settings.skill_range().is_none() {
            return Err(SimulationError::ConfigurationError {
                message: "Skill spread overflows the skill range".to_string(),
            }
            .into());
        }

        let roster = Roster::new(init_players(
            settings.population_size,
            settings.skill_base,
            settings.skill_step,
            calculator.initial_rating(),
        ));

        Ok(Self {
            settings,
            roster,
            calculator,
            rng,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Play one match and apply its rating update
    pub fn play_round(&mut self, round: Round) -> Result<RoundOutcome> {
        let (p1_idx, p2_idx) = select_pair(self.roster.len(), &mut self.rng)?;

        let (p1, p2) = self.roster.pair_mut(p1_idx, p2_idx).ok_or(
            SimulationError::InsufficientPopulation {
                required: 2,
                available: self.settings.population_size,
            },
        )?;

        let prob_p1_win_skill = get_probability_skill(p1, p2);
        let prob_p1_win_rating = get_probability_rating(p1, p2);

        let score = play_match(prob_p1_win_skill, self.settings.points_to_win, &mut self.rng)?;
        let changes = self.calculator.apply(p1, p2, prob_p1_win_rating, score);

        trace!(
            round,
            p1 = p1_idx,
            p2 = p2_idx,
            p1_score = score.p1,
            p2_score = score.p2,
            delta = changes[0].delta(),
            "Round played"
        );

        Ok(RoundOutcome {
            game: GameRecord {
                round,
                p1: p1_idx,
                p2: p2_idx,
                prob_p1_win_skill,
                prob_p1_win_rating,
                p1_score: score.p1,
                p2_score: score.p2,
            },
            changes,
        })
    }

    /// Player rows for the current ratings, ascending by rating
    pub fn standings(&self, round: Round) -> Vec<PlayerRecord> {
        let players = self.roster.players();
        self.roster
            .rank_order()
            .into_iter()
            .enumerate()
            .map(|(rank, idx)| {
                let player = &players[idx];
                PlayerRecord {
                    round,
                    id: player.id(),
                    skill: player.skill(),
                    rating: player.rating,
                    rank,
                }
            })
            .collect()
    }

    /// Run every configured round into `sink`
    ///
    /// The sink is finished even when a round fails, so buffered rows are
    /// flushed before the error is returned.
    pub fn run<S: RecordSink>(&mut self, sink: &mut S) -> Result<RunSummary> {
        info!(
            population = self.roster.len(),
            rounds = self.settings.rounds,
            "Starting simulation"
        );

        let outcome = self.run_rounds(sink);
        let finished = sink.finish();
        outcome?;
        finished?;

        let summary = RunSummary::from_roster(
            &self.roster,
            self.settings.rounds,
            self.calculator.initial_rating(),
        );
        debug!(?summary, "Simulation finished");
        Ok(summary)
    }

    fn run_rounds<S: RecordSink>(&mut self, sink: &mut S) -> Result<()> {
        sink.begin()?;

        for round in 0..self.settings.rounds {
            let outcome = self.play_round(round)?;
            sink.record_game(&outcome.game)?;
            sink.record_standings(&self.standings(round))?;

            if round % self.settings.progress_interval == 0 {
                info!(round, "Progress");
            }
        }

        Ok(())
    }
}
