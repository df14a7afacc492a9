//! Move-selection agents built on the search cores.

pub mod config;
pub mod deepening;
pub mod evaluation;
pub mod minimax;
pub mod timeout;

use crate::bot::config::SearchConfig;
use crate::bot::deepening::{SearchOutcome, iterative_deepening};
use crate::bot::evaluation::Evaluator;
use crate::bot::timeout::TimeBudget;
use crate::core::{Board, Move};
use crate::error::ConfigError;

/// Something that picks a move for the player to act.
pub trait Agent<B: Board> {
    fn name(&self) -> &str;

    /// Picks one of `legal_moves` before `budget` runs out. `None` means there
    /// was nothing to play.
    fn choose_move(
        &mut self,
        state: &B,
        legal_moves: &[Move],
        budget: &dyn TimeBudget,
    ) -> Option<Move>;
}

/// Agent driven by [`iterative_deepening`] with a configured evaluator.
pub struct SearchAgent<B: Board> {
    name: String,
    config: SearchConfig,
    evaluator: Box<dyn Evaluator<B>>,
}

impl<B: Board + 'static> SearchAgent<B> {
    pub fn new(name: impl Into<String>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluator = config.evaluation.build(config.seed);
        Ok(Self {
            name: name.into(),
            config,
            evaluator,
        })
    }
}

impl<B: Board> SearchAgent<B> {
    /// Uses `evaluator` in place of the one named by `config.evaluation`.
    pub fn with_evaluator(
        name: impl Into<String>,
        config: SearchConfig,
        evaluator: Box<dyn Evaluator<B>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            evaluator,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Like [`Agent::choose_move`] but reports the whole outcome.
    pub fn search(
        &mut self,
        state: &B,
        legal_moves: &[Move],
        budget: &dyn TimeBudget,
    ) -> SearchOutcome {
        iterative_deepening(
            &self.config,
            &mut *self.evaluator,
            state,
            legal_moves,
            budget,
        )
    }
}

impl<B: Board> Agent<B> for SearchAgent<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(
        &mut self,
        state: &B,
        legal_moves: &[Move],
        budget: &dyn TimeBudget,
    ) -> Option<Move> {
        self.search(state, legal_moves, budget).best_move
    }
}
