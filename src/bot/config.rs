//! Search configuration.

use crate::bot::evaluation::EvaluationKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which search core the controller runs at each depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Minimax,
    AlphaBeta,
}

/// How a layer chooses between moves with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Compare `(score, move)` pairs: the larger move wins on maximizing
    /// layers, the smaller on minimizing layers.
    #[default]
    Lexicographic,
    /// Keep the move the rules engine enumerated first.
    FirstEnumerated,
}

/// Configuration for a search agent.
///
/// # Examples
///
/// ```
/// use isolation_agent::{EvaluationKind, SearchConfig, SearchStrategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(SearchStrategy::AlphaBeta)
///     .with_evaluation(EvaluationKind::MobilityDifference)
///     .with_timeout_threshold_ms(15.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched when iterative deepening is off.
    pub search_depth: u32,
    pub evaluation: EvaluationKind,
    /// Search depths 1, 2, 3, ... until time runs out or the outcome is decided.
    pub iterative_deepening: bool,
    pub strategy: SearchStrategy,
    /// Remaining milliseconds below which the search aborts.
    pub timeout_threshold_ms: f64,
    pub tie_break: TieBreak,
    /// Seed for the random evaluator
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            evaluation: EvaluationKind::default(),
            iterative_deepening: true,
            strategy: SearchStrategy::default(),
            timeout_threshold_ms: 10.0,
            tie_break: TieBreak::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth);
        }
        if !self.timeout_threshold_ms.is_finite() || self.timeout_threshold_ms <= 0.0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.timeout_threshold_ms,
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationKind) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn with_iterative_deepening(mut self, enabled: bool) -> Self {
        self.iterative_deepening = enabled;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_timeout_threshold_ms(mut self, threshold_ms: f64) -> Self {
        self.timeout_threshold_ms = threshold_ms;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
