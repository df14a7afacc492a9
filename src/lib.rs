//! Time-bounded adversarial game-tree search.
//!
//! The crate provides depth-limited minimax and alpha-beta search driven by an
//! iterative-deepening controller that always returns a legal move before the
//! caller's turn clock runs out. The game itself is an external collaborator
//! described by the [`Board`] trait; [`Isolation`] is a reference
//! implementation used by the binary, the benches and the tests.
//!
//! ```
//! use isolation_agent::{
//!     Agent, Board, Deadline, Isolation, SearchAgent, SearchConfig, SearchStrategy,
//! };
//! use std::time::Duration;
//!
//! let board = Isolation::new(5, 5);
//! let config = SearchConfig::default()
//!     .with_strategy(SearchStrategy::AlphaBeta)
//!     .with_iterative_deepening(false)
//!     .with_search_depth(1);
//! let mut agent = SearchAgent::<Isolation>::new("alphabeta", config).unwrap();
//!
//! let legal = board.legal_moves(None);
//! let deadline = Deadline::after(Duration::from_millis(500));
//! let mv = agent.choose_move(&board, &legal, &deadline);
//! assert!(mv.is_some_and(|m| legal.contains(&m)));
//! ```

pub mod bot;
pub mod core;
pub mod error;
pub mod isolation;

pub use bot::config::{SearchConfig, SearchStrategy, TieBreak};
pub use bot::deepening::{SearchOutcome, iterative_deepening};
pub use bot::evaluation::{
    EvaluationKind, Evaluator, MobilityDifference, RandomBaseline, SquaredMobilityDifference,
    SquaredMobilityPlusCentrality,
};
pub use bot::minimax::{MoveChoice, Search, SearchResult};
pub use bot::timeout::{Deadline, TimeBudget, TimeGuard};
pub use bot::{Agent, SearchAgent};
pub use crate::core::{Board, Move, MoveList, PlayerId};
pub use error::{ConfigError, SearchCancelled};
pub use isolation::Isolation;

#[cfg(test)]
pub(crate) mod testing;
