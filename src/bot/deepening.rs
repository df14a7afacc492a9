//! Iterative-deepening move selection.

use crate::bot::config::{SearchConfig, SearchStrategy};
use crate::bot::evaluation::Evaluator;
use crate::bot::minimax::Search;
use crate::bot::timeout::{TimeBudget, TimeGuard};
use crate::core::{Board, Move};
use crate::error::SearchCancelled;
use tracing::{debug, info};

/// What a call to [`iterative_deepening`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// `None` only when the position has no legal move at all.
    pub best_move: Option<Move>,
    /// Score of the deepest completed depth.
    pub score: Option<f64>,
    /// 0 when no depth finished before the clock ran out.
    pub completed_depth: u32,
    pub cancelled: bool,
    /// Nodes entered across every depth, including the interrupted one.
    pub nodes: u64,
}

/// Searches `state` at increasing depths and returns the best move found by
/// the deepest depth that finished.
///
/// Deepening stops when a depth proves the game decided (`+inf`/`-inf`), when
/// the configured depth completes with deepening disabled, or when the time
/// guard cancels a depth. A cancelled depth never replaces the previous
/// result. If nothing finished and `legal_moves` was empty, the last move the
/// board itself reports is played rather than giving up.
pub fn iterative_deepening<B, E>(
    config: &SearchConfig,
    evaluator: &mut E,
    state: &B,
    legal_moves: &[Move],
    budget: &dyn TimeBudget,
) -> SearchOutcome
where
    B: Board,
    E: Evaluator<B> + ?Sized,
{
    let mut outcome = SearchOutcome {
        best_move: legal_moves.first().copied(),
        score: None,
        completed_depth: 0,
        cancelled: false,
        nodes: 0,
    };

    let depths = if config.iterative_deepening {
        1..=u32::MAX
    } else {
        config.search_depth..=config.search_depth
    };

    let guard = TimeGuard::new(budget, config.timeout_threshold_ms);
    let mut search = Search::new(evaluator, guard, state.active_player(), config.tie_break);

    for depth in depths {
        let result = match config.strategy {
            SearchStrategy::Minimax => search.minimax(state, depth, true),
            SearchStrategy::AlphaBeta => {
                search.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        };
        outcome.nodes = search.nodes();

        let result = match result {
            Ok(result) => result,
            Err(SearchCancelled) => {
                outcome.cancelled = true;
                info!(
                    depth,
                    completed_depth = outcome.completed_depth,
                    nodes = outcome.nodes,
                    "search cancelled"
                );
                break;
            }
        };

        outcome.best_move = result.best_move();
        outcome.score = Some(result.score);
        outcome.completed_depth = depth;
        debug!(
            depth,
            score = result.score,
            best_move = ?outcome.best_move,
            nodes = outcome.nodes,
            "depth complete"
        );

        if result.is_decided() {
            debug!(depth, score = result.score, "outcome decided, stop deepening");
            break;
        }
    }

    if outcome.cancelled && outcome.best_move.is_none() {
        outcome.best_move = state.legal_moves(None).last().copied();
        if let Some(mv) = outcome.best_move {
            info!(%mv, "no depth completed, falling back to last legal move");
        }
    }

    outcome
}
