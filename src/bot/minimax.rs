use crate::bot::config::TieBreak;
use crate::bot::evaluation::Evaluator;
use crate::bot::timeout::TimeGuard;
use crate::core::{Board, Move, PlayerId};
use crate::error::SearchCancelled;
use std::cmp::Ordering;
use tracing::trace;

/// The move half of a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// The side to move had no legal move.
    NoMoves,
    /// Depth ran out. The move is the first one enumerated and only fills the
    /// slot; a parent node replaces it with the branch it picks.
    Horizon(Move),
    /// Chosen by comparing child scores.
    Best(Move),
}

impl MoveChoice {
    pub fn mv(&self) -> Option<Move> {
        match *self {
            MoveChoice::NoMoves => None,
            MoveChoice::Horizon(mv) | MoveChoice::Best(mv) => Some(mv),
        }
    }

    pub fn is_authoritative(&self) -> bool {
        matches!(self, MoveChoice::Best(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// `+inf` for a certain win, `-inf` for a certain loss.
    pub score: f64,
    pub choice: MoveChoice,
}

impl SearchResult {
    pub fn best_move(&self) -> Option<Move> {
        self.choice.mv()
    }

    pub fn is_decided(&self) -> bool {
        self.score.is_infinite()
    }
}

/// One search from the point of view of `player`.
///
/// Both cores consult the [`TimeGuard`] on entry to every node and bail out
/// with [`SearchCancelled`] once the clock is too low. Nothing is mutated
/// besides the node counter, so a cancelled search leaves no trace.
pub struct Search<'a, B: Board, E: Evaluator<B> + ?Sized> {
    evaluator: &'a mut E,
    guard: TimeGuard<'a>,
    player: PlayerId,
    tie_break: TieBreak,
    nodes: u64,
    _board: std::marker::PhantomData<fn(&B)>,
}

impl<'a, B: Board, E: Evaluator<B> + ?Sized> Search<'a, B, E> {
    pub fn new(
        evaluator: &'a mut E,
        guard: TimeGuard<'a>,
        player: PlayerId,
        tie_break: TieBreak,
    ) -> Self {
        Self {
            evaluator,
            guard,
            player,
            tie_break,
            nodes: 0,
            _board: std::marker::PhantomData,
        }
    }

    /// Nodes entered so far, including the one that was cancelled.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn enter(&mut self) -> Result<(), SearchCancelled> {
        self.nodes += 1;
        self.guard.check()
    }

    /// Scores `state` if it ends the recursion: the side to move is stuck,
    /// or no depth is left.
    fn leaf(&mut self, state: &B, moves: &[Move], depth: u32) -> Option<SearchResult> {
        let choice = match moves.first() {
            None => MoveChoice::NoMoves,
            Some(&first) if depth == 0 => MoveChoice::Horizon(first),
            Some(_) => return None,
        };
        Some(SearchResult {
            score: self.evaluator.evaluate(state, self.player),
            choice,
        })
    }

    /// Plain depth-limited minimax.
    pub fn minimax(
        &mut self,
        state: &B,
        depth: u32,
        maximizing_player: bool,
    ) -> Result<SearchResult, SearchCancelled> {
        self.enter()?;

        let moves = state.legal_moves(None);
        if let Some(result) = self.leaf(state, &moves, depth) {
            return Ok(result);
        }

        let mut scored = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let child = self.minimax(&state.forecast(mv), depth - 1, !maximizing_player)?;
            scored.push((child.score, mv));
        }

        Ok(self.select(&scored, maximizing_player))
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Moves are tried in enumeration order. Once `beta <= alpha` the
    /// remaining siblings are skipped and the choice is made among the moves
    /// already scored.
    pub fn alphabeta(
        &mut self,
        state: &B,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing_player: bool,
    ) -> Result<SearchResult, SearchCancelled> {
        self.enter()?;

        let moves = state.legal_moves(None);
        if let Some(result) = self.leaf(state, &moves, depth) {
            return Ok(result);
        }

        let mut scored = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let child = self.alphabeta(
                &state.forecast(mv),
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )?;
            scored.push((child.score, mv));

            if maximizing_player && child.score > alpha {
                alpha = child.score;
            } else if !maximizing_player && child.score < beta {
                beta = child.score;
            }

            if beta <= alpha {
                trace!(
                    depth,
                    explored = scored.len(),
                    skipped = moves.len() - scored.len(),
                    "cutoff"
                );
                break;
            }
        }

        Ok(self.select(&scored, maximizing_player))
    }

    /// Picks the best `(score, move)` pair for the layer. `scored` is never
    /// empty: leaves without moves return before any child is searched.
    fn select(&self, scored: &[(f64, Move)], maximizing_player: bool) -> SearchResult {
        let wanted = if maximizing_player {
            Ordering::Greater
        } else {
            Ordering::Less
        };

        let mut best = scored[0];
        for &candidate in &scored[1..] {
            let by_score = candidate.0.partial_cmp(&best.0).unwrap_or(Ordering::Equal);
            let order = match self.tie_break {
                TieBreak::Lexicographic => by_score.then(candidate.1.cmp(&best.1)),
                TieBreak::FirstEnumerated => by_score,
            };
            if order == wanted {
                best = candidate;
            }
        }

        SearchResult {
            score: best.0,
            choice: MoveChoice::Best(best.1),
        }
    }
}
