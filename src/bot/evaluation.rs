//! Heuristic evaluation functions.
//!
//! Every evaluator scores a state from the point of view of one player. A
//! decided game always scores `-inf` (lost) or `+inf` (won) before any
//! heuristic runs; only undecided states reach [`Evaluator::heuristic`].

use crate::core::{Board, PlayerId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub trait Evaluator<B: Board> {
    /// Score of an undecided state for `player`.
    fn heuristic(&mut self, state: &B, player: PlayerId) -> f64;

    fn evaluate(&mut self, state: &B, player: PlayerId) -> f64 {
        if state.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if state.is_winner(player) {
            return f64::INFINITY;
        }
        self.heuristic(state, player)
    }
}

impl<B: Board, E: Evaluator<B> + ?Sized> Evaluator<B> for Box<E> {
    fn heuristic(&mut self, state: &B, player: PlayerId) -> f64 {
        (**self).heuristic(state, player)
    }

    fn evaluate(&mut self, state: &B, player: PlayerId) -> f64 {
        (**self).evaluate(state, player)
    }
}

fn mobility<B: Board>(state: &B, player: PlayerId) -> (f64, f64) {
    let own = state.legal_moves(Some(player)).len() as f64;
    let opp = state.legal_moves(Some(state.opponent(player))).len() as f64;
    (own, opp)
}

/// Own move count minus the opponent's.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityDifference;

impl<B: Board> Evaluator<B> for MobilityDifference {
    fn heuristic(&mut self, state: &B, player: PlayerId) -> f64 {
        let (own, opp) = mobility(state, player);
        own - opp
    }
}

/// Squared own move count minus the squared opponent count.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredMobilityDifference;

impl<B: Board> Evaluator<B> for SquaredMobilityDifference {
    fn heuristic(&mut self, state: &B, player: PlayerId) -> f64 {
        let (own, opp) = mobility(state, player);
        own * own - opp * opp
    }
}

/// Squared mobility difference plus the player's distance from the middle
/// of the board.
///
/// The distance is added as-is, so on small boards it can outweigh the
/// mobility term near the edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredMobilityPlusCentrality;

impl SquaredMobilityPlusCentrality {
    fn middle(extent: u32) -> i32 {
        let half = (extent / 2) as i32;
        if extent % 2 == 1 { half + 1 } else { half }
    }

    fn distance_from_middle<B: Board>(state: &B, player: PlayerId) -> f64 {
        let Some(loc) = state.player_location(player) else {
            return 0.0;
        };
        // One middle index for both axes, taken from the height.
        let middle = Self::middle(state.height());
        f64::from((middle - loc.row()).abs() + (middle - loc.col()).abs())
    }
}

impl<B: Board> Evaluator<B> for SquaredMobilityPlusCentrality {
    fn heuristic(&mut self, state: &B, player: PlayerId) -> f64 {
        let (own, opp) = mobility(state, player);
        own * own - opp * opp + Self::distance_from_middle(state, player)
    }
}

/// Uniform noise in `[-0.5, 0.5)`. Only useful as a weak control opponent.
#[derive(Debug, Clone)]
pub struct RandomBaseline<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomBaseline<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBaseline<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<B: Board, R: Rng> Evaluator<B> for RandomBaseline<R> {
    fn heuristic(&mut self, _state: &B, _player: PlayerId) -> f64 {
        self.rng.random::<f64>() - 0.5
    }
}

/// Names an evaluator in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    MobilityDifference,
    SquaredMobilityDifference,
    #[default]
    SquaredMobilityPlusCentrality,
    RandomBaseline,
}

impl EvaluationKind {
    /// Builds the evaluator. `seed` only affects [`EvaluationKind::RandomBaseline`];
    /// without one it draws from the operating system.
    pub fn build<B: Board + 'static>(self, seed: Option<u64>) -> Box<dyn Evaluator<B>> {
        match self {
            EvaluationKind::MobilityDifference => Box::new(MobilityDifference),
            EvaluationKind::SquaredMobilityDifference => Box::new(SquaredMobilityDifference),
            EvaluationKind::SquaredMobilityPlusCentrality => {
                Box::new(SquaredMobilityPlusCentrality)
            }
            EvaluationKind::RandomBaseline => match seed {
                Some(seed) => Box::new(RandomBaseline::seeded(seed)),
                None => Box::new(RandomBaseline::from_os_rng()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::isolation::Isolation;

    const P1: PlayerId = PlayerId::new(0);
    const P2: PlayerId = PlayerId::new(1);

    /// 7x7 board with both players placed away from the edges.
    fn midgame() -> Isolation {
        Isolation::new(7, 7)
            .forecast(Move::new(2, 3))
            .forecast(Move::new(4, 4))
    }

    /// Player 1 to move with every knight square blocked.
    fn player_one_stuck() -> Isolation {
        let mut board = Isolation::new(5, 5);
        board.apply_move(Move::new(0, 0));
        board.apply_move(Move::new(4, 4));
        board.block(Move::new(1, 2));
        board.block(Move::new(2, 1));
        board
    }

    #[test]
    fn test_mobility_difference_counts_moves() {
        let board = midgame();
        let own = board.legal_moves(Some(P1)).len() as f64;
        let opp = board.legal_moves(Some(P2)).len() as f64;

        let score = MobilityDifference.evaluate(&board, P1);
        assert_eq!(score, own - opp);
        assert_eq!(MobilityDifference.evaluate(&board, P2), -score);
    }

    #[test]
    fn test_squared_mobility_difference_squares_counts() {
        let board = midgame();
        let own = board.legal_moves(Some(P1)).len() as f64;
        let opp = board.legal_moves(Some(P2)).len() as f64;

        assert_eq!(
            SquaredMobilityDifference.evaluate(&board, P1),
            own * own - opp * opp
        );
    }

    #[test]
    fn test_centrality_adds_distance_from_middle() {
        let board = midgame();
        let own = board.legal_moves(Some(P1)).len() as f64;
        let opp = board.legal_moves(Some(P2)).len() as f64;

        // 7x7 board: middle index is 7 / 2 + 1 = 4, player 1 stands on (2, 3)
        let bonus = (4.0_f64 - 2.0).abs() + (4.0_f64 - 3.0).abs();
        assert_eq!(
            SquaredMobilityPlusCentrality.evaluate(&board, P1),
            own * own - opp * opp + bonus
        );
    }

    #[test]
    fn test_centrality_on_even_board_uses_half_extent() {
        assert_eq!(SquaredMobilityPlusCentrality::middle(6), 3);
        assert_eq!(SquaredMobilityPlusCentrality::middle(7), 4);
    }

    #[test]
    fn test_centrality_uses_height_middle_for_columns() {
        // 5 wide, 3 tall: the middle index is 3 / 2 + 1 = 2 on both axes.
        let board = Isolation::new(5, 3)
            .forecast(Move::new(0, 4))
            .forecast(Move::new(2, 0));
        assert_eq!(board.legal_moves(Some(P1)).len(), 2);
        assert_eq!(board.legal_moves(Some(P2)).len(), 2);

        assert_eq!(
            SquaredMobilityPlusCentrality.evaluate(&board, P1),
            4.0,
            "Expected |2 - 0| + |2 - 4| with equal mobility"
        );
    }

    #[test]
    fn test_centrality_ignores_unplaced_player() {
        let board = Isolation::new(5, 5);
        assert_eq!(
            SquaredMobilityPlusCentrality.evaluate(&board, P1),
            0.0,
            "Both players see the same blank board and nobody is placed"
        );
    }

    #[test]
    fn test_terminal_scores_take_precedence_for_every_variant() {
        let board = player_one_stuck();
        assert!(board.is_loser(P1));
        assert!(board.is_winner(P2));

        let mut evaluators: Vec<Box<dyn Evaluator<Isolation>>> = vec![
            Box::new(MobilityDifference),
            Box::new(SquaredMobilityDifference),
            Box::new(SquaredMobilityPlusCentrality),
            Box::new(RandomBaseline::seeded(7)),
        ];
        for evaluator in evaluators.iter_mut() {
            assert_eq!(evaluator.evaluate(&board, P1), f64::NEG_INFINITY);
            assert_eq!(evaluator.evaluate(&board, P2), f64::INFINITY);
        }
    }

    #[test]
    fn test_random_baseline_stays_in_range() {
        let board = midgame();
        let mut evaluator = RandomBaseline::seeded(42);
        for _ in 0..1000 {
            let score = evaluator.evaluate(&board, P1);
            assert!((-0.5..0.5).contains(&score), "Out of range: {score}");
        }
    }

    #[test]
    fn test_random_baseline_is_reproducible_when_seeded() {
        let board = midgame();
        let mut a = RandomBaseline::seeded(9);
        let mut b = RandomBaseline::seeded(9);
        let left: Vec<f64> = (0..16).map(|_| a.evaluate(&board, P1)).collect();
        let right: Vec<f64> = (0..16).map(|_| b.evaluate(&board, P1)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_kind_builds_matching_evaluator() {
        let board = midgame();
        let mut built = EvaluationKind::MobilityDifference.build::<Isolation>(None);
        assert_eq!(
            built.evaluate(&board, P1),
            MobilityDifference.evaluate(&board, P1)
        );

        let mut seeded = EvaluationKind::RandomBaseline.build::<Isolation>(Some(3));
        let mut reference = RandomBaseline::seeded(3);
        assert_eq!(
            seeded.evaluate(&board, P1),
            reference.evaluate(&board, P1)
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EvaluationKind::SquaredMobilityPlusCentrality).unwrap();
        assert_eq!(json, "\"squared_mobility_plus_centrality\"");
    }
}
