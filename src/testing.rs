//! Synthetic game trees for exercising the search cores.

use crate::bot::evaluation::Evaluator;
use crate::bot::timeout::TimeBudget;
use crate::core::{Board, Move, MoveList, PlayerId};
use std::cell::Cell;
use std::rc::Rc;

const P1: PlayerId = PlayerId::new(0);

#[derive(Debug, Clone)]
struct Node {
    /// Value for player 1; `+inf`/`-inf` mark a decided game.
    value: f64,
    children: Vec<(Move, usize)>,
}

/// A hand-built game tree. Player 1 moves at even plies, player 2 at odd ones.
#[derive(Debug, Clone)]
pub(crate) struct TreeBoard {
    nodes: Rc<Vec<Node>>,
    at: usize,
    ply: u32,
}

impl TreeBoard {
    fn from_nodes(nodes: Vec<Node>) -> Self {
        Self {
            nodes: Rc::new(nodes),
            at: 0,
            ply: 0,
        }
    }

    /// A single node with no moves.
    pub(crate) fn leaf(value: f64) -> Self {
        Self::from_nodes(vec![Node {
            value,
            children: Vec::new(),
        }])
    }

    /// A root whose children are leaves with the given values.
    pub(crate) fn build(root_value: f64, children: &[(Move, f64)]) -> Self {
        let mut nodes = vec![Node {
            value: root_value,
            children: Vec::new(),
        }];
        for &(mv, value) in children {
            nodes.push(Node {
                value,
                children: Vec::new(),
            });
            let idx = nodes.len() - 1;
            nodes[0].children.push((mv, idx));
        }
        Self::from_nodes(nodes)
    }

    /// Two plies: a root over interior nodes over leaves. Interior nodes and
    /// the root are worth `0.0`; an interior node with no leaves has no moves.
    pub(crate) fn nested(children: &[(Move, &[(Move, f64)])]) -> Self {
        let mut nodes = vec![Node {
            value: 0.0,
            children: Vec::new(),
        }];
        for &(mv, leaves) in children {
            nodes.push(Node {
                value: 0.0,
                children: Vec::new(),
            });
            let child = nodes.len() - 1;
            nodes[0].children.push((mv, child));
            for &(leaf_mv, value) in leaves {
                nodes.push(Node {
                    value,
                    children: Vec::new(),
                });
                let leaf = nodes.len() - 1;
                nodes[child].children.push((leaf_mv, leaf));
            }
        }
        Self::from_nodes(nodes)
    }

    /// Overrides the value of the node reached by following `path`.
    pub(crate) fn with_value(mut self, path: &[Move], value: f64) -> Self {
        let mut at = 0;
        for mv in path {
            at = self.nodes[at]
                .children
                .iter()
                .find(|(m, _)| m == mv)
                .map(|&(_, idx)| idx)
                .expect("path must exist in the tree");
        }
        Rc::make_mut(&mut self.nodes)[at].value = value;
        self
    }

    fn node(&self) -> &Node {
        &self.nodes[self.at]
    }

    fn value_for(&self, player: PlayerId) -> f64 {
        if player == P1 {
            self.node().value
        } else {
            -self.node().value
        }
    }
}

impl Board for TreeBoard {
    fn active_player(&self) -> PlayerId {
        PlayerId::new((self.ply % 2) as u8)
    }

    fn legal_moves(&self, _player: Option<PlayerId>) -> MoveList {
        self.node().children.iter().map(|&(mv, _)| mv).collect()
    }

    fn forecast(&self, mv: Move) -> Self {
        let at = self
            .node()
            .children
            .iter()
            .find(|(m, _)| *m == mv)
            .map(|&(_, idx)| idx)
            .expect("forecast called with a move outside the tree");
        Self {
            nodes: Rc::clone(&self.nodes),
            at,
            ply: self.ply + 1,
        }
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        self.value_for(player) == f64::INFINITY
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        self.value_for(player) == f64::NEG_INFINITY
    }

    fn player_location(&self, _player: PlayerId) -> Option<Move> {
        None
    }

    fn width(&self) -> u32 {
        0
    }

    fn height(&self) -> u32 {
        0
    }
}

/// Reads the stored node value.
pub(crate) struct LeafValue;

impl Evaluator<TreeBoard> for LeafValue {
    fn heuristic(&mut self, state: &TreeBoard, player: PlayerId) -> f64 {
        state.value_for(player)
    }
}

/// Reports plenty of time for the first `queries` reads, then none.
pub(crate) struct CountdownBudget {
    left: Cell<u64>,
}

impl CountdownBudget {
    pub(crate) fn new(queries: u64) -> Self {
        Self {
            left: Cell::new(queries),
        }
    }
}

impl TimeBudget for CountdownBudget {
    fn time_left(&self) -> f64 {
        match self.left.get() {
            0 => 0.0,
            n => {
                self.left.set(n - 1);
                1_000.0
            }
        }
    }
}

pub(crate) fn ample_time() -> impl Fn() -> f64 {
    || 1_000_000.0
}
