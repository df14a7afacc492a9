//! Reference knight-move Isolation board.
//!
//! Each player owns a single piece. On their first turn a player may drop it on
//! any blank cell; afterwards it moves like a chess knight onto a blank cell.
//! Every visited cell is blocked for the rest of the game. A player with no
//! move on their turn loses.

use crate::core::{Board, Move, MoveList, PlayerId, other_player};
use fixedbitset::FixedBitSet;
use std::fmt;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Isolation {
    width: u32,
    height: u32,
    blocked: FixedBitSet,
    locations: [Option<Move>; 2],
    active: PlayerId,
    move_count: u32,
}

fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Isolation {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blocked: FixedBitSet::with_capacity(cell_count(width, height)),
            locations: [None, None],
            active: PlayerId::new(0),
            move_count: 0,
        }
    }

    fn index(&self, cell: Move) -> usize {
        cell.row() as usize * self.width as usize + cell.col() as usize
    }

    fn is_blank(&self, cell: Move) -> bool {
        cell.is_within(self.width, self.height) && !self.blocked.contains(self.index(cell))
    }

    /// Blank cells, column by column.
    pub fn blank_cells(&self) -> MoveList {
        (0..self.width as i32)
            .flat_map(|col| (0..self.height as i32).map(move |row| Move::new(row, col)))
            .filter(|&cell| self.is_blank(cell))
            .collect()
    }

    /// Marks a cell as unavailable without moving anyone onto it.
    pub fn block(&mut self, cell: Move) {
        if cell.is_within(self.width, self.height) {
            let idx = self.index(cell);
            self.blocked.insert(idx);
        }
    }

    /// Plays `mv` for the active player in place and passes the turn.
    ///
    /// The move is not validated; callers check it against
    /// [`Board::legal_moves`] first.
    pub fn apply_move(&mut self, mv: Move) {
        self.block(mv);
        self.locations[self.active.id() as usize] = Some(mv);
        self.active = other_player(self.active);
        self.move_count += 1;
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves(None).contains(&mv)
    }
}

impl Board for Isolation {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves(&self, player: Option<PlayerId>) -> MoveList {
        let player = player.unwrap_or(self.active);
        match self.player_location(player) {
            None => self.blank_cells(),
            Some(loc) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| loc.offset(dr, dc))
                .filter(|&cell| self.is_blank(cell))
                .collect(),
        }
    }

    fn forecast(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        let opponent = other_player(player);
        self.active == opponent && self.legal_moves(Some(opponent)).is_empty()
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        self.active == player && self.legal_moves(Some(player)).is_empty()
    }

    fn player_location(&self, player: PlayerId) -> Option<Move> {
        self.locations.get(player.id() as usize).copied().flatten()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Move::new(row, col);
                let glyph = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
