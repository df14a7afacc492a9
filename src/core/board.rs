use crate::core::{Move, PlayerId, other_player};
use smallvec::SmallVec;

/// Moves in the order the rules engine enumerates them.
///
/// Enumeration order is significant: tie-breaks and alpha-beta cutoffs both
/// depend on it.
pub type MoveList = SmallVec<[Move; 8]>;

/// The rules engine the search consults as an oracle.
///
/// Implementations must be value-like: [`Board::forecast`] returns a new state
/// and leaves `self` untouched, so sibling branches never observe each other.
pub trait Board: Sized {
    /// The player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Moves available to `player`, or to the active player when `None`.
    fn legal_moves(&self, player: Option<PlayerId>) -> MoveList;

    /// The state reached when the active player plays `mv`.
    fn forecast(&self, mv: Move) -> Self;

    fn is_winner(&self, player: PlayerId) -> bool;

    fn is_loser(&self, player: PlayerId) -> bool;

    fn opponent(&self, player: PlayerId) -> PlayerId {
        other_player(player)
    }

    /// Where `player` stands, or `None` before their first placement.
    fn player_location(&self, player: PlayerId) -> Option<Move>;

    fn width(&self) -> u32;

    fn height(&self) -> u32;
}
