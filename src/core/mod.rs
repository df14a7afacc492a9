//! Data model shared by the search and the game collaborator.

pub mod board;
pub mod coord;
pub mod player_id;

pub use board::{Board, MoveList};
pub use coord::Move;
pub use player_id::{PlayerId, other_player};
