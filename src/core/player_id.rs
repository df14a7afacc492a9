use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of one of the two competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0 + 1)
    }
}

/// The opponent of `player` in a two-player game.
pub fn other_player(player: PlayerId) -> PlayerId {
    PlayerId::new(1 - player.id().min(1))
}
