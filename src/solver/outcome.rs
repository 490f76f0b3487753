use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The result of a game in real player numbering.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Win(player) => Some(*player),
            Self::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win(player) => write!(f, "{}", player),
            Self::Draw => write!(f, "draw"),
        }
    }
}
