use serde::Deserialize;
use serde::Serialize;

/// What a player asks to do. Cards are named by their original 1-indexed label.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Lead this card, or beat the led card with it.
    Card(usize),
    /// Pick up the led card.
    Take,
}

/// A move that was played, as it appears in the game record.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Ply {
    /// This card was laid on the empty table.
    Lead(usize),
    /// The led card, now in the responder's hand.
    Take(usize),
    /// The card that beat the led card. Both left the game.
    Beat(usize),
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card(label) => write!(f, "card {}", label),
            Self::Take => write!(f, "take"),
        }
    }
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lead(label) => write!(f, "LEAD {}", label),
            Self::Take(label) => write!(f, "TAKE {}", label),
            Self::Beat(label) => write!(f, "BEAT {}", label),
        }
    }
}
