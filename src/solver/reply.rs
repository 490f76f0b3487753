use serde::Deserialize;
use serde::Serialize;

/// The responder's answer to a led card.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Pick the led card up. The leader leads again.
    Take,
    /// Beat the led card with the card in this slot. The responder leads next.
    Beat(usize),
}

/// Which of the responder's two answers a trap lure punishes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Trap {
    /// Catch the take: the responder must take, beating is the mistake.
    Take,
    /// Catch the pass: the responder must beat, taking is the mistake.
    Beat,
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Take => write!(f, "take"),
            Self::Beat(slot) => write!(f, "beat with slot {}", slot),
        }
    }
}
