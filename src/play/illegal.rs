/// A move playback refused. The game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illegal {
    /// Someone already holds every card.
    GameOver,
    /// Taking with nothing led.
    NothingToTake,
    /// No card with this label is still in play.
    UnknownCard(usize),
    /// The card belongs to the other player.
    NotYours(usize),
    /// A beat must outrank the led card.
    TooLow { led: usize, beat: usize },
    /// The mover is not the player to act.
    OutOfTurn,
}

impl std::fmt::Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameOver => write!(f, "the game is over"),
            Self::NothingToTake => write!(f, "no card on the table to take"),
            Self::UnknownCard(label) => write!(f, "card {} is not in play", label),
            Self::NotYours(label) => write!(f, "card {} belongs to the other player", label),
            Self::TooLow { led, beat } => write!(f, "card {} cannot beat card {}", beat, led),
            Self::OutOfTurn => write!(f, "not your turn"),
        }
    }
}

impl std::error::Error for Illegal {}
