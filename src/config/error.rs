/// Faults in a starting distribution. Any of these prevents solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Empty,
    TooLarge(usize),
    SweepTooLarge(usize),
    Player(usize),
    MissingWeights,
    UnexpectedWeights,
    WeightCount { cards: usize, weights: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty deck"),
            Self::TooLarge(n) => write!(f, "{} cards exceed the maximum of {}", n, crate::MAX_CARDS),
            Self::SweepTooLarge(n) => write!(f, "cannot sweep {} cards, the maximum is {}", n, crate::MAX_SWEEP),
            Self::Player(n) => write!(f, "invalid player id: {}", n),
            Self::MissingWeights => write!(f, "weighted variant without weights"),
            Self::UnexpectedWeights => write!(f, "weights given for an unweighted variant"),
            Self::WeightCount { cards, weights } => {
                write!(f, "{} weights for {} cards", weights, cards)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
