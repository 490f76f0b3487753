use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The four rule sets: {no draws, draws} × {card counts, signed weights}.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Variant {
    /// Someone always loses; margin is the loser's card count.
    #[default]
    Fool,
    /// A margin of zero is reported as a draw.
    DrawFool,
    /// Cards carry signed weights; margin is the loser's weight sum.
    WeightedFool,
    /// Weighted, and a margin of zero is a draw.
    WeightedDrawFool,
}

impl Variant {
    pub fn draws(&self) -> bool {
        matches!(self, Self::DrawFool | Self::WeightedDrawFool)
    }
    pub fn weighted(&self) -> bool {
        matches!(self, Self::WeightedFool | Self::WeightedDrawFool)
    }
    pub fn all() -> [Self; 4] {
        [
            Self::Fool,
            Self::DrawFool,
            Self::WeightedFool,
            Self::WeightedDrawFool,
        ]
    }
}

impl Arbitrary for Variant {
    fn random() -> Self {
        Self::all()[rand::random_range(0..4)]
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fool => write!(f, "fool"),
            Self::DrawFool => write!(f, "draw-fool"),
            Self::WeightedFool => write!(f, "weighted-fool"),
            Self::WeightedDrawFool => write!(f, "weighted-draw-fool"),
        }
    }
}
