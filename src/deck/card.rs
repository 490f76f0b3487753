use crate::*;

/// A card lifted out of the deck, with everything needed to put it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub slot: usize,
    pub owner: Player,
    pub weight: Option<Weight>,
}
