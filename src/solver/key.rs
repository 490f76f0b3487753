use crate::*;

/// Transposition key. Ownership alone identifies an unweighted position;
/// weighted positions also need the weights still in play.
///
/// The canonical flag is absent: a mirrored sub-problem is the
/// same position as its unmirrored twin and is solved once for both.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key {
    state: State,
    weights: Option<Vec<Weight>>,
}

impl Key {
    pub fn state(&self) -> State {
        self.state
    }
    pub fn weights(&self) -> Option<&[Weight]> {
        self.weights.as_deref()
    }
}

impl From<&Deck> for Key {
    fn from(deck: &Deck) -> Self {
        Self {
            state: deck.state(),
            weights: deck.weights().map(<[Weight]>::to_vec),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weights {
            Some(ref weights) => write!(f, "{} {:?}", self.state, weights),
            None => write!(f, "{}", self.state),
        }
    }
}
