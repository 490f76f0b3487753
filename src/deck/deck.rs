use crate::*;

/// The mutable search state one solver explores in place.
///
/// Weights, when present, travel with their slot: every operator that moves
/// ownership bits moves the weight sequence the same way. `reverse` records
/// whether `P0` here is the real `P1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    state: State,
    weights: Option<Vec<Weight>>,
    reverse: bool,
}

impl Deck {
    pub fn new(state: State, weights: Option<Vec<Weight>>) -> Self {
        debug_assert!(weights.as_ref().map_or(true, |w| w.len() == state.size()));
        Self {
            state,
            weights,
            reverse: false,
        }
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn size(&self) -> usize {
        self.state.size()
    }
    pub fn weights(&self) -> Option<&[Weight]> {
        self.weights.as_deref()
    }
    pub fn weighted(&self) -> bool {
        self.weights.is_some()
    }
    pub fn reverse(&self) -> bool {
        self.reverse
    }
    pub fn owner(&self, slot: usize) -> Player {
        self.state.owner(slot)
    }
    pub fn slots(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        self.state.slots(player)
    }
    /// Card count, or summed weight in the weighted variants.
    pub fn value(&self) -> Score {
        match self.weights {
            Some(ref weights) => weights.iter().sum(),
            None => self.size() as Score,
        }
    }
    /// Transposition key: ownership plus, when weighted, the weight sequence.
    pub fn key(&self) -> Key {
        Key::from(self)
    }
}

// mutation operators reserved for the solver and playback
impl Deck {
    /// Exchanges slots `i` and `j` out of the deck. Returns both cards,
    /// lowest slot first, for [`Deck::add`].
    pub fn remove(&mut self, i: usize, j: usize) -> [Card; 2] {
        debug_assert!(i != j);
        let (lo, hi) = (i.min(j), i.max(j));
        let hi = self.lift(hi);
        let lo = self.lift(lo);
        [lo, hi]
    }
    /// Exact inverse of [`Deck::remove`].
    pub fn add(&mut self, cards: [Card; 2]) {
        let [lo, hi] = cards;
        debug_assert!(lo.slot < hi.slot);
        self.place(lo);
        self.place(hi);
    }
    /// Hands `slot` to the other player. Models a take.
    pub fn flip(&mut self, slot: usize) {
        self.state.flip(slot);
    }
    /// Hands every card to the other player and toggles the canonical flag.
    pub fn mirror(&mut self) {
        self.state.mirror();
        self.reverse = !self.reverse;
    }

    fn lift(&mut self, slot: usize) -> Card {
        Card {
            slot,
            owner: self.state.remove(slot),
            weight: self.weights.as_mut().map(|w| w.remove(slot)),
        }
    }
    fn place(&mut self, card: Card) {
        self.state.insert(card.slot, card.owner);
        if let (Some(weights), Some(weight)) = (self.weights.as_mut(), card.weight) {
            weights.insert(card.slot, weight);
        }
    }
}

/// `config` must be validated first: more than [`MAX_CARDS`] cards do not
/// fit the packed state and panic.
impl From<&Config> for Deck {
    fn from(config: &Config) -> Self {
        let mut deck = Self::new(
            State::from(config.cards.as_slice()),
            config.weights.clone(),
        );
        if config.leader == Player::P1 {
            deck.mirror();
        }
        deck
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let owners = (0..self.size())
            .map(|slot| self.owner(slot).orient(self.reverse))
            .map(|owner| u64::from(owner).to_string())
            .collect::<Vec<String>>()
            .join("");
        match self.weights {
            Some(ref weights) => write!(f, "{} {:?}", owners, weights),
            None => write!(f, "{}", owners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(owners: &str, weights: Option<Vec<Weight>>) -> Deck {
        Deck::new(State::try_from(owners).unwrap(), weights)
    }

    #[test]
    fn remove_compacts_weights_with_slots() {
        let mut d = deck("01101", Some(vec![5, -1, 2, 7, -3]));
        let cards = d.remove(3, 1);
        assert!(d.state() == State::try_from("011").unwrap());
        assert!(d.weights() == Some(&[5, 2, -3][..]));
        assert!(cards[0].slot == 1 && cards[0].weight == Some(-1));
        assert!(cards[1].slot == 3 && cards[1].weight == Some(7));
    }

    #[test]
    fn add_restores_remove() {
        let original = deck("01101", Some(vec![5, -1, 2, 7, -3]));
        let mut d = original.clone();
        let cards = d.remove(0, 4);
        d.add(cards);
        assert!(d == original);
        let original = deck("1100", None);
        let mut d = original.clone();
        let cards = d.remove(2, 1);
        d.add(cards);
        assert!(d == original);
    }

    #[test]
    fn mirror_toggles_reverse() {
        let mut d = deck("0011", None);
        d.mirror();
        assert!(d.reverse());
        assert!(d.state() == State::try_from("1100").unwrap());
        d.mirror();
        assert!(!d.reverse());
    }

    #[test]
    fn value_by_variant() {
        assert!(deck("0101", None).value() == 4);
        assert!(deck("0101", Some(vec![1, -4, 2, -1])).value() == -2);
    }

    #[test]
    #[should_panic(expected = "deck larger than packed state")]
    fn unvalidated_oversized_config_panics() {
        let config = Config::new(vec![Player::P0; MAX_CARDS + 1], Player::P0, Variant::Fool);
        Deck::from(&config);
    }

    #[test]
    fn display_uses_real_numbering() {
        let mut d = deck("0011", None);
        d.mirror();
        assert!(d.to_string() == "0011");
    }
}
