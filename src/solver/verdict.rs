use crate::*;

/// Who wins a position and by how much, in the frame where `P0` leads.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Player,
    pub margin: Score,
}

impl Verdict {
    /// The same verdict seen from the mirrored frame.
    pub fn mirror(self) -> Self {
        Self {
            winner: self.winner.other(),
            margin: self.margin,
        }
    }
    /// How good this verdict is for `player`; larger is better.
    ///
    /// Winning beats losing. A winner wants the largest margin, a loser the
    /// smallest. Magnitudes are compared because weighted margins may be negative.
    pub fn rank(&self, player: Player) -> (bool, Score) {
        match self.winner == player {
            true => (true, self.margin.abs()),
            false => (false, -self.margin.abs()),
        }
    }
    /// Equal in rank, which is all either player can distinguish.
    pub fn ties(&self, other: &Self) -> bool {
        self.rank(Player::P0) == other.rank(Player::P0)
    }

    /// Terminal evaluation: the game is over once one player holds every card.
    ///
    /// The holder is the fool, unless the cards they hold sum to a negative
    /// weight, in which case they win. The margin is the held value either way.
    pub fn terminal(deck: &Deck) -> Option<Self> {
        let holder = deck.state().holder()?;
        let margin = deck.value();
        let winner = match margin < 0 {
            true => holder,
            false => holder.other(),
        };
        Some(Self { winner, margin })
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.winner, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(owners: &str, weights: Option<Vec<Weight>>) -> Deck {
        Deck::new(State::try_from(owners).unwrap(), weights)
    }

    #[test]
    fn holder_is_the_fool() {
        let v = Verdict::terminal(&deck("000", None)).unwrap();
        assert!(v == Verdict { winner: Player::P1, margin: 3 });
        let v = Verdict::terminal(&deck("11", None)).unwrap();
        assert!(v == Verdict { winner: Player::P0, margin: 2 });
        assert!(Verdict::terminal(&deck("01", None)).is_none());
    }

    #[test]
    fn negative_weight_inverts_the_fool() {
        let v = Verdict::terminal(&deck("00", Some(vec![-3, 1]))).unwrap();
        assert!(v == Verdict { winner: Player::P0, margin: -2 });
        let v = Verdict::terminal(&deck("11", Some(vec![-3, 1]))).unwrap();
        assert!(v == Verdict { winner: Player::P1, margin: -2 });
        let v = Verdict::terminal(&deck("11", Some(vec![3, -3]))).unwrap();
        assert!(v == Verdict { winner: Player::P0, margin: 0 });
    }

    #[test]
    fn empty_deck_goes_to_p1() {
        let mut d = deck("01", None);
        d.remove(0, 1);
        let v = Verdict::terminal(&d).unwrap();
        assert!(v == Verdict { winner: Player::P1, margin: 0 });
    }

    #[test]
    fn rank_orders_by_magnitude() {
        let big = Verdict { winner: Player::P0, margin: -5 };
        let small = Verdict { winner: Player::P0, margin: 2 };
        let loss = Verdict { winner: Player::P1, margin: 0 };
        assert!(big.rank(Player::P0) > small.rank(Player::P0));
        assert!(small.rank(Player::P0) > loss.rank(Player::P0));
        assert!(loss.rank(Player::P1) > big.rank(Player::P1));
        assert!(small.rank(Player::P1) > big.rank(Player::P1));
    }

    #[test]
    fn mirror_keeps_margin() {
        let v = Verdict { winner: Player::P0, margin: 3 };
        assert!(v.mirror() == Verdict { winner: Player::P1, margin: 3 });
    }
}
