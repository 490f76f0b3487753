use crate::*;

/// Ownership of every active slot, packed into one integer.
///
/// Bit `i` is the owner of slot `i` (set means `P1`). One extra sentinel bit
/// sits just above the highest slot so that distributions of different sizes
/// never share an encoding, and so the size can be read back from the integer.
///
/// ```text
/// slots   0 1 2 3
/// owners  0 1 1 0
/// packed  0b1_0110 = 22
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(u64);

impl State {
    /// Number of active slots.
    pub fn size(&self) -> usize {
        (u64::BITS - 1 - self.0.leading_zeros()) as usize
    }
    pub fn owner(&self, slot: usize) -> Player {
        Player::from(self.0 >> slot & 1 == 1)
    }
    /// Active slots held by `player`, lowest rank first.
    pub fn slots(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(move |&slot| self.owner(slot) == player)
    }
    /// The player holding every active card, if the game is over.
    ///
    /// An empty deck satisfies both conditions; `P0` is reported because it
    /// is checked first.
    pub fn holder(&self) -> Option<Player> {
        match self.0 & self.mask() {
            0 => Some(Player::P0),
            bits if bits == self.mask() => Some(Player::P1),
            _ => None,
        }
    }

    /// Hands `slot` to the other player.
    pub fn flip(&mut self, slot: usize) {
        self.0 ^= 1 << slot;
    }
    /// Hands every active slot to the other player.
    pub fn mirror(&mut self) {
        self.0 ^= self.mask();
    }
    /// Drops `slot`, shifting every slot above it down by one.
    pub fn remove(&mut self, slot: usize) -> Player {
        let owner = self.owner(slot);
        let below = self.0 & Self::below(slot);
        let above = self.0 >> (slot + 1);
        self.0 = below | above << slot;
        owner
    }
    /// Opens `slot` for `owner`, shifting every slot from it upward by one.
    pub fn insert(&mut self, slot: usize, owner: Player) {
        let below = self.0 & Self::below(slot);
        let above = self.0 >> slot;
        self.0 = below | u64::from(owner) << slot | above << (slot + 1);
    }

    fn mask(&self) -> u64 {
        Self::below(self.size())
    }
    fn below(slot: usize) -> u64 {
        (1 << slot) - 1
    }
}

/// ownership sequence isomorphism
/// Σ owner[i]·2^i + 2^n
impl From<&[Player]> for State {
    fn from(owners: &[Player]) -> Self {
        assert!(owners.len() <= MAX_CARDS, "deck larger than packed state");
        Self(
            owners
                .iter()
                .enumerate()
                .map(|(i, &owner)| u64::from(owner) << i)
                .fold(1 << owners.len(), |bits, bit| bits | bit),
        )
    }
}
impl From<State> for Vec<Player> {
    fn from(state: State) -> Self {
        (0..state.size()).map(|slot| state.owner(slot)).collect()
    }
}
impl From<State> for u64 {
    fn from(state: State) -> Self {
        state.0
    }
}

/// str isomorphism
/// one digit per slot, lowest rank first
impl TryFrom<&str> for State {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let owners = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| match c {
                '0' => Ok(Player::P0),
                '1' => Ok(Player::P1),
                c => Err(anyhow::anyhow!("invalid owner digit: {}", c)),
            })
            .collect::<anyhow::Result<Vec<Player>>>()?;
        match owners.len() {
            0 => Err(anyhow::anyhow!("empty distribution")),
            n if n > MAX_CARDS => Err(anyhow::anyhow!("{} cards exceed {}", n, MAX_CARDS)),
            _ => Ok(Self::from(owners.as_slice())),
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (0..self.size()).try_for_each(|slot| write!(f, "{}", u64::from(self.owner(slot))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(s: &str) -> State {
        State::try_from(s).unwrap()
    }

    #[test]
    fn sentinel_encoding() {
        assert!(u64::from(state("0110")) == 0b1_0110);
        assert!(u64::from(state("0")) == 0b10);
        assert!(u64::from(state("1")) == 0b11);
        assert!(state("0110").size() == 4);
    }

    #[test]
    fn sizes_never_collide() {
        assert!(state("0") != state("00"));
        assert!(state("1") != state("01"));
    }

    #[test]
    fn bijective_owners() {
        let s = state("1001101");
        assert!(State::from(Vec::<Player>::from(s).as_slice()) == s);
        assert!(s.to_string() == "1001101");
    }

    #[test]
    fn mirror_flips_every_slot() {
        let mut s = state("0110");
        s.mirror();
        assert!(s == state("1001"));
        assert!(s.size() == 4);
    }

    #[test]
    fn remove_then_insert() {
        let original = state("011010");
        let mut s = original;
        let hi = s.remove(4);
        let lo = s.remove(1);
        assert!(s == state("0100"));
        s.insert(1, lo);
        s.insert(4, hi);
        assert!(s == original);
    }

    #[test]
    fn holder_of_finished_games() {
        assert!(state("000").holder() == Some(Player::P0));
        assert!(state("111").holder() == Some(Player::P1));
        assert!(state("101").holder() == None);
    }

    #[test]
    fn empty_deck_is_held_by_p0() {
        let mut s = state("01");
        s.remove(1);
        s.remove(0);
        assert!(s.size() == 0);
        assert!(s.holder() == Some(Player::P0));
    }

    #[test]
    fn reject_malformed() {
        assert!(State::try_from("").is_err());
        assert!(State::try_from("012").is_err());
        assert!(State::try_from("0".repeat(64).as_str()).is_err());
    }
}
