use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate results over many solved distributions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub games: usize,
    pub p0: usize,
    pub p1: usize,
    pub draws: usize,
    /// Distributions whose opening offers a trap of either kind.
    pub traps: usize,
    pub positions: usize,
    pub margins: BTreeMap<Score, usize>,
}

impl Tally {
    /// Counts one solved distribution.
    pub fn absorb(mut self, solver: &Solver) -> Self {
        self.games += 1;
        match solver.winner() {
            Outcome::Win(Player::P0) => self.p0 += 1,
            Outcome::Win(Player::P1) => self.p1 += 1,
            Outcome::Draw => self.draws += 1,
        }
        if solver.trap_take().is_some() || solver.trap_beat().is_some() {
            self.traps += 1;
        }
        self.positions += solver.table().len();
        *self.margins.entry(solver.margin()).or_default() += 1;
        self
    }
    /// Combines two disjoint tallies.
    pub fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.p0 += other.p0;
        self.p1 += other.p1;
        self.draws += other.draws;
        self.traps += other.traps;
        self.positions += other.positions;
        for (margin, count) in other.margins {
            *self.margins.entry(margin).or_default() += count;
        }
        self
    }
}

impl From<&Solver> for Tally {
    fn from(solver: &Solver) -> Self {
        Self::default().absorb(solver)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games     {}", self.games)?;
        writeln!(f, "P0 wins   {}", self.p0)?;
        writeln!(f, "P1 wins   {}", self.p1)?;
        writeln!(f, "draws     {}", self.draws)?;
        writeln!(f, "traps     {}", self.traps)?;
        writeln!(f, "positions {}", self.positions)?;
        write!(f, "margins  ")?;
        self.margins
            .iter()
            .try_for_each(|(margin, count)| write!(f, " {}:{}", margin, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(cards: &[Player], variant: Variant) -> Solver {
        Solver::new(Config::new(cards.to_vec(), Player::P0, variant)).unwrap()
    }

    #[test]
    fn absorb_counts_outcomes() {
        let tally = Tally::default()
            .absorb(&solver(&[Player::P0, Player::P1], Variant::Fool))
            .absorb(&solver(&[Player::P0, Player::P1], Variant::DrawFool))
            .absorb(&solver(&[Player::P0], Variant::Fool));
        assert!(tally.games == 3);
        assert!(tally.p0 == 1);
        assert!(tally.p1 == 1);
        assert!(tally.draws == 1);
        assert!(tally.traps == 2);
        assert!(tally.margins.get(&0) == Some(&2));
        assert!(tally.margins.get(&1) == Some(&1));
    }

    #[test]
    fn merge_is_order_free() {
        let a = Tally::from(&solver(&[Player::P0, Player::P1], Variant::Fool));
        let b = Tally::from(&solver(&[Player::P1, Player::P1, Player::P0], Variant::Fool));
        assert!(a.clone().merge(b.clone()) == b.merge(a));
    }
}
