use crate::*;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Every distribution of an `n`-card deck under one rule set.
///
/// Each distribution is solved by its own [`Solver`] on the rayon pool; no
/// table is shared between them.
#[derive(Debug, Clone)]
pub struct Sweep {
    size: usize,
    leader: Player,
    variant: Variant,
    weights: Option<Vec<Weight>>,
}

impl Sweep {
    /// Weighted variants start with every card worth one.
    pub fn new(size: usize, leader: Player, variant: Variant) -> Result<Self, ConfigError> {
        match size {
            0 => Err(ConfigError::Empty),
            n if n > MAX_SWEEP => Err(ConfigError::SweepTooLarge(n)),
            n => Ok(Self {
                size: n,
                leader,
                variant,
                weights: variant.weighted().then(|| vec![1; n]),
            }),
        }
    }
    /// Replaces the weights shared by every distribution.
    pub fn weights(mut self, weights: Vec<Weight>) -> Result<Self, ConfigError> {
        self.weights = Some(weights);
        self.config(0).validate()?;
        Ok(self)
    }
    pub fn size(&self) -> usize {
        self.size
    }

    /// The distribution whose bit `i` owns card `i`.
    pub fn config(&self, bits: u64) -> Config {
        Config {
            cards: (0..self.size)
                .map(|i| Player::from(bits >> i & 1 == 1))
                .collect(),
            leader: self.leader,
            weights: self.weights.clone(),
            variant: self.variant,
        }
    }

    pub fn run(&self) -> Result<Tally, ConfigError> {
        let start = std::time::Instant::now();
        let tally = (0..1u64 << self.size)
            .into_par_iter()
            .map(|bits| Solver::new(self.config(bits)))
            .map(|solver| solver.map(|ref s| Tally::from(s)))
            .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;
        log::info!(
            "swept {} distributions of {} cards in {:?}",
            tally.games,
            self.size,
            start.elapsed()
        );
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_distribution() {
        let tally = Sweep::new(6, Player::P0, Variant::Fool).unwrap().run().unwrap();
        assert!(tally.games == 64);
        assert!(tally.p0 + tally.p1 == 64);
        assert!(tally.draws == 0);
        assert!(tally.margins.values().sum::<usize>() == 64);
    }

    #[test]
    fn draws_only_relabel_zero_margins() {
        let plain = Sweep::new(5, Player::P1, Variant::Fool).unwrap().run().unwrap();
        let draws = Sweep::new(5, Player::P1, Variant::DrawFool).unwrap().run().unwrap();
        let zeros = plain.margins.get(&0).copied().unwrap_or(0);
        assert!(draws.draws == zeros);
        assert!(draws.p0 + draws.p1 + zeros == plain.p0 + plain.p1);
        assert!(draws.margins == plain.margins);
    }

    #[test]
    fn unit_weights_match_counting() {
        let plain = Sweep::new(5, Player::P0, Variant::Fool).unwrap().run().unwrap();
        let unit = Sweep::new(5, Player::P0, Variant::WeightedFool).unwrap().run().unwrap();
        assert!(plain.p0 == unit.p0);
        assert!(plain.margins == unit.margins);
    }

    #[test]
    fn reject_bad_sizes() {
        assert!(matches!(Sweep::new(0, Player::P0, Variant::Fool), Err(ConfigError::Empty)));
        assert!(matches!(
            Sweep::new(MAX_SWEEP + 1, Player::P0, Variant::Fool),
            Err(ConfigError::SweepTooLarge(_))
        ));
        let sweep = Sweep::new(3, Player::P0, Variant::WeightedFool).unwrap();
        assert!(sweep.clone().weights(vec![1, 2]).is_err());
        assert!(sweep.weights(vec![-1, 2, 3]).is_ok());
    }
}
