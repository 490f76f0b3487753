use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A starting distribution: who holds each card, who leads, and under which rules.
///
/// `cards[i]` owns the card of rank `i`, lowest first. Weights, when the
/// variant uses them, line up with `cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub cards: Vec<Player>,
    pub leader: Player,
    pub weights: Option<Vec<Weight>>,
    pub variant: Variant,
}

impl Config {
    /// An unweighted game.
    pub fn new(cards: Vec<Player>, leader: Player, variant: Variant) -> Self {
        Self {
            cards,
            leader,
            weights: None,
            variant,
        }
    }
    /// A weighted game.
    pub fn weighted(cards: Vec<Player>, leader: Player, weights: Vec<Weight>, variant: Variant) -> Self {
        Self {
            cards,
            leader,
            weights: Some(weights),
            variant,
        }
    }
    /// Builds from raw ownership ids, rejecting anything but 0 and 1.
    pub fn from_ids(cards: &[usize], leader: usize, weights: Option<Vec<Weight>>, variant: Variant) -> Result<Self, ConfigError> {
        let config = Self {
            cards: cards
                .iter()
                .map(|&id| Player::try_from(id))
                .collect::<Result<Vec<Player>, ConfigError>>()?,
            leader: Player::try_from(leader)?,
            weights,
            variant,
        };
        config.validate()?;
        Ok(config)
    }
    /// Parses the textual form used on the command line:
    /// ownership digits (`"0110"`), a leader (`"1"` or `"P1"`) and
    /// optionally comma separated weights (`"-1,2,3,4"`).
    pub fn parse(cards: &str, leader: &str, weights: Option<&str>, variant: Variant) -> anyhow::Result<Self> {
        let config = Self {
            cards: Vec::<Player>::from(State::try_from(cards)?),
            leader: Player::try_from(leader)?,
            weights: weights.map(Self::parse_weights).transpose()?,
            variant,
        };
        config.validate()?;
        Ok(config)
    }
    fn parse_weights(s: &str) -> anyhow::Result<Vec<Weight>> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
            .map(|w| {
                w.parse::<Weight>()
                    .map_err(|e| anyhow::anyhow!("invalid weight {}: {}", w, e))
            })
            .collect()
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Checks everything the solver relies on without re-checking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.size() {
            0 => return Err(ConfigError::Empty),
            n if n > MAX_CARDS => return Err(ConfigError::TooLarge(n)),
            _ => {}
        }
        match (self.variant.weighted(), self.weights.as_ref()) {
            (true, None) => Err(ConfigError::MissingWeights),
            (false, Some(_)) => Err(ConfigError::UnexpectedWeights),
            (true, Some(weights)) if weights.len() != self.size() => Err(ConfigError::WeightCount {
                cards: self.size(),
                weights: weights.len(),
            }),
            _ => Ok(()),
        }
    }
}

impl Arbitrary for Config {
    fn random() -> Self {
        let n = rand::random_range(ARBITRARY_CARDS);
        let cards = (0..n).map(|_| Player::random()).collect();
        let variant = Variant::random();
        let weights = variant.weighted().then(|| {
            (0..n)
                .map(|_| rand::random_range(ARBITRARY_WEIGHTS))
                .collect()
        });
        Self {
            cards,
            leader: Player::random(),
            weights,
            variant,
        }
    }
}
