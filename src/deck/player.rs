use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One of the two seats at the table.
///
/// Inside the solver `P0` always leads with an empty table; whichever real
/// player that is gets recovered through the deck's canonical flag.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    P0,
    P1,
}

impl Player {
    pub fn other(&self) -> Self {
        match self {
            Self::P0 => Self::P1,
            Self::P1 => Self::P0,
        }
    }
    /// Maps between canonical and real numbering. Involutive.
    pub fn orient(&self, reverse: bool) -> Self {
        match reverse {
            true => self.other(),
            false => *self,
        }
    }
}

/// ownership bit isomorphism
/// a set bit means the card belongs to P1
impl From<bool> for Player {
    fn from(bit: bool) -> Self {
        match bit {
            false => Self::P0,
            true => Self::P1,
        }
    }
}
impl From<Player> for u64 {
    fn from(player: Player) -> Self {
        match player {
            Player::P0 => 0,
            Player::P1 => 1,
        }
    }
}
impl From<Player> for usize {
    fn from(player: Player) -> Self {
        u64::from(player) as usize
    }
}

impl TryFrom<usize> for Player {
    type Error = ConfigError;
    fn try_from(id: usize) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::P0),
            1 => Ok(Self::P1),
            n => Err(ConfigError::Player(n)),
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "0" | "P0" => Ok(Self::P0),
            "1" | "P1" => Ok(Self::P1),
            other => Err(anyhow::anyhow!("invalid player: {}", other)),
        }
    }
}

impl Arbitrary for Player {
    fn random() -> Self {
        Self::from(rand::random::<bool>())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orient_is_involutive() {
        for player in [Player::P0, Player::P1] {
            assert!(player.orient(true).orient(true) == player);
            assert!(player.orient(false) == player);
            assert!(player.orient(true) == player.other());
        }
    }

    #[test]
    fn parse_labels() {
        assert!(Player::try_from("p1").unwrap() == Player::P1);
        assert!(Player::try_from("0").unwrap() == Player::P0);
        assert!(Player::try_from("2").is_err());
    }

    #[test]
    fn reject_unknown_id() {
        assert!(matches!(Player::try_from(2usize), Err(ConfigError::Player(2))));
    }
}
