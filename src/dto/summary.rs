use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Everything a caller needs from one solve, in real player numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub variant: Variant,
    pub leader: Player,
    pub cards: Vec<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Weight>>,
    pub winner: String,
    pub margin: Score,
    pub optimal_moves: Vec<usize>,
    pub trap_take: Option<usize>,
    pub trap_beat: Option<usize>,
    pub positions: usize,
}

impl From<&Solver> for Summary {
    fn from(solver: &Solver) -> Self {
        let config = solver.config();
        Self {
            variant: config.variant,
            leader: config.leader,
            cards: config.cards.clone(),
            weights: config.weights.clone(),
            winner: solver.winner().to_string(),
            margin: solver.margin(),
            optimal_moves: solver.optimal_moves(),
            trap_take: solver.trap_take(),
            trap_beat: solver.trap_beat(),
            positions: solver.table().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_summary_as_json() {
        let cards = vec![Player::P1, Player::P0, Player::P0, Player::P1];
        let config = Config::weighted(cards, Player::P1, vec![-1; 4], Variant::WeightedFool);
        let ref solver = Solver::new(config).unwrap();
        let json = serde_json::to_value(Summary::from(solver)).unwrap();
        assert!(json["winner"] == "P0");
        assert!(json["margin"] == -4);
        assert!(json["optimalMoves"] == serde_json::json!([1, 4]));
        assert!(json["trapTake"] == 1);
        assert!(json["trapBeat"].is_null());
        assert!(json["variant"] == "WeightedFool");
    }

    #[test]
    fn draws_are_named() {
        let config = Config::new(vec![Player::P0, Player::P1], Player::P0, Variant::DrawFool);
        let summary = Summary::from(&Solver::new(config).unwrap());
        assert!(summary.winner == "draw");
        assert!(summary.weights.is_none());
        let text = serde_json::to_string(&summary).unwrap();
        assert!(serde_json::from_str::<Summary>(&text).unwrap() == summary);
    }
}
