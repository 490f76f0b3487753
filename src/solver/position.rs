use crate::*;
use std::collections::BTreeMap;

/// The solved record of one state, in the frame where `P0` leads.
///
/// Built lead by lead in ascending slot order through [`Position::consider`],
/// then stored in the [`Table`] and never touched again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    winner: Option<Player>,
    margin: Score,
    optimal: Vec<usize>,
    trap_take: Option<usize>,
    trap_beat: Option<usize>,
    response: BTreeMap<usize, Reply>,
}

impl Position {
    /// `None` until the first lead has been considered.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
    pub fn margin(&self) -> Score {
        self.margin
    }
    pub fn verdict(&self) -> Option<Verdict> {
        self.winner.map(|winner| Verdict {
            winner,
            margin: self.margin,
        })
    }
    /// Every lead achieving the verdict, lowest slot first.
    pub fn optimal(&self) -> &[usize] {
        &self.optimal
    }
    /// Lowest optimal lead the responder must take.
    pub fn trap_take(&self) -> Option<usize> {
        self.trap_take
    }
    /// Highest optimal lead the responder must beat.
    pub fn trap_beat(&self) -> Option<usize> {
        self.trap_beat
    }
    /// The responder's best reply to a lead of `slot`.
    pub fn response(&self, slot: usize) -> Option<Reply> {
        self.response.get(&slot).copied()
    }
    pub fn responses(&self) -> &BTreeMap<usize, Reply> {
        &self.response
    }
    pub fn is_terminal(&self) -> bool {
        self.optimal.is_empty()
    }

    /// Folds the answer to leading `led` into this record.
    ///
    /// A strictly better lead replaces the verdict, the optimal set and both
    /// trap flags. A tying lead joins the optimal set; it takes over the
    /// catch-the-pass flag and fills the catch-the-take flag only if empty.
    pub fn consider(&mut self, led: usize, answer: Answer) {
        self.response.insert(led, answer.reply);
        match self.verdict() {
            None => self.replace(led, answer),
            Some(best) if answer.verdict.ties(&best) => self.extend(led, answer),
            Some(best) if answer.verdict.rank(Player::P0) > best.rank(Player::P0) => self.replace(led, answer),
            Some(_) => {}
        }
    }

    fn replace(&mut self, led: usize, answer: Answer) {
        self.winner = Some(answer.verdict.winner);
        self.margin = answer.verdict.margin;
        self.optimal = vec![led];
        self.trap_take = None;
        self.trap_beat = None;
        match answer.trap {
            Some(Trap::Take) => self.trap_take = Some(led),
            Some(Trap::Beat) => self.trap_beat = Some(led),
            None => {}
        }
    }
    fn extend(&mut self, led: usize, answer: Answer) {
        self.optimal.push(led);
        match answer.trap {
            Some(Trap::Beat) => self.trap_beat = Some(led),
            Some(Trap::Take) if self.trap_take.is_none() => self.trap_take = Some(led),
            _ => {}
        }
    }
}

/// terminal records carry a verdict and nothing to choose between
impl From<Verdict> for Position {
    fn from(verdict: Verdict) -> Self {
        Self {
            winner: Some(verdict.winner),
            margin: verdict.margin,
            ..Self::default()
        }
    }
}
