use crate::*;

/// What leading one card is worth, once the responder has answered it best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub verdict: Verdict,
    pub reply: Reply,
    pub trap: Option<Trap>,
}

impl Answer {
    /// Picks the responder's best answer to a led card.
    ///
    /// `take` is the incumbent; the best beat replaces it only when strictly
    /// better for the responder. When the two differ at all, the worse one
    /// is a mistake the leader can hope for, and the led card is a trap.
    pub fn choose(take: Verdict, beat: Option<(usize, Verdict)>) -> Self {
        match beat {
            None => Self {
                verdict: take,
                reply: Reply::Take,
                trap: None,
            },
            Some((_, beat)) if beat.ties(&take) => Self {
                verdict: take,
                reply: Reply::Take,
                trap: None,
            },
            Some((slot, beat)) if beat.rank(Player::P1) > take.rank(Player::P1) => Self {
                verdict: beat,
                reply: Reply::Beat(slot),
                trap: Some(Trap::Beat),
            },
            Some(_) => Self {
                verdict: take,
                reply: Reply::Take,
                trap: Some(Trap::Take),
            },
        }
    }
}
