use crate::*;

/// A solved game replayed one move at a time.
///
/// The live deck stays in the solver's canonical frame: canonical `P0` is
/// always whoever leads next. Cards keep the 1-indexed label they were dealt
/// with, so `labels[slot]` survives beats that shift every slot above them.
#[derive(Debug, Clone)]
pub struct Playback {
    solver: Solver,
    deck: Deck,
    led: Option<usize>,
    labels: Vec<usize>,
    history: Vec<Ply>,
}

impl From<Solver> for Playback {
    fn from(solver: Solver) -> Self {
        Self {
            deck: solver.deck().clone(),
            labels: (1..=solver.deck().size()).collect(),
            led: None,
            history: Vec::new(),
            solver,
        }
    }
}

impl Playback {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Solver::new(config).map(Self::from)
    }

    /// The real player to act.
    pub fn turn(&self) -> Player {
        match self.led {
            None => Player::P0,
            Some(_) => Player::P1,
        }
        .orient(self.deck.reverse())
    }
    pub fn is_over(&self) -> bool {
        self.deck.state().holder().is_some()
    }
    /// Labels still in play, lowest rank first.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    /// Label of the card waiting on the table.
    pub fn table(&self) -> Option<usize> {
        self.led.map(|slot| self.labels[slot])
    }
    pub fn history(&self) -> &[Ply] {
        &self.history
    }
    pub fn solver(&self) -> &Solver {
        &self.solver
    }
    /// Real owner of a card still in play.
    pub fn owner(&self, label: usize) -> Option<Player> {
        self.slot(label)
            .ok()
            .map(|slot| self.deck.owner(slot).orient(self.deck.reverse()))
    }
    /// Final result, once someone holds every card.
    pub fn outcome(&self) -> Option<(Outcome, Score)> {
        let verdict = Verdict::terminal(&self.deck)?;
        let outcome = match self.solver.variant().draws() && verdict.margin == 0 {
            true => Outcome::Draw,
            false => Outcome::Win(verdict.winner.orient(self.deck.reverse())),
        };
        Some((outcome, verdict.margin))
    }

    /// Every move the player to act may submit.
    pub fn legal(&self) -> Vec<Move> {
        if self.is_over() {
            return vec![];
        }
        match self.led {
            None => self
                .deck
                .slots(Player::P0)
                .map(|slot| Move::Card(self.labels[slot]))
                .collect(),
            Some(led) => std::iter::once(Move::Take)
                .chain(
                    self.deck
                        .slots(Player::P1)
                        .filter(|&slot| slot > led)
                        .map(|slot| Move::Card(self.labels[slot])),
                )
                .collect(),
        }
    }

    /// The solver's move for whoever is to act.
    ///
    /// A leader prefers a lead that catches a take, then one that catches a
    /// pass, then the lowest optimal lead. A responder plays its recorded reply.
    pub fn auto(&mut self) -> Result<Ply, Illegal> {
        let advice = self.advise()?;
        self.submit(advice)
    }

    /// The move [`Playback::auto`] would play, without playing it.
    pub fn advise(&mut self) -> Result<Move, Illegal> {
        if self.is_over() {
            return Err(Illegal::GameOver);
        }
        let position = self.solver.extend(&self.deck);
        let slot = match self.led {
            None => position
                .trap_take()
                .or(position.trap_beat())
                .or(position.optimal().first().copied())
                .expect("undecided position has a lead"),
            Some(led) => match position.response(led).expect("every lead is answered") {
                Reply::Take => return Ok(Move::Take),
                Reply::Beat(slot) => slot,
            },
        };
        Ok(Move::Card(self.labels[slot]))
    }

    /// Plays `mv` for whoever is to act.
    pub fn submit(&mut self, mv: Move) -> Result<Ply, Illegal> {
        if self.is_over() {
            return Err(Illegal::GameOver);
        }
        let ply = match (self.led, mv) {
            (None, Move::Take) => return Err(Illegal::NothingToTake),
            (None, Move::Card(label)) => self.lead(label)?,
            (Some(led), Move::Take) => self.take(led),
            (Some(led), Move::Card(label)) => self.beat(led, label)?,
        };
        log::debug!("{} -> {}", ply, self);
        self.history.push(ply);
        Ok(ply)
    }

    /// Plays `mv` on behalf of `player`, who must be the one to act.
    pub fn submit_as(&mut self, player: Player, mv: Move) -> Result<Ply, Illegal> {
        match self.is_over() || player == self.turn() {
            true => self.submit(mv),
            false => Err(Illegal::OutOfTurn),
        }
    }
}

// transitions, each validated before anything changes
impl Playback {
    fn slot(&self, label: usize) -> Result<usize, Illegal> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .ok_or(Illegal::UnknownCard(label))
    }
    fn lead(&mut self, label: usize) -> Result<Ply, Illegal> {
        let slot = self.slot(label)?;
        if self.deck.owner(slot) != Player::P0 {
            return Err(Illegal::NotYours(label));
        }
        self.led = Some(slot);
        Ok(Ply::Lead(label))
    }
    fn take(&mut self, led: usize) -> Ply {
        self.deck.flip(led);
        self.led = None;
        Ply::Take(self.labels[led])
    }
    fn beat(&mut self, led: usize, label: usize) -> Result<Ply, Illegal> {
        let slot = self.slot(label)?;
        if self.deck.owner(slot) != Player::P1 {
            return Err(Illegal::NotYours(label));
        }
        if slot <= led {
            return Err(Illegal::TooLow {
                led: self.labels[led],
                beat: label,
            });
        }
        self.deck.remove(led, slot);
        self.deck.mirror();
        self.labels.remove(slot);
        self.labels.remove(led);
        self.led = None;
        Ok(Ply::Beat(label))
    }
}

impl std::fmt::Display for Playback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.solver.config().size();
        let width = n.to_string().len();
        let cards = (1..=n)
            .map(|label| format!("{:>w$}", label, w = width))
            .collect::<Vec<String>>()
            .join(" ");
        let owners = (1..=n)
            .map(|label| match self.owner(label) {
                Some(owner) => format!("{:>w$}", u64::from(owner), w = width),
                None => format!("{:>w$}", "", w = width),
            })
            .collect::<Vec<String>>()
            .join(" ");
        writeln!(f, "cards  {}", cards)?;
        writeln!(f, "owner  {}", owners)?;
        match self.table() {
            Some(label) => write!(f, "table  {}", label),
            None => write!(f, "table  -"),
        }
    }
}
