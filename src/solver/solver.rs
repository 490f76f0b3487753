use crate::*;

/// Solves one starting distribution exhaustively.
///
/// The search always reasons for `P0` leading onto an empty table. A game
/// where `P1` leads first is mirrored once up front, and every reported
/// winner is mapped back through the deck's canonical flag.
///
/// # Phases
///
/// - [`Solver::lead`]: `P0` tries every card it owns and keeps the best
/// - [`Solver::respond`]: `P1` answers one led card by taking or beating it
///
/// Both phases explore continuations by mutating the one owned [`Deck`] in
/// place through a [`Scope`], which restores it when the branch returns.
///
/// # Termination
///
/// A beat removes two cards. A take keeps the size but flips a zero bit of
/// the packed state to one, strictly increasing it. No state depends on
/// itself, so each table entry is final once written.
#[derive(Debug, Clone)]
pub struct Solver {
    config: Config,
    deck: Deck,
    root: Key,
    table: Table,
}

impl Solver {
    /// Validates `config` and solves it to completion.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = Deck::from(&config);
        let root = deck.key();
        let mut solver = Self {
            config,
            deck,
            root,
            table: Table::default(),
        };
        solver.solve();
        Ok(solver)
    }

    fn solve(&mut self) {
        let start = std::time::Instant::now();
        let verdict = self.lead();
        log::debug!(
            "solved {} ({}) in {:?}: {} over {} positions",
            self.deck,
            self.config.variant,
            start.elapsed(),
            verdict,
            self.table.len(),
        );
    }

    /// Solves `deck` into this solver's table, if it is not there already.
    ///
    /// Playback reaches positions the search pruned, such as a beat with a
    /// card above the lowest eligible one.
    pub fn extend(&mut self, deck: &Deck) -> &Position {
        let key = deck.key();
        if !self.table.contains(&key) {
            let root = std::mem::replace(&mut self.deck, deck.clone());
            self.lead();
            self.deck = root;
            log::debug!("extended table to {} positions", self.table.len());
        }
        self.table.get(&key).expect("position solved into table")
    }
}

// search
impl Solver {
    /// `P0` to move, nothing on the table.
    fn lead(&mut self) -> Verdict {
        let key = self.deck.key();
        if let Some(position) = self.table.get(&key) {
            return position.verdict().expect("stored positions are decided");
        }
        if let Some(verdict) = Verdict::terminal(&self.deck) {
            self.table.insert(key, Position::from(verdict));
            return verdict;
        }
        let mut position = Position::default();
        for led in self.deck.slots(Player::P0).collect::<Vec<usize>>() {
            let answer = self.respond(led);
            position.consider(led, answer);
        }
        let verdict = position.verdict().expect("non terminal leader owns a card");
        self.table.insert(key, position);
        verdict
    }

    /// `P1` to answer the card `P0` led from `led`.
    fn respond(&mut self, led: usize) -> Answer {
        let take = {
            let mut scope = Scope::take(self, led);
            scope.lead()
        };
        let mut best = None::<(usize, Verdict)>;
        for beat in self.beaters(led) {
            let verdict = {
                let mut scope = Scope::beat(self, led, beat);
                scope.lead().mirror()
            };
            if best.map_or(true, |(_, b)| verdict.rank(Player::P1) > b.rank(Player::P1)) {
                best = Some((beat, verdict));
            }
        }
        Answer::choose(take, best)
    }

    /// Slots `P1` may beat `led` with, lowest first.
    ///
    /// With every card worth one, the lowest eligible card is as good as any
    /// other, so only it is tried. Weights make each candidate distinct.
    fn beaters(&self, led: usize) -> Vec<usize> {
        let above = (led + 1..self.deck.size()).filter(|&slot| self.deck.owner(slot) == Player::P1);
        match self.deck.weighted() {
            true => above.collect(),
            false => above.take(1).collect(),
        }
    }
}

// boundary queries, in real player numbering and 1-indexed labels
impl Solver {
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn variant(&self) -> Variant {
        self.config.variant
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    /// The starting deck in canonical form.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn root(&self) -> &Position {
        self.table.get(&self.root).expect("root solved on construction")
    }
    pub fn winner(&self) -> Outcome {
        let root = self.root();
        match self.variant().draws() && root.margin() == 0 {
            true => Outcome::Draw,
            false => Outcome::Win(
                root.winner()
                    .expect("root solved on construction")
                    .orient(self.deck.reverse()),
            ),
        }
    }
    pub fn margin(&self) -> Score {
        self.root().margin()
    }
    pub fn optimal_moves(&self) -> Vec<usize> {
        self.root().optimal().iter().map(|slot| slot + 1).collect()
    }
    pub fn trap_take(&self) -> Option<usize> {
        self.root().trap_take().map(|slot| slot + 1)
    }
    pub fn trap_beat(&self) -> Option<usize> {
        self.root().trap_beat().map(|slot| slot + 1)
    }
}

impl AsMut<Deck> for Solver {
    fn as_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "variant   {}", self.variant())?;
        writeln!(f, "cards     {}", self.deck)?;
        writeln!(f, "leader    {}", self.config.leader)?;
        writeln!(f, "winner    {}", self.winner())?;
        writeln!(f, "margin    {}", self.margin())?;
        writeln!(f, "optimal   {:?}", self.optimal_moves())?;
        writeln!(f, "trap take {}", Self::label(self.trap_take()))?;
        write!(f, "trap beat {}", Self::label(self.trap_beat()))
    }
}

impl Solver {
    fn label(card: Option<usize>) -> String {
        card.map(|c| c.to_string()).unwrap_or_else(|| String::from("none"))
    }
}
