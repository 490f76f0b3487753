use crate::*;

/// The inverse of one speculative mutation.
#[derive(Debug, Clone, Copy)]
enum Undo {
    Take(usize),
    Beat([Card; 2]),
}

/// A speculative continuation of whatever owns a [`Deck`].
///
/// Construction applies the mutation; dropping the scope applies its inverse,
/// so the owner's deck is restored on every exit path of the branch that
/// explored it. Derefs to the owner so the branch can keep searching.
pub struct Scope<'a, S: AsMut<Deck>> {
    inner: &'a mut S,
    undo: Undo,
}

impl<'a, S: AsMut<Deck>> Scope<'a, S> {
    /// The responder takes `led`. The same leader leads again.
    pub fn take(inner: &'a mut S, led: usize) -> Self {
        inner.as_mut().flip(led);
        Self {
            inner,
            undo: Undo::Take(led),
        }
    }
    /// The responder beats `led` with `beat`, both cards leave the game, and
    /// the deck is mirrored so the responder becomes the canonical leader.
    pub fn beat(inner: &'a mut S, led: usize, beat: usize) -> Self {
        let deck = inner.as_mut();
        let cards = deck.remove(led, beat);
        deck.mirror();
        Self {
            inner,
            undo: Undo::Beat(cards),
        }
    }
}

impl<S: AsMut<Deck>> Drop for Scope<'_, S> {
    fn drop(&mut self) {
        let deck = self.inner.as_mut();
        match self.undo {
            Undo::Take(led) => deck.flip(led),
            Undo::Beat(cards) => {
                deck.mirror();
                deck.add(cards);
            }
        }
    }
}

impl<S: AsMut<Deck>> std::ops::Deref for Scope<'_, S> {
    type Target = S;
    fn deref(&self) -> &Self::Target {
        self.inner
    }
}
impl<S: AsMut<Deck>> std::ops::DerefMut for Scope<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl AsMut<Deck> for Deck {
    fn as_mut(&mut self) -> &mut Deck {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::new(State::try_from("01101").unwrap(), Some(vec![1, 2, 3, 4, 5]))
    }

    #[test]
    fn take_is_undone_on_drop() {
        let ref mut d = deck();
        {
            let scope = Scope::take(d, 0);
            assert!(scope.owner(0) == Player::P1);
        }
        assert!(*d == deck());
    }

    #[test]
    fn beat_is_undone_on_drop() {
        let ref mut d = deck();
        {
            let scope = Scope::beat(d, 0, 1);
            assert!(scope.size() == 3);
            assert!(scope.reverse());
            assert!(scope.weights() == Some(&[3, 4, 5][..]));
            assert!(scope.state() == State::try_from("010").unwrap());
        }
        assert!(*d == deck());
    }

    #[test]
    fn scopes_nest() {
        let ref mut d = deck();
        {
            let mut outer = Scope::take(d, 0);
            let inner = Scope::beat(&mut *outer, 3, 4);
            assert!(inner.size() == 3);
        }
        assert!(*d == deck());
    }
}
