use crate::CARDS_PER_ROUND;
use crate::cards::Card;
use crate::cards::Deck;

/// The two bounding cards of a round, ordered low to high.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bounds {
    lo: Card,
    hi: Card,
}

impl Bounds {
    pub fn lo(&self) -> Card {
        self.lo
    }
    pub fn hi(&self) -> Card {
        self.hi
    }
    /// ranks strictly between the bounds
    pub fn gap(&self) -> i8 {
        Card::between(self.lo, self.hi)
    }
    /// equal or adjacent cards leave no betting window
    pub fn degenerate(&self) -> bool {
        self.gap() < 1
    }
    pub fn inside(&self, target: Card) -> bool {
        self.lo < target && target < self.hi
    }
    pub fn rails(&self, target: Card) -> bool {
        target == self.lo || target == self.hi
    }

    /// Deals bounding pairs until one has a betting window.
    ///
    /// Equal or adjacent pairs are thrown away and redrawn for as long as
    /// the deck can still cover a pair plus a target. If the deck runs down
    /// below that, there is no round to play and we return None.
    pub fn select(deck: &mut Deck) -> Option<Self> {
        let mut bounds = Self::deal(deck);
        while deck.cards_left() >= CARDS_PER_ROUND && bounds.degenerate() {
            bounds = Self::deal(deck);
        }
        if deck.cards_left() < CARDS_PER_ROUND {
            log::trace!("deck exhausted during selection at {}", bounds);
            None
        } else {
            Some(bounds)
        }
    }

    /// Redraws equal or adjacent pairs while at least a full round remains.
    ///
    /// Unlike `select`, a pair with a window is always kept even if it
    /// leaves a single card for the target. Only the start of each deal
    /// checks the deck.
    pub fn redraw(deck: &mut Deck) -> Option<Self> {
        loop {
            if deck.cards_left() < CARDS_PER_ROUND {
                return None;
            }
            let bounds = Self::deal(deck);
            if !bounds.degenerate() {
                return Some(bounds);
            }
        }
    }

    fn deal(deck: &mut Deck) -> Self {
        let a = deck.draw();
        let b = deck.draw();
        Self::from((a, b))
    }
}

impl From<(Card, Card)> for Bounds {
    fn from((a, b): (Card, Card)) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{} {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ranks: &[u8]) -> Deck {
        Deck::from(ranks.iter().copied().map(Card::from).collect::<Vec<Card>>())
    }

    #[test]
    fn orders_low_high() {
        let bounds = Bounds::from((Card::from(9), Card::from(3)));
        assert!(bounds.lo() == Card::from(3));
        assert!(bounds.hi() == Card::from(9));
        assert!(bounds.gap() == 5);
    }

    #[test]
    fn classifies_targets() {
        let bounds = Bounds::from((Card::from(3), Card::from(9)));
        assert!(bounds.inside(Card::from(6)));
        assert!(bounds.rails(Card::from(3)));
        assert!(bounds.rails(Card::from(9)));
        assert!(!bounds.inside(Card::from(10)));
        assert!(!bounds.rails(Card::from(1)));
    }

    #[test]
    fn skips_pairs_and_neighbors() {
        let ref mut deck = cards(&[5, 5, 7, 8, 2, 11, 4, 4, 4]);
        let bounds = Bounds::select(deck).unwrap();
        assert!(bounds == Bounds::from((Card::from(2), Card::from(11))));
        assert!(deck.cards_left() == 3);
    }

    #[test]
    fn accepts_window_of_one() {
        let ref mut deck = cards(&[6, 8, 1, 1, 1]);
        let bounds = Bounds::select(deck).unwrap();
        assert!(bounds.gap() == 1);
    }

    #[test]
    fn fails_when_deck_runs_low() {
        let ref mut deck = cards(&[5, 6, 9, 9, 1]);
        assert!(Bounds::select(deck).is_none());
    }

    #[test]
    fn fails_when_good_pair_leaves_too_few() {
        let ref mut deck = cards(&[2, 12, 1, 1]);
        assert!(Bounds::select(deck).is_none());
    }

    #[test]
    fn redraw_keeps_last_good_pair() {
        let ref mut deck = cards(&[2, 12, 1]);
        let bounds = Bounds::redraw(deck).unwrap();
        assert!(bounds == Bounds::from((Card::from(2), Card::from(12))));
        assert!(deck.cards_left() == 1);
    }

    #[test]
    fn redraw_stops_below_a_round() {
        let ref mut deck = cards(&[5, 6, 9, 9, 1]);
        assert!(Bounds::redraw(deck).is_none());
        assert!(deck.cards_left() == 1);
    }

    #[test]
    fn never_degenerate() {
        let ref mut deck = Deck::seeded(7);
        for _ in 0..10_000 {
            if deck.cards_left() < CARDS_PER_ROUND {
                deck.reset();
            }
            if let Some(bounds) = Bounds::select(deck) {
                assert!(bounds.hi().rank() - bounds.lo().rank() > 1);
                assert!(deck.cards_left() >= CARDS_PER_ROUND);
            }
        }
    }
}
