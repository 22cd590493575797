use super::card::Card;
use crate::DECK_SIZE;
use crate::RANK_COPIES;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A reshuffling stack of ranks.
///
/// Refills always produce four copies of each rank in uniformly random
/// order. Drawing from an empty deck refills first, so `draw` never fails.
/// Each deck owns its RNG stream, which keeps parallel rollouts independent
/// and makes seeded runs reproducible.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    drawn: usize,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a shuffled deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    /// Creates a shuffled deck with a reproducible order.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    /// Removes and returns the top card, refilling if empty.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.reset();
        }
        self.drawn += 1;
        self.cards.pop().expect("refilled deck is non-empty")
    }
    /// Cards remaining before the next implicit refill.
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }
    /// Cards drawn since the last refill.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
    /// Discards whatever is left and refills with a fresh shuffle.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(
            Card::ranks().flat_map(|card| std::iter::repeat_n(card, RANK_COPIES)),
        );
        self.cards.shuffle(&mut self.rng);
        self.drawn = 0;
        debug_assert!(self.cards.len() == DECK_SIZE);
    }
    /// Reseeds the RNG stream, then refills.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
        self.reset();
    }
}

impl From<SmallRng> for Deck {
    fn from(rng: SmallRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            drawn: 0,
            rng,
        };
        deck.reset();
        deck
    }
}

/// Stacks a deck so that cards come off in the given order.
/// Handy for replaying specific rounds. The stack counts as the tail of a
/// deck, so a short stack reports the missing cards as already drawn.
impl From<Vec<Card>> for Deck {
    fn from(order: Vec<Card>) -> Self {
        Self {
            drawn: DECK_SIZE.saturating_sub(order.len()),
            cards: order.into_iter().rev().collect(),
            rng: SmallRng::seed_from_u64(0),
        }
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.draw())
    }
}
