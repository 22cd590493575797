use super::action::Action;
use super::bounds::Bounds;
use super::outcome::Outcome;
use crate::Chips;
use crate::PASS_PENALTY;
use crate::POT_FLOOR;
use crate::REFILL_PENALTY;
use crate::cards::Card;
use crate::cards::Deck;

/// The result of resolving one bet against the pot.
///
/// Rewards are from the bettor's perspective, so every chip that leaves the
/// pot is a chip of reward and vice versa. The only leak in that accounting
/// is the refill: an emptied pot is reset to the floor and the bettor is
/// charged a flat penalty for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    outcome: Outcome,
    bet: Chips,
    pot: Chips,
    reward: Chips,
    refilled: bool,
}

impl Settlement {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    /// pot after settlement, never below the floor
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    /// whether the pot ran dry and had to be topped up
    pub fn refilled(&self) -> bool {
        self.refilled
    }

    /// Plays one round, drawing the target from the deck unless passing.
    pub fn play(pot: Chips, action: Action, bounds: Bounds, deck: &mut Deck) -> Self {
        let target = if action.is_pass() {
            None
        } else {
            Some(deck.draw())
        };
        Self::resolve(pot, action, bounds, target)
    }

    /// Resolves a round with a known target.
    ///
    /// Passing costs a flat penalty and leaves the pot alone. Any bet draws
    /// a target: inside the window takes the bet out of the pot, hitting a
    /// rail pays twice the bet into it, and anything else pays the bet in.
    pub fn resolve(pot: Chips, action: Action, bounds: Bounds, target: Option<Card>) -> Self {
        match target.filter(|_| !action.is_pass()) {
            None => Self {
                outcome: Outcome::Pass,
                bet: 0,
                pot: pot.max(POT_FLOOR),
                reward: -PASS_PENALTY,
                refilled: false,
            },
            Some(target) => {
                let bet = action.bet(pot);
                let outcome = Outcome::from((bounds, target));
                let delta = match outcome {
                    Outcome::Win => -bet,
                    Outcome::Rail => 2 * bet,
                    Outcome::Loss => bet,
                    Outcome::Pass => unreachable!("bets always draw a target"),
                };
                let pot = pot + delta;
                let reward = -delta;
                if pot <= 0 {
                    Self {
                        outcome,
                        bet,
                        pot: POT_FLOOR,
                        reward: reward - REFILL_PENALTY,
                        refilled: true,
                    }
                } else {
                    Self {
                        outcome,
                        bet,
                        pot,
                        reward,
                        refilled: false,
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<5} bet {:>6} reward {:>+7} pot {:>7}{}",
            self.outcome,
            self.bet,
            self.reward,
            self.pot,
            if self.refilled { " (refilled)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::from((Card::from(3), Card::from(9)))
    }
    fn four() -> Action {
        Action::from(4)
    }

    #[test]
    fn win_takes_bet_from_pot() {
        let s = Settlement::resolve(100, four(), bounds(), Some(Card::from(6)));
        assert!(s.outcome() == Outcome::Win);
        assert!(s.bet() == 20);
        assert!(s.pot() == 80);
        assert!(s.reward() == 20);
    }

    #[test]
    fn rail_pays_double() {
        let s = Settlement::resolve(100, four(), bounds(), Some(Card::from(3)));
        assert!(s.outcome() == Outcome::Rail);
        assert!(s.pot() == 140);
        assert!(s.reward() == -40);
        let s = Settlement::resolve(100, four(), bounds(), Some(Card::from(9)));
        assert!(s.outcome() == Outcome::Rail);
        assert!(s.pot() == 140);
    }

    #[test]
    fn loss_pays_bet() {
        let s = Settlement::resolve(100, four(), bounds(), Some(Card::from(12)));
        assert!(s.outcome() == Outcome::Loss);
        assert!(s.pot() == 120);
        assert!(s.reward() == -20);
    }

    #[test]
    fn pass_costs_one() {
        let s = Settlement::resolve(100, Action::PASS, bounds(), None);
        assert!(s.outcome() == Outcome::Pass);
        assert!(s.pot() == 100);
        assert!(s.reward() == -1);
    }

    #[test]
    fn pass_ignores_target() {
        let s = Settlement::resolve(100, Action::PASS, bounds(), Some(Card::from(6)));
        assert!(s.outcome() == Outcome::Pass);
        assert!(s.pot() == 100);
    }

    #[test]
    fn emptied_pot_refills_with_penalty() {
        let s = Settlement::resolve(37, Action::ALL_IN, bounds(), Some(Card::from(5)));
        assert!(s.refilled());
        assert!(s.pot() == 1);
        assert!(s.reward() == 36);
    }

    #[test]
    fn zero_bet_changes_nothing() {
        let s = Settlement::resolve(1, four(), bounds(), Some(Card::from(12)));
        assert!(s.bet() == 0);
        assert!(s.pot() == 1);
        assert!(s.reward() == 0);
    }

    #[test]
    fn zero_sum_unless_refilled() {
        for pot in [1, 2, 5, 19, 20, 100, 4321] {
            for action in Action::all().filter(|a| !a.is_pass()) {
                for target in crate::cards::Card::ranks() {
                    let s = Settlement::resolve(pot, action, bounds(), Some(target));
                    let leak = if s.refilled() { -1 } else { 0 };
                    let unclamped = if s.refilled() { 0 } else { s.pot() };
                    assert!(unclamped - pot + s.reward() == leak);
                    assert!(s.pot() >= 1);
                }
            }
        }
    }

    #[test]
    fn plays_target_off_deck() {
        let ref mut deck = Deck::from(vec![Card::from(3)]);
        let s = Settlement::play(100, four(), bounds(), deck);
        assert!(s.outcome() == Outcome::Rail);
        assert!(deck.cards_left() == 0);
    }

    #[test]
    fn pass_leaves_deck_alone() {
        let ref mut deck = Deck::from(vec![Card::from(3)]);
        Settlement::play(100, Action::PASS, bounds(), deck);
        assert!(deck.cards_left() == 1);
    }
}
