use super::phase::Phase;
use super::step::Info;
use super::step::Step;
use crate::CARDS_PER_ROUND;
use crate::Chips;
use crate::POT_FLOOR;
use crate::Utility;
use crate::cards::Deck;
use crate::codec::Observation;
use crate::round::Action;
use crate::round::Bounds;
use crate::round::Settlement;

/// Single-bettor In-Between played against a pot for one deck lifetime.
///
/// An episode starts at `reset` with a fresh deck and a pot of one chip, and
/// ends when the deck can no longer cover a bounding pair plus a target.
/// The environment owns its deck, and through it its RNG stream, so
/// separate environments never share randomness.
#[derive(Debug, Clone)]
pub struct Environment {
    deck: Deck,
    pot: Chips,
    phase: Phase,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Entropy-seeded environment. Call `reset` before stepping.
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            pot: POT_FLOOR,
            phase: Phase::Terminal,
        }
    }
    /// Reproducible environment. Call `reset` before stepping.
    pub fn seeded(seed: u64) -> Self {
        Self {
            deck: Deck::seeded(seed),
            pot: POT_FLOOR,
            phase: Phase::Terminal,
        }
    }
    /// Overrides the pot of the current round.
    pub fn with_pot(mut self, pot: Chips) -> Self {
        assert!(pot >= POT_FLOOR, "pot {} below floor", pot);
        self.pot = pot;
        self
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn bounds(&self) -> Option<Bounds> {
        self.phase.bounds()
    }
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
    pub fn observation(&self) -> Observation {
        match self.phase {
            Phase::Active(bounds) => Observation::from((bounds, self.pot)),
            Phase::Terminal => Observation::terminal(),
        }
    }

    /// Starts a new episode with a fresh shuffle and a one-chip pot.
    ///
    /// Passing a seed restarts the deck's RNG stream first.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        match seed {
            Some(seed) => self.deck.reseed(seed),
            None => self.deck.reset(),
        }
        self.pot = POT_FLOOR;
        let bounds = loop {
            match Bounds::select(&mut self.deck) {
                Some(bounds) => break bounds,
                None => self.deck.reset(),
            }
        };
        self.phase = Phase::Active(bounds);
        log::trace!("reset to {} with pot {}", bounds, self.pot);
        (self.observation(), Info)
    }

    /// Settles the current window with the given action and deals the next.
    ///
    /// Once the deck cannot support another round, the episode ends with
    /// the sentinel observation and a reward of zero, discarding the final
    /// settlement's reward. Stepping a terminal episode is an error.
    pub fn step(&mut self, action: Action) -> anyhow::Result<Step> {
        let bounds = self
            .phase
            .bounds()
            .ok_or_else(|| anyhow::anyhow!("step on terminal environment; reset first"))?;
        if self.deck.cards_left() < CARDS_PER_ROUND {
            return Ok(self.terminate());
        }
        let settlement = Settlement::play(self.pot, action, bounds, &mut self.deck);
        log::trace!("{} {} {}", bounds, action, settlement);
        self.pot = settlement.pot();
        match Bounds::select(&mut self.deck) {
            None => Ok(self.terminate()),
            Some(next) => {
                self.phase = Phase::Active(next);
                Ok(Step::ongoing(
                    self.observation(),
                    settlement.reward() as Utility,
                ))
            }
        }
    }

    fn terminate(&mut self) -> Step {
        self.phase = Phase::Terminal;
        Step::terminal()
    }
}

/// Deals the first window straight off the given deck without shuffling.
/// Lets callers replay a prearranged card order.
impl From<Deck> for Environment {
    fn from(mut deck: Deck) -> Self {
        let phase = Phase::from(Bounds::select(&mut deck));
        Self {
            deck,
            pot: POT_FLOOR,
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn stacked(ranks: &[u8]) -> Environment {
        Environment::from(Deck::from(
            ranks.iter().copied().map(Card::from).collect::<Vec<Card>>(),
        ))
    }
    fn four() -> Action {
        Action::from(4)
    }

    #[test]
    fn reset_deals_a_window() {
        let ref mut env = Environment::seeded(0);
        let (obs, _) = env.reset(None);
        assert!(!env.is_terminal());
        assert!(env.pot() == 1);
        assert!(obs.pot() == 0);
        assert!((1..=11).contains(&obs.gap()));
    }

    #[test]
    fn unreset_environment_refuses_steps() {
        let ref mut env = Environment::seeded(0);
        assert!(env.step(Action::PASS).is_err());
    }

    #[test]
    fn seeded_resets_repeat() {
        let ref mut env = Environment::new();
        let a = env.reset(Some(42)).0;
        let a = (a, env.step(Action::PASS).unwrap());
        let b = env.reset(Some(42)).0;
        let b = (b, env.step(Action::PASS).unwrap());
        assert!(a == b);
    }

    #[test]
    fn win_pays_out() {
        let ref mut env = stacked(&[3, 9, 6, 2, 11, 1, 1, 1]).with_pot(100);
        let step = env.step(four()).unwrap();
        assert!(!step.terminated);
        assert!(step.reward == 20.);
        assert!(env.pot() == 80);
        assert!(step.observation == Observation::from((8, 10)));
    }

    #[test]
    fn rail_pays_in_double() {
        let ref mut env = stacked(&[3, 9, 3, 2, 11, 1, 1, 1]).with_pot(100);
        let step = env.step(four()).unwrap();
        assert!(step.reward == -40.);
        assert!(env.pot() == 140);
    }

    #[test]
    fn pass_costs_one_and_skips_target() {
        let ref mut env = stacked(&[3, 9, 2, 11, 1, 1, 1]).with_pot(100);
        let step = env.step(Action::PASS).unwrap();
        assert!(step.reward == -1.);
        assert!(env.pot() == 100);
        assert!(env.bounds() == Some(Bounds::from((Card::from(2), Card::from(11)))));
    }

    #[test]
    fn terminal_step_discards_reward() {
        let ref mut env = stacked(&[3, 9, 6, 2, 2]).with_pot(100);
        let step = env.step(four()).unwrap();
        assert!(step.terminated);
        assert!(!step.truncated);
        assert!(step.reward == 0.);
        assert!(step.observation.is_terminal());
        assert!(env.pot() == 80);
    }

    #[test]
    fn terminal_refuses_further_steps() {
        let ref mut env = stacked(&[3, 9, 6, 2, 2]);
        assert!(env.step(Action::PASS).unwrap().terminated);
        assert!(env.step(Action::PASS).is_err());
        assert!(env.observation().is_terminal());
    }

    #[test]
    fn exhausted_deal_starts_terminal() {
        let ref mut env = stacked(&[4, 5, 1]);
        assert!(env.is_terminal());
        assert!(env.step(four()).is_err());
    }

    #[test]
    fn episodes_terminate_with_positive_pot() {
        let ref mut env = Environment::seeded(9);
        let ref mut rng = <rand::rngs::SmallRng as rand::SeedableRng>::seed_from_u64(9);
        for _ in 0..200 {
            env.reset(None);
            let mut steps = 0;
            loop {
                let step = env.step(Action::random(rng)).unwrap();
                steps += 1;
                assert!(env.pot() >= 1);
                if step.terminated {
                    assert!(step.observation.is_terminal());
                    assert!(step.reward == 0.);
                    break;
                } else {
                    assert!(!step.observation.is_terminal());
                    assert!(env.deck().cards_left() >= CARDS_PER_ROUND);
                }
            }
            assert!(steps <= 52 / 2);
        }
    }
}
