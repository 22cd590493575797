use crate::BET_INCREMENT_PERCENT;
use crate::Chips;
use crate::N_ACTIONS;
use rand::Rng;

/// A betting decision: pass, or wager k × 5% of the pot for k in 1..=20.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Action(u8);

impl Action {
    pub const PASS: Self = Self(0);
    pub const ALL_IN: Self = Self(N_ACTIONS as u8 - 1);

    pub fn is_pass(&self) -> bool {
        *self == Self::PASS
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
    pub fn percent(&self) -> Chips {
        self.0 as Chips * BET_INCREMENT_PERCENT
    }
    /// Wager against a given pot, rounded down to whole chips.
    pub fn bet(&self, pot: Chips) -> Chips {
        self.percent() * pot / 100
    }
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N_ACTIONS as u8).map(Self)
    }
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.random_range(0..N_ACTIONS as u8))
    }
}

/// u8 isomorphism
impl From<u8> for Action {
    fn from(n: u8) -> Self {
        match n as usize {
            i if i < N_ACTIONS => Self(n),
            _ => panic!("Invalid action u8: {}", n),
        }
    }
}
impl From<Action> for u8 {
    fn from(a: Action) -> u8 {
        a.0
    }
}

/// usize injection, fallible since only 21 indices are legal
impl TryFrom<usize> for Action {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n < N_ACTIONS {
            Ok(Self(n as u8))
        } else {
            Err(anyhow::anyhow!("action index {} outside 0..{}", n, N_ACTIONS))
        }
    }
}
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a.index()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_pass() {
            write!(f, "pass")
        } else {
            write!(f, "bet {}%", self.percent())
        }
    }
}
