use crate::RANK_MAX;
use crate::RANK_MIN;

/// A card is just its rank. Suits never matter in In-Between,
/// so Ace = 1 through King = 13 is the whole story.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> u8 {
        self.0
    }
    /// every rank once, Ace to King
    pub fn ranks() -> impl Iterator<Item = Self> {
        (RANK_MIN..=RANK_MAX).map(Self)
    }
    /// number of ranks strictly between two cards
    pub fn between(lo: Self, hi: Self) -> i8 {
        hi.0 as i8 - lo.0 as i8 - 1
    }
}

/// u8 isomorphism
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        match n {
            RANK_MIN..=RANK_MAX => Self(n),
            _ => panic!("Invalid card rank u8: {}", n),
        }
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "A" => Ok(Self(1)),
            "T" => Ok(Self(10)),
            "J" => Ok(Self(11)),
            "Q" => Ok(Self(12)),
            "K" => Ok(Self(13)),
            n => n
                .parse::<u8>()
                .ok()
                .filter(|n| (2..=9).contains(n))
                .map(Self)
                .ok_or_else(|| anyhow::anyhow!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            10 => write!(f, "T"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}
