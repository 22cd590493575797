use super::bounds::Bounds;
use crate::cards::Card;

/// How a round resolved from the bettor's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// declined to bet; no target drawn
    Pass,
    /// target fell strictly inside the window
    Win,
    /// target matched a bounding card; pays double
    Rail,
    /// target fell outside the window
    Loss,
}

impl From<(Bounds, Card)> for Outcome {
    fn from((bounds, target): (Bounds, Card)) -> Self {
        if bounds.inside(target) {
            Self::Win
        } else if bounds.rails(target) {
            Self::Rail
        } else {
            Self::Loss
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Pass => "pass",
            Self::Win => "win",
            Self::Rail => "rail",
            Self::Loss => "loss",
        })
    }
}
