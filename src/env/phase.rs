use crate::round::Bounds;

/// Episode state. An active episode always has a dealt window to bet on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active(Bounds),
    Terminal,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Active(bounds) => Some(*bounds),
            Self::Terminal => None,
        }
    }
}

impl From<Option<Bounds>> for Phase {
    fn from(bounds: Option<Bounds>) -> Self {
        bounds.map(Self::Active).unwrap_or(Self::Terminal)
    }
}
