use super::bucket::gap_bucket;
use super::bucket::pot_bucket;
use crate::Chips;
use crate::round::Bounds;

/// What the learner sees: the bucketed window and the bucketed pot.
///
/// `(-1, 0)` is reserved for terminal states, after which no round can be
/// dealt. Ordering is lexicographic by gap then pot, which is also the
/// row/column order of the rendered Q grid.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Observation {
    gap: i8,
    pot: i8,
}

impl Observation {
    pub fn terminal() -> Self {
        Self { gap: -1, pot: 0 }
    }
    pub fn is_terminal(&self) -> bool {
        *self == Self::terminal()
    }
    pub fn gap(&self) -> i8 {
        self.gap
    }
    pub fn pot(&self) -> i8 {
        self.pot
    }
}

impl From<(Bounds, Chips)> for Observation {
    fn from((bounds, pot): (Bounds, Chips)) -> Self {
        Self {
            gap: gap_bucket(&bounds),
            pot: pot_bucket(pot),
        }
    }
}

/// raw bucket pair, as rendered in reports
impl From<(i8, i8)> for Observation {
    fn from((gap, pot): (i8, i8)) -> Self {
        Self { gap, pot }
    }
}
impl From<Observation> for (i8, i8) {
    fn from(o: Observation) -> Self {
        (o.gap, o.pot)
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:>2}, {:>2})", self.gap, self.pot)
    }
}
