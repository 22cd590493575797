use crate::GAP_BUCKET_MAX;
use crate::N_ACTIONS;
use crate::POT_BUCKET_MAX;
use crate::Probability;
use crate::Utility;
use crate::codec::Observation;
use crate::round::Action;
use std::collections::BTreeMap;

/// Action values for a single observation.
pub type Values = [Utility; N_ACTIONS];

/// Sparse action-value table.
///
/// Rows are created on first write and never evicted. Reading an
/// unvisited observation behaves as an all-zero row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable(BTreeMap<Observation, Values>);

impl QTable {
    /// get-or-insert-default: the row for this observation,
    /// zero-initialized if we have never seen it
    pub fn entry(&mut self, obs: Observation) -> &mut Values {
        self.0.entry(obs).or_insert([0.; N_ACTIONS])
    }
    pub fn get(&self, obs: &Observation) -> Option<&Values> {
        self.0.get(obs)
    }
    pub fn value(&self, obs: &Observation, action: Action) -> Utility {
        self.get(obs).map_or(0., |row| row[action.index()])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Observation, &Values)> {
        self.0.iter()
    }

    /// Highest-valued action, lowest index on ties. Unvisited rows are all
    /// zeros, so they resolve to a pass.
    pub fn greedy(&self, obs: &Observation) -> Action {
        self.best(obs).unwrap_or(Action::PASS)
    }
    /// Like `greedy`, but None for rows we have never visited.
    pub fn best(&self, obs: &Observation) -> Option<Action> {
        self.get(obs).map(Self::argmax)
    }

    /// Exponential moving average of immediate reward.
    ///
    /// Q[s][a] += α (r − Q[s][a]). The next state's value is not consulted.
    pub fn update(&mut self, obs: Observation, action: Action, reward: Utility, alpha: Probability) {
        let q = &mut self.entry(obs)[action.index()];
        *q += alpha * (reward - *q);
    }

    fn argmax(row: &Values) -> Action {
        let mut best = 0;
        for (i, q) in row.iter().enumerate() {
            if *q > row[best] {
                best = i;
            }
        }
        Action::try_from(best).expect("row index within action space")
    }
}

impl FromIterator<(Observation, Values)> for QTable {
    fn from_iter<I: IntoIterator<Item = (Observation, Values)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Best-action grid: one row per gap bucket, one column per pot bucket.
/// Cells hold the greedy action index, or -1 where we never trained.
#[rustfmt::skip]
impl std::fmt::Display for QTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = format!(
            "gap\\pot │ {}",
            (0..=POT_BUCKET_MAX).map(|p| format!("{:>3}", p)).collect::<Vec<_>>().join(" ")
        );
        let line = "─".repeat(header.chars().count());
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", line)?;
        for gap in -1..=GAP_BUCKET_MAX {
            let cells = (0..=POT_BUCKET_MAX)
                .map(|pot| Observation::from((gap, pot)))
                .map(|obs| self.best(&obs).map_or(-1, |a| a.index() as i32))
                .map(|a| format!("{:>3}", a))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{:>7} │ {}", gap, cells)?;
        }
        writeln!(f, "{}", line)?;
        writeln!(f, "0 = pass, k = bet k×5% of pot, -1 = never trained")
    }
}
