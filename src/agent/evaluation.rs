use super::qtable::QTable;
use crate::Utility;
use crate::env::Environment;
use crate::simulation::Summary;
use rayon::prelude::*;

/// Greedy rollouts of a trained table.
///
/// Every episode gets its own seeded environment, so rollouts run in
/// parallel against the shared read-only table without coordination.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Evaluation {
    /// distribution of undiscounted episode returns
    pub returns: Summary,
    /// fraction of decisions that were passes
    pub passes: f64,
}

impl Evaluation {
    pub fn run(table: &QTable, episodes: usize, seed: u64) -> anyhow::Result<Self> {
        anyhow::ensure!(episodes > 0, "evaluation needs at least one episode");
        log::info!("evaluating greedy policy over {} episodes", episodes);
        let rollouts = (0..episodes as u64)
            .into_par_iter()
            .map(|i| Self::rollout(table, seed.wrapping_add(i)))
            .collect::<anyhow::Result<Vec<(Utility, usize, usize)>>>()?;
        let decisions = rollouts.iter().map(|(_, n, _)| n).sum::<usize>();
        let passes = rollouts.iter().map(|(_, _, p)| p).sum::<usize>();
        let evaluation = Self {
            returns: rollouts.iter().map(|(r, _, _)| *r as f64).collect(),
            passes: passes as f64 / decisions.max(1) as f64,
        };
        log::info!("{}", evaluation);
        Ok(evaluation)
    }

    /// one greedy episode: (return, decisions, passes)
    fn rollout(table: &QTable, seed: u64) -> anyhow::Result<(Utility, usize, usize)> {
        let ref mut env = Environment::seeded(seed);
        let (mut obs, _) = env.reset(None);
        let mut total = 0.;
        let mut decisions = 0;
        let mut passes = 0;
        loop {
            let action = table.greedy(&obs);
            let step = env.step(action)?;
            total += step.reward;
            decisions += 1;
            passes += action.is_pass() as usize;
            if step.done() {
                return Ok((total, decisions, passes));
            }
            obs = step.observation;
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "greedy return {:+.3} ± {:.3} over {} episodes, {:.1}% passes",
            self.returns.mean,
            self.returns.variance.sqrt(),
            self.returns.count,
            self.passes * 100.
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Observation;
    use crate::round::Action;

    #[test]
    fn empty_table_always_passes() {
        let table = QTable::default();
        let eval = Evaluation::run(&table, 64, 0).unwrap();
        assert!(eval.passes == 1.);
        assert!(eval.returns.count == 64);
        assert!(eval.returns.mean < 0.);
    }

    #[test]
    fn reproducible() {
        let ref mut table = QTable::default();
        for gap in 1..=11 {
            table.entry(Observation::from((gap, 0)))[Action::ALL_IN.index()] = 1.;
        }
        let a = Evaluation::run(table, 32, 7).unwrap();
        let b = Evaluation::run(table, 32, 7).unwrap();
        assert!(a == b);
        assert!(a.passes < 1.);
    }

    #[test]
    fn rejects_zero_episodes() {
        assert!(Evaluation::run(&QTable::default(), 0, 0).is_err());
    }
}
