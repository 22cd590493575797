use super::epsilon::Epsilon;
use super::qtable::QTable;
use crate::Probability;
use crate::Utility;
use crate::codec::Observation;
use crate::round::Action;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Epsilon-greedy policy over a borrowed QTable.
///
/// The agent holds only its schedule and its own RNG stream; the table it
/// reads and writes is owned by the caller.
#[derive(Debug, Clone)]
pub struct Agent {
    alpha: Probability,
    epsilon: Epsilon,
    rng: SmallRng,
}

impl Agent {
    pub fn new(alpha: Probability, epsilon: Epsilon) -> Self {
        Self {
            alpha,
            epsilon,
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(alpha: Probability, epsilon: Epsilon, seed: u64) -> Self {
        Self {
            alpha,
            epsilon,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn alpha(&self) -> Probability {
        self.alpha
    }
    pub fn epsilon(&self) -> &Epsilon {
        &self.epsilon
    }

    /// explore uniformly with probability ε(episode), else act greedily
    pub fn act(&mut self, table: &QTable, obs: &Observation, episode: usize) -> Action {
        if self.rng.random::<Probability>() < self.epsilon.at(episode) {
            Action::random(&mut self.rng)
        } else {
            table.greedy(obs)
        }
    }

    /// Credits the immediate reward to the observation we acted from, not
    /// the one `step` hands back; otherwise a row's values would not depend
    /// on the window they were chosen for.
    pub fn learn(&self, table: &mut QTable, obs: Observation, action: Action, reward: Utility) {
        table.update(obs, action, reward, self.alpha);
    }
}
