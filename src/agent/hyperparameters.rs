use super::epsilon::Epsilon;
use crate::LEARNING_RATE;
use crate::Probability;
use crate::TRAINING_CHECKPOINT;
use crate::TRAINING_EPISODES;

/// Knobs for a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameters {
    /// learning rate α
    pub alpha: Probability,
    pub epsilon: Epsilon,
    /// total training budget
    pub episodes: usize,
    /// episodes between logged checkpoints
    pub checkpoint: usize,
    /// seeds both the environment's deck and the agent's exploration;
    /// None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            alpha: LEARNING_RATE,
            epsilon: Epsilon::default(),
            episodes: TRAINING_EPISODES,
            checkpoint: TRAINING_CHECKPOINT,
            seed: None,
        }
    }
}

impl Hyperparameters {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.alpha > 0. && self.alpha <= 1.,
            "learning rate must be in (0, 1], got {}",
            self.alpha
        );
        anyhow::ensure!(self.checkpoint > 0, "checkpoint interval must be positive");
        self.epsilon.validate()
    }
}

impl std::fmt::Display for Hyperparameters {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "α {} ε {} → {} (decay {}) episodes {} seed {}",
            self.alpha,
            self.epsilon.start,
            self.epsilon.end,
            self.epsilon.decay,
            self.episodes,
            self.seed.map_or("entropy".to_string(), |s| s.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Hyperparameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_alpha() {
        let params = Hyperparameters {
            alpha: 0.,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_zero_checkpoint() {
        let params = Hyperparameters {
            checkpoint: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
