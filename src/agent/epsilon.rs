use crate::EPSILON_DECAY;
use crate::EPSILON_END;
use crate::EPSILON_START;
use crate::Probability;

/// Exploration schedule.
///
/// ε(e) = ε_end + (ε_start − ε_end) · exp(−e / decay)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epsilon {
    pub start: Probability,
    pub end: Probability,
    pub decay: f32,
}

impl Default for Epsilon {
    fn default() -> Self {
        Self {
            start: EPSILON_START,
            end: EPSILON_END,
            decay: EPSILON_DECAY,
        }
    }
}

impl Epsilon {
    pub fn at(&self, episode: usize) -> Probability {
        self.end + (self.start - self.end) * (-(episode as f32) / self.decay).exp()
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.end) && (0.0..=1.0).contains(&self.start),
            "epsilon bounds must be probabilities, got {} → {}",
            self.start,
            self.end
        );
        anyhow::ensure!(
            self.end <= self.start,
            "epsilon must decay, got {} → {}",
            self.start,
            self.end
        );
        anyhow::ensure!(self.decay > 0., "epsilon decay must be positive, got {}", self.decay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_start() {
        let eps = Epsilon::default();
        assert!((eps.at(0) - EPSILON_START).abs() < 1e-6);
    }

    #[test]
    fn one_efold_per_decay() {
        let eps = Epsilon {
            start: 1.0,
            end: 0.0,
            decay: 100.,
        };
        assert!((eps.at(100) - (-1f32).exp()).abs() < 1e-6);
    }

    #[test]
    fn decreases_toward_end() {
        let eps = Epsilon::default();
        let schedule = (0..2_000_000).step_by(100_000).map(|e| eps.at(e)).collect::<Vec<_>>();
        assert!(schedule.windows(2).all(|w| w[0] > w[1]));
        assert!(schedule.iter().all(|&e| e > EPSILON_END));
        assert!((eps.at(usize::MAX / 2) - EPSILON_END).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_schedules() {
        assert!(Epsilon::default().validate().is_ok());
        assert!(Epsilon { start: 0.1, end: 0.2, decay: 1. }.validate().is_err());
        assert!(Epsilon { start: 1.5, end: 0.2, decay: 1. }.validate().is_err());
        assert!(Epsilon { start: 1.0, end: 0.2, decay: 0. }.validate().is_err());
    }
}
