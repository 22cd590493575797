use crate::Utility;
use crate::codec::Observation;

/// Auxiliary diagnostics. Always empty; kept so the step signature
/// matches the usual episodic-environment shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Info;

/// One transition out of the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: Utility,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl Step {
    /// Terminal transitions carry the sentinel observation and pay nothing,
    /// whatever the final settlement computed.
    pub fn terminal() -> Self {
        Self {
            observation: Observation::terminal(),
            reward: 0.,
            terminated: true,
            truncated: false,
            info: Info,
        }
    }
    pub fn ongoing(observation: Observation, reward: Utility) -> Self {
        Self {
            observation,
            reward,
            terminated: false,
            truncated: false,
            info: Info,
        }
    }
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}
