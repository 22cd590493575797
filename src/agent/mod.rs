//! Tabular epsilon-greedy learning over discretized observations.
//!
//! - `qtable` — sparse action values with lazy zero rows
//! - `epsilon` — exponentially decaying exploration schedule
//! - `agent` — action selection and the myopic value update
//! - `trainer` — episode loop, checkpoints, graceful interruption
//! - `evaluation` — parallel greedy rollouts of a trained table
pub mod agent;
pub use agent::*;

pub mod epsilon;
pub use epsilon::*;

pub mod evaluation;
pub use evaluation::*;

pub mod hyperparameters;
pub use hyperparameters::*;

pub mod progress;
pub use progress::*;

pub mod qtable;
pub use qtable::*;

pub mod trainer;
pub use trainer::*;
