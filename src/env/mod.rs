//! Episodic `reset`/`step` environment over a single deck lifetime.
pub mod environment;
pub use environment::*;

pub mod phase;
pub use phase::*;

pub mod step;
pub use step::*;
