//! Discretization of raw round state into tabular observations.
pub mod bucket;
pub use bucket::*;

pub mod observation;
pub use observation::*;
