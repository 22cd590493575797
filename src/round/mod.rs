//! Round mechanics: bounding-pair selection, bet sizing, and settlement.
pub mod action;
pub use action::*;

pub mod bounds;
pub use bounds::*;

pub mod outcome;
pub use outcome::*;

pub mod settlement;
pub use settlement::*;
