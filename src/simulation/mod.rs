//! Fixed-policy multiplayer baseline. Nothing here learns; it produces
//! per-player return distributions to compare learned policies against.
pub mod config;
pub use config::*;

pub mod ledger;
pub use ledger::*;

pub mod report;
pub use report::*;

pub mod simulator;
pub use simulator::*;

pub mod summary;
pub use summary::*;
