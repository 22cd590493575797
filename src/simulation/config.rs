use crate::Chips;
use crate::GAP_BUCKET_MAX;
use crate::SIM_DECK_CYCLES;
use crate::SIM_PLAYERS;
use crate::SIM_THRESHOLD;

/// Table setup for the multiplayer simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub players: usize,
    /// rounds whose window is this narrow or narrower are skipped
    pub threshold: i8,
    /// fresh decks to play through
    pub cycles: usize,
    pub initial_pot: Chips,
    /// None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: SIM_PLAYERS,
            threshold: SIM_THRESHOLD,
            cycles: SIM_DECK_CYCLES,
            initial_pot: 0,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.players > 0, "table needs at least one player");
        anyhow::ensure!(
            (0..=GAP_BUCKET_MAX).contains(&self.threshold),
            "threshold must be within 0..={}, got {}",
            GAP_BUCKET_MAX,
            self.threshold
        );
        anyhow::ensure!(self.initial_pot >= 0, "initial pot cannot be negative");
        Ok(())
    }
}
