use super::ledger::Ledger;
use super::summary::Summary;
use crate::Chips;

/// Final statistics for one seat.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PlayerStats {
    pub total_bets: Chips,
    pub total_winnings: Chips,
    pub net_profit: Chips,
    /// net change per deck cycle
    pub per_cycle: Summary,
    pub roi: f64,
}

impl From<&Ledger> for PlayerStats {
    fn from(ledger: &Ledger) -> Self {
        Self {
            total_bets: ledger.bets(),
            total_winnings: ledger.winnings(),
            net_profit: ledger.balance(),
            per_cycle: ledger.per_cycle(),
            roi: ledger.roi(),
        }
    }
}

/// Outcome of a full simulation run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    pub cycles: usize,
    pub rounds: usize,
    pub bets: usize,
    pub players: Vec<PlayerStats>,
    pub final_pot: Chips,
}

impl Report {
    /// chips are only ever moved between seats and the pot
    pub fn conserved(&self, initial_pot: Chips) -> bool {
        self.players.iter().map(|p| p.net_profit).sum::<Chips>() + self.final_pot == initial_pot
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cycles {}  rounds {}  bets {}  final pot {}", self.cycles, self.rounds, self.bets, self.final_pot)?;
        writeln!(f, "┌────────┬────────────┬────────────┬────────────┬────────────┬──────────────┬────────┐")?;
        writeln!(f, "│ Player │     ∑ Bets │ ∑ Winnings │ Net Profit │ Net/Cycle  │ Var/Cycle    │    ROI │")?;
        writeln!(f, "├────────┼────────────┼────────────┼────────────┼────────────┼──────────────┼────────┤")?;
        for (i, p) in self.players.iter().enumerate() {
            writeln!(
                f,
                "│ {:>6} │ {:>10} │ {:>10} │ {:>+10} │ {:>+10.3} │ {:>12.1} │ {:>6.3} │",
                i + 1,
                p.total_bets,
                p.total_winnings,
                p.net_profit,
                p.per_cycle.mean,
                p.per_cycle.variance,
                p.roi,
            )?;
        }
        writeln!(f, "└────────┴────────────┴────────────┴────────────┴────────────┴──────────────┴────────┘")?;
        Ok(())
    }
}
