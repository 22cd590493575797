use super::summary::Summary;
use crate::Chips;

/// Running account for one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    balance: Chips,
    bets: Chips,
    winnings: Chips,
    /// balance at the end of each deck cycle, seeded with the opening 0
    closes: Vec<Chips>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            balance: 0,
            bets: 0,
            winnings: 0,
            closes: vec![0],
        }
    }
}

impl Ledger {
    pub fn balance(&self) -> Chips {
        self.balance
    }
    pub fn bets(&self) -> Chips {
        self.bets
    }
    pub fn winnings(&self) -> Chips {
        self.winnings
    }
    pub fn wager(&mut self, bet: Chips) {
        self.bets += bet;
    }
    pub fn win(&mut self, amount: Chips) {
        self.balance += amount;
        self.winnings += amount;
    }
    pub fn pay(&mut self, amount: Chips) {
        self.balance -= amount;
    }
    pub fn close(&mut self) {
        self.closes.push(self.balance);
    }
    /// net change over each deck cycle
    pub fn nets(&self) -> impl Iterator<Item = Chips> + '_ {
        self.closes.windows(2).map(|w| w[1] - w[0])
    }
    pub fn per_cycle(&self) -> Summary {
        self.nets().map(|n| n as f64).collect()
    }
    /// winnings per chip wagered; zero for a seat that never bet
    pub fn roi(&self) -> f64 {
        if self.bets > 0 {
            self.winnings as f64 / self.bets as f64
        } else {
            0.
        }
    }
}
