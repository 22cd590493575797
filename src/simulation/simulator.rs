use super::config::TableConfig;
use super::ledger::Ledger;
use super::report::Report;
use crate::CARDS_PER_ROUND;
use crate::Chips;
use crate::cards::Deck;
use crate::round::Bounds;
use crate::round::Outcome;
use rayon::prelude::*;

/// Round-robin In-Between with a fixed policy: bet the whole pot whenever
/// the window is wider than the threshold, otherwise sit out.
///
/// An empty pot is topped up by charging every seat one chip. Wins, rails,
/// and losses move chips between the acting seat and the pot by the usual
/// three-way rule. The turn passes after every round, bet or not.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: TableConfig,
    deck: Deck,
    pot: Chips,
    turn: usize,
    rounds: usize,
    bets: usize,
    ledgers: Vec<Ledger>,
}

impl Simulator {
    pub fn new(config: TableConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            deck: config.seed.map(Deck::seeded).unwrap_or_default(),
            pot: config.initial_pot,
            turn: 0,
            rounds: 0,
            bets: 0,
            ledgers: vec![Ledger::default(); config.players],
            config,
        })
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn turn(&self) -> usize {
        self.turn
    }
    pub fn ledgers(&self) -> &[Ledger] {
        &self.ledgers
    }

    /// Plays every configured deck cycle and summarizes the table.
    pub fn run(mut self) -> Report {
        log::info!(
            "simulating {} cycles, {} players, threshold {}",
            self.config.cycles,
            self.config.players,
            self.config.threshold
        );
        for _ in 0..self.config.cycles {
            self.cycle();
        }
        self.report()
    }

    /// Runs independent tables in parallel, one per trial seed.
    pub fn batch(config: TableConfig, trials: usize) -> anyhow::Result<Vec<Report>> {
        let base = config.seed.unwrap_or_else(rand::random);
        (0..trials as u64)
            .into_par_iter()
            .map(|i| TableConfig {
                seed: Some(base.wrapping_add(i)),
                ..config
            })
            .map(|config| Self::new(config).map(Self::run))
            .collect()
    }

    /// One fresh deck, played until it cannot cover another round.
    pub fn cycle(&mut self) {
        self.deck.reset();
        while self.deck.cards_left() >= CARDS_PER_ROUND {
            if !self.round() {
                break;
            }
        }
        self.ledgers.iter_mut().for_each(Ledger::close);
    }

    /// Plays the current seat's round. False once the deck is exhausted.
    fn round(&mut self) -> bool {
        if self.pot == 0 {
            self.ante();
        }
        let Some(bounds) = Bounds::redraw(&mut self.deck) else {
            return false;
        };
        self.rounds += 1;
        if bounds.gap() > self.config.threshold && self.pot > 0 {
            self.bet(bounds);
        }
        self.turn = (self.turn + 1) % self.config.players;
        true
    }

    /// every seat chips in one to refill an empty pot
    fn ante(&mut self) {
        for ledger in self.ledgers.iter_mut() {
            ledger.pay(1);
        }
        self.pot += self.config.players as Chips;
    }

    fn bet(&mut self, bounds: Bounds) {
        let bet = self.pot;
        let target = self.deck.draw();
        let ledger = &mut self.ledgers[self.turn];
        ledger.wager(bet);
        self.bets += 1;
        match Outcome::from((bounds, target)) {
            Outcome::Win => {
                self.pot -= bet;
                ledger.win(bet);
            }
            Outcome::Rail => {
                self.pot += 2 * bet;
                ledger.pay(2 * bet);
            }
            Outcome::Loss | Outcome::Pass => {
                self.pot += bet;
                ledger.pay(bet);
            }
        }
    }

    fn report(&self) -> Report {
        Report {
            cycles: self.config.cycles,
            rounds: self.rounds,
            bets: self.bets,
            players: self.ledgers.iter().map(Into::into).collect(),
            final_pot: self.pot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn config(seed: u64) -> TableConfig {
        TableConfig {
            cycles: 500,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn chips_are_conserved() {
        let report = Simulator::new(config(0)).unwrap().run();
        assert!(report.conserved(0));
        assert!(report.players.len() == 4);
        assert!(report.players.iter().all(|p| p.per_cycle.count == 500));
    }

    #[test]
    fn conserved_with_opening_pot() {
        let config = TableConfig {
            initial_pot: 50,
            threshold: 3,
            ..config(1)
        };
        let report = Simulator::new(config).unwrap().run();
        assert!(report.conserved(50));
    }

    #[test]
    fn nothing_clears_widest_threshold() {
        let config = TableConfig {
            threshold: 11,
            ..config(2)
        };
        let report = Simulator::new(config).unwrap().run();
        assert!(report.bets == 0);
        assert!(report.final_pot == 4);
        assert!(report.players.iter().all(|p| p.net_profit == -1 && p.roi == 0.));
    }

    #[test]
    fn winnings_never_exceed_bets_plus_antes() {
        let report = Simulator::new(config(3)).unwrap().run();
        assert!(report.bets > 0);
        assert!(report.players.iter().all(|p| p.total_winnings <= p.total_bets));
        assert!(report.players.iter().all(|p| p.roi >= 0. && p.roi <= 1.));
    }

    #[test]
    fn turn_rotates_every_round() {
        let ref mut sim = Simulator::new(TableConfig {
            cycles: 1,
            ..config(4)
        })
        .unwrap();
        sim.cycle();
        assert!(sim.turn() == sim.rounds % 4);
    }

    #[test]
    fn plays_final_round_of_deck() {
        let ref mut sim = Simulator::new(TableConfig {
            threshold: 3,
            ..config(8)
        })
        .unwrap();
        sim.deck = Deck::from(vec![Card::from(2), Card::from(9), Card::from(5)]);
        sim.pot = 4;
        assert!(sim.round());
        assert!(sim.bets == 1);
        assert!(sim.pot() == 0);
        assert!(sim.ledgers()[0].winnings() == 4);
        assert!(sim.deck.cards_left() == 0);
    }

    #[test]
    fn seeded_runs_agree() {
        let a = Simulator::new(config(5)).unwrap().run();
        let b = Simulator::new(config(5)).unwrap().run();
        assert!(a == b);
    }

    #[test]
    fn batch_runs_each_trial() {
        let reports = Simulator::batch(TableConfig { cycles: 50, ..config(6) }, 4).unwrap();
        assert!(reports.len() == 4);
        assert!(reports.iter().all(|r| r.conserved(0)));
        assert!(reports[0] != reports[1]);
    }

    #[test]
    fn batch_rejects_bad_config() {
        let config = TableConfig {
            players: 0,
            ..config(7)
        };
        assert!(Simulator::batch(config, 2).is_err());
    }
}
