//! Simulation Binary
//!
//! Runs the fixed-policy multiplayer baseline and prints per-player statistics.

use clap::Parser;
use inbetween::simulation::*;
use inbetween::*;

#[derive(Parser)]
#[command(author, version, about = "Simulate multiplayer In-Between", long_about = None)]
struct Args {
    #[arg(long, default_value_t = SIM_DECK_CYCLES)]
    cycles: usize,
    #[arg(long, default_value_t = SIM_PLAYERS)]
    players: usize,
    /// skip rounds whose window is at most this wide
    #[arg(long, default_value_t = SIM_THRESHOLD)]
    threshold: i8,
    #[arg(long, default_value_t = 0)]
    initial_pot: Chips,
    #[arg(long)]
    seed: Option<u64>,
    /// independent tables to run in parallel
    #[arg(long, default_value_t = 1)]
    trials: usize,
    /// print reports as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl From<&Args> for TableConfig {
    fn from(args: &Args) -> Self {
        Self {
            players: args.players,
            threshold: args.threshold,
            cycles: args.cycles,
            initial_pot: args.initial_pot,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let ref args = Args::parse();
    log()?;
    let reports = match args.trials {
        0 => anyhow::bail!("need at least one trial"),
        1 => vec![Simulator::new(TableConfig::from(args))?.run()],
        n => Simulator::batch(TableConfig::from(args), n)?,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in reports.iter() {
            println!("{}", report);
        }
    }
    if reports.len() > 1 {
        for seat in 0..args.players {
            let nets = reports
                .iter()
                .map(|r| r.players[seat].per_cycle.mean)
                .collect::<Summary>();
            log::info!(
                "player {} net/cycle across trials {:+.4} ± {:.4}",
                seat + 1,
                nets.mean,
                nets.variance.sqrt()
            );
        }
    }
    Ok(())
}
