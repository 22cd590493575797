//! Training Binary
//!
//! Learns a betting policy with tabular epsilon-greedy learning, then prints
//! the best-action grid. Type "Q" + Enter or set TRAIN_DURATION to stop early.

use clap::Parser;
use inbetween::agent::*;
use inbetween::*;

#[derive(Parser)]
#[command(author, version, about = "Train an In-Between betting policy", long_about = None)]
struct Args {
    #[arg(long, default_value_t = TRAINING_EPISODES)]
    episodes: usize,
    #[arg(long, default_value_t = LEARNING_RATE)]
    alpha: Probability,
    #[arg(long, default_value_t = EPSILON_START)]
    eps_start: Probability,
    #[arg(long, default_value_t = EPSILON_END)]
    eps_end: Probability,
    #[arg(long, default_value_t = EPSILON_DECAY)]
    eps_decay: f32,
    #[arg(long, default_value_t = TRAINING_CHECKPOINT)]
    checkpoint: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// greedy episodes to play after training (0 to skip)
    #[arg(long, default_value_t = EVALUATION_EPISODES)]
    evaluate: usize,
}

impl From<&Args> for Hyperparameters {
    fn from(args: &Args) -> Self {
        Self {
            alpha: args.alpha,
            epsilon: Epsilon {
                start: args.eps_start,
                end: args.eps_end,
                decay: args.eps_decay,
            },
            episodes: args.episodes,
            checkpoint: args.checkpoint,
            seed: args.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let ref args = Args::parse();
    log()?;
    brb();
    let ref mut table = QTable::default();
    Trainer::new(Hyperparameters::from(args))?.train(table)?;
    println!("\n{}", table);
    if args.evaluate > 0 {
        Evaluation::run(table, args.evaluate, args.seed.unwrap_or_default())?;
    }
    Ok(())
}
