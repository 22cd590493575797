//! In-Between card game engine and tabular betting-policy learner.
//!
//! Players bet on whether a drawn card lands strictly between two bounding
//! cards. The crate provides the deck and round mechanics, a discretized
//! `reset`/`step` environment, an epsilon-greedy tabular agent, and a
//! fixed-policy multiplayer simulator for baseline statistics.

pub mod agent;
pub mod cards;
pub mod codec;
pub mod env;
pub mod round;
pub mod simulation;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pot balances, bet sizes, and player balances.
pub type Chips = i64;
/// Rewards and action values.
pub type Utility = f32;
/// Exploration rates and learning rates.
pub type Probability = f32;

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Lowest card rank (Ace).
pub const RANK_MIN: u8 = 1;
/// Highest card rank (King).
pub const RANK_MAX: u8 = 13;
/// Copies of each rank in a fresh deck.
pub const RANK_COPIES: usize = 4;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = RANK_MAX as usize * RANK_COPIES;
/// Minimum cards needed to deal a bounding pair plus a target.
pub const CARDS_PER_ROUND: usize = 3;

// ============================================================================
// BETTING RULES
// ============================================================================
/// Number of discrete actions: pass plus twenty bet sizes.
pub const N_ACTIONS: usize = 21;
/// Percent of the pot wagered per action step.
pub const BET_INCREMENT_PERCENT: Chips = 5;
/// Reward charged for passing on a round.
pub const PASS_PENALTY: Chips = 1;
/// Reward charged when the pot is emptied and must be refilled.
pub const REFILL_PENALTY: Chips = 1;
/// Pot value after reset and after a refill.
pub const POT_FLOOR: Chips = 1;

// ============================================================================
// STATE DISCRETIZATION
// ============================================================================
/// Pot buckets per decade of pot size.
pub const POT_BUCKETS_PER_DECADE: f64 = 6.0;
/// Largest pot bucket; larger pots saturate here.
pub const POT_BUCKET_MAX: i8 = 10;
/// Largest gap bucket (Ace against King).
pub const GAP_BUCKET_MAX: i8 = (RANK_MAX - RANK_MIN - 1) as i8;

// ============================================================================
// TABULAR LEARNING
// Myopic moving average of immediate reward with exponentially decaying ε.
// ============================================================================
/// Learning rate α of the action-value update.
pub const LEARNING_RATE: Probability = 0.1;
/// Exploration rate at episode zero.
pub const EPSILON_START: Probability = 0.2;
/// Asymptotic exploration rate.
pub const EPSILON_END: Probability = 0.01;
/// Episodes per e-fold of exploration decay.
pub const EPSILON_DECAY: f32 = 2e5;
/// Default training budget in episodes.
pub const TRAINING_EPISODES: usize = 400_000;
/// Episodes between progress checkpoints.
pub const TRAINING_CHECKPOINT: usize = 10_000;
/// Greedy episodes played when evaluating a trained table.
pub const EVALUATION_EPISODES: usize = 10_000;

// ============================================================================
// MULTIPLAYER BASELINE
// ============================================================================
/// Players seated in the round-robin simulator.
pub const SIM_PLAYERS: usize = 4;
/// Skip any round whose window is at most this wide.
pub const SIM_THRESHOLD: i8 = 7;
/// Fresh decks played per simulation.
pub const SIM_DECK_CYCLES: usize = 100_000;

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Interval between progress log messages during training.
pub const TRAINING_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Starts the terminal logger at INFO and a per-run file under `logs/` at DEBUG.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("creating logs directory")?;
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = format!("logs/inbetween-{}.log", stamp);
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(&path).with_context(|| format!("creating {}", path))?,
        ),
    ])?;
    Ok(())
}

/// Global interrupt flag for graceful shutdown coordination.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional training deadline from TRAIN_DURATION env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if graceful shutdown was requested (via stdin "Q") or deadline reached.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}

/// Register graceful interrupt handler. Type "Q" + Enter to stop after current episode.
/// Optionally set TRAIN_DURATION env var (e.g., "2h", "30m") for timed runs.
pub fn brb() {
    if let Ok(duration) = std::env::var("TRAIN_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("training will stop after {}", duration);
        } else {
            log::warn!("ignoring unparseable TRAIN_DURATION {:?}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current episode...");
                    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}

/// Reads a TRAIN_DURATION value: a whole number followed by s, m, h, or d.
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let scale = match s.chars().last()? {
        's' => 1,
        'm' => 60,
        'h' => 60 * 60,
        'd' => 24 * 60 * 60,
        _ => return None,
    };
    s[..s.len() - 1]
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(scale))
        .map(std::time::Duration::from_secs)
}
