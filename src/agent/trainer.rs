use super::agent::Agent;
use super::hyperparameters::Hyperparameters;
use super::progress::Progress;
use super::qtable::QTable;
use crate::TRAINING_LOG_INTERVAL;
use crate::Utility;
use crate::env::Environment;
use std::time::Duration;
use std::time::Instant;

/// Offset between the deck's and the agent's seeds so the two streams differ.
const AGENT_SEED_OFFSET: u64 = 0x9E3779B97F4A7C15;

/// Runs the episode loop: reset, then act, step, and learn until the deck
/// runs out. The environment and agent live here; the table is lent in by
/// the caller so it outlives any one trainer.
pub struct Trainer {
    env: Environment,
    agent: Agent,
    params: Hyperparameters,
    episodes: usize,
    steps: usize,
    rows: usize,
    started: Instant,
}

impl Trainer {
    pub fn new(params: Hyperparameters) -> anyhow::Result<Self> {
        params.validate()?;
        let (env, agent) = match params.seed {
            Some(seed) => (
                Environment::seeded(seed),
                Agent::seeded(params.alpha, params.epsilon, seed ^ AGENT_SEED_OFFSET),
            ),
            None => (
                Environment::new(),
                Agent::new(params.alpha, params.epsilon),
            ),
        };
        Ok(Self {
            env,
            agent,
            params,
            episodes: 0,
            steps: 0,
            rows: 0,
            started: Instant::now(),
        })
    }

    pub fn params(&self) -> &Hyperparameters {
        &self.params
    }

    /// Trains until the episode budget is spent or an interrupt is requested.
    pub fn train(&mut self, table: &mut QTable) -> anyhow::Result<()> {
        log::info!("training {}", self.params);
        self.started = Instant::now();
        let mut logged = Instant::now();
        let mut returns = 0.;
        let mut window = 0;
        while self.episodes < self.params.episodes {
            if crate::interrupted() {
                log::warn!("interrupted at episode {}", self.episodes);
                break;
            }
            returns += self.episode(table)?;
            window += 1;
            if self.episodes % self.params.checkpoint == 0 {
                log::debug!(
                    "{}mean return {:>+10.2} ε {:.4}",
                    self.format(),
                    returns / window as Utility,
                    self.agent.epsilon().at(self.episodes)
                );
                returns = 0.;
                window = 0;
            }
            if logged.elapsed() > TRAINING_LOG_INTERVAL {
                log::info!("{}", self.format());
                logged = Instant::now();
            }
        }
        log::info!("{}", self.summary());
        Ok(())
    }

    /// Plays one full deck, updating the table after every step.
    /// Returns the undiscounted sum of rewards.
    pub fn episode(&mut self, table: &mut QTable) -> anyhow::Result<Utility> {
        let (mut obs, _) = self.env.reset(None);
        let mut total = 0.;
        loop {
            let action = self.agent.act(table, &obs, self.episodes);
            let step = self.env.step(action)?;
            self.agent.learn(table, obs, action, step.reward);
            self.steps += 1;
            total += step.reward;
            if step.done() {
                break;
            }
            obs = step.observation;
        }
        self.episodes += 1;
        self.rows = table.len();
        Ok(total)
    }
}

impl Progress for Trainer {
    fn episodes(&self) -> usize {
        self.episodes
    }
    fn steps(&self) -> usize {
        self.steps
    }
    fn rows(&self) -> usize {
        self.rows
    }
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
