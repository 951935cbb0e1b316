use super::aggregate::AggregateStatistics;
use crate::betting::factory::BettingSpec;
use crate::errors::ConfigError;
use crate::game::paytable::{BonusPaytable, Paytable};
use crate::game::state::GameError;
use crate::session::config::SessionConfig;
use crate::session::result::SessionResult;
use crate::session::session::Session;
use crate::strategy::factory::{BonusSpec, StrategySpec};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// a full simulation campaign: one session template, many sessions
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub session: SessionConfig,
    pub strategy: StrategySpec,
    pub betting: BettingSpec,
    pub bonus: BonusSpec,
    /// payout tables applied to every session
    pub paytable: Paytable,
    pub bonus_paytable: BonusPaytable,
    pub sessions: usize,
    pub master_seed: u64,
    /// worker threads; zero means one per logical cpu
    pub workers: usize,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session.validate()?;
        if self.sessions == 0 {
            return Err(ConfigError::NonPositive {
                field: "sessions",
                value: 0.0,
            });
        }
        Ok(())
    }
}

/// the per-session seed table, generated up front from the master
/// seed. session i's seed depends only on (master, i), never on
/// how sessions are later scheduled across workers.
pub fn seeds(master: u64, n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(master);
    (0..n).map(|_| rng.gen()).collect()
}

#[derive(Debug, Clone)]
pub struct RunResult {
    /// in session order, regardless of completion order
    pub results: Vec<SessionResult>,
    pub aggregate: AggregateStatistics,
}

pub struct Controller {
    config: SimulationConfig,
}

impl Controller {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// run every session on the calling thread
    pub fn run(&self) -> Result<RunResult, SimulationError> {
        let results = seeds(self.config.master_seed, self.config.sessions)
            .iter()
            .enumerate()
            .map(|(id, &seed)| self.play(id, seed))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::assemble(results))
    }

    /// run sessions across a rayon pool. identical output to the
    /// sequential run for the same master seed.
    pub fn run_parallel(&self) -> Result<RunResult, SimulationError> {
        self.run_parallel_with(|_, _| {})
    }

    /// parallel run with a completion callback (completed, total).
    /// the callback is a side channel; it never influences the
    /// simulation. any session error fails the whole run and
    /// discards partial results.
    pub fn run_parallel_with<F>(&self, progress: F) -> Result<RunResult, SimulationError>
    where
        F: Fn(usize, usize) + Sync,
    {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let workers = match self.config.workers {
            0 => num_cpus::get(),
            n => n,
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        let total = self.config.sessions;
        let completed = AtomicUsize::new(0);
        let results = pool.install(|| {
            seeds(self.config.master_seed, total)
                .par_iter()
                .enumerate()
                .map(|(id, &seed)| {
                    let result = self.play(id, seed)?;
                    progress(completed.fetch_add(1, Ordering::Relaxed) + 1, total);
                    Ok(result)
                })
                .collect::<Result<Vec<_>, SimulationError>>()
        })?;
        Ok(Self::assemble(results))
    }

    fn play(&self, id: usize, seed: u64) -> Result<SessionResult, SimulationError> {
        let mut session = Session::with_paytables(
            self.config.session.clone(),
            self.config.paytable.clone(),
            self.config.bonus_paytable.clone(),
            self.config.strategy.build()?,
            self.config.betting.build()?,
            self.config.bonus.build()?,
        )?;
        let mut rng = SmallRng::seed_from_u64(seed);
        Ok(session.run(&mut rng, id, seed)?)
    }

    fn assemble(results: Vec<SessionResult>) -> RunResult {
        let mut aggregate = AggregateStatistics::new();
        for result in &results {
            aggregate.observe(result);
        }
        RunResult { results, aggregate }
    }
}
