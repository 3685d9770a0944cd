use crate::model::config::AppConfig;
use crate::model::control::PauseHandle;
use crate::model::creature::Creature;
use crate::model::metrics::Metrics;
use crate::model::snapshot::{PopulationStats, WorldSnapshot};
use crate::model::terrain::{Grid, NoiseSource};
use anyhow::Context;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub mod update;

/// Outcome of one [`Simulation::step`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// The step was skipped because the simulation is paused.
    pub paused: bool,
    pub births: usize,
    pub deaths: usize,
    /// Random creatures added to reach the population floor.
    pub injected: usize,
    pub population: usize,
}

/// Owns the grid, the population and the random stream of one run.
pub struct Simulation {
    config: AppConfig,
    grid: Grid,
    creatures: Vec<Creature>,
    tick: u64,
    seed: u64,
    rng: ChaCha8Rng,
    pause: PauseHandle,
    metrics: Metrics,
}

impl Simulation {
    /// Validates `config`, generates terrain from `noise` and spawns the
    /// initial population.
    pub fn new<N: NoiseSource + ?Sized>(config: AppConfig, noise: &N) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config
            .world
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let grid = Grid::generate(
            config.world.width,
            config.world.height,
            config.world.tile_size,
            seed,
            noise,
        )
        .context("Failed to generate terrain")?;
        Self::with_grid(config, grid, seed)
    }

    /// Uses a prebuilt grid; `seed` drives every creature decision.
    pub fn with_grid(config: AppConfig, grid: Grid, seed: u64) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut creatures = Vec::with_capacity(config.world.initial_population);
        for _ in 0..config.world.initial_population {
            creatures.push(Creature::new_random(&grid, &mut rng)?);
        }

        tracing::info!(
            seed,
            tiles_x = grid.tiles_x(),
            tiles_y = grid.tiles_y(),
            tile_size = grid.tile_size(),
            population = creatures.len(),
            fingerprint = %config.fingerprint(),
            "Simulation initialised"
        );

        Ok(Self {
            metrics: Metrics::new(config.log_interval),
            config,
            grid,
            creatures,
            tick: 0,
            seed,
            rng,
            pause: PauseHandle::new(),
        })
    }

    /// Settings the run was built with. Fixed once the grid exists.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed the run was started with; reuse it to reproduce the run.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.creatures.len()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Shared flag for controllers on other threads.
    #[must_use]
    pub fn pause_handle(&self) -> PauseHandle {
        self.pause.clone()
    }

    pub fn toggle_pause(&self) -> bool {
        self.pause.toggle()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(self.tick, self.is_paused(), &self.grid, &self.creatures)
    }

    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        PopulationStats::from_creatures(&self.creatures)
    }
}
