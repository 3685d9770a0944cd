pub mod macros;

use neurotile_lib::model::config::AppConfig;
use neurotile_lib::model::terrain::{Grid, ValueNoise};
use neurotile_lib::Simulation;

/// Raw elevations for a 5x3 map whose single interior row is water, soil,
/// mountain. Ring values are ignored by the grid.
#[allow(dead_code)]
pub const THREE_BIOME_ROW: [f64; 15] = [
    0.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, -2.0, 0.0, 2.0, 0.0, //
    0.0, 0.0, 0.0, 0.0, 0.0, //
];

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    seed: u64,
    raw_elevations: Option<Vec<f64>>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.width = 12;
        config.world.height = 12;
        config.world.initial_population = 0;
        config.world.min_population = 0;
        config.world.seed = Some(1);
        Self {
            config,
            seed: 1,
            raw_elevations: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn with_population(mut self, initial: usize, floor: usize) -> Self {
        self.config.world.initial_population = initial;
        self.config.world.min_population = floor;
        self
    }

    /// Builds the grid from row-major raw elevations instead of noise.
    pub fn with_raw_elevations(mut self, raw: &[f64]) -> Self {
        self.raw_elevations = Some(raw.to_vec());
        self
    }

    pub fn build(self) -> Simulation {
        match self.raw_elevations {
            Some(raw) => {
                let grid = Grid::from_raw_elevations(
                    self.config.world.width,
                    self.config.world.height,
                    self.config.world.tile_size,
                    &raw,
                )
                .expect("Failed to build grid in test builder");
                Simulation::with_grid(self.config, grid, self.seed)
                    .expect("Failed to create simulation in test builder")
            }
            None => Simulation::new(self.config, &ValueNoise::default())
                .expect("Failed to create simulation in test builder"),
        }
    }
}
