//! Configuration management for simulation parameters.
//!
//! Values come from the `Default` impls, overridden by a TOML file when one
//! is given. Every table and key is optional.
//!
//! ## Example `neurotile.toml`
//!
//! ```toml
//! target_tps = 30
//!
//! [world]
//! width = 96
//! height = 54
//! tile_size = 10
//! initial_population = 60
//! min_population = 60
//! seed = 42
//!
//! [evolution]
//! large_mutation_chance = 0.02
//! large_mutation_factor = 4.0
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-level simulation configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Tiles across, border ring included.
    pub width: usize,
    /// Tiles down, border ring included.
    pub height: usize,
    /// Pixels per tile edge.
    pub tile_size: u32,
    pub initial_population: usize,
    /// Population floor; random creatures are injected below it.
    pub min_population: usize,
    /// Fixed seed for terrain and creatures. Drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 192,
            height: 108,
            tile_size: 10,
            initial_population: 60,
            min_population: 60,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Probability that an offspring mutates with the widened magnitude.
    pub large_mutation_chance: f64,
    /// Multiplier applied to the parent's genetic variance on a large mutation.
    pub large_mutation_factor: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            large_mutation_chance: 0.02,
            large_mutation_factor: 4.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub evolution: EvolutionConfig,
    /// Ticks per second in paced runs.
    pub target_tps: u64,
    /// Ticks between metrics summaries.
    pub log_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            evolution: EvolutionConfig::default(),
            target_tps: 60,
            log_interval: 1000,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.width >= 3 && self.world.height >= 3,
            "World must be at least 3x3 tiles"
        );
        anyhow::ensure!(
            self.world.width <= 4096 && self.world.height <= 4096,
            "World too large (max 4096 tiles per side)"
        );
        anyhow::ensure!(self.world.tile_size > 0, "Tile size must be positive");
        anyhow::ensure!(
            self.world.tile_size <= 256,
            "Tile size too large (max 256)"
        );
        anyhow::ensure!(
            self.world.initial_population <= 100_000,
            "Initial population too large (max 100000)"
        );
        anyhow::ensure!(
            self.world.min_population <= 100_000,
            "Minimum population too large (max 100000)"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.large_mutation_chance),
            "Large mutation chance must be between 0.0 and 1.0"
        );
        anyhow::ensure!(
            self.evolution.large_mutation_factor.is_finite()
                && self.evolution.large_mutation_factor >= 1.0,
            "Large mutation factor must be finite and at least 1.0"
        );

        anyhow::ensure!(self.target_tps > 0, "Target TPS must be positive");
        anyhow::ensure!(self.target_tps <= 1000, "Target TPS too high (max 1000)");
        anyhow::ensure!(self.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// SHA-256 over the settings that shape a run's trajectory.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}
