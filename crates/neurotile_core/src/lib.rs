//! # Neurotile Core
//!
//! Simulation logic for neurotile, an artificial-life sandbox where
//! creatures steered by small feedforward networks forage a tile map.
//!
//! This crate contains:
//! - Layered networks with bounded-mutation inheritance
//! - Terrain tiles, the toroidal grid and elevation noise
//! - Creatures: genome, energy economy, sensing and reproduction
//! - Configuration, metrics and logging setup
//!
//! All randomness is drawn from a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a run exactly.
//!
//! ## Example
//!
//! ```
//! use neurotile_core::network::NetworkLogic;
//! use neurotile_data::Network;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut network = Network::new_random_with_rng(3, &[9, 7, 6], &mut rng).unwrap();
//!
//! network.input_layer_mut().set_inputs(&[0.5; 9]).unwrap();
//! network.propagate();
//! assert!(network.output_value(0).is_some());
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Shared pause flag and console commands
pub mod control;
/// Creatures and their genomes
pub mod creature;
/// Error types
pub mod error;
/// Sigmoid, clamping and wrapping helpers
pub mod math;
/// Performance metrics collection and logging
pub mod metrics;
/// Layered feedforward networks
pub mod network;
/// Render and report views of the world
pub mod snapshot;
/// Tiles, grid and terrain generation
pub mod terrain;

pub use config::AppConfig;
pub use control::{ControlCommand, PauseHandle};
pub use creature::{Creature, GenomeLogic};
pub use error::{NetworkError, SimError};
pub use metrics::{init_logging, Metrics};
pub use network::NetworkLogic;
pub use terrain::{Grid, NoiseSource, TerrainLogic, Tile, ValueNoise};
