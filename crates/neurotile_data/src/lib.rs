//! # Neurotile Data
//!
//! Plain data structures shared by the simulation crates. Behaviour lives in
//! `neurotile_core`, which implements logic traits over these types.

pub mod data;

pub use data::genome::{GeneTrait, Genome, TraitBounds};
pub use data::network::{Edge, Layer, Network, Node};
pub use data::terrain::{Rgb, TileType};
