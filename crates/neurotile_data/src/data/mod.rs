//! Core data structures for the neurotile simulation.

pub mod genome;
pub mod network;
pub mod terrain;
