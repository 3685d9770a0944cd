//! Headless driver for the neurotile simulation: the tick loop, the console
//! control reader and the command-line runner.

pub mod app;
pub mod model;

pub use model::simulation::{Simulation, TickReport};
