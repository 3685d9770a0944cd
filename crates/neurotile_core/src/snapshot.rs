//! Read-only views of the simulation for renderers and reports.

use crate::creature::Creature;
use crate::terrain::Grid;
use neurotile_data::Rgb;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreatureSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub energy: f64,
    pub max_energy: f64,
    pub generation: u32,
}

impl From<&Creature> for CreatureSnapshot {
    fn from(c: &Creature) -> Self {
        let (x, y) = c.position();
        Self {
            id: c.id(),
            x,
            y,
            radius: c.radius(),
            color: c.color(),
            energy: c.energy(),
            max_energy: c.max_energy(),
            generation: c.generation(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TileSnapshot {
    /// Row-major index into the grid.
    pub index: usize,
    pub color: Rgb,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub paused: bool,
    pub tiles_x: usize,
    pub tiles_y: usize,
    pub tile_size: u32,
    pub creatures: Vec<CreatureSnapshot>,
    pub tiles: Vec<TileSnapshot>,
}

impl WorldSnapshot {
    #[must_use]
    pub fn capture(tick: u64, paused: bool, grid: &Grid, creatures: &[Creature]) -> Self {
        Self {
            tick,
            paused,
            tiles_x: grid.tiles_x(),
            tiles_y: grid.tiles_y(),
            tile_size: grid.tile_size(),
            creatures: creatures.iter().map(CreatureSnapshot::from).collect(),
            tiles: grid
                .tiles()
                .iter()
                .enumerate()
                .map(|(index, tile)| TileSnapshot {
                    index,
                    color: tile.color(),
                })
                .collect(),
        }
    }
}

/// Aggregate population figures.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PopulationStats {
    pub population: usize,
    pub mean_size: f64,
    pub mean_generation: f64,
    pub max_generation: u32,
    /// Mean of `energy / max_energy`.
    pub mean_energy_fraction: f64,
}

impl PopulationStats {
    #[must_use]
    pub fn from_creatures(creatures: &[Creature]) -> Self {
        if creatures.is_empty() {
            return Self::default();
        }
        let n = creatures.len() as f64;
        Self {
            population: creatures.len(),
            mean_size: creatures.iter().map(Creature::size).sum::<f64>() / n,
            mean_generation: creatures
                .iter()
                .map(|c| f64::from(c.generation()))
                .sum::<f64>()
                / n,
            max_generation: creatures
                .iter()
                .map(Creature::generation)
                .max()
                .unwrap_or(0),
            mean_energy_fraction: creatures
                .iter()
                .map(|c| c.energy() / c.max_energy())
                .sum::<f64>()
                / n,
        }
    }
}
