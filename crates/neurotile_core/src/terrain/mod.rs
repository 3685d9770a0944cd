pub use neurotile_data::{Rgb, TileType};

pub mod generation;
pub mod grid;
pub mod tile;

pub use generation::{NoiseSource, ValueNoise};
pub use grid::Grid;
pub use tile::Tile;

/// Horizontal scale of the elevation sigmoid.
pub const ELEVATION_SCALE: f64 = 3.0;
/// Horizontal shift of the elevation sigmoid.
pub const ELEVATION_SHIFT: f64 = 0.0;
/// Post-sigmoid elevation at or below which a tile is water.
pub const WATER_ELEVATION: f64 = 0.3;
/// Post-sigmoid elevation at or above which a tile is mountain.
pub const MOUNTAIN_ELEVATION: f64 = 0.75;

/// Base nutrition of the lowest soil tile.
pub const NUTRITION_MAX: f64 = 200.0;
/// Untouched soil regrows past its base by this fraction.
pub const NUTRITION_SURPLUS: f64 = 0.25;
/// Regrowth per tick before the elevation factor is applied.
pub const NUTRITION_REGEN_RATE: f64 = 0.5;

pub trait TerrainLogic {
    /// Movement cost multiplier for creatures crossing this terrain.
    fn energy_use_rate(&self) -> f64;
    fn is_fertile(&self) -> bool;
}

impl TerrainLogic for TileType {
    fn energy_use_rate(&self) -> f64 {
        match self {
            TileType::Soil => 1.0,
            TileType::Mountain => 4.0,
            TileType::Water => 3.0,
            TileType::Border => 1.0,
        }
    }

    fn is_fertile(&self) -> bool {
        matches!(self, TileType::Soil)
    }
}
