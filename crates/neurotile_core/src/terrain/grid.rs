use super::{NoiseSource, Tile};
use crate::error::{Result, SimError};
use crate::math::wrap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tile coordinates are multiplied by this before sampling noise.
pub const NOISE_SCALE: f64 = 0.35;

/// Fixed-size toroidal tile map with a one-tile border ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Vec<Tile>,
    tiles_x: usize,
    tiles_y: usize,
    tile_size: u32,
}

impl Grid {
    /// Builds a map whose interior elevations come from `noise`.
    pub fn generate<N: NoiseSource + ?Sized>(
        tiles_x: usize,
        tiles_y: usize,
        tile_size: u32,
        seed: u64,
        noise: &N,
    ) -> Result<Self> {
        Self::build(tiles_x, tiles_y, tile_size, |ix, iy| {
            noise.sample(seed, ix as f64 * NOISE_SCALE, iy as f64 * NOISE_SCALE)
        })
    }

    /// Builds a map from row-major raw elevations. Values on the border ring
    /// are ignored.
    pub fn from_raw_elevations(
        tiles_x: usize,
        tiles_y: usize,
        tile_size: u32,
        raw: &[f64],
    ) -> Result<Self> {
        if raw.len() != tiles_x * tiles_y {
            return Err(SimError::grid(format!(
                "expected {} raw elevations for a {tiles_x}x{tiles_y} grid, got {}",
                tiles_x * tiles_y,
                raw.len()
            )));
        }
        Self::build(tiles_x, tiles_y, tile_size, |ix, iy| raw[iy * tiles_x + ix])
    }

    fn build<F>(tiles_x: usize, tiles_y: usize, tile_size: u32, mut raw_at: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        if tiles_x < 3 || tiles_y < 3 {
            return Err(SimError::grid(format!(
                "grid must be at least 3x3 tiles, got {tiles_x}x{tiles_y}"
            )));
        }
        if tile_size == 0 {
            return Err(SimError::grid("tile size must be positive"));
        }

        let mut tiles = Vec::with_capacity(tiles_x * tiles_y);
        for iy in 0..tiles_y {
            for ix in 0..tiles_x {
                let on_ring = ix == 0 || iy == 0 || ix == tiles_x - 1 || iy == tiles_y - 1;
                tiles.push(if on_ring {
                    Tile::border()
                } else {
                    Tile::new(raw_at(ix, iy))
                });
            }
        }

        Ok(Self {
            tiles,
            tiles_x,
            tiles_y,
            tile_size,
        })
    }

    #[inline(always)]
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.tiles_x + ix
    }

    /// # Panics
    /// When `(ix, iy)` lies outside the grid.
    #[must_use]
    pub fn tile(&self, ix: usize, iy: usize) -> &Tile {
        assert!(
            ix < self.tiles_x && iy < self.tiles_y,
            "tile ({ix}, {iy}) outside {}x{} grid",
            self.tiles_x,
            self.tiles_y
        );
        &self.tiles[self.index(ix, iy)]
    }

    #[must_use]
    pub fn get(&self, ix: usize, iy: usize) -> Option<&Tile> {
        (ix < self.tiles_x && iy < self.tiles_y).then(|| &self.tiles[self.index(ix, iy)])
    }

    /// Wraps a world position onto the torus.
    #[must_use]
    pub fn wrap_position(&self, x: f64, y: f64) -> (f64, f64) {
        (wrap(x, self.world_width()), wrap(y, self.world_height()))
    }

    /// Tile indices under a world position, after wrapping.
    #[must_use]
    pub fn tile_index_at(&self, x: f64, y: f64) -> (usize, usize) {
        let (x, y) = self.wrap_position(x, y);
        let size = f64::from(self.tile_size);
        let ix = ((x / size) as usize).min(self.tiles_x - 1);
        let iy = ((y / size) as usize).min(self.tiles_y - 1);
        (ix, iy)
    }

    #[must_use]
    pub fn tile_at(&self, x: f64, y: f64) -> &Tile {
        let (ix, iy) = self.tile_index_at(x, y);
        &self.tiles[self.index(ix, iy)]
    }

    pub fn tile_at_mut(&mut self, x: f64, y: f64) -> &mut Tile {
        let (ix, iy) = self.tile_index_at(x, y);
        let idx = self.index(ix, iy);
        &mut self.tiles[idx]
    }

    /// Regrows every tile. Tiles are independent, so this fans out across
    /// threads when the `parallel` feature is on.
    pub fn update(&mut self) {
        #[cfg(feature = "parallel")]
        self.tiles.par_iter_mut().for_each(Tile::update);
        #[cfg(not(feature = "parallel"))]
        self.tiles.iter_mut().for_each(Tile::update);
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tiles_x(&self) -> usize {
        self.tiles_x
    }

    #[must_use]
    pub fn tiles_y(&self) -> usize {
        self.tiles_y
    }

    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[must_use]
    pub fn world_width(&self) -> f64 {
        self.tiles_x as f64 * f64::from(self.tile_size)
    }

    #[must_use]
    pub fn world_height(&self) -> f64 {
        self.tiles_y as f64 * f64::from(self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{TileType, ValueNoise};

    fn fixture() -> Grid {
        // interior: water, soil, mountain across the middle row
        #[rustfmt::skip]
        let raw = [
            0.0,  0.0, 0.0, 0.0, 0.0,
            0.0, -2.0, 0.0, 2.0, 0.0,
            0.0,  0.0, 0.0, 0.0, 0.0,
            0.0,  0.0, 0.0, 0.0, 0.0,
            0.0,  0.0, 0.0, 0.0, 0.0,
        ];
        Grid::from_raw_elevations(5, 5, 10, &raw).unwrap()
    }

    #[test]
    fn test_ring_is_border() {
        let grid = fixture();
        for ix in 0..5 {
            assert_eq!(grid.tile(ix, 0).tile_type(), TileType::Border);
            assert_eq!(grid.tile(ix, 4).tile_type(), TileType::Border);
        }
        for iy in 0..5 {
            assert_eq!(grid.tile(0, iy).tile_type(), TileType::Border);
            assert_eq!(grid.tile(4, iy).tile_type(), TileType::Border);
        }
        assert_eq!(grid.tile(1, 1).tile_type(), TileType::Water);
        assert_eq!(grid.tile(2, 1).tile_type(), TileType::Soil);
        assert_eq!(grid.tile(3, 1).tile_type(), TileType::Mountain);
    }

    #[test]
    fn test_pixel_addressing_and_wrap() {
        let grid = fixture();
        assert_eq!(grid.world_width(), 50.0);
        assert_eq!(grid.tile_index_at(15.0, 19.9), (1, 1));
        assert_eq!(grid.tile_index_at(-5.0, 55.0), (4, 0));
        assert_eq!(grid.wrap_position(51.0, -1.0), (1.0, 49.0));
        assert_eq!(grid.tile_at(25.0, 15.0).tile_type(), TileType::Soil);
    }

    #[test]
    fn test_get_outside_is_none() {
        let grid = fixture();
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(4, 4).is_some());
    }

    #[test]
    #[should_panic(expected = "outside 5x5 grid")]
    fn test_tile_outside_panics() {
        let grid = fixture();
        let _ = grid.tile(0, 5);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(Grid::from_raw_elevations(2, 5, 10, &[0.0; 10]).is_err());
        assert!(Grid::from_raw_elevations(3, 3, 0, &[0.0; 9]).is_err());
        assert!(Grid::from_raw_elevations(3, 3, 10, &[0.0; 8]).is_err());
        assert!(Grid::generate(3, 2, 10, 1, &ValueNoise::default()).is_err());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let noise = ValueNoise::default();
        let a = Grid::generate(20, 12, 8, 1234, &noise).unwrap();
        let b = Grid::generate(20, 12, 8, 1234, &noise).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.tiles().len(), 240);
    }

    #[test]
    fn test_update_regrows_eaten_soil() {
        let mut grid = fixture();
        let before = grid.tile_at_mut(25.0, 15.0).eat();
        let after_eat = grid.tile_at(25.0, 15.0).nutrition();
        grid.update();
        let regrown = grid.tile_at(25.0, 15.0).nutrition();
        assert!(regrown > after_eat && regrown <= before);
    }
}
