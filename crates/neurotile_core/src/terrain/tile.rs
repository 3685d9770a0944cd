use super::{
    Rgb, TerrainLogic, TileType, ELEVATION_SCALE, ELEVATION_SHIFT, MOUNTAIN_ELEVATION,
    NUTRITION_MAX, NUTRITION_REGEN_RATE, NUTRITION_SURPLUS, WATER_ELEVATION,
};
use crate::math::{lerp, sigmoid};

// Colour ramps, low end to high end of each class's elevation band.
const WATER_DEEP: [f64; 3] = [10.0, 35.0, 95.0];
const WATER_SHALLOW: [f64; 3] = [45.0, 115.0, 200.0];
const SOIL_LOW: [f64; 3] = [55.0, 140.0, 50.0];
const SOIL_HIGH: [f64; 3] = [150.0, 130.0, 80.0];
const MOUNTAIN_LOW: [f64; 3] = [110.0, 100.0, 95.0];
const MOUNTAIN_HIGH: [f64; 3] = [235.0, 235.0, 240.0];

/// Red added to a fully depleted tile.
const DEPLETED_RED: f64 = 90.0;
/// Fraction of green/blue lost on a fully depleted tile.
const DEPLETED_DARKEN: f64 = 0.6;
/// Green/blue added per `NUTRITION_MAX` of nutrition above base.
const SURPLUS_TINT: f64 = 40.0;

/// One cell of the terrain grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    elevation: f64,
    tile_type: TileType,
    base_nutrition: f64,
    max_nutrition: f64,
    nutrition: f64,
    energy_use_rate: f64,
    base_color: Rgb,
    color: Rgb,
}

impl Tile {
    /// Classifies a raw noise sample. The sample is squashed into `(0, 1)`
    /// before the water and mountain thresholds are applied.
    #[must_use]
    pub fn new(elevation_raw: f64) -> Self {
        let elevation = sigmoid(elevation_raw, ELEVATION_SCALE, 1.0, ELEVATION_SHIFT, 0.0);
        let tile_type = classify(elevation);

        let base_nutrition = if tile_type.is_fertile() {
            (NUTRITION_MAX * (MOUNTAIN_ELEVATION - elevation)
                / (MOUNTAIN_ELEVATION - WATER_ELEVATION))
                .max(0.0)
        } else {
            0.0
        };
        let base_color = base_color(tile_type, elevation);

        Self {
            elevation,
            tile_type,
            base_nutrition,
            max_nutrition: base_nutrition * (1.0 + NUTRITION_SURPLUS),
            nutrition: base_nutrition,
            energy_use_rate: tile_type.energy_use_rate(),
            base_color,
            color: base_color,
        }
    }

    /// Nutrition-free sentinel ringing the map.
    #[must_use]
    pub fn border() -> Self {
        Self {
            elevation: 0.0,
            tile_type: TileType::Border,
            base_nutrition: 0.0,
            max_nutrition: 0.0,
            nutrition: 0.0,
            energy_use_rate: TileType::Border.energy_use_rate(),
            base_color: Rgb::BLACK,
            color: Rgb::BLACK,
        }
    }

    /// Regrows soil nutrition toward its ceiling, which sits
    /// `NUTRITION_SURPLUS` above the base, and re-derives the colour.
    /// Other terrain never changes.
    pub fn update(&mut self) {
        if !self.tile_type.is_fertile() {
            return;
        }
        let rate = NUTRITION_REGEN_RATE * (MOUNTAIN_ELEVATION - self.elevation).max(0.0).sqrt();
        self.nutrition = (self.nutrition + rate).min(self.max_nutrition);
        self.color = self.tinted_color();
    }

    /// Forages the tile: returns the nutrition present and halves it.
    pub fn eat(&mut self) -> f64 {
        let yield_ = self.nutrition;
        self.nutrition /= 2.0;
        if self.tile_type.is_fertile() {
            self.color = self.tinted_color();
        }
        yield_
    }

    fn tinted_color(&self) -> Rgb {
        let [r, g, b] = channels(self.base_color);
        let gap = (self.nutrition - self.base_nutrition) / NUTRITION_MAX;
        if gap < 0.0 {
            let depletion = -gap;
            Rgb::from_channels(
                r + depletion * DEPLETED_RED,
                g * (1.0 - depletion * DEPLETED_DARKEN),
                b * (1.0 - depletion * DEPLETED_DARKEN),
            )
        } else {
            Rgb::from_channels(r, g + gap * SURPLUS_TINT, b + gap * SURPLUS_TINT)
        }
    }

    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    #[must_use]
    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    #[must_use]
    pub fn nutrition(&self) -> f64 {
        self.nutrition
    }

    #[must_use]
    pub fn base_nutrition(&self) -> f64 {
        self.base_nutrition
    }

    /// Regrowth ceiling; zero off soil.
    #[must_use]
    pub fn max_nutrition(&self) -> f64 {
        self.max_nutrition
    }

    #[must_use]
    pub fn energy_use_rate(&self) -> f64 {
        self.energy_use_rate
    }

    #[must_use]
    pub fn base_color(&self) -> Rgb {
        self.base_color
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }
}

fn classify(elevation: f64) -> TileType {
    if elevation <= WATER_ELEVATION {
        TileType::Water
    } else if elevation >= MOUNTAIN_ELEVATION {
        TileType::Mountain
    } else {
        TileType::Soil
    }
}

fn base_color(tile_type: TileType, elevation: f64) -> Rgb {
    let (low, high, t) = match tile_type {
        TileType::Water => (WATER_DEEP, WATER_SHALLOW, elevation / WATER_ELEVATION),
        TileType::Soil => (
            SOIL_LOW,
            SOIL_HIGH,
            (elevation - WATER_ELEVATION) / (MOUNTAIN_ELEVATION - WATER_ELEVATION),
        ),
        TileType::Mountain => (
            MOUNTAIN_LOW,
            MOUNTAIN_HIGH,
            (elevation - MOUNTAIN_ELEVATION) / (1.0 - MOUNTAIN_ELEVATION),
        ),
        TileType::Border => return Rgb::BLACK,
    };
    let t = t.clamp(0.0, 1.0);
    Rgb::from_channels(
        lerp(low[0], high[0], t),
        lerp(low[1], high[1], t),
        lerp(low[2], high[2], t),
    )
}

fn channels(c: Rgb) -> [f64; 3] {
    [f64::from(c.r), f64::from(c.g), f64::from(c.b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_raw_elevation() {
        assert_eq!(Tile::new(-2.0).tile_type(), TileType::Water);
        assert_eq!(Tile::new(0.0).tile_type(), TileType::Soil);
        assert_eq!(Tile::new(2.0).tile_type(), TileType::Mountain);
    }

    #[test]
    fn test_elevation_is_squashed() {
        for raw in [-50.0, -1.0, 0.0, 1.0, 50.0] {
            let e = Tile::new(raw).elevation();
            assert!((0.0..=1.0).contains(&e));
        }
        assert!((Tile::new(0.0).elevation() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_water_never_gains_nutrition() {
        let mut tile = Tile::new(-2.0);
        assert_eq!(tile.nutrition(), 0.0);
        for _ in 0..500 {
            tile.update();
        }
        assert_eq!(tile.nutrition(), 0.0);
        assert_eq!(tile.color(), tile.base_color());
    }

    #[test]
    fn test_soil_starts_full_and_ceiling_falls_with_height() {
        let low = Tile::new(-0.2);
        let high = Tile::new(0.3);
        assert_eq!(low.tile_type(), TileType::Soil);
        assert_eq!(high.tile_type(), TileType::Soil);
        assert_eq!(low.nutrition(), low.base_nutrition());
        assert!(low.base_nutrition() > high.base_nutrition());
        assert!(low.base_nutrition() <= NUTRITION_MAX);
    }

    #[test]
    fn test_eat_halves_and_returns_previous() {
        let mut tile = Tile::new(0.0);
        let before = tile.nutrition();
        assert_eq!(tile.eat(), before);
        assert!((tile.nutrition() - before / 2.0).abs() < 1e-12);
        let second = tile.eat();
        assert!((second - before / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_regrowth_capped_at_ceiling() {
        let mut tile = Tile::new(0.0);
        tile.eat();
        let depleted = tile.nutrition();
        tile.update();
        assert!(tile.nutrition() > depleted);
        for _ in 0..10_000 {
            tile.update();
        }
        assert_eq!(tile.nutrition(), tile.max_nutrition());
        assert!(tile.max_nutrition() > tile.base_nutrition());
    }

    #[test]
    fn test_surplus_soil_tints_green_blue() {
        let mut tile = Tile::new(0.0);
        let base = tile.base_color();
        tile.update();
        assert!(tile.nutrition() > tile.base_nutrition());
        for _ in 0..10_000 {
            tile.update();
        }
        let c = tile.color();
        assert_eq!(c.r, base.r);
        assert!(c.g > base.g);
        assert!(c.b > base.b);
    }

    #[test]
    fn test_depleted_soil_reddens() {
        let mut tile = Tile::new(-0.2);
        let base = tile.base_color();
        for _ in 0..6 {
            tile.eat();
        }
        tile.update();
        let c = tile.color();
        assert!(c.r > base.r);
        assert!(c.g < base.g);
    }

    #[test]
    fn test_border_is_inert() {
        let mut tile = Tile::border();
        assert_eq!(tile.tile_type(), TileType::Border);
        assert_eq!(tile.eat(), 0.0);
        tile.update();
        assert_eq!(tile.nutrition(), 0.0);
        assert_eq!(tile.max_nutrition(), 0.0);
        assert_eq!(tile.color(), Rgb::BLACK);
        assert_eq!(tile.energy_use_rate(), TileType::Soil.energy_use_rate());
    }
}
