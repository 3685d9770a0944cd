use serde::{Deserialize, Serialize};

/// Terrain classification of a grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileType {
    /// Fertile land; the only terrain that carries nutrition.
    #[default]
    Soil,
    /// High ground, costly to cross.
    Mountain,
    /// Low ground, costly to cross.
    Water,
    /// Neutral ring around the map edge.
    Border,
}

/// An 8-bit RGB colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from floating channels, clamping each to `[0, 255]`.
    /// NaN channels become 0.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        fn channel(v: f64) -> u8 {
            if v.is_nan() {
                0
            } else {
                v.clamp(0.0, 255.0).round() as u8
            }
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Channels scaled to `[0, 1]`.
    #[must_use]
    pub fn normalized(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_channels_clamps() {
        let c = Rgb::from_channels(-20.0, 300.0, 127.6);
        assert_eq!(c, Rgb::new(0, 255, 128));
        assert_eq!(Rgb::from_channels(f64::NAN, 0.0, 0.0).r, 0);
    }

    #[test]
    fn test_normalized_range() {
        let [r, g, b] = Rgb::new(255, 0, 51).normalized();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-12);
    }
}
