use serde::{Deserialize, Serialize};

/// Inclusive range a genome trait must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitBounds {
    pub min: f64,
    pub max: f64,
}

impl TraitBounds {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inheritable creature traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneTrait {
    /// Damage dealt in confrontations.
    Attack,
    /// Damage absorbed in confrontations.
    Defense,
    /// Body colour, red channel.
    Red,
    /// Body colour, green channel.
    Green,
    /// Body colour, blue channel.
    Blue,
    /// Body radius in pixels.
    Size,
    /// Free-floating heritable tag, useful for tracing lineages.
    Marker,
    /// Maximum mutation magnitude passed on to offspring.
    GeneticVariance,
    /// Top speed in pixels per tick.
    MaxLinearVelocity,
    /// Top turn rate in degrees per tick.
    MaxAngularVelocity,
}

impl GeneTrait {
    pub const ALL: [GeneTrait; 10] = [
        GeneTrait::Attack,
        GeneTrait::Defense,
        GeneTrait::Red,
        GeneTrait::Green,
        GeneTrait::Blue,
        GeneTrait::Size,
        GeneTrait::Marker,
        GeneTrait::GeneticVariance,
        GeneTrait::MaxLinearVelocity,
        GeneTrait::MaxAngularVelocity,
    ];
}

/// The continuous genome of a creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Genome {
    pub attack: f64,
    pub defense: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub size: f64,
    pub marker: f64,
    pub genetic_variance: f64,
    pub max_linear_velocity: f64,
    pub max_angular_velocity: f64,
}

impl Genome {
    #[must_use]
    pub fn get(&self, gene: GeneTrait) -> f64 {
        match gene {
            GeneTrait::Attack => self.attack,
            GeneTrait::Defense => self.defense,
            GeneTrait::Red => self.red,
            GeneTrait::Green => self.green,
            GeneTrait::Blue => self.blue,
            GeneTrait::Size => self.size,
            GeneTrait::Marker => self.marker,
            GeneTrait::GeneticVariance => self.genetic_variance,
            GeneTrait::MaxLinearVelocity => self.max_linear_velocity,
            GeneTrait::MaxAngularVelocity => self.max_angular_velocity,
        }
    }

    pub fn set(&mut self, gene: GeneTrait, value: f64) {
        let slot = match gene {
            GeneTrait::Attack => &mut self.attack,
            GeneTrait::Defense => &mut self.defense,
            GeneTrait::Red => &mut self.red,
            GeneTrait::Green => &mut self.green,
            GeneTrait::Blue => &mut self.blue,
            GeneTrait::Size => &mut self.size,
            GeneTrait::Marker => &mut self.marker,
            GeneTrait::GeneticVariance => &mut self.genetic_variance,
            GeneTrait::MaxLinearVelocity => &mut self.max_linear_velocity,
            GeneTrait::MaxAngularVelocity => &mut self.max_angular_velocity,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_cover_every_trait() {
        let mut genome = Genome::default();
        for (i, gene) in GeneTrait::ALL.iter().enumerate() {
            genome.set(*gene, i as f64 + 1.0);
        }
        for (i, gene) in GeneTrait::ALL.iter().enumerate() {
            assert_eq!(genome.get(*gene), i as f64 + 1.0);
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = TraitBounds::new(4.0, 10.0);
        assert!(bounds.contains(4.0));
        assert!(bounds.contains(10.0));
        assert!(!bounds.contains(10.0001));
    }
}
