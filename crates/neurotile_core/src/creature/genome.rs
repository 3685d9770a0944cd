use crate::math::{bound, jitter};
use neurotile_data::{GeneTrait, Genome, TraitBounds};
use rand::Rng;

pub const SIZE_MIN: f64 = 4.0;
pub const SIZE_MAX: f64 = 10.0;

/// Trait defining the genetic interface for creature genomes.
pub trait GenomeLogic {
    /// Declared range of one trait.
    fn bounds(gene: GeneTrait) -> TraitBounds;
    /// Every trait drawn uniformly within its bounds.
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self;
    /// Copy with each trait offset by an independent draw in
    /// `[-max_variance, +max_variance]`, then clamped to its bounds.
    fn inherit_with_rng<R: Rng>(&self, max_variance: f64, rng: &mut R) -> Self;
    fn within_bounds(&self) -> bool;
}

impl GenomeLogic for Genome {
    fn bounds(gene: GeneTrait) -> TraitBounds {
        match gene {
            GeneTrait::Attack | GeneTrait::Defense => TraitBounds::new(0.0, 50.0),
            GeneTrait::Red | GeneTrait::Green | GeneTrait::Blue => TraitBounds::new(0.0, 255.0),
            GeneTrait::Size => TraitBounds::new(SIZE_MIN, SIZE_MAX),
            GeneTrait::Marker => TraitBounds::new(0.0, 100.0),
            GeneTrait::GeneticVariance => TraitBounds::new(0.0, 0.5),
            GeneTrait::MaxLinearVelocity => TraitBounds::new(0.5, 5.0),
            GeneTrait::MaxAngularVelocity => TraitBounds::new(0.0, 30.0),
        }
    }

    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut genome = Genome::default();
        for gene in GeneTrait::ALL {
            let b = Self::bounds(gene);
            genome.set(gene, rng.gen_range(b.min..=b.max));
        }
        genome
    }

    fn inherit_with_rng<R: Rng>(&self, max_variance: f64, rng: &mut R) -> Self {
        let mut child = self.clone();
        for gene in GeneTrait::ALL {
            let b = Self::bounds(gene);
            let value = self.get(gene) + jitter(rng, max_variance);
            child.set(gene, bound(b.min, b.max, value));
        }
        child
    }

    fn within_bounds(&self) -> bool {
        GeneTrait::ALL
            .iter()
            .all(|&gene| Self::bounds(gene).contains(self.get(gene)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_genome_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..100 {
            let genome = Genome::new_random_with_rng(&mut rng);
            assert!(genome.within_bounds());
            assert!((SIZE_MIN..=SIZE_MAX).contains(&genome.size));
        }
    }

    #[test]
    fn test_zero_variance_copies_genome() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let parent = Genome::new_random_with_rng(&mut rng);
        assert_eq!(parent.inherit_with_rng(0.0, &mut rng), parent);
    }

    #[test]
    fn test_mutation_clamps_instead_of_wrapping() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut parent = Genome::new_random_with_rng(&mut rng);
        parent.size = SIZE_MAX;
        parent.genetic_variance = 0.0;
        for _ in 0..50 {
            let child = parent.inherit_with_rng(1000.0, &mut rng);
            assert!(child.within_bounds());
        }
    }

    proptest! {
        #[test]
        fn prop_inherited_genome_stays_in_bounds(seed in any::<u64>(), variance in 0.0f64..500.0) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let parent = Genome::new_random_with_rng(&mut rng);
            let child = parent.inherit_with_rng(variance, &mut rng);
            prop_assert!(child.within_bounds());
            for gene in GeneTrait::ALL {
                prop_assert!((child.get(gene) - parent.get(gene)).abs() <= variance + 1e-9);
            }
        }
    }
}
