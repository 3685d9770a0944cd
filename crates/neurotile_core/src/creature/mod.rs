//! Network-driven creatures.
//!
//! A creature's network has a fixed wiring contract. [`INPUT_LABELS`] and
//! [`OUTPUT_LABELS`] name every node; the `IN_*` and `OUT_*` indices below
//! are the only way the feeding and reading code address them.

pub mod behavior;
pub mod genome;

pub use genome::{GenomeLogic, SIZE_MAX, SIZE_MIN};

use crate::error::NetworkError;
use crate::math::{jitter, lerp};
use crate::network::NetworkLogic;
use crate::terrain::Grid;
use neurotile_data::{Genome, Network, Rgb};
use rand::Rng;
use uuid::Uuid;

pub const MAX_HEALTH_MIN: f64 = 40.0;
pub const MAX_HEALTH_MAX: f64 = 100.0;
pub const MAX_ENERGY_MIN: f64 = 400.0;
pub const MAX_ENERGY_MAX: f64 = 1000.0;
/// Resting energy drain of the smallest creature.
pub const ENERGY_USE_BASE: f64 = 0.5;
/// Extra resting drain per pixel of size.
pub const ENERGY_USE_PER_SIZE: f64 = 0.1;
pub const HEALTH_REGEN_RATE: f64 = 0.2;

pub const EAT_THRESHOLD: f64 = 0.8;
pub const EAT_COST: f64 = 5.0;
pub const VISION_MAX: f64 = 60.0;

pub const REPRODUCE_THRESHOLD: f64 = 0.8;
pub const REPRODUCE_HEALTH_FRACTION: f64 = 0.5;
pub const REPRODUCE_ENERGY_FRACTION: f64 = 0.6;
/// Ticks between births. Parents wait half of this after giving birth.
pub const REPRODUCTION_COOLDOWN: u32 = 300;
/// Offspring land within this many body sizes of the parent.
pub const SPAWN_JITTER: f64 = 2.0;

pub const INPUT_LABELS: [&str; 13] = [
    "Speed",
    "Heading",
    "Health",
    "Energy",
    "UnderR",
    "UnderG",
    "UnderB",
    "VisionR",
    "VisionG",
    "VisionB",
    "VisionDist",
    "MemA",
    "MemB",
];

pub const OUTPUT_LABELS: [&str; 7] = [
    "Turn",
    "Speed",
    "Eat",
    "Reproduce",
    "MemA",
    "MemB",
    "VisionDist",
];

pub const NETWORK_INPUTS: usize = INPUT_LABELS.len();
pub const NETWORK_HIDDEN: usize = 9;
pub const NETWORK_OUTPUTS: usize = OUTPUT_LABELS.len();
pub const NETWORK_LAYERS: [usize; 3] = [NETWORK_INPUTS, NETWORK_HIDDEN, NETWORK_OUTPUTS];

pub const IN_SPEED: usize = 0;
pub const IN_HEADING: usize = 1;
pub const IN_HEALTH: usize = 2;
pub const IN_ENERGY: usize = 3;
pub const IN_UNDER_COLOR: usize = 4;
pub const IN_VISION_COLOR: usize = 7;
pub const IN_VISION_DIST: usize = 10;
pub const IN_MEM_A: usize = 11;
pub const IN_MEM_B: usize = 12;

pub const OUT_TURN: usize = 0;
pub const OUT_SPEED: usize = 1;
pub const OUT_EAT: usize = 2;
pub const OUT_REPRODUCE: usize = 3;
pub const OUT_MEM_A: usize = 4;
pub const OUT_MEM_B: usize = 5;
pub const OUT_VISION_DIST: usize = 6;

#[derive(Debug, Clone)]
pub struct Creature {
    id: Uuid,
    parent_id: Option<Uuid>,
    generation: u32,
    age: u64,

    genome: Genome,
    max_energy: f64,
    max_health: f64,
    energy_use_rate: f64,

    health: f64,
    energy: f64,
    x: f64,
    y: f64,
    /// Degrees, kept in `[0, 360)`.
    heading: f64,
    angular_velocity: f64,
    linear_velocity: f64,
    vision_distance: f64,
    vision_color: Rgb,
    under_color: Rgb,
    memory_a: f64,
    memory_b: f64,
    reproduction_cooldown: u32,

    network: Network,
}

impl Creature {
    /// A fully randomised creature at a uniformly random position.
    pub fn new_random<R: Rng>(grid: &Grid, rng: &mut R) -> Result<Self, NetworkError> {
        let genome = Genome::new_random_with_rng(rng);
        let mut network = Network::new_random_with_rng(NETWORK_LAYERS.len(), &NETWORK_LAYERS, rng)?;
        label_network(&mut network);

        let x = rng.gen_range(0.0..grid.world_width());
        let y = rng.gen_range(0.0..grid.world_height());
        let (max_energy, max_health, energy_use_rate) = derived_traits(genome.size);

        let mut creature = Self {
            id: random_id(rng),
            parent_id: None,
            generation: 0,
            age: 0,
            vision_distance: genome.size,
            genome,
            max_energy,
            max_health,
            energy_use_rate,
            health: max_health,
            energy: max_energy,
            x,
            y,
            heading: rng.gen_range(0.0..360.0),
            angular_velocity: 0.0,
            linear_velocity: 0.0,
            vision_color: Rgb::BLACK,
            under_color: Rgb::BLACK,
            memory_a: rng.gen(),
            memory_b: rng.gen(),
            reproduction_cooldown: REPRODUCTION_COOLDOWN,
            network,
        };
        creature.sense(grid);
        creature.think();
        Ok(creature)
    }

    /// Offspring of `parent`. Genome and network are mutated by up to
    /// `max_variance` per value; energy and health start at half the
    /// parent's, capped by the child's own maxima.
    pub fn inherit<R: Rng>(
        parent: &Creature,
        max_variance: f64,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        let network = parent.network.inherit(max_variance, rng)?;
        let genome = parent.genome.inherit_with_rng(max_variance, rng);
        let (max_energy, max_health, energy_use_rate) = derived_traits(genome.size);

        let spread = SPAWN_JITTER * parent.genome.size;
        let (x, y) = grid.wrap_position(
            parent.x + jitter(rng, spread),
            parent.y + jitter(rng, spread),
        );

        let mut creature = Self {
            id: random_id(rng),
            parent_id: Some(parent.id),
            generation: parent.generation + 1,
            age: 0,
            vision_distance: genome.size,
            genome,
            max_energy,
            max_health,
            energy_use_rate,
            health: (parent.health / 2.0).min(max_health),
            energy: (parent.energy / 2.0).min(max_energy),
            x,
            y,
            heading: rng.gen_range(0.0..360.0),
            angular_velocity: 0.0,
            linear_velocity: 0.0,
            vision_color: Rgb::BLACK,
            under_color: Rgb::BLACK,
            memory_a: rng.gen(),
            memory_b: rng.gen(),
            reproduction_cooldown: REPRODUCTION_COOLDOWN,
            network,
        };
        creature.sense(grid);
        creature.think();
        Ok(creature)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0 && self.health > 0.0
    }

    /// Sets energy, clamped to `[0, max_energy]`.
    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy.clamp(0.0, self.max_energy);
    }

    /// Sets health, clamped to `[0, max_health]`.
    pub fn set_health(&mut self, health: f64) {
        self.health = health.clamp(0.0, self.max_health);
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Ticks survived.
    #[must_use]
    pub fn age(&self) -> u64 {
        self.age
    }

    #[must_use]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.genome.size
    }

    /// Render radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.genome.size
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        Rgb::from_channels(self.genome.red, self.genome.green, self.genome.blue)
    }

    #[must_use]
    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }

    #[must_use]
    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    #[must_use]
    pub fn energy_use_rate(&self) -> f64 {
        self.energy_use_rate
    }

    #[must_use]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    #[must_use]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub fn linear_velocity(&self) -> f64 {
        self.linear_velocity
    }

    #[must_use]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    #[must_use]
    pub fn vision_distance(&self) -> f64 {
        self.vision_distance
    }

    #[must_use]
    pub fn vision_color(&self) -> Rgb {
        self.vision_color
    }

    #[must_use]
    pub fn under_color(&self) -> Rgb {
        self.under_color
    }

    #[must_use]
    pub fn memory(&self) -> (f64, f64) {
        (self.memory_a, self.memory_b)
    }

    #[must_use]
    pub fn reproduction_cooldown(&self) -> u32 {
        self.reproduction_cooldown
    }

    #[must_use]
    pub fn network(&self) -> &Network {
        &self.network
    }
}

/// `(max_energy, max_health, energy_use_rate)` for a body size.
#[must_use]
pub fn derived_traits(size: f64) -> (f64, f64, f64) {
    let t = (size - SIZE_MIN) / (SIZE_MAX - SIZE_MIN);
    (
        lerp(MAX_ENERGY_MIN, MAX_ENERGY_MAX, t),
        lerp(MAX_HEALTH_MIN, MAX_HEALTH_MAX, t),
        ENERGY_USE_BASE + ENERGY_USE_PER_SIZE * size,
    )
}

fn label_network(network: &mut Network) {
    let mut input = network.input_layer_mut();
    for (i, label) in INPUT_LABELS.iter().enumerate() {
        input.set_name(i, *label);
    }
    let last = network.num_layers() - 1;
    if let Some(mut output) = network.layer_at_mut(last) {
        for (i, label) in OUTPUT_LABELS.iter().enumerate() {
            output.set_name(i, *label);
        }
    }
}

fn random_id<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
