use super::*;
use crate::math::{bound, sigmoid, unit_sigmoid, wrap};
use tracing::debug;

impl Creature {
    /// Advances one tick. Returns `false` when the creature died; a dead
    /// creature is not sensed or re-propagated and must be dropped by the
    /// caller.
    pub fn update(&mut self, grid: &mut Grid) -> bool {
        let turn = self.output(OUT_TURN);
        let speed = self.output(OUT_SPEED);
        let eat = self.output(OUT_EAT);

        self.angular_velocity =
            self.genome.max_angular_velocity * (sigmoid(turn, 1.0, 2.0, 0.0, 0.0) - 1.0);
        self.heading = wrap(self.heading + self.angular_velocity, 360.0);
        self.linear_velocity = self.genome.max_linear_velocity * unit_sigmoid(speed);

        let cost = self.energy_use_rate
            + grid.tile_at(self.x, self.y).energy_use_rate() * self.linear_velocity * self.genome.size
                / SIZE_MAX;

        let radians = self.heading.to_radians();
        let (x, y) = grid.wrap_position(
            self.x + self.linear_velocity * radians.cos(),
            self.y + self.linear_velocity * radians.sin(),
        );
        self.x = x;
        self.y = y;

        self.health = (self.health + HEALTH_REGEN_RATE).min(self.max_health);

        let mut energy = self.energy - cost;
        if unit_sigmoid(eat) > EAT_THRESHOLD {
            energy += grid.tile_at_mut(self.x, self.y).eat() - EAT_COST;
        }
        self.energy = bound(0.0, self.max_energy, energy);

        self.reproduction_cooldown = self.reproduction_cooldown.saturating_sub(1);
        self.age += 1;

        if !self.is_alive() {
            return false;
        }

        self.vision_distance = bound(
            self.genome.size,
            VISION_MAX,
            unit_sigmoid(self.output(OUT_VISION_DIST)) * VISION_MAX,
        );
        self.memory_a = unit_sigmoid(self.output(OUT_MEM_A));
        self.memory_b = unit_sigmoid(self.output(OUT_MEM_B));

        self.sense(grid);
        self.think();
        true
    }

    #[must_use]
    pub fn should_reproduce(&self) -> bool {
        self.reproduction_cooldown == 0
            && unit_sigmoid(self.output(OUT_REPRODUCE)) > REPRODUCE_THRESHOLD
            && self.health > REPRODUCE_HEALTH_FRACTION * self.max_health
            && self.energy > REPRODUCE_ENERGY_FRACTION * self.max_energy
    }

    /// Produces one offspring, then pays for it: energy and health are
    /// halved and the cooldown restarts at half its period.
    ///
    /// The offspring mutates by the parent's `genetic_variance`, multiplied by
    /// `large_mutation_factor` with probability `large_mutation_chance`.
    pub fn reproduce<R: Rng>(
        &mut self,
        large_mutation_chance: f64,
        large_mutation_factor: f64,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Creature, NetworkError> {
        let mut variance = self.genome.genetic_variance;
        let large = rng.gen_bool(large_mutation_chance.clamp(0.0, 1.0));
        if large {
            variance *= large_mutation_factor;
        }

        let child = Creature::inherit(self, variance, grid, rng)?;

        self.energy /= 2.0;
        self.health /= 2.0;
        self.reproduction_cooldown = REPRODUCTION_COOLDOWN / 2;

        debug!(
            parent = %self.id,
            child = %child.id,
            generation = child.generation,
            variance,
            large,
            "Creature reproduced"
        );
        Ok(child)
    }

    fn output(&self, index: usize) -> f64 {
        self.network.output_value(index).unwrap_or(0.0)
    }

    /// Samples the tile underneath and the tile at the end of the vision ray.
    pub(crate) fn sense(&mut self, grid: &Grid) {
        self.under_color = grid.tile_at(self.x, self.y).color();
        let radians = self.heading.to_radians();
        self.vision_color = grid
            .tile_at(
                self.x + self.vision_distance * radians.cos(),
                self.y + self.vision_distance * radians.sin(),
            )
            .color();
    }

    /// Resets the network, feeds the current state and propagates once.
    pub(crate) fn think(&mut self) {
        let inputs = self.inputs();
        self.network.reset();
        let mut layer = self.network.input_layer_mut();
        debug_assert_eq!(layer.len(), NETWORK_INPUTS);
        for (i, value) in inputs.into_iter().enumerate() {
            layer.set_value(i, value);
        }
        self.network.propagate();
    }

    /// Input vector in [`INPUT_LABELS`] order.
    #[must_use]
    pub fn inputs(&self) -> [f64; NETWORK_INPUTS] {
        let mut inputs = [0.0; NETWORK_INPUTS];
        inputs[IN_SPEED] = self.linear_velocity / self.genome.max_linear_velocity;
        inputs[IN_HEADING] = self.heading / 360.0;
        inputs[IN_HEALTH] = self.health / self.max_health;
        inputs[IN_ENERGY] = self.energy / self.max_energy;
        inputs[IN_UNDER_COLOR..IN_UNDER_COLOR + 3].copy_from_slice(&self.under_color.normalized());
        inputs[IN_VISION_COLOR..IN_VISION_COLOR + 3]
            .copy_from_slice(&self.vision_color.normalized());
        inputs[IN_VISION_DIST] = self.vision_distance / VISION_MAX;
        inputs[IN_MEM_A] = self.memory_a;
        inputs[IN_MEM_B] = self.memory_b;
        inputs
    }
}
