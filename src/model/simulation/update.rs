use super::{Simulation, TickReport};
use crate::model::creature::Creature;
use std::time::Instant;

impl Simulation {
    /// Runs one tick: creatures act and the dead are dropped, eligible
    /// survivors give birth, tiles regrow, and the population is topped up to
    /// the configured floor. Offspring join the population only after every
    /// survivor has been considered.
    ///
    /// A paused simulation returns immediately with `paused` set.
    pub fn step(&mut self) -> anyhow::Result<TickReport> {
        if self.is_paused() {
            return Ok(TickReport {
                tick: self.tick,
                paused: true,
                births: 0,
                deaths: 0,
                injected: 0,
                population: self.creatures.len(),
            });
        }

        let start = Instant::now();
        self.tick += 1;

        let before = self.creatures.len();
        let grid = &mut self.grid;
        self.creatures.retain_mut(|c| c.update(grid));
        let deaths = before - self.creatures.len();

        let mut offspring = Vec::new();
        let evolution = &self.config.evolution;
        for creature in &mut self.creatures {
            if creature.should_reproduce() {
                offspring.push(creature.reproduce(
                    evolution.large_mutation_chance,
                    evolution.large_mutation_factor,
                    &self.grid,
                    &mut self.rng,
                )?);
            }
        }
        let births = offspring.len();
        self.creatures.extend(offspring);

        self.grid.update();

        let mut injected = 0;
        while self.creatures.len() < self.config.world.min_population {
            self.creatures
                .push(Creature::new_random(&self.grid, &mut self.rng)?);
            injected += 1;
        }

        if deaths > 0 || births > 0 || injected > 0 {
            tracing::debug!(
                tick = self.tick,
                births,
                deaths,
                injected,
                population = self.creatures.len(),
                "Population changed"
            );
        }
        self.metrics.record_tick(
            start.elapsed(),
            self.creatures.len(),
            births,
            deaths,
            injected,
        );

        Ok(TickReport {
            tick: self.tick,
            paused: false,
            births,
            deaths,
            injected,
            population: self.creatures.len(),
        })
    }
}
