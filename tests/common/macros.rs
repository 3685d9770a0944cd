/// Asserts that the population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($sim:expr, $count:expr) => {
        assert_eq!($sim.population(), $count, "Population count mismatch");
    };
}

/// Asserts that a creature with the given ID is no longer in the simulation.
#[macro_export]
macro_rules! assert_creature_dead {
    ($sim:expr, $id:expr) => {
        let exists = $sim.creatures().iter().any(|c| c.id() == $id);
        assert!(!exists, "Creature {} should be dead but was found alive", $id);
    };
}

/// Asserts the state invariants of every living creature.
#[macro_export]
macro_rules! assert_creatures_valid {
    ($sim:expr) => {
        for c in $sim.creatures() {
            assert!(
                c.energy() > 0.0 && c.energy() <= c.max_energy(),
                "Creature {} energy {} outside (0, {}]",
                c.id(),
                c.energy(),
                c.max_energy()
            );
            assert!(
                c.health() > 0.0 && c.health() <= c.max_health(),
                "Creature {} health {} outside (0, {}]",
                c.id(),
                c.health(),
                c.max_health()
            );
            assert!(
                c.genome().within_bounds(),
                "Creature {} genome out of bounds",
                c.id()
            );
            let (x, y) = c.position();
            assert!(
                x >= 0.0 && x < $sim.grid().world_width() && y >= 0.0 && y < $sim.grid().world_height(),
                "Creature {} at ({}, {}) outside the world",
                c.id(),
                x,
                y
            );
        }
    };
}
