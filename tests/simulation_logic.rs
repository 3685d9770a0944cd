mod common;

use common::{SimulationBuilder, THREE_BIOME_ROW};
use neurotile_data::TileType;
use neurotile_lib::model::config::AppConfig;
use neurotile_lib::model::creature::GenomeLogic;
use std::collections::HashMap;

#[test]
fn test_single_creature_on_three_biome_row() {
    let mut sim = SimulationBuilder::new()
        .with_size(5, 3)
        .with_population(1, 0)
        .with_raw_elevations(&THREE_BIOME_ROW)
        .build();

    assert_eq!(sim.grid().tile(1, 1).tile_type(), TileType::Water);
    assert_eq!(sim.grid().tile(2, 1).tile_type(), TileType::Soil);
    assert_eq!(sim.grid().tile(3, 1).tile_type(), TileType::Mountain);
    assert_population!(sim, 1);
    let id = sim.creatures()[0].id();

    for tick in 1..=100 {
        let report = sim.step().expect("Simulation step failed");
        assert_eq!(report.tick, tick);
        assert_eq!(report.births, 0, "Cooldown must block births this early");
        assert_eq!(report.injected, 0);

        match sim.creatures().iter().find(|c| c.id() == id) {
            Some(c) => {
                assert!(c.energy() >= 0.0 && c.energy() <= c.max_energy());
                assert!(c.health() <= c.max_health());
            }
            None => {
                assert_creature_dead!(sim, id);
                assert_population!(sim, 0);
            }
        }
        assert_creatures_valid!(sim);
    }
}

#[test]
fn test_population_floor_is_backfilled() {
    let mut sim = SimulationBuilder::new().with_population(0, 10).build();
    assert_population!(sim, 0);

    let report = sim.step().unwrap();
    assert_eq!(report.injected, 10);
    assert_population!(sim, 10);

    for _ in 0..200 {
        sim.step().unwrap();
        assert!(sim.population() >= 10);
        assert_creatures_valid!(sim);
    }
}

#[test]
fn test_reports_balance_population() {
    let mut sim = SimulationBuilder::new()
        .with_seed(77)
        .with_population(25, 5)
        .build();

    let mut population = sim.population();
    for _ in 0..400 {
        let report = sim.step().unwrap();
        assert_eq!(
            report.population,
            population + report.births + report.injected - report.deaths
        );
        population = report.population;
    }
    assert_eq!(sim.metrics().tick_count(), 400);
}

#[test]
fn test_paused_simulation_does_not_advance() {
    let mut sim = SimulationBuilder::new().with_population(5, 0).build();
    let before = sim.snapshot();

    assert!(sim.toggle_pause());
    for _ in 0..10 {
        let report = sim.step().unwrap();
        assert!(report.paused);
        assert_eq!(report.tick, 0);
    }
    let during = sim.snapshot();
    assert_eq!(during.creatures, before.creatures);
    assert_eq!(during.tiles, before.tiles);
    assert!(during.paused);

    assert!(!sim.toggle_pause());
    assert!(!sim.step().unwrap().paused);
    assert_eq!(sim.tick(), 1);
}

#[test]
fn test_pause_from_another_thread() {
    let mut sim = SimulationBuilder::new().with_population(5, 0).build();
    let handle = sim.pause_handle();

    std::thread::spawn(move || {
        handle.toggle();
    })
    .join()
    .unwrap();

    assert!(sim.is_paused());
    assert!(sim.step().unwrap().paused);
}

#[test]
fn test_default_world_breeds_new_generations() {
    let mut sim = SimulationBuilder::new()
        .with_seed(5)
        .with_config(|c| {
            let defaults = AppConfig::default();
            c.world.width = defaults.world.width;
            c.world.height = defaults.world.height;
            c.world.initial_population = defaults.world.initial_population;
            c.world.min_population = defaults.world.min_population;
        })
        .build();

    let mut births = 0;
    for _ in 0..3000 {
        let generations: HashMap<_, _> = sim
            .creatures()
            .iter()
            .map(|c| (c.id(), c.generation()))
            .collect();
        let report = sim.step().unwrap();

        let newborns: Vec<_> = sim
            .creatures()
            .iter()
            .filter(|c| !generations.contains_key(&c.id()))
            .collect();
        assert_eq!(newborns.len(), report.births + report.injected);
        for c in newborns {
            match c.parent_id() {
                Some(parent) => assert_eq!(c.generation(), generations[&parent] + 1),
                None => assert_eq!(c.generation(), 0),
            }
        }
        assert_creatures_valid!(sim);

        births += report.births;
        if births > 0 {
            break;
        }
    }
    assert!(births > 0, "default world produced no births");
    assert!(sim.stats().max_generation >= 1);
}
