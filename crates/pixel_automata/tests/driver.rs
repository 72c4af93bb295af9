//! Double-buffer driver behavior: paint timing, determinism, boundaries.

use pixel_automata::{
  Automaton, AutomataConfig, Cell, FallingSand, Grid, GridSeeder, HashJitter, JitterKind,
  JitterSource, Material, NoiseJitter, RuleSet, ScatterSeeder, SeedKind, Slot,
};

#[test]
fn paint_is_invisible_until_the_next_step() {
  let mut automaton = Automaton::new(Grid::new(5, 5).unwrap(), FallingSand, NoiseJitter::new(0));
  automaton.paint(2, 2, Material::Sand, 0);
  assert_eq!(automaton.sample(2, 2), Cell::VOID);
  assert_eq!(automaton.readable().census().material(Material::Sand), 0);

  // The painted grain is part of the source generation and falls right away.
  automaton.step(0.0);
  assert_eq!(automaton.sample(2, 2), Cell::VOID);
  assert_eq!(automaton.sample(2, 1), Cell::from(Material::Sand));
}

#[test]
fn painted_wall_shows_after_one_step() {
  let mut automaton = Automaton::new(Grid::new(5, 5).unwrap(), FallingSand, NoiseJitter::new(0));
  automaton.paint(1, 3, Material::Wall, 0);
  assert_eq!(automaton.sample(1, 3), Cell::VOID);
  automaton.step(0.0);
  assert_eq!(automaton.sample(1, 3), Cell::WALL);
}

#[test]
fn paint_overwrites_existing_cells() {
  let mut grid = Grid::new(5, 5).unwrap();
  ScatterSeeder::new(Material::Sand, 1.0, 0).seed(&mut grid);
  let mut automaton = Automaton::new(grid, FallingSand, HashJitter::new(0));
  automaton.paint(2, 2, Material::Wall, 1);
  automaton.step(0.0);
  let census = automaton.readable().census();
  assert_eq!(census.material(Material::Wall), 9);
  assert_eq!(census.material(Material::Sand), 16);
}

#[test]
fn runs_are_deterministic() {
  let mut grid = Grid::new(40, 30).unwrap();
  ScatterSeeder::new(Material::Sand, 0.3, 9).seed(&mut grid);
  ScatterSeeder::new(Material::Water, 0.1, 10).seed(&mut grid);

  let mut a = Automaton::new(grid.clone(), FallingSand, NoiseJitter::new(5));
  let mut b = Automaton::new(grid, FallingSand, NoiseJitter::new(5)).with_parallel(false);
  for i in 0..60 {
    let t = i as f64 / 60.0;
    if i == 20 {
      a.paint(20, 25, Material::Water, 2);
      b.paint(20, 25, Material::Water, 2);
    }
    a.step(t);
    b.step(t);
    assert_eq!(a.readable(), b.readable(), "tick {}", i + 1);
  }
  assert_eq!(a.readable_slot(), Slot::A);
}

#[test]
fn grid_edge_behaves_as_wall() {
  // No walls seeded: grains rest on the bottom row and never wrap around.
  let mut grid = Grid::new(4, 3).unwrap();
  grid.set(0, 0, Cell::from(Material::Sand));
  grid.set(3, 2, Cell::from(Material::Sand));
  grid.set(1, 2, Cell::from(Material::Water));
  let mut automaton = Automaton::new(grid, FallingSand, HashJitter::new(1));
  automaton.run(20, 0.0, 0.5);

  let g = automaton.readable();
  assert_eq!(g.census().material(Material::Sand), 2);
  assert_eq!(g.census().material(Material::Water), 1);
  for x in 0..4 {
    assert!(g.at(x, 2).is(Material::Void), "top row x={x}");
  }
}

#[test]
fn repeated_paint_strokes_accumulate_water() {
  let mut automaton = Automaton::new(Grid::new(16, 16).unwrap(), FallingSand, HashJitter::new(3));
  for i in 0..10 {
    automaton.paint(8, 15, Material::Water, 0);
    automaton.step(i as f64);
  }
  assert_eq!(automaton.readable().census().material(Material::Water), 10);
  assert_eq!(automaton.tick(), 10);
}

#[test]
fn config_built_automaton_runs() {
  let mut config = AutomataConfig::default();
  config.grid.width = 24;
  config.grid.height = 20;
  config.simulation.rules = RuleSet::FallingSand;
  config.simulation.jitter = JitterKind::Hash;
  config.seeding.kind = SeedKind::Scatter;
  config.seeding.walls = true;

  let mut automaton = config.build().unwrap();
  let before = automaton.readable().census();
  automaton.run(30, 0.0, config.simulation.tick_seconds);
  let after = automaton.readable().census();
  assert_eq!(before.material(Material::Sand), after.material(Material::Sand));
  assert!(matches!(automaton.jitter(), JitterSource::Hash(_)));
}
