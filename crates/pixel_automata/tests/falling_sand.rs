//! Whole-grid properties of the falling sand rules.

use pixel_automata::{
  Automaton, BorderSeeder, Cell, FallingSand, Grid, GridSeeder, HashJitter, Jitter, Material,
  NoiseJitter, ScatterSeeder,
};

/// Same sign for every coordinate.
#[derive(Clone, Copy)]
struct Fixed(i64);

impl Jitter for Fixed {
  fn sign(&self, _x: i64, _y: i64, _time: f64) -> i64 {
    self.0
  }
}

fn counts(grid: &Grid) -> [u64; 4] {
  let census = grid.census();
  [
    census.material(Material::Void),
    census.material(Material::Wall),
    census.material(Material::Sand),
    census.material(Material::Water),
  ]
}

fn mixed_grid(width: u32, height: u32) -> Grid {
  let mut grid = Grid::new(width, height).unwrap();
  ScatterSeeder::new(Material::Sand, 0.3, 5).seed(&mut grid);
  ScatterSeeder::new(Material::Water, 0.15, 6).seed(&mut grid);
  BorderSeeder.seed(&mut grid);
  grid
}

#[test]
fn mass_is_conserved_every_tick() {
  let grid = mixed_grid(48, 48);
  let expected = counts(&grid);
  let mut automaton = Automaton::new(grid, FallingSand, NoiseJitter::new(3));
  for i in 0..300 {
    automaton.step(i as f64 / 60.0);
    assert_eq!(counts(automaton.readable()), expected, "tick {}", i + 1);
  }
}

#[test]
fn mass_is_conserved_without_walls() {
  // The grid edge itself acts as a wall.
  let mut grid = Grid::new(33, 17).unwrap();
  ScatterSeeder::new(Material::Sand, 0.4, 21).seed(&mut grid);
  ScatterSeeder::new(Material::Water, 0.2, 22).seed(&mut grid);
  let expected = counts(&grid);
  let mut automaton = Automaton::new(grid, FallingSand, HashJitter::new(8));
  for i in 0..200 {
    automaton.step(i as f64 * 0.05);
    assert_eq!(counts(automaton.readable()), expected, "tick {}", i + 1);
  }
}

#[test]
fn contested_gap_never_duplicates() {
  let mut grid = Grid::new(3, 3).unwrap();
  for x in 0..3 {
    grid.set(x, 0, Cell::WALL);
  }
  grid.set(0, 1, Cell::WALL);
  grid.set(2, 1, Cell::WALL);
  grid.set(0, 2, Cell::from(Material::Sand));
  grid.set(2, 2, Cell::from(Material::Sand));

  let jitter = NoiseJitter::new(1);
  for i in 0..200 {
    let mut automaton = Automaton::new(grid.clone(), FallingSand, jitter.clone());
    automaton.step(i as f64 * 0.37);
    let next = automaton.readable();
    assert_eq!(next.census().material(Material::Sand), 2, "time index {i}");
  }
}

#[test]
fn resting_grain_lands_in_exactly_one_diagonal() {
  // .s.
  // .#.
  let mut grid = Grid::new(3, 2).unwrap();
  grid.set(1, 0, Cell::WALL);
  grid.set(1, 1, Cell::from(Material::Sand));

  let check = |next: &Grid| {
    let left = next.at(0, 0).is(Material::Sand);
    let right = next.at(2, 0).is(Material::Sand);
    assert!(left ^ right, "left={left} right={right}");
    assert!(next.at(1, 1).is(Material::Void));
    assert_eq!(next.census().material(Material::Sand), 1);
  };

  for sign in [-1, 1] {
    let mut automaton = Automaton::new(grid.clone(), FallingSand, Fixed(sign));
    automaton.step(0.0);
    check(automaton.readable());
  }
  for i in 0..100 {
    let mut automaton = Automaton::new(grid.clone(), FallingSand, NoiseJitter::new(2));
    automaton.step(i as f64 * 0.21);
    check(automaton.readable());
  }
}

#[test]
fn empty_grid_is_a_fixed_point() {
  let grid = Grid::new(10, 10).unwrap();
  let mut automaton = Automaton::new(grid.clone(), FallingSand, NoiseJitter::default());
  automaton.run(5, 0.0, 0.1);
  assert_eq!(automaton.readable(), &grid);

  let mut walled = grid;
  BorderSeeder.seed(&mut walled);
  let mut automaton = Automaton::new(walled.clone(), FallingSand, NoiseJitter::default());
  automaton.run(2, 0.0, 0.1);
  assert_eq!(automaton.readable(), &walled);
}

#[test]
fn dropped_column_settles_into_a_stable_pile() {
  let mut grid = Grid::new(20, 16).unwrap();
  BorderSeeder.seed(&mut grid);
  for y in 5..13 {
    grid.set(10, y, Cell::from(Material::Sand));
  }
  let mut automaton = Automaton::new(grid, FallingSand, HashJitter::new(4));
  automaton.run(500, 0.0, 1.0 / 60.0);

  let settled = automaton.readable().clone();
  assert_eq!(settled.census().material(Material::Sand), 8);
  for y in 0..settled.height() as i64 {
    for x in 0..settled.width() as i64 {
      if !settled.at(x, y).is(Material::Sand) {
        continue;
      }
      for dx in [-1, 0, 1] {
        assert!(
          !settled.at(x + dx, y - 1).is(Material::Void),
          "grain at ({x}, {y}) can still move"
        );
      }
    }
  }

  automaton.run(10, 100.0, 1.0 / 60.0);
  assert_eq!(automaton.readable(), &settled);
}

#[test]
fn water_ends_above_sand() {
  // Sand poured onto a pool sinks to the floor.
  let mut grid = Grid::new(3, 8).unwrap();
  BorderSeeder.seed(&mut grid);
  for y in 1..4 {
    grid.set(1, y, Cell::from(Material::Water));
  }
  for y in 4..7 {
    grid.set(1, y, Cell::from(Material::Sand));
  }
  let mut automaton = Automaton::new(grid, FallingSand, HashJitter::new(2));
  automaton.run(40, 0.0, 0.1);
  let g = automaton.readable();
  for y in 1..4 {
    assert!(g.at(1, y).is(Material::Sand), "y={y}");
  }
  for y in 4..7 {
    assert!(g.at(1, y).is(Material::Water), "y={y}");
  }
}
