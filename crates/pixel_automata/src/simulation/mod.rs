//! Cellular automata transition rules and the full-grid pass.
//!
//! Rules are pull-based: a cell never writes to a neighbor, it only decides
//! what it becomes. Every read goes through a [`Neighborhood`] over the
//! previous generation, so the pass can run one row per thread with no
//! locking.

mod life;
mod sand;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use life::Life;
pub use sand::FallingSand;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::jitter::Jitter;

/// Read-only view of one cell's surroundings in the source generation.
pub struct Neighborhood<'a, J> {
  grid: &'a Grid,
  x: i64,
  y: i64,
  time: f64,
  jitter: &'a J,
}

impl<'a, J: Jitter> Neighborhood<'a, J> {
  pub fn new(grid: &'a Grid, x: i64, y: i64, time: f64, jitter: &'a J) -> Self {
    Self {
      grid,
      x,
      y,
      time,
      jitter,
    }
  }

  /// The cell being updated.
  #[inline]
  pub fn center(&self) -> Cell {
    self.get(0, 0)
  }

  /// The cell at offset (dx, dy); walls outside the grid.
  #[inline]
  pub fn get(&self, dx: i64, dy: i64) -> Cell {
    self.grid.neighbor(self.x, self.y, dx, dy)
  }

  /// Jitter sign of the cell at offset (dx, dy) for this tick.
  #[inline]
  pub fn dir(&self, dx: i64, dy: i64) -> i64 {
    self.jitter.sign(self.x + dx, self.y + dy, self.time)
  }

  /// The same view re-centered on the cell at offset (dx, dy).
  ///
  /// Lets a cell evaluate a neighbor's decision with exactly the inputs the
  /// neighbor uses itself.
  #[inline]
  pub fn shifted(&self, dx: i64, dy: i64) -> Self {
    Self {
      grid: self.grid,
      x: self.x + dx,
      y: self.y + dy,
      time: self.time,
      jitter: self.jitter,
    }
  }
}

/// Per-cell transition function.
///
/// Must be a pure function of the view: same source generation, coordinate,
/// time and jitter always give the same cell.
pub trait Rule: Send + Sync {
  fn next<J: Jitter>(&self, view: &Neighborhood<'_, J>) -> Cell;
}

/// Config-selectable rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
  #[default]
  FallingSand,
  Life,
  LifeDecay,
}

impl Rule for RuleSet {
  #[inline]
  fn next<J: Jitter>(&self, view: &Neighborhood<'_, J>) -> Cell {
    match self {
      RuleSet::FallingSand => FallingSand.next(view),
      RuleSet::Life => Life::CLASSIC.next(view),
      RuleSet::LifeDecay => Life::DECAY.next(view),
    }
  }
}

/// Computes the next generation of `source` into `target`.
///
/// `target` is overwritten wholesale; its previous contents are never read.
/// Parallel and sequential execution produce identical generations.
pub fn transition<R: Rule, J: Jitter>(
  source: &Grid,
  target: &mut Grid,
  rule: &R,
  jitter: &J,
  time: f64,
  parallel: bool,
) {
  debug_assert_eq!(
    (source.width(), source.height()),
    (target.width(), target.height()),
    "transition buffers must share dimensions"
  );

  let width = source.width() as usize;
  let fill_row = |(y, row): (usize, &mut [Cell])| {
    for (x, out) in row.iter_mut().enumerate() {
      let view = Neighborhood::new(source, x as i64, y as i64, time, jitter);
      *out = rule.next(&view);
    }
  };

  if parallel {
    target.cells_mut().par_chunks_mut(width).enumerate().for_each(&fill_row);
  } else {
    target.cells_mut().chunks_mut(width).enumerate().for_each(&fill_row);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::tags;
  use crate::jitter::HashJitter;

  #[test]
  fn shifted_view_sees_neighbor_perspective() {
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set(2, 3, Cell::new(tags::SAND));
    let jitter = HashJitter::new(1);
    let view = Neighborhood::new(&grid, 1, 2, 0.5, &jitter);
    let moved = view.shifted(1, 1);
    assert_eq!(moved.center(), Cell::new(tags::SAND));
    assert_eq!(moved.get(-1, -1), view.center());
    assert_eq!(moved.dir(0, 0), view.dir(1, 1));
    assert_eq!(moved.get(0, 1), Cell::WALL);
  }

  #[test]
  fn parallel_and_sequential_passes_agree() {
    let mut source = Grid::new(37, 23).unwrap();
    for y in 0..23 {
      for x in 0..37 {
        let tag = match (x * 7 + y * 13) % 5 {
          0 | 1 => tags::SAND,
          2 => tags::WATER,
          3 => tags::WALL,
          _ => tags::VOID,
        };
        source.set(x, y, Cell::new(tag));
      }
    }
    let jitter = HashJitter::new(3);
    for rules in [RuleSet::FallingSand, RuleSet::Life, RuleSet::LifeDecay] {
      let mut a = Grid::new(37, 23).unwrap();
      let mut b = Grid::filled(37, 23, Cell::WALL).unwrap();
      transition(&source, &mut a, &rules, &jitter, 1.25, true);
      transition(&source, &mut b, &rules, &jitter, 1.25, false);
      assert_eq!(a, b, "{rules:?}");
    }
  }
}
