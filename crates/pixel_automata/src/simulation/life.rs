//! Conway's Game of Life (B3/S23), optionally tracking cell age.

use super::{Neighborhood, Rule};
use crate::cell::{Cell, Material, tags};
use crate::jitter::Jitter;

const NEIGHBORS: [(i64, i64); 8] = [
  (-1, -1),
  (0, -1),
  (1, -1),
  (-1, 0),
  (1, 0),
  (-1, 1),
  (0, 1),
  (1, 1),
];

/// Game of Life rule set.
///
/// With `decay` set, live cells count ticks alive in `aux0` and dead cells
/// count ticks dead in `aux1`, each saturating at 255 and reset on every
/// transition. The counters only feed rendering; birth and survival ignore
/// them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Life {
  pub decay: bool,
}

impl Life {
  pub const CLASSIC: Self = Self { decay: false };
  pub const DECAY: Self = Self { decay: true };
}

/// Live cells in the 8-neighborhood. Walls beyond the edge count as dead.
#[inline]
fn live_neighbors<J: Jitter>(view: &Neighborhood<'_, J>) -> u32 {
  NEIGHBORS
    .iter()
    .filter(|&&(dx, dy)| view.get(dx, dy).is(Material::Alive))
    .count() as u32
}

impl Rule for Life {
  fn next<J: Jitter>(&self, view: &Neighborhood<'_, J>) -> Cell {
    let here = view.center();
    let alive = match here.kind() {
      Some(Material::Wall) => return here,
      Some(Material::Alive) => true,
      _ => false,
    };

    let n = live_neighbors(view);
    let lives = if alive { n == 2 || n == 3 } else { n == 3 };

    if self.decay {
      if lives {
        let age = if alive { here.aux0 } else { 0 };
        Cell::with_aux(tags::ALIVE, age.saturating_add(1), 0, 0)
      } else {
        let age = if here.is(Material::Dead) { here.aux1 } else { 0 };
        Cell::with_aux(tags::DEAD, 0, age.saturating_add(1), 0)
      }
    } else if lives {
      Cell::new(tags::ALIVE)
    } else if alive {
      Cell::new(tags::DEAD)
    } else {
      here
    }
  }
}
