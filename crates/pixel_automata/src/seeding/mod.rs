//! Initial grid population.
//!
//! A [`GridSeeder`] fills a freshly created grid; seeders compose by running
//! one after another (scatter sand, then frame it with walls). Grids can
//! also be built from a marker color in an image, see [`image_grid`].

mod image;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use self::image::{grid_from_image, image_grid};
use crate::cell::{Cell, MaterialTag};
use crate::grid::Grid;

/// Trait for populating a grid with initial data.
pub trait GridSeeder {
  fn seed(&self, grid: &mut Grid);
}

/// Scatters a material over the grid with a fixed per-cell probability.
///
/// Cells that are not picked are left as they are. Reproducible for a given
/// `seed`.
#[derive(Clone, Copy, Debug)]
pub struct ScatterSeeder {
  pub material: MaterialTag,
  pub probability: f64,
  pub seed: u64,
}

impl ScatterSeeder {
  pub fn new(material: impl Into<MaterialTag>, probability: f64, seed: u64) -> Self {
    Self {
      material: material.into(),
      probability,
      seed,
    }
  }
}

impl GridSeeder for ScatterSeeder {
  fn seed(&self, grid: &mut Grid) {
    let mut rng = StdRng::seed_from_u64(self.seed);
    let p = self.probability.clamp(0.0, 1.0);
    let cell = Cell::new(self.material);
    for y in 0..grid.height() {
      for x in 0..grid.width() {
        if rng.random_bool(p) {
          grid.set(x, y, cell);
        }
      }
    }
  }
}

/// Draws a one-cell wall frame around the grid edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BorderSeeder;

impl GridSeeder for BorderSeeder {
  fn seed(&self, grid: &mut Grid) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
      grid.set(x, 0, Cell::WALL);
      grid.set(x, h - 1, Cell::WALL);
    }
    for y in 0..h {
      grid.set(0, y, Cell::WALL);
      grid.set(w - 1, y, Cell::WALL);
    }
  }
}
