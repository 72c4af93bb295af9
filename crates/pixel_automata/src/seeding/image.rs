//! Grids from images.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::cell::{Cell, MaterialTag};
use crate::error::SeedError;
use crate::grid::Grid;

/// Builds a grid the size of `image`: pixels equal to `marker` become
/// `material`, everything else void.
///
/// Image row 0 is the top; it lands on the grid's top row.
pub fn grid_from_image(
  image: &RgbImage,
  marker: [u8; 3],
  material: impl Into<MaterialTag>,
) -> Result<Grid, SeedError> {
  let (w, h) = image.dimensions();
  let mut grid = Grid::new(w, h)?;
  let cell = Cell::new(material.into());
  for (x, y, px) in image.enumerate_pixels() {
    if px.0 == marker {
      grid.set(x, h - 1 - y, cell);
    }
  }
  Ok(grid)
}

/// Loads an image file and builds a grid from it, see [`grid_from_image`].
pub fn image_grid(
  path: impl AsRef<Path>,
  marker: [u8; 3],
  material: impl Into<MaterialTag>,
) -> Result<Grid, SeedError> {
  let path = path.as_ref();
  let image = image::open(path)?.to_rgb8();
  let grid = grid_from_image(&image, marker, material)?;
  info!(
    "seeded {}x{} grid from {}",
    grid.width(),
    grid.height(),
    path.display()
  );
  Ok(grid)
}
