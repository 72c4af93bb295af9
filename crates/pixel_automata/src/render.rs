//! Cell-to-color lookup.
//!
//! Stateless: reads a generation, never writes one.

use bytemuck::{Pod, Zeroable};

use crate::cell::{Cell, Material};
use crate::grid::Grid;
use crate::primitives::Surface;

/// RGBA pixel with 8 bits per channel.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

impl Rgba {
  #[inline]
  pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }

  /// Creates an opaque RGB pixel (alpha = 255).
  #[inline]
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  pub const BLACK: Self = Self::rgb(0, 0, 0);
  pub const WHITE: Self = Self::rgb(255, 255, 255);
}

const SAND: Rgba = Rgba::rgb(255, 255, 128);
const WALL: Rgba = Rgba::rgb(102, 102, 102);
const WATER: Rgba = Rgba::rgb(26, 26, 204);

/// Maps a cell to its display color.
///
/// Life cells fade with their age counters; cells without counters render at
/// full strength.
pub fn palette(cell: Cell) -> Rgba {
  match cell.kind() {
    Some(Material::Sand) => SAND,
    Some(Material::Wall) => WALL,
    Some(Material::Water) => WATER,
    Some(Material::Alive) => {
      // Fresh cells are white, old ones settle to green.
      let fade = cell.aux0.min(64) * 3;
      Rgba::rgb(255 - fade, 255, 255 - fade)
    }
    Some(Material::Dead) if cell.aux1 > 0 => {
      // Short afterglow, gone after 16 ticks.
      let glow = 96u8.saturating_sub(cell.aux1.saturating_mul(6));
      Rgba::rgb(0, glow / 2, glow)
    }
    _ => Rgba::BLACK,
  }
}

/// Renders a generation, row 0 at the bottom like the grid.
pub fn render(grid: &Grid) -> Surface<Rgba> {
  let mut out = Surface::new(grid.width(), grid.height());
  for (dst, &cell) in out.as_mut_slice().iter_mut().zip(grid.cells()) {
    *dst = palette(cell);
  }
  out
}

/// Renders a generation as an image, top row first.
pub fn to_image(grid: &Grid) -> image::RgbaImage {
  let height = grid.height();
  image::RgbaImage::from_fn(grid.width(), height, |x, y| {
    let c = palette(grid.at(x as i64, (height - 1 - y) as i64));
    image::Rgba([c.r, c.g, c.b, c.a])
  })
}
