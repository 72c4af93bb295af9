//! Fixed-size cell grid and the neighborhood accessor.
//!
//! # Coordinate System
//!
//! `(0, 0)` is the bottom-left cell and `+y` points up, so "below" a cell is
//! `y - 1`. Everything outside `0..width` x `0..height` reads as a synthetic
//! [`Cell::WALL`]. There is no wraparound.

use crate::cell::Cell;
use crate::diagnostics::Census;
use crate::error::GridError;
use crate::primitives::Surface;

/// One generation of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
  cells: Surface<Cell>,
}

impl Grid {
  /// Creates an all-void grid.
  pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
    Self::filled(width, height, Cell::VOID)
  }

  /// Creates a grid with every cell set to `cell`.
  pub fn filled(width: u32, height: u32, cell: Cell) -> Result<Self, GridError> {
    check_dimensions(width, height)?;
    Ok(Self {
      cells: Surface::filled(width, height, cell),
    })
  }

  /// Wraps row-major cells (bottom row first).
  ///
  /// The cell count must be exactly `width * height`; nothing is truncated or
  /// padded.
  pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Result<Self, GridError> {
    check_dimensions(width, height)?;
    let expected = (width as usize) * (height as usize);
    let actual = cells.len();
    let cells =
      Surface::from_vec(width, height, cells).ok_or(GridError::CellCountMismatch { expected, actual })?;
    Ok(Self { cells })
  }

  /// Decodes packed 4-byte cells (bottom row first).
  pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
    check_dimensions(width, height)?;
    let expected = (width as usize) * (height as usize) * 4;
    if bytes.len() != expected {
      return Err(GridError::ByteCountMismatch {
        expected,
        actual: bytes.len(),
      });
    }
    let cells = bytes
      .chunks_exact(4)
      .map(|b| Cell::from_bytes([b[0], b[1], b[2], b[3]]))
      .collect();
    Self::from_cells(width, height, cells)
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.cells.width()
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.cells.height()
  }

  /// Number of cells.
  #[inline]
  pub fn len(&self) -> usize {
    self.cells.as_slice().len()
  }

  /// Always false; a grid has at least one cell.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the cell at (x, y), or `None` if out of bounds.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
    self.cells.get(x, y).copied()
  }

  /// Sets the cell at (x, y). Returns `false` if out of bounds.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, cell: Cell) -> bool {
    self.cells.set(x, y, cell)
  }

  /// Returns the cell at `(x + dx, y + dy)`, or a wall if that lies outside
  /// the grid.
  #[inline]
  pub fn neighbor(&self, x: i64, y: i64, dx: i64, dy: i64) -> Cell {
    match (x.checked_add(dx), y.checked_add(dy)) {
      (Some(x), Some(y)) => self.at(x, y),
      _ => Cell::WALL,
    }
  }

  /// Returns the cell at signed coordinates, or a wall outside the grid.
  #[inline]
  pub fn at(&self, x: i64, y: i64) -> Cell {
    if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
      return Cell::WALL;
    }
    self.cells[(x as u32, y as u32)]
  }

  #[inline]
  pub(crate) fn index_of(&self, x: u32, y: u32) -> Option<usize> {
    self.cells.index_of(x, y)
  }

  #[inline]
  pub fn cells(&self) -> &[Cell] {
    self.cells.as_slice()
  }

  #[inline]
  pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
    self.cells.as_mut_slice()
  }

  /// Packed cell bytes, bottom row first.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    self.cells.as_bytes()
  }

  /// Counts cells per material tag.
  pub fn census(&self) -> Census {
    Census::of(self.cells())
  }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), GridError> {
  if width == 0 || height == 0 {
    return Err(GridError::EmptyDimensions { width, height });
  }
  Ok(())
}
