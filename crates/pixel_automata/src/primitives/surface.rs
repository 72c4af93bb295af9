//! Row-major 2D buffer.
//!
//! A [`Surface`] holds any element type. The grid stores [`Cell`]s in one,
//! the renderer writes [`Rgba`] into another.
//!
//! [`Cell`]: crate::Cell
//! [`Rgba`]: crate::Rgba

use std::ops::{Index, IndexMut};

use bytemuck::Pod;

/// A 2D buffer of elements.
///
/// Data is stored in row-major order (y * width + x), row 0 at the bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface<T> {
  data: Box<[T]>,
  width: u32,
  height: u32,
}

impl<T: Clone + Default> Surface<T> {
  /// Creates a new surface filled with the default value.
  pub fn new(width: u32, height: u32) -> Self {
    Self::filled(width, height, T::default())
  }
}

impl<T: Clone> Surface<T> {
  /// Creates a new surface filled with the given value.
  pub fn filled(width: u32, height: u32, value: T) -> Self {
    let len = (width as usize) * (height as usize);
    Self {
      data: vec![value; len].into_boxed_slice(),
      width,
      height,
    }
  }
}

impl<T> Surface<T> {
  /// Wraps existing row-major data. Returns `None` if the length is not
  /// `width * height`.
  pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Option<Self> {
    if data.len() != (width as usize) * (height as usize) {
      return None;
    }
    Some(Self {
      data: data.into_boxed_slice(),
      width,
      height,
    })
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Converts (x, y) to a linear index, or `None` if out of bounds.
  #[inline]
  pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
    if x < self.width && y < self.height {
      Some((y as usize) * (self.width as usize) + (x as usize))
    } else {
      None
    }
  }

  /// Returns a reference to the element at (x, y), or `None` if out of bounds.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> Option<&T> {
    self.index_of(x, y).map(|i| &self.data[i])
  }

  /// Sets the element at (x, y). Returns `false` if out of bounds.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, value: T) -> bool {
    if let Some(i) = self.index_of(x, y) {
      self.data[i] = value;
      true
    } else {
      false
    }
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.data
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.data
  }
}

impl<T: Pod> Surface<T> {
  /// Returns the raw data as a byte slice (for texture upload).
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::cast_slice(&self.data)
  }
}

impl<T> Index<(u32, u32)> for Surface<T> {
  type Output = T;

  #[inline]
  fn index(&self, (x, y): (u32, u32)) -> &Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &self.data[i]
  }
}

impl<T> IndexMut<(u32, u32)> for Surface<T> {
  #[inline]
  fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Self::Output {
    let i = (y as usize) * (self.width as usize) + (x as usize);
    &mut self.data[i]
  }
}
