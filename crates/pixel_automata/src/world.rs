//! Double-buffered automaton driver.
//!
//! The driver owns both generations and a [`Slot`] token naming the readable
//! one. Nothing outside holds a reference across a swap: observation goes
//! through [`Automaton::sample`] / [`Automaton::readable`], mutation through
//! [`Automaton::paint`].
//!
//! # Tick Lifecycle
//!
//! 1. `paint` writes cells into the writable buffer and queues their indices.
//!    The readable buffer is untouched, so `sample` still shows the old value.
//! 2. `step` promotes queued cells into the readable (source) generation,
//!    runs the transition pass from readable into writable, then flips the
//!    token. The painted cells are part of the source the pass reads, so
//!    they take effect in the very next generation.

use log::{debug, trace};

use crate::cell::{Cell, MaterialTag};
use crate::grid::Grid;
use crate::jitter::Jitter;
use crate::simulation::{Rule, transition};

/// Names one of the two grid buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
  A,
  B,
}

impl Slot {
  #[inline]
  pub fn other(self) -> Slot {
    match self {
      Slot::A => Slot::B,
      Slot::B => Slot::A,
    }
  }

  #[inline]
  fn index(self) -> usize {
    match self {
      Slot::A => 0,
      Slot::B => 1,
    }
  }
}

/// Cellular automaton over a fixed grid with double-buffered generations.
pub struct Automaton<R, J> {
  buffers: [Grid; 2],
  readable: Slot,
  /// Indices painted into the writable buffer since the last step, each at
  /// most once. `queued` marks which indices are already in the list.
  pending: Vec<usize>,
  queued: Vec<bool>,
  rule: R,
  jitter: J,
  tick: u64,
  parallel: bool,
}

impl<R: Rule, J: Jitter> Automaton<R, J> {
  /// Creates an automaton whose first readable generation is `initial`.
  pub fn new(initial: Grid, rule: R, jitter: J) -> Self {
    let writable = initial.clone();
    let len = initial.len();
    Self {
      buffers: [initial, writable],
      readable: Slot::A,
      pending: Vec::new(),
      queued: vec![false; len],
      rule,
      jitter,
      tick: 0,
      parallel: true,
    }
  }

  /// Selects parallel (default) or sequential pass execution.
  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  /// The current generation.
  #[inline]
  pub fn readable(&self) -> &Grid {
    &self.buffers[self.readable.index()]
  }

  /// Which slot currently holds the readable generation.
  #[inline]
  pub fn readable_slot(&self) -> Slot {
    self.readable
  }

  /// Number of completed steps.
  #[inline]
  pub fn tick(&self) -> u64 {
    self.tick
  }

  #[inline]
  pub fn dimensions(&self) -> (u32, u32) {
    let grid = self.readable();
    (grid.width(), grid.height())
  }

  pub fn jitter(&self) -> &J {
    &self.jitter
  }

  /// Returns the readable cell at (x, y); walls outside the grid.
  #[inline]
  pub fn sample(&self, x: i64, y: i64) -> Cell {
    self.readable().at(x, y)
  }

  /// Writes `material` into the square of side `2 * radius + 1` centered on
  /// (x, y), clipped to the grid.
  ///
  /// The edit lands in the writable buffer and becomes visible once the next
  /// step completes.
  pub fn paint(&mut self, x: i64, y: i64, material: impl Into<MaterialTag>, radius: u32) {
    let cell = Cell::new(material.into());
    let r = radius as i64;
    let writable = &mut self.buffers[self.readable.other().index()];
    let (w, h) = (writable.width() as i64, writable.height() as i64);

    let mut written = 0usize;
    for py in y.saturating_sub(r).max(0)..=y.saturating_add(r).min(h - 1) {
      for px in x.saturating_sub(r).max(0)..=x.saturating_add(r).min(w - 1) {
        let (px, py) = (px as u32, py as u32);
        if let Some(i) = writable.index_of(px, py) {
          writable.set(px, py, cell);
          if !self.queued[i] {
            self.queued[i] = true;
            self.pending.push(i);
          }
          written += 1;
        }
      }
    }
    trace!(
      "paint {:?} at ({}, {}) r={} -> {} cells",
      cell.material, x, y, radius, written
    );
  }

  /// Advances one generation using tick time `time` (seconds).
  pub fn step(&mut self, time: f64) {
    let Self {
      buffers,
      readable,
      pending,
      queued,
      rule,
      jitter,
      parallel,
      ..
    } = self;
    let (source, target) = split(buffers, *readable);

    let promoted = pending.len();
    for i in pending.drain(..) {
      source.cells_mut()[i] = target.cells()[i];
      queued[i] = false;
    }

    transition(source, target, rule, jitter, time, *parallel);

    self.readable = self.readable.other();
    self.tick += 1;
    debug!(
      "tick {} at t={:.3}: promoted {} painted cells, readable={:?}",
      self.tick, time, promoted, self.readable
    );
  }

  /// Runs `count` steps starting at `start`, `dt` seconds apart.
  pub fn run(&mut self, count: u64, start: f64, dt: f64) {
    for i in 0..count {
      self.step(start + i as f64 * dt);
    }
  }
}

/// Splits into (readable, writable) buffers.
fn split(buffers: &mut [Grid; 2], readable: Slot) -> (&mut Grid, &mut Grid) {
  let [a, b] = buffers;
  match readable {
    Slot::A => (a, b),
    Slot::B => (b, a),
  }
}
