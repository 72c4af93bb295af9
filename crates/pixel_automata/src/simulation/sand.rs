//! Falling sand and water.
//!
//! Every move has two ends, and both ends decide independently from the same
//! source generation. A grain that falls turns itself into empty space while
//! the empty cell below turns itself into the grain. The two decisions agree
//! because each end evaluates the same predicate ([`fills_from_above`],
//! [`slide_intent`]) on the same cells, re-centering the view with
//! [`Neighborhood::shifted`] where it needs the other end's perspective.
//!
//! # Diagonal slides
//!
//! A resting grain picks a side from its jitter sign and slides into the
//! empty cell diagonally below on that side, unless the cell directly above
//! that gap falls into it first. When grains on both sides of a gap want it,
//! the left grain wins and the right grain waits.

use super::{Neighborhood, Rule};
use crate::cell::{Cell, Material};
use crate::jitter::Jitter;

/// How the falling-sand rules see a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Substance {
  /// Void, or any tag without a material.
  Empty,
  Sand,
  Water,
  /// Walls and every other known material. Never moves.
  Solid,
}

#[inline]
fn substance(cell: Cell) -> Substance {
  match cell.kind() {
    None | Some(Material::Void) => Substance::Empty,
    Some(Material::Sand) => Substance::Sand,
    Some(Material::Water) => Substance::Water,
    Some(_) => Substance::Solid,
  }
}

#[inline]
fn is_empty(cell: Cell) -> bool {
  substance(cell) == Substance::Empty
}

/// True if `cell` drops into an empty cell directly beneath it.
#[inline]
fn fills_from_above(cell: Cell) -> bool {
  matches!(substance(cell), Substance::Sand | Substance::Water)
}

/// True if the grain at the view center moves straight down this tick,
/// either into empty space or by swapping with supported water.
#[inline]
fn sinks<J: Jitter>(view: &Neighborhood<'_, J>) -> bool {
  let under = view.get(0, -1);
  match substance(under) {
    Substance::Empty => true,
    Substance::Water => !is_empty(view.get(0, -2)),
    _ => false,
  }
}

/// Side a resting grain at the view center tries to slide toward, or `None`
/// if the center is not sand or is already moving straight down.
#[inline]
fn slide_intent<J: Jitter>(view: &Neighborhood<'_, J>) -> Option<i64> {
  if substance(view.center()) != Substance::Sand || sinks(view) {
    return None;
  }
  Some(view.dir(0, 0))
}

/// Falling sand/water rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallingSand;

impl FallingSand {
  fn sand<J: Jitter>(view: &Neighborhood<'_, J>) -> Cell {
    let here = view.center();
    if sinks(view) {
      // Take whatever is below: empty space, or the water being displaced.
      return view.get(0, -1);
    }

    let dir = view.dir(0, 0);
    let gap = view.get(dir, -1);
    if !is_empty(gap) {
      return here;
    }
    // The cell above the gap falls into it instead.
    if fills_from_above(view.get(dir, 0)) {
      return here;
    }
    // Right-hand grain yields to a left-hand grain aiming at the same gap.
    if dir == -1 && slide_intent(&view.shifted(-2, 0)) == Some(1) {
      return here;
    }
    Cell::VOID
  }

  fn water<J: Jitter>(view: &Neighborhood<'_, J>) -> Cell {
    if is_empty(view.get(0, -1)) {
      return Cell::VOID;
    }
    let above = view.get(0, 1);
    if substance(above) == Substance::Sand {
      // Sand sinking through us; we rise into its place.
      return above;
    }
    view.center()
  }

  fn empty<J: Jitter>(view: &Neighborhood<'_, J>) -> Cell {
    let above = view.get(0, 1);
    if fills_from_above(above) {
      return above;
    }

    if slide_intent(&view.shifted(-1, 1)) == Some(1) {
      return view.get(-1, 1);
    }
    if slide_intent(&view.shifted(1, 1)) == Some(-1) {
      return view.get(1, 1);
    }
    view.center()
  }
}

impl Rule for FallingSand {
  fn next<J: Jitter>(&self, view: &Neighborhood<'_, J>) -> Cell {
    match substance(view.center()) {
      Substance::Sand => Self::sand(view),
      Substance::Water => Self::water(view),
      Substance::Empty => Self::empty(view),
      Substance::Solid => view.center(),
    }
  }
}
