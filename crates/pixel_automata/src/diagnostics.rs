//! Population counts and tick timing.

use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use crate::cell::{Cell, Material, MaterialTag};

/// Number of cells per material tag.
#[derive(Clone, PartialEq, Eq)]
pub struct Census {
  counts: Box<[u64; 256]>,
}

impl Census {
  pub fn of(cells: &[Cell]) -> Self {
    let mut counts = Box::new([0u64; 256]);
    for cell in cells {
      counts[cell.material.0 as usize] += 1;
    }
    Self { counts }
  }

  #[inline]
  pub fn count(&self, tag: MaterialTag) -> u64 {
    self.counts[tag.0 as usize]
  }

  #[inline]
  pub fn material(&self, material: Material) -> u64 {
    self.count(material.tag())
  }

  pub fn total(&self) -> u64 {
    self.counts.iter().sum()
  }
}

impl fmt::Debug for Census {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut map = f.debug_map();
    for (tag, &n) in self.counts.iter().enumerate() {
      if n > 0 {
        match Material::of(MaterialTag(tag as u8)) {
          Some(m) => map.entry(&m.name(), &n),
          None => map.entry(&tag, &n),
        };
      }
    }
    map.finish()
  }
}

impl fmt::Display for Census {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for m in Material::ALL {
      let n = self.material(m);
      if n == 0 {
        continue;
      }
      if !first {
        write!(f, " ")?;
      }
      write!(f, "{}={}", m.name(), n)?;
      first = false;
    }
    let unknown = self.total() - Material::ALL.iter().map(|&m| self.material(m)).sum::<u64>();
    if unknown > 0 {
      write!(f, "{}unknown={}", if first { "" } else { " " }, unknown)?;
    }
    Ok(())
  }
}

/// Sliding window of step durations.
///
/// Min and max are cached and only rescanned after the sample that defined
/// one of them is evicted.
pub struct TimeSeries {
  samples: VecDeque<Duration>,
  window: usize,
  total: Duration,
  /// `(min, max)` of the window, `None` when stale or empty.
  extremes: Option<(Duration, Duration)>,
}

impl TimeSeries {
  pub fn new(window: usize) -> Self {
    let window = window.max(1);
    Self {
      samples: VecDeque::with_capacity(window),
      window,
      total: Duration::ZERO,
      extremes: None,
    }
  }

  pub fn push(&mut self, sample: Duration) {
    if self.samples.len() == self.window {
      if let Some(old) = self.samples.pop_front() {
        self.total -= old;
        if matches!(self.extremes, Some((lo, hi)) if old == lo || old == hi) {
          self.extremes = None;
        }
      }
    }
    let was_empty = self.samples.is_empty();
    self.samples.push_back(sample);
    self.total += sample;

    self.extremes = match self.extremes {
      Some((lo, hi)) => Some((lo.min(sample), hi.max(sample))),
      None if was_empty => Some((sample, sample)),
      None => None,
    };
  }

  pub fn len(&self) -> usize {
    self.samples.len()
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  /// Most recent sample.
  pub fn last(&self) -> Option<Duration> {
    self.samples.back().copied()
  }

  pub fn mean(&self) -> Duration {
    match self.samples.len() {
      0 => Duration::ZERO,
      n => self.total / n as u32,
    }
  }

  pub fn min(&mut self) -> Duration {
    self.extremes().0
  }

  pub fn max(&mut self) -> Duration {
    self.extremes().1
  }

  fn extremes(&mut self) -> (Duration, Duration) {
    if self.extremes.is_none() {
      self.extremes = self
        .samples
        .iter()
        .fold(None, |acc, &d| match acc {
          Some((lo, hi)) => Some((d.min(lo), d.max(hi))),
          None => Some((d, d)),
        });
    }
    self.extremes.unwrap_or_default()
  }
}
