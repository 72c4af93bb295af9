//! Deterministic tie-break signs.
//!
//! A [`Jitter`] maps `(x, y, time)` to `-1` or `+1` and nothing else: no
//! internal state, no grid access. Any cell can therefore ask what sign a
//! *neighboring* coordinate gets this tick and receive exactly the answer
//! that neighbor computes for itself. Both sides of a contested move agree
//! on the winner without talking to each other.

pub mod hash;

use noise::{NoiseFn, Simplex};
use serde::{Deserialize, Serialize};

use hash::{hash41uu64, mix64};

/// Pure sign source for symmetric tie-breaking.
pub trait Jitter: Send + Sync {
  /// Returns `-1` or `+1` for the cell at (x, y) at tick time `time`.
  fn sign(&self, x: i64, y: i64, time: f64) -> i64;
}

/// Thresholded 3D simplex noise over `(x, y, time)`.
///
/// Samples at the cell center, like a fragment shader reading
/// `gl_FragCoord`. Neighboring cells get correlated signs, so grains in a
/// region tend to slide the same way for a few ticks.
#[derive(Clone, Debug)]
pub struct NoiseJitter {
  noise: Simplex,
}

impl NoiseJitter {
  pub fn new(seed: u32) -> Self {
    Self {
      noise: Simplex::new(seed),
    }
  }
}

impl Default for NoiseJitter {
  fn default() -> Self {
    Self::new(0)
  }
}

impl Jitter for NoiseJitter {
  #[inline]
  fn sign(&self, x: i64, y: i64, time: f64) -> i64 {
    let v = self.noise.get([x as f64 + 0.5, y as f64 + 0.5, time]);
    if v > 0.0 { 1 } else { -1 }
  }
}

/// Seeded integer hash of `(x, y, time)`.
///
/// Uncorrelated between neighbors and bit-exact across platforms.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashJitter {
  seed: u64,
}

impl HashJitter {
  pub fn new(seed: u64) -> Self {
    Self { seed }
  }
}

impl Jitter for HashJitter {
  #[inline]
  fn sign(&self, x: i64, y: i64, time: f64) -> i64 {
    // Time bits are mixed first so they cannot cancel coordinate bits.
    let h = hash41uu64(self.seed, x as u64, y as u64, mix64(time.to_bits()));
    if h & 1 == 0 { -1 } else { 1 }
  }
}

/// Config-selectable jitter kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JitterKind {
  #[default]
  Noise,
  Hash,
}

/// Runtime-selected jitter.
#[derive(Clone, Debug)]
pub enum JitterSource {
  Noise(NoiseJitter),
  Hash(HashJitter),
}

impl JitterSource {
  pub fn new(kind: JitterKind, seed: u64) -> Self {
    match kind {
      JitterKind::Noise => Self::Noise(NoiseJitter::new(seed as u32)),
      JitterKind::Hash => Self::Hash(HashJitter::new(seed)),
    }
  }
}

impl Jitter for JitterSource {
  #[inline]
  fn sign(&self, x: i64, y: i64, time: f64) -> i64 {
    match self {
      Self::Noise(j) => j.sign(x, y, time),
      Self::Hash(j) => j.sign(x, y, time),
    }
  }
}
