//! Error types.
//!
//! The simulation itself is total. Errors only come from building a grid,
//! loading configuration, or reading seed images.

use std::path::PathBuf;

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
  /// Width or height is zero.
  EmptyDimensions { width: u32, height: u32 },
  /// Supplied cell count does not match `width * height`.
  CellCountMismatch { expected: usize, actual: usize },
  /// Supplied byte count does not match `width * height * 4`.
  ByteCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for GridError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::EmptyDimensions { width, height } => {
        write!(f, "grid dimensions must be non-zero: {}x{}", width, height)
      }
      Self::CellCountMismatch { expected, actual } => {
        write!(f, "cell count mismatch: expected={}, actual={}", expected, actual)
      }
      Self::ByteCountMismatch { expected, actual } => {
        write!(f, "byte count mismatch: expected={}, actual={}", expected, actual)
      }
    }
  }
}

impl std::error::Error for GridError {}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
  Io { path: PathBuf, source: std::io::Error },
  Parse(toml::de::Error),
  Invalid(String),
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
      Self::Parse(e) => write!(f, "failed to parse config: {}", e),
      Self::Invalid(msg) => write!(f, "invalid config: {}", msg),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse(e) => Some(e),
      Self::Invalid(_) => None,
    }
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(e: toml::de::Error) -> Self {
    Self::Parse(e)
  }
}

/// Initial grid seeding errors.
#[derive(Debug)]
pub enum SeedError {
  Image(image::ImageError),
  Grid(GridError),
}

impl std::fmt::Display for SeedError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Image(e) => write!(f, "failed to load seed image: {}", e),
      Self::Grid(e) => write!(f, "seed image rejected: {}", e),
    }
  }
}

impl std::error::Error for SeedError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Image(e) => Some(e),
      Self::Grid(e) => Some(e),
    }
  }
}

impl From<image::ImageError> for SeedError {
  fn from(e: image::ImageError) -> Self {
    Self::Image(e)
  }
}

impl From<GridError> for SeedError {
  fn from(e: GridError) -> Self {
    Self::Grid(e)
  }
}
