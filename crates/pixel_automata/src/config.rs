//! TOML configuration.
//!
//! Every field has a default, so an empty file (or no file) gives a 256x256
//! falling-sand world with a quarter of its cells seeded as sand.

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::cell::Material;
use crate::error::{ConfigError, SeedError};
use crate::grid::Grid;
use crate::jitter::{JitterKind, JitterSource};
use crate::seeding::{BorderSeeder, GridSeeder, ScatterSeeder, image_grid};
use crate::simulation::RuleSet;
use crate::world::Automaton;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AutomataConfig {
  pub grid: GridConfig,
  pub simulation: SimulationConfig,
  pub seeding: SeedingConfig,
  pub render: RenderConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
  pub width: u32,
  pub height: u32,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      width: 256,
      height: 256,
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
  pub rules: RuleSet,
  pub jitter: JitterKind,
  pub seed: u64,
  pub parallel: bool,
  /// Clock advance per step, in seconds.
  pub tick_seconds: f64,
}

impl Default for SimulationConfig {
  fn default() -> Self {
    Self {
      rules: RuleSet::FallingSand,
      jitter: JitterKind::Noise,
      seed: 0,
      parallel: true,
      tick_seconds: 1.0 / 60.0,
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedKind {
  /// All void.
  Empty,
  /// Random fill, see [`ScatterSeeder`].
  #[default]
  Scatter,
  /// Marker pixels of an image, see [`image_grid`].
  Image,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SeedingConfig {
  pub kind: SeedKind,
  pub material: Material,
  pub probability: f64,
  /// Frame the grid with walls after seeding.
  pub walls: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<PathBuf>,
  #[serde(
    deserialize_with = "deserialize_hex_color",
    serialize_with = "serialize_hex_color"
  )]
  pub marker: [u8; 3],
}

impl Default for SeedingConfig {
  fn default() -> Self {
    Self {
      kind: SeedKind::Scatter,
      material: Material::Sand,
      probability: 0.25,
      walls: false,
      image: None,
      marker: [255, 255, 255],
    }
  }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
  /// Directory for PNG frame dumps; no frames are written when unset.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub frames_dir: Option<PathBuf>,
  /// Write a frame every N ticks. 0 writes only the final frame.
  pub frame_every: u64,
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<[u8; 3], D::Error>
where
  D: Deserializer<'de>,
{
  let s: String = Deserialize::deserialize(deserializer)?;
  parse_hex_color(&s).map_err(de::Error::custom)
}

fn serialize_hex_color<S>(color: &[u8; 3], serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  let [r, g, b] = color;
  serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<[u8; 3], String> {
  let s = s.trim_start_matches('#');
  if s.len() != 6 || !s.is_ascii() {
    return Err("hex color must be 6 characters".to_string());
  }
  let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string());
  Ok([channel(0)?, channel(2)?, channel(4)?])
}

impl AutomataConfig {
  /// Reads and validates a config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let config = Self::from_toml_str(&text)?;
    info!("loaded config from {}", path.display());
    Ok(config)
  }

  /// Parses and validates a config from TOML text.
  pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  pub fn to_toml_string(&self) -> Result<String, ConfigError> {
    toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    let GridConfig { width, height } = self.grid;
    if width == 0 || height == 0 {
      return Err(ConfigError::Invalid(format!(
        "grid dimensions must be non-zero: {}x{}",
        width, height
      )));
    }
    let p = self.seeding.probability;
    if !(0.0..=1.0).contains(&p) {
      return Err(ConfigError::Invalid(format!(
        "seeding probability must be within [0, 1]: {}",
        p
      )));
    }
    if self.seeding.kind == SeedKind::Image && self.seeding.image.is_none() {
      return Err(ConfigError::Invalid(
        "image seeding requires seeding.image".to_string(),
      ));
    }
    let dt = self.simulation.tick_seconds;
    if !dt.is_finite() || dt < 0.0 {
      return Err(ConfigError::Invalid(format!(
        "tick_seconds must be finite and non-negative: {}",
        dt
      )));
    }
    Ok(())
  }

  /// Builds the first generation described by the seeding section.
  ///
  /// Image seeding takes its dimensions from the image, not the grid section.
  pub fn initial_grid(&self) -> Result<Grid, SeedError> {
    let seeding = &self.seeding;
    let mut grid = match (seeding.kind, &seeding.image) {
      (SeedKind::Image, Some(path)) => image_grid(path, seeding.marker, seeding.material)?,
      _ => Grid::new(self.grid.width, self.grid.height)?,
    };
    if seeding.kind == SeedKind::Scatter {
      ScatterSeeder::new(seeding.material, seeding.probability, self.simulation.seed)
        .seed(&mut grid);
    }
    if seeding.walls {
      BorderSeeder.seed(&mut grid);
    }
    Ok(grid)
  }

  /// Seeds a grid and wraps it in a driver with the configured rules and
  /// jitter.
  pub fn build(&self) -> Result<Automaton<RuleSet, JitterSource>, SeedError> {
    let grid = self.initial_grid()?;
    let sim = &self.simulation;
    info!(
      "building {}x{} {:?} automaton ({:?} jitter, seed {})",
      grid.width(),
      grid.height(),
      sim.rules,
      sim.jitter,
      sim.seed
    );
    Ok(
      Automaton::new(grid, sim.rules, JitterSource::new(sim.jitter, sim.seed))
        .with_parallel(sim.parallel),
    )
  }
}
