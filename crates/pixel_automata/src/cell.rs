//! Cell state and its 4-byte codec.
//!
//! A cell is one material tag plus three auxiliary byte counters. The layout
//! matches the RGBA texel the state used to live in, so a grid can be handed
//! to a GPU texture upload without conversion.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Raw material tag byte.
///
/// Any byte is a valid tag. Tags without a [`Material`] are treated as empty
/// space by every rule set.
#[repr(transparent)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct MaterialTag(pub u8);

/// Built-in material tags.
pub mod tags {
  use super::MaterialTag;
  pub const VOID: MaterialTag = MaterialTag(0);
  pub const WALL: MaterialTag = MaterialTag(1);
  pub const SAND: MaterialTag = MaterialTag(2);
  pub const WATER: MaterialTag = MaterialTag(3);
  pub const ALIVE: MaterialTag = MaterialTag(4);
  pub const DEAD: MaterialTag = MaterialTag(5);
}

/// Known materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
  /// Empty space.
  Void,
  /// Static solid. Also what lies beyond the grid edge.
  Wall,
  /// Granular, falls and piles, sinks through water.
  Sand,
  /// Falls straight down, displaced upward by sinking sand.
  Water,
  /// Live Game of Life cell.
  Alive,
  /// Dead Game of Life cell.
  Dead,
}

impl Material {
  /// Every known material, in tag order.
  pub const ALL: [Material; 6] = [
    Material::Void,
    Material::Wall,
    Material::Sand,
    Material::Water,
    Material::Alive,
    Material::Dead,
  ];

  /// Classifies a raw tag, or `None` for tags with no material.
  #[inline]
  pub fn of(tag: MaterialTag) -> Option<Material> {
    match tag {
      tags::VOID => Some(Material::Void),
      tags::WALL => Some(Material::Wall),
      tags::SAND => Some(Material::Sand),
      tags::WATER => Some(Material::Water),
      tags::ALIVE => Some(Material::Alive),
      tags::DEAD => Some(Material::Dead),
      _ => None,
    }
  }

  /// Returns the raw tag for this material.
  #[inline]
  pub const fn tag(self) -> MaterialTag {
    match self {
      Material::Void => tags::VOID,
      Material::Wall => tags::WALL,
      Material::Sand => tags::SAND,
      Material::Water => tags::WATER,
      Material::Alive => tags::ALIVE,
      Material::Dead => tags::DEAD,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Material::Void => "void",
      Material::Wall => "wall",
      Material::Sand => "sand",
      Material::Water => "water",
      Material::Alive => "alive",
      Material::Dead => "dead",
    }
  }
}

impl From<Material> for MaterialTag {
  fn from(material: Material) -> Self {
    material.tag()
  }
}

impl std::str::FromStr for Material {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Material::ALL
      .into_iter()
      .find(|m| m.name().eq_ignore_ascii_case(s))
      .ok_or_else(|| format!("unknown material: {s}"))
  }
}

/// Simulation cell - 4 bytes, one texel.
///
/// A material that ignores an auxiliary field keeps it at 0.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Cell {
  pub material: MaterialTag,
  pub aux0: u8,
  pub aux1: u8,
  pub aux2: u8,
}

impl Cell {
  pub const VOID: Self = Self::new(tags::VOID);

  /// The synthetic cell returned for coordinates outside the grid.
  pub const WALL: Self = Self::new(tags::WALL);

  /// Creates a cell with all auxiliary fields cleared.
  #[inline]
  pub const fn new(material: MaterialTag) -> Self {
    Self {
      material,
      aux0: 0,
      aux1: 0,
      aux2: 0,
    }
  }

  #[inline]
  pub const fn with_aux(material: MaterialTag, aux0: u8, aux1: u8, aux2: u8) -> Self {
    Self {
      material,
      aux0,
      aux1,
      aux2,
    }
  }

  /// Classifies this cell's tag.
  #[inline]
  pub fn kind(&self) -> Option<Material> {
    Material::of(self.material)
  }

  /// Returns true if this cell holds the given material.
  #[inline]
  pub fn is(&self, material: Material) -> bool {
    self.material == material.tag()
  }

  /// Packs the cell as `[material, aux0, aux1, aux2]`.
  #[inline]
  pub const fn to_bytes(self) -> [u8; 4] {
    [self.material.0, self.aux0, self.aux1, self.aux2]
  }

  #[inline]
  pub const fn from_bytes(bytes: [u8; 4]) -> Self {
    Self::with_aux(MaterialTag(bytes[0]), bytes[1], bytes[2], bytes[3])
  }
}

impl From<Material> for Cell {
  fn from(material: Material) -> Self {
    Cell::new(material.tag())
  }
}

/// Encodes a cell into its 4-byte state word.
#[inline]
pub fn encode(cell: Cell) -> [u8; 4] {
  cell.to_bytes()
}

/// Decodes a 4-byte state word. Total: every byte pattern is a cell.
#[inline]
pub fn decode(bytes: [u8; 4]) -> Cell {
  Cell::from_bytes(bytes)
}
