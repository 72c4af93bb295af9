//! Pixel Automata - double-buffered cellular automata engine.
//!
//! Every cell decides its next state from the previous generation only, so a
//! tick is a pure, race-free transform from one grid to the next. Three rule
//! sets run on the same engine: falling sand/water, Conway's Game of Life, and
//! a Life variant that tracks how long each cell has been alive or dead.
//!
//! # Pieces
//!
//! - [`Cell`] - the 4-byte packed cell state and its codec
//! - [`Grid`] - fixed-size cell storage with the walled neighborhood accessor
//! - [`Jitter`] - pure position/time sign source for tie-breaking
//! - [`Rule`] - per-cell transition functions ([`FallingSand`], [`Life`])
//! - [`Automaton`] - the double-buffer driver (`step`, `paint`, `sample`)

pub mod cell;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod jitter;
pub mod primitives;
pub mod render;
pub mod seeding;
pub mod simulation;
pub mod world;

pub use cell::{Cell, Material, MaterialTag, decode, encode, tags};
pub use config::{AutomataConfig, SeedKind};
pub use diagnostics::{Census, TimeSeries};
pub use error::{ConfigError, GridError, SeedError};
pub use grid::Grid;
pub use jitter::{HashJitter, Jitter, JitterKind, JitterSource, NoiseJitter};
pub use primitives::Surface;
pub use render::Rgba;
pub use seeding::{BorderSeeder, GridSeeder, ScatterSeeder};
pub use simulation::{FallingSand, Life, Neighborhood, Rule, RuleSet};
pub use world::{Automaton, Slot};
