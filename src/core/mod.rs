//! Core engine types: tiles, positions, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by the board
//! model and the rules components. Sessions configure them via `BoardConfig`
//! rather than modifying the core.

pub mod config;
pub mod pos;
pub mod rng;
pub mod tile;

pub use config::{BoardConfig, MAX_DIM, MAX_TYPES, MIN_DIM, MIN_TYPES};
pub use pos::{Axis, Pos};
pub use rng::{BoardRng, BoardRngState};
pub use tile::{SpecialKind, Tile, TileId, TileKind};
