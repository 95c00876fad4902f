//! Core types: geometry, tiles, configuration, randomness, errors.
//!
//! Everything here is independent of the generation algorithm itself.
//! Callers build a `BoardConfig` and pick a `RandomSource`; the `board`
//! module does the rest.

pub mod coord;
pub mod tile;
pub mod config;
pub mod rng;
pub mod error;

pub use coord::{Coord, GridSize};
pub use tile::{CountRange, TileCategory, TileId, VariantSet};
pub use config::BoardConfig;
pub use rng::{BoardRng, BoardRngState, RandomSource};
pub use error::BoardError;
