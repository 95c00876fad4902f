//! # rust-boardgen
//!
//! Deterministic procedural board generation for grid roguelikes.
//!
//! Given a grid size, tile variants per category, and count ranges, the
//! generator produces a *placement plan*: an ordered list of which tile goes
//! on which cell. Rendering, gameplay, and persistence are left to the
//! caller; the plan is plain data.
//!
//! ## Design Principles
//!
//! 1. **Collision-free scatter**: walls, food, and enemies are drawn from a
//!    shrinking pool of interior cells, so no two of them share a cell.
//!
//! 2. **Injected randomness**: every draw goes through a `RandomSource`.
//!    `BoardRng` is seeded and checkpointable; tests can script their own.
//!
//! 3. **Configuration Over Convention**: tile ids are opaque and supplied
//!    by the caller via `BoardConfig`.
//!
//! ## Modules
//!
//! - `core`: Coordinates, tiles, configuration, RNG, errors
//! - `pool`: Free-cell pool with draw-without-replacement
//! - `board`: The generator and its placement plan

pub mod core;
pub mod pool;
pub mod board;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Coord, GridSize,
    TileId, TileCategory, CountRange, VariantSet,
    BoardConfig,
    BoardRng, BoardRngState, RandomSource,
    BoardError,
};

pub use crate::pool::FreeCellPool;

pub use crate::board::{
    BoardGenerator, Placement, PlacementPlan, PlanSummary,
    enemy_count, generate,
};
