//! Free-cell pool for collision-free placement.
//!
//! The pool holds every interior coordinate that has not been handed out
//! yet. Placement passes draw from it without replacement, so two
//! pool-drawn placements never share a cell.
//!
//! ## Key Types
//!
//! - `FreeCellPool`: shrinking set of eligible interior coordinates

pub mod free_cells;

pub use free_cells::FreeCellPool;

// Re-export grid types from core for convenience
pub use crate::core::coord::{Coord, GridSize};
