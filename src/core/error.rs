//! Generation errors.
//!
//! Every failure is local to a single `generate` call. Nothing is retried:
//! a second draw from an exhausted pool cannot succeed, so the caller has
//! to fix the configuration and start over. Partial plans are never
//! returned.

use thiserror::Error;

use super::TileCategory;

/// Why a board could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Levels start at 1; the enemy formula takes `log2(level)`.
    #[error("invalid level {level}: levels start at 1")]
    InvalidLevel { level: i32 },

    /// More cells were requested than remain in the free-cell pool.
    #[error("free cell pool exhausted: requested {requested}, {available} available")]
    PoolExhausted { requested: usize, available: usize },

    /// A tile category was configured with no variants to choose from.
    #[error("no variants configured for {category}")]
    EmptyVariantSet { category: TileCategory },

    /// The board has a zero dimension, or one too large for `i32` coordinates.
    #[error("invalid grid size {columns}x{rows}: dimensions must be in 1..=i32::MAX")]
    InvalidGridSize { columns: u32, rows: u32 },

    /// A count range whose maximum is below its minimum.
    #[error("invalid count range for {category}: maximum {maximum} < minimum {minimum}")]
    InvalidCountRange {
        category: TileCategory,
        minimum: u32,
        maximum: u32,
    },
}
