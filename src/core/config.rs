//! Board configuration.
//!
//! Callers describe a board by providing:
//! - `GridSize`: board dimensions
//! - `CountRange`s: how many walls and food items to scatter
//! - `VariantSet`s: which tile ids each category may use
//! - the exit tile id
//!
//! The generator never hardcodes tile ids; the caller defines them.
//! [`BoardConfig::classic`] reproduces the reference 8×8 layout.
//!
//! Configs are plain serde data, so they can be loaded from JSON:
//!
//! ```
//! use rust_boardgen::core::{BoardConfig, CountRange};
//!
//! let json = r#"{
//!     "grid": { "columns": 10, "rows": 6 },
//!     "wall_count": { "minimum": 2, "maximum": 4 },
//!     "food_count": { "minimum": 1, "maximum": 1 },
//!     "floor_tiles": [0, 1],
//!     "outer_wall_tiles": [2],
//!     "wall_tiles": [3, 4],
//!     "food_tiles": [5],
//!     "enemy_tiles": [6],
//!     "exit": 7
//! }"#;
//!
//! let config: BoardConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.grid.columns, 10);
//! assert_eq!(config.wall_count, CountRange::new(2, 4));
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::{BoardError, CountRange, GridSize, TileCategory, TileId, VariantSet};

/// Complete board configuration.
///
/// Carries no per-level state; the same config is reused for every level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board dimensions.
    pub grid: GridSize,

    /// How many interior walls to place.
    pub wall_count: CountRange,

    /// How many food items to place.
    pub food_count: CountRange,

    /// Floor variants, used for every non-boundary cell of the frame.
    pub floor_tiles: VariantSet,

    /// Outer wall variants for the ring around the board.
    pub outer_wall_tiles: VariantSet,

    /// Interior wall variants.
    pub wall_tiles: VariantSet,

    /// Food variants.
    pub food_tiles: VariantSet,

    /// Enemy variants.
    pub enemy_tiles: VariantSet,

    /// The exit tile.
    pub exit: TileId,
}

impl BoardConfig {
    /// Create a config with the given dimensions and no tiles.
    ///
    /// Count ranges default to zero; variant sets are empty and must be
    /// filled before the config validates.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            grid: GridSize::new(columns, rows),
            wall_count: CountRange::exactly(0),
            food_count: CountRange::exactly(0),
            floor_tiles: VariantSet::new(),
            outer_wall_tiles: VariantSet::new(),
            wall_tiles: VariantSet::new(),
            food_tiles: VariantSet::new(),
            enemy_tiles: VariantSet::new(),
            exit: TileId::new(0),
        }
    }

    /// The reference layout: 8×8, 5-9 walls, 1-5 food.
    ///
    /// Tile ids are allocated sequentially: floors `0..8`, outer walls
    /// `8..11`, walls `11..19`, food `19..21`, enemies `21..23`, exit `23`.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(8, 8)
            .with_wall_count(CountRange::new(5, 9))
            .with_food_count(CountRange::new(1, 5))
            .with_floor_tiles(VariantSet::sequential(0, 8))
            .with_outer_wall_tiles(VariantSet::sequential(8, 3))
            .with_wall_tiles(VariantSet::sequential(11, 8))
            .with_food_tiles(VariantSet::sequential(19, 2))
            .with_enemy_tiles(VariantSet::sequential(21, 2))
            .with_exit(TileId::new(23))
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_wall_count(mut self, range: CountRange) -> Self {
        self.wall_count = range;
        self
    }

    #[must_use]
    pub fn with_food_count(mut self, range: CountRange) -> Self {
        self.food_count = range;
        self
    }

    #[must_use]
    pub fn with_floor_tiles(mut self, tiles: VariantSet) -> Self {
        self.floor_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_outer_wall_tiles(mut self, tiles: VariantSet) -> Self {
        self.outer_wall_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_wall_tiles(mut self, tiles: VariantSet) -> Self {
        self.wall_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_food_tiles(mut self, tiles: VariantSet) -> Self {
        self.food_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_enemy_tiles(mut self, tiles: VariantSet) -> Self {
        self.enemy_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_exit(mut self, exit: TileId) -> Self {
        self.exit = exit;
        self
    }

    /// Variant set for a category. `None` for the exit, which has a single
    /// fixed id.
    #[must_use]
    pub fn variants(&self, category: TileCategory) -> Option<&VariantSet> {
        match category {
            TileCategory::Floor => Some(&self.floor_tiles),
            TileCategory::OuterWall => Some(&self.outer_wall_tiles),
            TileCategory::Wall => Some(&self.wall_tiles),
            TileCategory::Food => Some(&self.food_tiles),
            TileCategory::Enemy => Some(&self.enemy_tiles),
            TileCategory::Exit => None,
        }
    }

    /// Configured count range for walls and food. Enemy counts depend on the
    /// level, so they are not configured here.
    #[must_use]
    pub fn count_range(&self, category: TileCategory) -> Option<CountRange> {
        match category {
            TileCategory::Wall => Some(self.wall_count),
            TileCategory::Food => Some(self.food_count),
            _ => None,
        }
    }

    /// Check the config before any randomness is consumed.
    ///
    /// Checks, in order: grid dimensions, count ranges (walls then food),
    /// and variant sets in emission order. Returns the first problem found.
    pub fn validate(&self) -> Result<(), BoardError> {
        let addressable = i32::try_from(self.grid.columns).is_ok()
            && i32::try_from(self.grid.rows).is_ok();
        if self.grid.is_degenerate() || !addressable {
            return Err(BoardError::InvalidGridSize {
                columns: self.grid.columns,
                rows: self.grid.rows,
            });
        }

        for category in [TileCategory::Wall, TileCategory::Food] {
            if let Some(range) = self.count_range(category) {
                if !range.is_valid() {
                    return Err(BoardError::InvalidCountRange {
                        category,
                        minimum: range.minimum,
                        maximum: range.maximum,
                    });
                }
            }
        }

        for category in TileCategory::ALL {
            if let Some(tiles) = self.variants(category) {
                if tiles.is_empty() {
                    return Err(BoardError::EmptyVariantSet { category });
                }
            }
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}
