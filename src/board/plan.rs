//! Placement plans: the generator's output.
//!
//! A plan is an ordered list of [`Placement`]s. Emission order is also
//! stacking order: the floor layer comes first, pool-drawn tiles go on top
//! of it, and the exit is always last. The renderer walks the list once and
//! instantiates each entry; nothing here knows how that happens.
//!
//! Plans are plain data. They can be serialized with serde, or packed with
//! `bincode` via [`PlacementPlan::to_bytes`] for a renderer in another
//! process.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{Coord, GridSize, TileCategory, TileId};

/// One tile to instantiate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub category: TileCategory,
    pub tile: TileId,
    pub position: Coord,
}

impl Placement {
    #[must_use]
    pub const fn new(category: TileCategory, tile: TileId, position: Coord) -> Self {
        Self { category, tile, position }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.category, self.tile, self.position)
    }
}

/// The full board for one level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPlan {
    grid: GridSize,
    level: i32,
    placements: Vec<Placement>,
}

impl PlacementPlan {
    pub(crate) fn with_capacity(grid: GridSize, level: i32, capacity: usize) -> Self {
        Self {
            grid,
            level,
            placements: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Board dimensions this plan was generated for.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Level number this plan was generated for.
    #[must_use]
    pub fn level(&self) -> i32 {
        self.level
    }

    /// All placements in emission order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements of one category, in emission order.
    pub fn of_category(&self, category: TileCategory) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.category == category)
    }

    /// Number of placements of one category.
    #[must_use]
    pub fn count(&self, category: TileCategory) -> usize {
        self.of_category(category).count()
    }

    /// Everything stacked on `coord`, bottom first.
    pub fn at(&self, coord: Coord) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.position == coord)
    }

    /// The last placement emitted at `coord`, which is what ends up on top.
    #[must_use]
    pub fn top_at(&self, coord: Coord) -> Option<&Placement> {
        self.placements.iter().rev().find(|p| p.position == coord)
    }

    /// The exit placement.
    #[must_use]
    pub fn exit(&self) -> Option<&Placement> {
        self.placements
            .iter()
            .rev()
            .find(|p| p.category == TileCategory::Exit)
    }

    /// Cells taken by pool-drawn placements (walls, food, enemies).
    #[must_use]
    pub fn interior_occupied(&self) -> FxHashSet<Coord> {
        self.placements
            .iter()
            .filter(|p| p.category.is_pool_drawn())
            .map(|p| p.position)
            .collect()
    }

    /// Per-category placement counts.
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        let mut counts = FxHashMap::default();
        for placement in &self.placements {
            *counts.entry(placement.category).or_insert(0) += 1;
        }
        PlanSummary { counts }
    }

    /// Dense grid of the top-most category code at each framed cell.
    ///
    /// Indexed `[y + 1][x + 1]`, so the result is `(rows + 2)` rows of
    /// `(columns + 2)` codes. See [`TileCategory::code`].
    #[must_use]
    pub fn category_grid(&self) -> Vec<Vec<u8>> {
        let width = self.grid.columns as usize + 2;
        let height = self.grid.rows as usize + 2;
        let mut grid = vec![vec![TileCategory::Floor.code(); width]; height];

        for placement in &self.placements {
            if !self.grid.in_frame(placement.position) {
                continue;
            }
            let column = (placement.position.x + 1) as usize;
            let row = (placement.position.y + 1) as usize;
            grid[row][column] = placement.category.code();
        }

        grid
    }

    /// Pack the plan with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Unpack a plan produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl<'a> IntoIterator for &'a PlacementPlan {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

/// Placement counts by category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanSummary {
    counts: FxHashMap<TileCategory, usize>,
}

impl PlanSummary {
    /// Count for one category; zero if none were placed.
    #[must_use]
    pub fn get(&self, category: TileCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Total number of placements.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for category in TileCategory::ALL {
            let count = self.get(category);
            if count == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{category}: {count}")?;
            first = false;
        }
        Ok(())
    }
}
