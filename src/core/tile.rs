//! Tile identities, categories, and count ranges.
//!
//! The generator never interprets a [`TileId`]. It is an opaque handle that
//! the rendering side maps to a prefab, sprite, or whatever it draws.
//! Each [`TileCategory`] has a [`VariantSet`] of such ids; every placement
//! picks one of them uniformly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::RandomSource;

/// Opaque tile variant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// The layer a placement belongs to.
///
/// Declaration order is also emission order within a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCategory {
    Floor,
    OuterWall,
    Wall,
    Food,
    Enemy,
    Exit,
}

impl TileCategory {
    /// All categories in emission order.
    pub const ALL: [TileCategory; 6] = [
        TileCategory::Floor,
        TileCategory::OuterWall,
        TileCategory::Wall,
        TileCategory::Food,
        TileCategory::Enemy,
        TileCategory::Exit,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileCategory::Floor => "floor",
            TileCategory::OuterWall => "outer wall",
            TileCategory::Wall => "wall",
            TileCategory::Food => "food",
            TileCategory::Enemy => "enemy",
            TileCategory::Exit => "exit",
        }
    }

    /// Small integer code, stable across releases. Used for dense grids.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            TileCategory::Floor => 0,
            TileCategory::OuterWall => 1,
            TileCategory::Wall => 2,
            TileCategory::Food => 3,
            TileCategory::Enemy => 4,
            TileCategory::Exit => 5,
        }
    }

    /// Is this category placed through the free-cell pool?
    #[must_use]
    pub const fn is_pool_drawn(self) -> bool {
        matches!(self, TileCategory::Wall | TileCategory::Food | TileCategory::Enemy)
    }
}

impl std::fmt::Display for TileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive bounds for a random count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountRange {
    pub minimum: u32,
    pub maximum: u32,
}

impl CountRange {
    #[must_use]
    pub const fn new(minimum: u32, maximum: u32) -> Self {
        Self { minimum, maximum }
    }

    /// A range that always yields `count`.
    #[must_use]
    pub const fn exactly(count: u32) -> Self {
        Self::new(count, count)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.minimum <= self.maximum
    }

    #[must_use]
    pub const fn contains(self, count: u32) -> bool {
        self.minimum <= count && count <= self.maximum
    }

    /// Draw a count uniformly from `[minimum, maximum]`.
    ///
    /// The range must be valid.
    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> u32 {
        debug_assert!(self.is_valid());
        rng.range_inclusive(self.minimum, self.maximum)
    }
}

/// The variants a category can be drawn from.
///
/// Most categories have a handful of variants, so they stay inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSet(SmallVec<[TileId; 8]>);

impl VariantSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` consecutive ids starting at `first`.
    #[must_use]
    pub fn sequential(first: u16, count: u16) -> Self {
        (first..first + count).map(TileId).collect()
    }

    #[must_use]
    pub fn with(mut self, tile: TileId) -> Self {
        self.0.push(tile);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.0.contains(&tile)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TileId] {
        &self.0
    }

    /// Pick one variant uniformly. `None` if the set is empty.
    pub fn pick<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<TileId> {
        RandomSource::choose(&mut &mut *rng, self.0.as_slice()).copied()
    }
}

impl FromIterator<TileId> for VariantSet {
    fn from_iter<I: IntoIterator<Item = TileId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[TileId]> for VariantSet {
    fn from(tiles: &[TileId]) -> Self {
        Self(SmallVec::from_slice(tiles))
    }
}

impl From<Vec<TileId>> for VariantSet {
    fn from(tiles: Vec<TileId>) -> Self {
        Self(SmallVec::from_vec(tiles))
    }
}
