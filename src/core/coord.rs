//! Grid geometry: board dimensions and cell coordinates.
//!
//! ## Layout
//!
//! A board of `columns × rows` cells is addressed with `x` in `0..columns`
//! and `y` in `0..rows`. Generation also uses a one-cell ring *outside*
//! that rectangle (`x == -1`, `x == columns`, `y == -1`, `y == rows`) for
//! the outer walls, so coordinates are signed.
//!
//! The outermost ring *inside* the board (`x == 0`, `y == 0`,
//! `x == columns - 1`, `y == rows - 1`) is never handed out for random
//! placement; only interior cells are.
//!
//! ```
//! use rust_boardgen::core::{Coord, GridSize};
//!
//! let grid = GridSize::new(8, 8);
//! assert!(grid.is_interior(Coord::new(1, 1)));
//! assert!(!grid.is_interior(Coord::new(0, 3)));
//! assert!(grid.is_outer_wall(Coord::new(-1, 3)));
//! assert_eq!(grid.interior_count(), 36);
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Board dimensions in cells.
///
/// Both dimensions must be positive for generation; see
/// [`BoardConfig::validate`](crate::core::BoardConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// True when either dimension is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Number of interior cells: `(columns - 2) * (rows - 2)`, or zero
    /// when the board is too small to have an interior.
    #[must_use]
    pub const fn interior_count(self) -> usize {
        let inner_columns = self.columns.saturating_sub(2) as usize;
        let inner_rows = self.rows.saturating_sub(2) as usize;
        inner_columns * inner_rows
    }

    /// Number of cells covered by the floor pass, including the outer wall ring.
    #[must_use]
    pub const fn framed_count(self) -> usize {
        (self.columns as usize + 2) * (self.rows as usize + 2)
    }

    /// Is `coord` eligible for random placement?
    #[must_use]
    pub fn is_interior(self, coord: Coord) -> bool {
        let max_x = self.columns as i64 - 2;
        let max_y = self.rows as i64 - 2;
        (1..=max_x).contains(&i64::from(coord.x)) && (1..=max_y).contains(&i64::from(coord.y))
    }

    /// Does `coord` lie on the outer wall ring surrounding the board?
    #[must_use]
    pub fn is_outer_wall(self, coord: Coord) -> bool {
        if !self.in_frame(coord) {
            return false;
        }
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        x == -1 || y == -1 || x == i64::from(self.columns) || y == i64::from(self.rows)
    }

    /// Is `coord` inside `[-1, columns] × [-1, rows]`?
    #[must_use]
    pub fn in_frame(self, coord: Coord) -> bool {
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        (-1..=i64::from(self.columns)).contains(&x) && (-1..=i64::from(self.rows)).contains(&y)
    }

    /// The top-right board cell, where the exit goes.
    #[must_use]
    pub const fn exit_coord(self) -> Coord {
        Coord::new(self.columns as i32 - 1, self.rows as i32 - 1)
    }

    /// Iterate the framed rectangle column by column (`x` outer, `y` inner).
    pub fn framed_coords(self) -> impl Iterator<Item = Coord> {
        let columns = self.columns as i32;
        let rows = self.rows as i32;
        (-1..=columns).flat_map(move |x| (-1..=rows).map(move |y| Coord::new(x, y)))
    }

    /// Iterate interior cells column by column (`x` outer, `y` inner).
    pub fn interior_coords(self) -> impl Iterator<Item = Coord> {
        let columns = self.columns as i32;
        let rows = self.rows as i32;
        (1..columns - 1).flat_map(move |x| (1..rows - 1).map(move |y| Coord::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
