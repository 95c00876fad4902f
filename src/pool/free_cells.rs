//! Draw-without-replacement over interior cells.
//!
//! `FreeCellPool` is filled once per generation pass and only ever shrinks.
//! It supports:
//! - Deterministic initial order (column-major over the interior)
//! - Uniform random draws that remove the drawn cell
//! - Batch draws that check capacity before touching the pool

use log::trace;

use crate::core::coord::{Coord, GridSize};
use crate::core::error::BoardError;
use crate::core::rng::RandomSource;

/// The interior cells still available for placement.
///
/// ## Usage
///
/// ```
/// use rust_boardgen::core::{BoardRng, GridSize};
/// use rust_boardgen::pool::FreeCellPool;
///
/// let mut rng = BoardRng::new(42);
/// let mut pool = FreeCellPool::for_grid(GridSize::new(8, 8));
/// assert_eq!(pool.len(), 36);
///
/// let cell = pool.draw(&mut rng).unwrap();
/// assert!(!pool.contains(cell));
/// assert_eq!(pool.len(), 35);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FreeCellPool {
    cells: Vec<Coord>,
}

impl FreeCellPool {
    /// Create an empty pool. Call [`initialize`](Self::initialize) before drawing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool already filled for `grid`.
    #[must_use]
    pub fn for_grid(grid: GridSize) -> Self {
        let mut pool = Self::new();
        pool.initialize(grid);
        pool
    }

    /// Discard any previous contents and refill with every interior cell of
    /// `grid`, column by column.
    ///
    /// Afterwards `len() == grid.interior_count()`.
    pub fn initialize(&mut self, grid: GridSize) {
        self.cells.clear();
        self.cells.reserve(grid.interior_count());
        self.cells.extend(grid.interior_coords());
    }

    /// Number of cells still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Is `coord` still available?
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Remaining cells, in pool order.
    #[must_use]
    pub fn remaining(&self) -> &[Coord] {
        &self.cells
    }

    /// Remove and return a uniformly random cell.
    ///
    /// Removal preserves the order of the remaining cells, so a scripted
    /// random source sees a predictable layout.
    pub fn draw<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Coord, BoardError> {
        if self.cells.is_empty() {
            return Err(BoardError::PoolExhausted { requested: 1, available: 0 });
        }

        let index = rng.index(self.cells.len());
        let coord = self.cells.remove(index);
        trace!("drew {coord} at index {index}, {} left", self.cells.len());
        Ok(coord)
    }

    /// Draw `count` cells.
    ///
    /// Fails up front, without drawing anything, if fewer than `count`
    /// cells remain.
    pub fn draw_many<R: RandomSource + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Coord>, BoardError> {
        self.ensure_available(count)?;
        (0..count).map(|_| self.draw(rng)).collect()
    }

    /// Fail with `PoolExhausted` unless at least `count` cells remain.
    pub fn ensure_available(&self, count: usize) -> Result<(), BoardError> {
        if count > self.cells.len() {
            return Err(BoardError::PoolExhausted {
                requested: count,
                available: self.cells.len(),
            });
        }
        Ok(())
    }
}
