//! Python bindings for the board generator.
//!
//! # Quick Start
//!
//! ```python
//! import rust_boardgen as boardgen
//!
//! config = boardgen.BoardConfig(columns=10, rows=8, wall_count=(4, 8))
//! generator = boardgen.BoardGenerator(config, seed=42)
//!
//! plan = generator.generate(level=3)
//! for category, tile, x, y in plan.placements():
//!     spawn(category, tile, x, y)
//!
//! # Dense (rows + 2, columns + 2) array of category codes
//! grid = plan.category_grid()
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::BoardError;

mod py_board;

pub use py_board::*;

impl From<BoardError> for PyErr {
    fn from(err: BoardError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// rust-boardgen: deterministic tile-board generation.
///
/// This module provides:
/// - BoardConfig: grid size, count ranges, tile ids
/// - BoardGenerator: seeded per-level generation
/// - PlacementPlan: the generated board
#[pymodule]
fn rust_boardgen(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardConfig>()?;
    m.add_class::<PyBoardGenerator>()?;
    m.add_class::<PyPlacementPlan>()?;

    Ok(())
}
