//! Board generation bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::{BoardGenerator, PlacementPlan};
use crate::core::{BoardConfig, BoardRng, CountRange, TileCategory, TileId, VariantSet};

fn parse_category(name: &str) -> PyResult<TileCategory> {
    TileCategory::ALL
        .into_iter()
        .find(|c| c.name().replace(' ', "_") == name)
        .ok_or_else(|| PyValueError::new_err(format!("unknown tile category '{name}'")))
}

fn variants(tiles: Option<Vec<u16>>, fallback: &VariantSet) -> VariantSet {
    match tiles {
        Some(ids) => ids.into_iter().map(TileId::new).collect(),
        None => fallback.clone(),
    }
}

/// Python wrapper for BoardConfig.
///
/// Any argument left out takes its value from the classic 8x8 layout.
#[pyclass(name = "BoardConfig")]
#[derive(Clone, Debug)]
pub struct PyBoardConfig(pub BoardConfig);

#[pymethods]
impl PyBoardConfig {
    #[new]
    #[pyo3(signature = (
        columns = 8,
        rows = 8,
        wall_count = (5, 9),
        food_count = (1, 5),
        floor_tiles = None,
        outer_wall_tiles = None,
        wall_tiles = None,
        food_tiles = None,
        enemy_tiles = None,
        exit = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        columns: u32,
        rows: u32,
        wall_count: (u32, u32),
        food_count: (u32, u32),
        floor_tiles: Option<Vec<u16>>,
        outer_wall_tiles: Option<Vec<u16>>,
        wall_tiles: Option<Vec<u16>>,
        food_tiles: Option<Vec<u16>>,
        enemy_tiles: Option<Vec<u16>>,
        exit: Option<u16>,
    ) -> PyResult<Self> {
        let classic = BoardConfig::classic();
        let config = BoardConfig::new(columns, rows)
            .with_wall_count(CountRange::new(wall_count.0, wall_count.1))
            .with_food_count(CountRange::new(food_count.0, food_count.1))
            .with_floor_tiles(variants(floor_tiles, &classic.floor_tiles))
            .with_outer_wall_tiles(variants(outer_wall_tiles, &classic.outer_wall_tiles))
            .with_wall_tiles(variants(wall_tiles, &classic.wall_tiles))
            .with_food_tiles(variants(food_tiles, &classic.food_tiles))
            .with_enemy_tiles(variants(enemy_tiles, &classic.enemy_tiles))
            .with_exit(exit.map_or(classic.exit, TileId::new));

        config.validate()?;
        Ok(Self(config))
    }

    /// The classic 8x8 configuration.
    #[staticmethod]
    fn classic() -> Self {
        Self(BoardConfig::classic())
    }

    #[getter]
    fn columns(&self) -> u32 {
        self.0.grid.columns
    }

    #[getter]
    fn rows(&self) -> u32 {
        self.0.grid.rows
    }

    /// Number of cells available for walls, food, and enemies.
    fn interior_count(&self) -> usize {
        self.0.grid.interior_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardConfig(grid={}, walls={}..={}, food={}..={})",
            self.0.grid,
            self.0.wall_count.minimum,
            self.0.wall_count.maximum,
            self.0.food_count.minimum,
            self.0.food_count.maximum,
        )
    }
}

/// Python wrapper for BoardGenerator.
///
/// Each level draws from its own stream derived from `seed`, so
/// `generate(level)` returns the same board every time it is called.
/// Without a seed one is taken from OS entropy and exposed as `.seed`.
#[pyclass(name = "BoardGenerator")]
pub struct PyBoardGenerator {
    generator: BoardGenerator,
    rng: BoardRng,
}

#[pymethods]
impl PyBoardGenerator {
    #[new]
    #[pyo3(signature = (config, seed = None))]
    fn new(config: &PyBoardConfig, seed: Option<u64>) -> Self {
        Self {
            generator: BoardGenerator::new(config.0.clone()),
            rng: seed.map_or_else(BoardRng::from_entropy, BoardRng::new),
        }
    }

    /// Generate the board for `level` (1-based).
    ///
    /// Raises ValueError for level < 1 or if the placement counts do not
    /// fit the grid.
    fn generate(&self, level: i32) -> PyResult<PyPlacementPlan> {
        let mut rng = self.rng.for_level(level);
        let plan = self.generator.generate(level, &mut rng)?;
        Ok(PyPlacementPlan(plan))
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn __repr__(&self) -> String {
        format!("BoardGenerator(seed={})", self.rng.seed())
    }
}

/// Python wrapper for PlacementPlan.
#[pyclass(name = "PlacementPlan")]
#[derive(Clone)]
pub struct PyPlacementPlan(pub PlacementPlan);

#[pymethods]
impl PyPlacementPlan {
    /// All placements as `(category, tile, x, y)` tuples, in emission order.
    fn placements(&self) -> Vec<(String, u16, i32, i32)> {
        self.0
            .iter()
            .map(|p| {
                (
                    p.category.name().replace(' ', "_"),
                    p.tile.raw(),
                    p.position.x,
                    p.position.y,
                )
            })
            .collect()
    }

    /// Number of placements of a category ("wall", "food", "enemy", ...).
    fn count(&self, category: &str) -> PyResult<usize> {
        Ok(self.0.count(parse_category(category)?))
    }

    /// Exit position as `(x, y)`.
    #[getter]
    fn exit(&self) -> Option<(i32, i32)> {
        self.0.exit().map(|p| (p.position.x, p.position.y))
    }

    #[getter]
    fn level(&self) -> i32 {
        self.0.level()
    }

    /// Top-most category code per cell, shape `(rows + 2, columns + 2)`.
    fn category_grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        PyArray2::from_vec2_bound(py, &self.0.category_grid())
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Pack the plan with bincode.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .0
            .to_bytes()
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Unpack a plan produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        PlacementPlan::from_bytes(bytes)
            .map(Self)
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("PlacementPlan(level={}, {})", self.0.level(), self.0.summary())
    }
}
