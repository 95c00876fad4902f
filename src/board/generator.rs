//! Board generation.
//!
//! One `generate` call runs these passes in order:
//!
//! 1. **Floor**: every cell of `[-1, columns] × [-1, rows]` gets a floor
//!    variant, or an outer wall variant on the surrounding ring. This pass
//!    does not touch the free-cell pool.
//! 2. **Walls** and then **food**: a count is drawn from the configured
//!    range, and that many cells are drawn from the pool.
//! 3. **Enemies**: `floor(log2(level))` cells from the pool. The count is
//!    fed through the same range draw with `minimum == maximum`, so it is
//!    fixed while positions and variants stay random.
//! 4. **Exit**: always at `(columns - 1, rows - 1)`. Not drawn from the
//!    pool and not checked against earlier placements; it is stacked on
//!    whatever the floor pass put there.
//!
//! Passes run in that fixed order, so a generous wall range can starve the
//! food or enemy passes. That surfaces as [`BoardError::PoolExhausted`]
//! rather than a silently smaller board.

use log::{debug, trace};

use crate::core::{BoardConfig, BoardError, CountRange, RandomSource, TileCategory, TileId};
use crate::pool::FreeCellPool;

use super::plan::{Placement, PlacementPlan};

/// Number of enemies on a level: `floor(log2(level))`.
///
/// Levels below 1 have no enemies; [`BoardGenerator::generate`] rejects
/// them before this is consulted.
///
/// ```
/// use rust_boardgen::board::enemy_count;
///
/// assert_eq!(enemy_count(1), 0);
/// assert_eq!(enemy_count(2), 1);
/// assert_eq!(enemy_count(7), 2);
/// assert_eq!(enemy_count(8), 3);
/// ```
#[must_use]
pub fn enemy_count(level: i32) -> u32 {
    if level < 1 {
        return 0;
    }
    (level as u32).ilog2()
}

/// Produces placement plans from a fixed configuration.
///
/// The generator holds only configuration. Each call to
/// [`generate`](Self::generate) builds its own free-cell pool, so one
/// generator can serve any number of levels, and independent generators
/// (or clones) can run on separate threads with separate random sources.
///
/// ## Usage
///
/// ```
/// use rust_boardgen::board::BoardGenerator;
/// use rust_boardgen::core::{BoardConfig, BoardRng, Coord, TileCategory};
///
/// let generator = BoardGenerator::new(BoardConfig::classic());
/// let mut rng = BoardRng::new(42);
///
/// let plan = generator.generate(8, &mut rng).unwrap();
/// assert_eq!(plan.count(TileCategory::Enemy), 3);
/// assert_eq!(plan.exit().unwrap().position, Coord::new(7, 7));
/// ```
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: BoardConfig,
}

impl BoardGenerator {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Generate the board for `level`.
    ///
    /// Fails with `InvalidLevel` for `level < 1`, with the config's
    /// validation error if the config is unusable, or with `PoolExhausted`
    /// if a placement pass asks for more cells than remain. No randomness
    /// is consumed before the level and config are checked.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        level: i32,
        rng: &mut R,
    ) -> Result<PlacementPlan, BoardError> {
        if level < 1 {
            return Err(BoardError::InvalidLevel { level });
        }
        self.config.validate()?;

        let grid = self.config.grid;
        let enemies = enemy_count(level);
        // Pool-drawn entries can never outnumber the interior
        let drawn = (self.config.wall_count.maximum as usize)
            .saturating_add(self.config.food_count.maximum as usize)
            .saturating_add(enemies as usize)
            .min(grid.interior_count());
        let capacity = grid.framed_count() + drawn + 1;
        let mut plan = PlacementPlan::with_capacity(grid, level, capacity);

        debug!("generating level {level} on {grid}");
        self.lay_floor(&mut plan, rng)?;

        let mut pool = FreeCellPool::for_grid(grid);
        self.scatter(&mut plan, &mut pool, TileCategory::Wall, self.config.wall_count, rng)?;
        self.scatter(&mut plan, &mut pool, TileCategory::Food, self.config.food_count, rng)?;
        self.scatter(
            &mut plan,
            &mut pool,
            TileCategory::Enemy,
            CountRange::exactly(enemies),
            rng,
        )?;

        plan.push(Placement::new(
            TileCategory::Exit,
            self.config.exit,
            grid.exit_coord(),
        ));

        debug!("level {level} done: {}", plan.summary());
        Ok(plan)
    }

    /// Floor and outer wall layer over the framed rectangle.
    ///
    /// A floor variant is drawn for every cell, then replaced by an outer
    /// wall variant on the ring.
    fn lay_floor<R: RandomSource + ?Sized>(
        &self,
        plan: &mut PlacementPlan,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let grid = self.config.grid;

        for position in grid.framed_coords() {
            let mut category = TileCategory::Floor;
            let mut tile = self.pick(category, rng)?;

            if grid.is_outer_wall(position) {
                category = TileCategory::OuterWall;
                tile = self.pick(category, rng)?;
            }

            plan.push(Placement::new(category, tile, position));
        }

        debug!("laid {} floor cells", grid.framed_count());
        Ok(())
    }

    /// Draw a count from `range`, then place that many tiles of `category`
    /// on cells taken from `pool`.
    fn scatter<R: RandomSource + ?Sized>(
        &self,
        plan: &mut PlacementPlan,
        pool: &mut FreeCellPool,
        category: TileCategory,
        range: CountRange,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        let count = range.sample(rng) as usize;
        pool.ensure_available(count)?;

        for _ in 0..count {
            let position = pool.draw(rng)?;
            let tile = self.pick(category, rng)?;
            trace!("{category} {tile} at {position}");
            plan.push(Placement::new(category, tile, position));
        }

        debug!("placed {count} {category}, {} cells free", pool.len());
        Ok(())
    }

    fn pick<R: RandomSource + ?Sized>(
        &self,
        category: TileCategory,
        rng: &mut R,
    ) -> Result<TileId, BoardError> {
        self.config
            .variants(category)
            .and_then(|tiles| tiles.pick(rng))
            .ok_or(BoardError::EmptyVariantSet { category })
    }
}

/// Generate one board with `config`. Shorthand for
/// `BoardGenerator::new(config.clone()).generate(level, rng)`.
pub fn generate<R: RandomSource + ?Sized>(
    level: i32,
    config: &BoardConfig,
    rng: &mut R,
) -> Result<PlacementPlan, BoardError> {
    BoardGenerator::new(config.clone()).generate(level, rng)
}
