//! Board generator integration tests.
//!
//! Most tests use a scripted random source so every draw is known in
//! advance; the rest use seeded `BoardRng`s.

use std::collections::VecDeque;

use rust_boardgen::board::{generate, BoardGenerator, Placement, PlacementPlan};
use rust_boardgen::core::{
    BoardConfig, BoardError, BoardRng, Coord, CountRange, GridSize, RandomSource, TileCategory,
    TileId, VariantSet,
};
use rust_boardgen::pool::FreeCellPool;
use rustc_hash::FxHashSet;

/// Random source that replays a fixed script, then returns zeros.
#[derive(Default)]
struct ScriptedRng {
    script: VecDeque<usize>,
    calls: usize,
}

impl ScriptedRng {
    fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    fn next(&mut self) -> usize {
        self.calls += 1;
        self.script.pop_front().unwrap_or(0)
    }
}

impl RandomSource for ScriptedRng {
    fn index(&mut self, len: usize) -> usize {
        self.next() % len
    }

    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        min + (self.next() as u32) % (max - min + 1)
    }
}

/// 4x4 board with one variant per category except floor and outer wall.
fn tiny_config() -> BoardConfig {
    BoardConfig::new(4, 4)
        .with_wall_count(CountRange::exactly(1))
        .with_food_count(CountRange::exactly(0))
        .with_floor_tiles(VariantSet::sequential(0, 2))
        .with_outer_wall_tiles(VariantSet::sequential(2, 2))
        .with_wall_tiles(VariantSet::sequential(4, 1))
        .with_food_tiles(VariantSet::sequential(5, 1))
        .with_enemy_tiles(VariantSet::sequential(6, 1))
        .with_exit(TileId::new(7))
}

fn floor_layer(plan: &PlacementPlan) -> Vec<Placement> {
    plan.iter()
        .filter(|p| matches!(p.category, TileCategory::Floor | TileCategory::OuterWall))
        .copied()
        .collect()
}

// =============================================================================
// Floor Pass Tests
// =============================================================================

#[test]
fn test_floor_layer_covers_frame_once() {
    let config = BoardConfig::classic().with_grid(GridSize::new(9, 6));
    let plan = generate(1, &config, &mut BoardRng::new(3)).unwrap();

    let layer = floor_layer(&plan);
    assert_eq!(layer.len(), 11 * 8);

    let unique: FxHashSet<_> = layer.iter().map(|p| p.position).collect();
    assert_eq!(unique.len(), layer.len());
    assert!(layer.iter().all(|p| config.grid.in_frame(p.position)));
}

#[test]
fn test_floor_layer_variants_match_ring() {
    let config = BoardConfig::classic();
    let plan = generate(4, &config, &mut BoardRng::new(17)).unwrap();

    for placement in floor_layer(&plan) {
        if config.grid.is_outer_wall(placement.position) {
            assert_eq!(placement.category, TileCategory::OuterWall);
            assert!(config.outer_wall_tiles.contains(placement.tile));
        } else {
            assert_eq!(placement.category, TileCategory::Floor);
            assert!(config.floor_tiles.contains(placement.tile));
        }
    }
}

#[test]
fn test_floor_layer_comes_first() {
    let plan = generate(1, &BoardConfig::classic(), &mut BoardRng::new(8)).unwrap();
    let framed = plan.grid().framed_count();

    assert!(plan.placements()[..framed]
        .iter()
        .all(|p| !p.category.is_pool_drawn()));
    assert!(plan.placements()[framed..]
        .iter()
        .all(|p| p.category != TileCategory::Floor && p.category != TileCategory::OuterWall));
}

#[test]
fn test_floor_draw_then_outer_wall_draw() {
    // First frame cell (-1, -1) is on the ring: floor draw, then outer wall draw.
    let mut rng = ScriptedRng::new([1, 1]);
    let plan = generate(1, &tiny_config(), &mut rng).unwrap();

    let first = plan.placements()[0];
    assert_eq!(first.position, Coord::new(-1, -1));
    assert_eq!(first.category, TileCategory::OuterWall);
    assert_eq!(first.tile, TileId::new(3));
}

// =============================================================================
// Scripted Placement Tests
// =============================================================================

#[test]
fn test_all_zero_script() {
    let mut rng = ScriptedRng::default();
    let plan = generate(2, &tiny_config(), &mut rng).unwrap();

    let walls: Vec<_> = plan.of_category(TileCategory::Wall).collect();
    assert_eq!(walls.len(), 1);
    assert_eq!(walls[0].position, Coord::new(1, 1));
    assert_eq!(walls[0].tile, TileId::new(4));

    // Level 2 has one enemy; index 0 of the remaining pool is (1, 2)
    let enemies: Vec<_> = plan.of_category(TileCategory::Enemy).collect();
    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].position, Coord::new(1, 2));

    assert_eq!(plan.count(TileCategory::Food), 0);
    assert_eq!(plan.exit().unwrap().position, Coord::new(3, 3));
    assert_eq!(plan.exit().unwrap().tile, TileId::new(7));
}

#[test]
fn test_scripted_positions() {
    // 6x6 frame: 36 floor draws plus 20 outer wall draws
    let mut script = vec![0; 56];
    script.extend([
        0, // wall count
        3, // wall position: pool [(1,1), (1,2), (2,1), (2,2)] -> (2,2)
        0, // wall variant
        0, // food count
        0, // enemy count
        1, // enemy position: pool [(1,1), (1,2), (2,1)] -> (1,2)
        0, // enemy variant
    ]);
    let mut rng = ScriptedRng::new(script);
    let plan = generate(3, &tiny_config(), &mut rng).unwrap();

    let wall = plan.of_category(TileCategory::Wall).next().unwrap();
    assert_eq!(wall.position, Coord::new(2, 2));
    let enemy = plan.of_category(TileCategory::Enemy).next().unwrap();
    assert_eq!(enemy.position, Coord::new(1, 2));
    assert_eq!(rng.calls, 63);
}

#[test]
fn test_count_bounds_are_inclusive() {
    let config = tiny_config().with_wall_count(CountRange::new(0, 2));

    // First value after the floor pass picks the wall count
    let mut low = vec![0; 56];
    low.push(0);
    let plan = generate(1, &config, &mut ScriptedRng::new(low)).unwrap();
    assert_eq!(plan.count(TileCategory::Wall), 0);

    let mut high = vec![0; 56];
    high.push(2);
    let plan = generate(1, &config, &mut ScriptedRng::new(high)).unwrap();
    assert_eq!(plan.count(TileCategory::Wall), 2);
}

// =============================================================================
// Enemy Count Tests
// =============================================================================

#[test]
fn test_enemies_by_level() {
    let generator = BoardGenerator::new(BoardConfig::classic());
    let expected = [(1, 0), (2, 1), (3, 1), (4, 2), (7, 2), (8, 3), (16, 4), (31, 4)];

    for (level, enemies) in expected {
        let plan = generator.generate(level, &mut BoardRng::new(level as u64)).unwrap();
        assert_eq!(plan.count(TileCategory::Enemy), enemies, "level {}", level);
        assert!(plan
            .of_category(TileCategory::Enemy)
            .all(|p| generator.config().enemy_tiles.contains(p.tile)));
    }
}

// =============================================================================
// Collision and Exit Tests
// =============================================================================

#[test]
fn test_pool_drawn_cells_are_unique_and_interior() {
    let config = BoardConfig::classic()
        .with_wall_count(CountRange::new(10, 20))
        .with_food_count(CountRange::new(5, 8));
    let generator = BoardGenerator::new(config);

    for seed in 0..50 {
        let plan = generator.generate(16, &mut BoardRng::new(seed)).unwrap();
        let drawn: Vec<_> = plan.iter().filter(|p| p.category.is_pool_drawn()).collect();
        let unique: FxHashSet<_> = drawn.iter().map(|p| p.position).collect();

        assert_eq!(unique.len(), drawn.len(), "seed {}", seed);
        assert!(drawn.iter().all(|p| plan.grid().is_interior(p.position)));
    }
}

#[test]
fn test_exit_is_fixed() {
    let generator = BoardGenerator::new(BoardConfig::classic().with_grid(GridSize::new(12, 7)));

    for seed in 0..10 {
        let plan = generator.generate(5, &mut BoardRng::new(seed)).unwrap();
        let exit = plan.exit().unwrap();
        assert_eq!(exit.position, Coord::new(11, 6));
        assert_eq!(plan.placements().last(), Some(exit));
    }
}

#[test]
fn test_exit_stacks_on_occupied_cell() {
    // On a 3x3 board the exit cell (2, 2) already holds a floor tile
    let config = tiny_config().with_grid(GridSize::new(3, 3));
    let plan = generate(1, &config, &mut BoardRng::new(1)).unwrap();

    let stacked: Vec<_> = plan.at(Coord::new(2, 2)).map(|p| p.category).collect();
    assert_eq!(stacked, vec![TileCategory::Floor, TileCategory::Exit]);
    assert_eq!(plan.top_at(Coord::new(2, 2)).unwrap().category, TileCategory::Exit);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_level_zero_rejected() {
    let result = generate(0, &BoardConfig::classic(), &mut BoardRng::new(1));
    assert_eq!(result, Err(BoardError::InvalidLevel { level: 0 }));
}

#[test]
fn test_wall_minimum_above_pool() {
    let config = BoardConfig::classic().with_wall_count(CountRange::new(40, 50));
    let result = generate(1, &config, &mut BoardRng::new(1));
    assert!(matches!(
        result,
        Err(BoardError::PoolExhausted { available: 36, requested }) if requested >= 40
    ));
}

#[test]
fn test_enemies_starved_by_earlier_passes() {
    let config = BoardConfig::classic()
        .with_wall_count(CountRange::exactly(30))
        .with_food_count(CountRange::exactly(5));
    let generator = BoardGenerator::new(config);

    // One cell left: level 2 (one enemy) fits, level 4 (two) does not
    assert!(generator.generate(2, &mut BoardRng::new(1)).is_ok());
    assert_eq!(
        generator.generate(4, &mut BoardRng::new(1)),
        Err(BoardError::PoolExhausted { requested: 2, available: 1 })
    );
}

#[test]
fn test_empty_floor_tiles() {
    let config = BoardConfig::classic().with_floor_tiles(VariantSet::new());
    assert_eq!(
        generate(1, &config, &mut BoardRng::new(1)),
        Err(BoardError::EmptyVariantSet { category: TileCategory::Floor })
    );
}

#[test]
fn test_zero_grid_rejected() {
    let config = BoardConfig::classic().with_grid(GridSize::new(8, 0));
    assert_eq!(
        generate(1, &config, &mut BoardRng::new(1)),
        Err(BoardError::InvalidGridSize { columns: 8, rows: 0 })
    );
}

// =============================================================================
// Pool Tests
// =============================================================================

#[test]
fn test_pool_scripted_draws_preserve_order() {
    let mut pool = FreeCellPool::for_grid(GridSize::new(4, 4));
    let mut rng = ScriptedRng::new([1, 1, 0, 0]);

    assert_eq!(pool.draw(&mut rng), Ok(Coord::new(1, 2)));
    assert_eq!(pool.draw(&mut rng), Ok(Coord::new(2, 1)));
    assert_eq!(pool.draw(&mut rng), Ok(Coord::new(1, 1)));
    assert_eq!(pool.draw(&mut rng), Ok(Coord::new(2, 2)));
    assert_eq!(
        pool.draw(&mut rng),
        Err(BoardError::PoolExhausted { requested: 1, available: 0 })
    );
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_per_level_streams_are_replayable() {
    let generator = BoardGenerator::new(BoardConfig::classic());
    let base = BoardRng::new(2024);

    let first: Vec<_> = (1..=5)
        .map(|level| generator.generate(level, &mut base.for_level(level)).unwrap())
        .collect();

    // Replaying only level 4 reproduces it exactly
    let replay = generator.generate(4, &mut base.for_level(4)).unwrap();
    assert_eq!(replay, first[3]);
}

#[test]
fn test_checkpoint_reproduces_next_board() {
    let generator = BoardGenerator::new(BoardConfig::classic());
    let mut rng = BoardRng::new(77);
    generator.generate(1, &mut rng).unwrap();

    let checkpoint = rng.state();
    let expected = generator.generate(2, &mut rng).unwrap();

    let mut restored = BoardRng::from_state(&checkpoint);
    assert_eq!(generator.generate(2, &mut restored).unwrap(), expected);
}

#[test]
fn test_plan_bytes_round_trip() {
    let plan = generate(8, &BoardConfig::classic(), &mut BoardRng::new(5)).unwrap();
    let bytes = plan.to_bytes().unwrap();
    assert_eq!(PlacementPlan::from_bytes(&bytes).unwrap(), plan);
}

#[test]
fn test_plan_json_round_trip() {
    let plan = generate(3, &BoardConfig::classic(), &mut BoardRng::new(5)).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let back: PlacementPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_dyn_random_source() {
    let mut rng = BoardRng::new(12);
    let source: &mut dyn RandomSource = &mut rng;
    let plan = generate(2, &BoardConfig::classic(), source).unwrap();
    assert_eq!(plan.count(TileCategory::Enemy), 1);
}
