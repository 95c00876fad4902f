//! Board generation and its output.
//!
//! ## Key Types
//!
//! - `BoardGenerator`: runs the floor, wall, food, enemy, and exit passes
//! - `PlacementPlan`: ordered list of `Placement`s for the renderer
//! - `PlanSummary`: per-category counts of a plan
//!
//! ## Example Usage
//!
//! ```
//! use rust_boardgen::board::generate;
//! use rust_boardgen::core::{BoardConfig, BoardRng, TileCategory};
//!
//! let config = BoardConfig::classic();
//! let seed = BoardRng::new(2024);
//!
//! for level in 1..=4 {
//!     let plan = generate(level, &config, &mut seed.for_level(level)).unwrap();
//!     for placement in &plan {
//!         // hand `placement` to the renderer
//!         let _ = placement;
//!     }
//!     assert_eq!(plan.count(TileCategory::Exit), 1);
//! }
//! ```

pub mod plan;
pub mod generator;

pub use plan::{Placement, PlacementPlan, PlanSummary};
pub use generator::{enemy_count, generate, BoardGenerator};
