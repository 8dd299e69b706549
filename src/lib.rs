//! prm_planner - Probabilistic Road-Map motion planning in Rust
//!
//! Plans collision-free paths for a point robot on a 2D map with circular
//! obstacles: random free-space sampling, k-nearest roadmap construction,
//! start/goal insertion and Dijkstra search.

// Core modules
pub mod common;
pub mod spatial;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Path2D, Segment, CircleObstacle, MapBounds};
pub use common::PathPlanner;
pub use common::{PlanningError, PlanningResult};
pub use path_planning::prm::{PrmConfig, PrmPlanner, PlanOutcome, PlanReport, Trajectory};
