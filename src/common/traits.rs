//! Common traits defining interfaces for planners

use crate::common::error::PlanningResult;
use crate::common::types::*;

/// Trait for path planning algorithms
pub trait PathPlanner {
    /// Planning result handed to callers (path, roadmap, diagnostics)
    type Output;

    /// Plan a path from start to goal
    fn plan(&mut self, start: Point2D, goal: Point2D) -> PlanningResult<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that traits compile correctly
    struct StraightLinePlanner;

    impl PathPlanner for StraightLinePlanner {
        type Output = Path2D;

        fn plan(&mut self, start: Point2D, goal: Point2D) -> PlanningResult<Path2D> {
            Ok(Path2D::from_points(vec![start, goal]))
        }
    }

    #[test]
    fn test_path_planner_trait() {
        let mut planner = StraightLinePlanner;
        let path = planner.plan(Point2D::origin(), Point2D::new(3.0, 4.0)).unwrap();
        assert!((path.total_length() - 5.0).abs() < 1e-10);
    }
}
