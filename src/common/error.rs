//! Error types for prm_planner

use thiserror::Error;

use crate::common::types::Point2D;

/// Main error type for roadmap planning
///
/// An unreachable goal is not an error: it is reported as
/// [`PlanOutcome::NoPath`](crate::path_planning::prm::PlanOutcome::NoPath).
#[derive(Debug, Error)]
pub enum PlanningError {
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Rejection sampling hit its attempt limit
    #[error("Sampling exhausted: {collected} of {requested} samples after {attempts} attempts")]
    SamplingExhausted {
        requested: usize,
        collected: usize,
        attempts: usize,
    },
    /// Start configuration lies inside an obstacle
    #[error("Start ({}, {}) lies inside an obstacle", .0.x, .0.y)]
    StartInCollision(Point2D),
    /// Goal configuration lies inside an obstacle
    #[error("Goal ({}, {}) lies inside an obstacle", .0.x, .0.y)]
    GoalInCollision(Point2D),
    /// Random scenario could not be generated
    #[error("Scenario generation error: {0}")]
    ScenarioGeneration(String),
    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;
