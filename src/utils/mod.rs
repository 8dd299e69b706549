//! Utility modules for prm_planner

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
