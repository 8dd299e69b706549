//! Common types, traits, geometry and error definitions for prm_planner
//!
//! This module provides the foundational building blocks used by the
//! spatial index and the roadmap planner.

pub mod types;
pub mod traits;
pub mod error;
pub mod geometry;

pub use types::*;
pub use traits::*;
pub use error::*;
pub use geometry::*;
