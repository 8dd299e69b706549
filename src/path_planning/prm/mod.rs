//! Probabilistic Road-Map (PRM) path planning
//!
//! The pipeline runs in four stages, each usable on its own:
//! 1. [`sample_points`] draws collision-free configurations,
//! 2. [`build_roadmap`] links every sample to its nearest visible neighbors,
//! 3. [`add_start_goal`] hooks the query endpoints into the roadmap,
//! 4. [`shortest_path`] runs Dijkstra from start to goal.
//!
//! [`PrmPlanner`] owns the obstacles, tunables and RNG and chains the stages.

pub mod config;
pub mod dijkstra;
pub mod graph;
pub mod node;
pub mod roadmap;
pub mod sampler;
pub mod scenario;
pub mod start_goal;
pub mod trajectory;

pub use config::PrmConfig;
pub use dijkstra::{shortest_path, ShortestPath};
pub use graph::RoadmapGraph;
pub use node::{Edge, EdgeId, Node, NodeId, NodeKind};
pub use roadmap::build_roadmap;
pub use sampler::{sample_points, FreeSpaceChecker};
pub use scenario::Scenario;
pub use start_goal::add_start_goal;
pub use trajectory::{PlanOutcome, Trajectory, TrajectoryStep};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::{CircleObstacle, MapBounds, PathPlanner, PlanningResult, Point2D};

/// Everything a query produced, for reporting and rendering
#[derive(Debug, Clone)]
pub struct PlanReport {
    /// Roadmap augmented with the start and goal nodes
    pub roadmap: RoadmapGraph,
    pub start: NodeId,
    pub goal: NodeId,
    pub outcome: PlanOutcome,
}

/// PRM Planner
pub struct PrmPlanner {
    config: PrmConfig,
    bounds: MapBounds,
    obstacles: Vec<CircleObstacle>,
    rng: StdRng,
}

impl PrmPlanner {
    /// Create a new PRM planner
    pub fn new(bounds: MapBounds, obstacles: Vec<CircleObstacle>, config: PrmConfig) -> PlanningResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(PrmPlanner {
            config,
            bounds,
            obstacles,
            rng,
        })
    }

    pub fn config(&self) -> &PrmConfig {
        &self.config
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn obstacles(&self) -> &[CircleObstacle] {
        &self.obstacles
    }

    /// Draw a fresh set of collision-free samples
    pub fn sample(&mut self) -> PlanningResult<Vec<Point2D>> {
        sample_points(&mut self.rng, &self.bounds, &self.obstacles, &self.config)
    }

    /// Sample and connect a new roadmap
    pub fn build_roadmap(&mut self) -> PlanningResult<RoadmapGraph> {
        info!(
            "building roadmap: {} samples, n_knn = {}, {} obstacles",
            self.config.n_samples,
            self.config.n_knn,
            self.obstacles.len()
        );
        let samples = self.sample()?;
        Ok(build_roadmap(&samples, &self.obstacles, &self.config))
    }

    /// Add start and goal to `roadmap` and search it
    pub fn solve(&self, mut roadmap: RoadmapGraph, start: Point2D, goal: Point2D) -> PlanningResult<PlanReport> {
        let (start_id, goal_id) = add_start_goal(&mut roadmap, start, goal, &self.obstacles, &self.config)?;

        info!(
            "running dijkstra on the roadmap with {} nodes and {} edges",
            roadmap.node_count(),
            roadmap.edge_count()
        );
        let outcome: PlanOutcome = shortest_path(&roadmap, start_id, goal_id)
            .map(|path| Trajectory::from_shortest_path(&roadmap, &path))
            .into();

        match &outcome {
            PlanOutcome::Found(t) => info!("path found: cost {:.3}, {} waypoints", t.cost(), t.nodes().count()),
            PlanOutcome::NoPath => warn!("no path found between start and goal"),
        }

        Ok(PlanReport {
            roadmap,
            start: start_id,
            goal: goal_id,
            outcome,
        })
    }
}

impl PathPlanner for PrmPlanner {
    type Output = PlanReport;

    fn plan(&mut self, start: Point2D, goal: Point2D) -> PlanningResult<PlanReport> {
        let roadmap = self.build_roadmap()?;
        self.solve(roadmap, start, goal)
    }
}
