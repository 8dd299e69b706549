//! Planned trajectories and query outcomes

use itertools::Itertools;

use crate::common::Path2D;

use super::dijkstra::ShortestPath;
use super::graph::RoadmapGraph;
use super::node::{Edge, Node};

/// One element of a trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrajectoryStep {
    Node(Node),
    Edge(Edge),
}

/// Alternating `[Node, Edge, Node, ..., Node]` route from start to goal
///
/// Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    cost: f64,
    steps: Vec<TrajectoryStep>,
}

impl Trajectory {
    pub fn from_shortest_path(graph: &RoadmapGraph, path: &ShortestPath) -> Self {
        let nodes = path.nodes.iter().map(|&id| TrajectoryStep::Node(*graph.node(id)));
        let edges = path.edges.iter().map(|&e| TrajectoryStep::Edge(e));
        Trajectory {
            cost: path.cost,
            steps: nodes.interleave(edges).collect(),
        }
    }

    /// Total cost (sum of the edge costs)
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn steps(&self) -> &[TrajectoryStep] {
        &self.steps
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.steps.iter().filter_map(|s| match s {
            TrajectoryStep::Node(n) => Some(n),
            TrajectoryStep::Edge(_) => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.steps.iter().filter_map(|s| match s {
            TrajectoryStep::Edge(e) => Some(e),
            TrajectoryStep::Node(_) => None,
        })
    }

    /// Waypoints of the trajectory
    pub fn to_path(&self) -> Path2D {
        Path2D::from_points(self.nodes().map(|n| n.position).collect())
    }
}

/// Result of a planning query
///
/// `NoPath` is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Found(Trajectory),
    NoPath,
}

impl PlanOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            PlanOutcome::Found(t) => Some(t),
            PlanOutcome::NoPath => None,
        }
    }
}

impl From<Option<Trajectory>> for PlanOutcome {
    fn from(trajectory: Option<Trajectory>) -> Self {
        trajectory.map_or(PlanOutcome::NoPath, PlanOutcome::Found)
    }
}
