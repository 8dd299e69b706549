//! Insertion of the query start and goal into a built roadmap

use log::{debug, warn};

use crate::common::{is_point_free, is_segment_free, CircleObstacle, PlanningError, PlanningResult, Point2D, Segment};
use crate::spatial::KdTree;

use super::config::PrmConfig;
use super::graph::RoadmapGraph;
use super::node::{NodeId, NodeKind};

/// Which way query edges point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// `query -> sample`
    Outgoing,
    /// `sample -> query`
    Incoming,
}

/// Add `start` and `goal` to `graph` and link each to its nearest reachable
/// sample.
///
/// The start only gets an outgoing edge into the roadmap and the goal only an
/// incoming one. A node with no collision-free link stays isolated, which the
/// solver reports as no path.
pub fn add_start_goal(
    graph: &mut RoadmapGraph,
    start: Point2D,
    goal: Point2D,
    obstacles: &[CircleObstacle],
    config: &PrmConfig,
) -> PlanningResult<(NodeId, NodeId)> {
    if !is_point_free(&start, obstacles) {
        return Err(PlanningError::StartInCollision(start));
    }
    if !is_point_free(&goal, obstacles) {
        return Err(PlanningError::GoalInCollision(goal));
    }

    // index only the samples so start and goal never link to each other
    let sample_ids: Vec<NodeId> = graph.samples().map(|n| n.id).collect();
    let sample_tree = KdTree::new(graph.samples().map(|n| n.position).collect());

    let start_id = graph.add_node(NodeKind::Start, start);
    let goal_id = graph.add_node(NodeKind::Goal, goal);

    let max_candidates = config.max_candidates.unwrap_or(usize::MAX);
    for &(query, direction) in &[(start_id, Direction::Outgoing), (goal_id, Direction::Incoming)] {
        let position = graph.node(query).position;
        let mut linked = None;

        for neighbor in sample_tree.query_all(&position).into_iter().take(max_candidates) {
            let sample = sample_ids[neighbor.index];
            let segment = Segment::new(position, graph.node(sample).position);
            if !is_segment_free(&segment, obstacles) {
                continue;
            }
            match direction {
                Direction::Outgoing => graph.add_edge(query, sample),
                Direction::Incoming => graph.add_edge(sample, query),
            };
            linked = Some(sample);
            break;
        }

        match linked {
            Some(sample) => debug!("{:?} {} linked to {}", graph.node(query).kind, query, sample),
            None => warn!(
                "{:?} ({:.3}, {:.3}) has no collision-free link to the roadmap",
                graph.node(query).kind,
                position.x,
                position.y
            ),
        }
    }

    Ok((start_id, goal_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_planning::prm::roadmap::build_roadmap;

    fn corridor() -> (RoadmapGraph, Vec<CircleObstacle>) {
        let samples: Vec<Point2D> = (1..=4).map(|i| Point2D::new(i as f64 * 2.0, 0.0)).collect();
        let config = PrmConfig::new().with_knn(2);
        (build_roadmap(&samples, &[], &config), Vec::new())
    }

    #[test]
    fn test_start_and_goal_edge_directions() {
        let (mut graph, obstacles) = corridor();
        let edges_before = graph.edge_count();
        let (start, goal) = add_start_goal(
            &mut graph,
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            &obstacles,
            &PrmConfig::default(),
        )
        .unwrap();

        assert_eq!(graph.node(start).kind, NodeKind::Start);
        assert_eq!(graph.node(goal).kind, NodeKind::Goal);
        assert_eq!(graph.edge_count(), edges_before + 2);

        assert_eq!(graph.out_degree(start), 1);
        assert_eq!(graph.in_degree(start), 0);
        assert_eq!(graph.edge_cost(start, NodeId(0)), Some(2.0));

        assert_eq!(graph.out_degree(goal), 0);
        assert_eq!(graph.in_degree(goal), 1);
        assert_eq!(graph.edge_cost(NodeId(3), goal), Some(2.0));
    }

    #[test]
    fn test_blocked_nearest_falls_back_to_next() {
        let samples = vec![Point2D::new(4.0, 0.0), Point2D::new(0.0, 5.0)];
        let mut graph = build_roadmap(&samples, &[], &PrmConfig::default());
        let obstacles = vec![CircleObstacle::new(Point2D::new(2.0, 0.0), 1.0)];

        let (start, _) = add_start_goal(
            &mut graph,
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 9.0),
            &obstacles,
            &PrmConfig::default(),
        )
        .unwrap();
        let targets: Vec<NodeId> = graph.neighbors(start).map(|(n, _)| n).collect();
        assert_eq!(targets, vec![NodeId(1)]);
    }

    #[test]
    fn test_candidate_cap_applies_to_start() {
        let samples = vec![Point2D::new(4.0, 0.0), Point2D::new(0.0, 5.0)];
        let config = PrmConfig::new().with_max_candidates(Some(1));
        let mut graph = build_roadmap(&samples, &[], &config);
        let obstacles = vec![CircleObstacle::new(Point2D::new(2.0, 0.0), 1.0)];

        // only the blocked nearest sample may be tried
        let (start, goal) = add_start_goal(
            &mut graph,
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 9.0),
            &obstacles,
            &config,
        )
        .unwrap();
        assert_eq!(graph.out_degree(start), 0);
        assert_eq!(graph.edge_cost(NodeId(1), goal), Some(4.0));
    }

    #[test]
    fn test_unreachable_start_stays_isolated() {
        let samples = vec![Point2D::new(10.0, 0.0)];
        let mut graph = build_roadmap(&samples, &[], &PrmConfig::default());
        let obstacles = vec![CircleObstacle::new(Point2D::new(5.0, 0.0), 2.0)];

        let (start, goal) = add_start_goal(
            &mut graph,
            Point2D::new(0.0, 0.0),
            Point2D::new(12.0, 0.0),
            &obstacles,
            &PrmConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.out_degree(start), 0);
        assert_eq!(graph.in_degree(goal), 1);
    }

    #[test]
    fn test_start_inside_obstacle_is_rejected() {
        let (mut graph, _) = corridor();
        let obstacles = vec![CircleObstacle::new(Point2D::new(0.0, 0.0), 1.0)];
        let result = add_start_goal(
            &mut graph,
            Point2D::new(0.5, 0.0),
            Point2D::new(10.0, 0.0),
            &obstacles,
            &PrmConfig::default(),
        );
        assert!(matches!(result, Err(PlanningError::StartInCollision(_))));

        let result = add_start_goal(
            &mut graph,
            Point2D::new(10.0, 0.0),
            Point2D::new(0.0, 0.5),
            &obstacles,
            &PrmConfig::default(),
        );
        assert!(matches!(result, Err(PlanningError::GoalInCollision(_))));
    }
}
