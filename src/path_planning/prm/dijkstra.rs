//! Dijkstra search over the roadmap

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, info};
use ordered_float::OrderedFloat;

use super::graph::RoadmapGraph;
use super::node::{Edge, EdgeId, NodeId};

/// Minimum-cost route between two roadmap nodes
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Sum of the edge costs along the path
    pub cost: f64,
    /// Visited nodes, start first
    pub nodes: Vec<NodeId>,
    /// Traversed edges; `edges[i]` joins `nodes[i]` and `nodes[i + 1]`
    pub edges: Vec<Edge>,
}

/// Run Dijkstra from `start` and extract the route to `goal`.
///
/// Returns `None` when `goal` is unreachable. Nodes of equal tentative cost
/// are finalized in handle order, so repeated runs on the same graph give
/// the same path.
pub fn shortest_path(graph: &RoadmapGraph, start: NodeId, goal: NodeId) -> Option<ShortestPath> {
    let n = graph.node_count();
    let mut cost = vec![f64::INFINITY; n];
    // predecessor recorded as the edge used to reach each node
    let mut via: Vec<Option<EdgeId>> = vec![None; n];
    let mut finalized = vec![false; n];

    let mut open_set = BinaryHeap::new();
    cost[start.index()] = 0.0;
    open_set.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(current_cost), current))) = open_set.pop() {
        if finalized[current.index()] {
            continue;
        }
        finalized[current.index()] = true;

        for (edge_id, edge) in graph.outgoing(current) {
            let tentative = current_cost + edge.cost;
            if tentative < cost[edge.to.index()] {
                cost[edge.to.index()] = tentative;
                via[edge.to.index()] = Some(edge_id);
                open_set.push(Reverse((OrderedFloat(tentative), edge.to)));
            }
        }
    }

    if goal != start && via[goal.index()].is_none() {
        info!("path could not be obtained: {} is unreachable from {}", goal, start);
        return None;
    }

    let mut edges = Vec::new();
    let mut node = goal;
    while node != start {
        // every reached node other than start has a predecessor edge
        let edge = *graph.edge(via[node.index()]?);
        node = edge.from;
        edges.push(edge);
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(start);
    nodes.extend(edges.iter().map(|e| e.to));

    let path = ShortestPath {
        cost: cost[goal.index()],
        nodes,
        edges,
    };
    debug!(
        "dijkstra search completed, shortest path has value {:.3} over {} edges",
        path.cost,
        path.edges.len()
    );
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point2D;
    use crate::path_planning::prm::node::NodeKind;
    use approx::assert_relative_eq;

    /// Two routes from 0 to 3: via 2 costs 7, via 1 costs 5.
    fn two_routes() -> RoadmapGraph {
        let mut graph = RoadmapGraph::from_samples(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 2.5),
            Point2D::new(6.0_f64.sqrt(), 2.5),
            Point2D::new(0.0, 5.0),
        ]);
        graph.add_edge(NodeId(0), NodeId(2));
        graph.add_edge(NodeId(2), NodeId(3));
        graph.add_edge(NodeId(0), NodeId(1));
        graph.add_edge(NodeId(1), NodeId(3));
        graph
    }

    #[test]
    fn test_picks_cheaper_route() {
        let mut graph = RoadmapGraph::from_samples(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(0.0, 3.5),
            Point2D::new(0.0, 5.0),
        ]);
        // 0 -> 1 -> 3 : 5 + sqrt(10)
        graph.add_edge(NodeId(0), NodeId(1));
        graph.add_edge(NodeId(1), NodeId(3));
        // 0 -> 2 -> 3 : 3.5 + 1.5 = 5
        graph.add_edge(NodeId(0), NodeId(2));
        graph.add_edge(NodeId(2), NodeId(3));

        let path = shortest_path(&graph, NodeId(0), NodeId(3)).unwrap();
        assert_relative_eq!(path.cost, 5.0);
        assert_eq!(path.nodes, vec![NodeId(0), NodeId(2), NodeId(3)]);
        assert_eq!(
            path.edges,
            vec![Edge::new(NodeId(0), NodeId(2), 3.5), Edge::new(NodeId(2), NodeId(3), 1.5)]
        );
        let summed: f64 = path.edges.iter().map(|e| e.cost).sum();
        assert_relative_eq!(summed, path.cost);
    }

    #[test]
    fn test_cost_five_beats_cost_seven() {
        let graph = two_routes();
        assert_relative_eq!(
            graph.edge_cost(NodeId(0), NodeId(2)).unwrap() + graph.edge_cost(NodeId(2), NodeId(3)).unwrap(),
            7.0,
            epsilon = 1e-9
        );

        let path = shortest_path(&graph, NodeId(0), NodeId(3)).unwrap();
        assert_relative_eq!(path.cost, 5.0);
        assert_eq!(path.nodes, vec![NodeId(0), NodeId(1), NodeId(3)]);
        assert_eq!(
            path.edges,
            vec![Edge::new(NodeId(0), NodeId(1), 2.5), Edge::new(NodeId(1), NodeId(3), 2.5)]
        );
    }

    #[test]
    fn test_direction_is_respected() {
        let mut graph = RoadmapGraph::from_samples(&[Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)]);
        graph.add_edge(NodeId(1), NodeId(0));
        assert!(shortest_path(&graph, NodeId(0), NodeId(1)).is_none());
        assert!(shortest_path(&graph, NodeId(1), NodeId(0)).is_some());
    }

    #[test]
    fn test_disconnected_graph_has_no_path() {
        let mut graph = two_routes();
        let island = graph.add_node(NodeKind::Goal, Point2D::new(9.0, 9.0));
        assert!(shortest_path(&graph, NodeId(0), island).is_none());
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = two_routes();
        let path = shortest_path(&graph, NodeId(2), NodeId(2)).unwrap();
        assert_eq!(path.cost, 0.0);
        assert_eq!(path.nodes, vec![NodeId(2)]);
        assert!(path.edges.is_empty());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        // a square with two equal-cost routes
        let mut graph = RoadmapGraph::from_samples(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
        ]);
        graph.add_edge(NodeId(0), NodeId(2));
        graph.add_edge(NodeId(0), NodeId(1));
        graph.add_edge(NodeId(2), NodeId(3));
        graph.add_edge(NodeId(1), NodeId(3));

        let first = shortest_path(&graph, NodeId(0), NodeId(3)).unwrap();
        let second = shortest_path(&graph, NodeId(0), NodeId(3)).unwrap();
        assert_eq!(first, second);
        // the lower handle is finalized first and claims the goal
        assert_eq!(first.nodes, vec![NodeId(0), NodeId(1), NodeId(3)]);
    }
}
