//! Roadmap construction over the sample set

use log::{debug, trace};

use crate::common::{is_segment_free, CircleObstacle, Point2D, Segment};
use crate::spatial::KdTree;

use super::config::PrmConfig;
use super::graph::RoadmapGraph;
use super::node::NodeId;

/// Build a roadmap with one `Sample` node per point.
///
/// Every sample tries its neighbors nearest first and keeps the first
/// `config.n_knn` collision-free connections as outgoing edges. Only the
/// out-degree is bounded; no reverse edges are added.
pub fn build_roadmap(
    samples: &[Point2D],
    obstacles: &[CircleObstacle],
    config: &PrmConfig,
) -> RoadmapGraph {
    let mut graph = RoadmapGraph::from_samples(samples);
    let sample_tree = KdTree::new(samples.to_vec());
    let max_candidates = config.max_candidates.unwrap_or(usize::MAX);

    for (i, &position) in samples.iter().enumerate() {
        let from = NodeId(i);
        let mut tried = 0usize;

        for neighbor in sample_tree.query_all(&position) {
            if graph.out_degree(from) >= config.n_knn || tried >= max_candidates {
                break;
            }
            if neighbor.index == i {
                continue;
            }
            tried += 1;

            let segment = Segment::new(position, samples[neighbor.index]);
            if is_segment_free(&segment, obstacles) {
                graph.add_edge(from, NodeId(neighbor.index));
            }
        }

        trace!("{} connected to {} of {} tried neighbors", from, graph.out_degree(from), tried);
    }

    debug!(
        "roadmap built: {} nodes, {} edges (n_knn = {})",
        graph.node_count(),
        graph.edge_count(),
        config.n_knn
    );
    graph
}
