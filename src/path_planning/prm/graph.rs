//! Roadmap graph
//!
//! The graph owns a node arena, an edge arena and one adjacency row per node
//! listing the handles of its outgoing edges in acceptance order. The edge
//! arena doubles as the flat edge list, and each edge cost is stored once,
//! so the adjacency view and the list view cannot drift apart.

use crate::common::Point2D;

use super::node::{Edge, EdgeId, Node, NodeId, NodeKind};

/// Directed weighted roadmap
#[derive(Debug, Clone, Default)]
pub struct RoadmapGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl RoadmapGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph holding one `Sample` node per point and no edges
    pub fn from_samples(samples: &[Point2D]) -> Self {
        let mut graph = Self::new();
        for &p in samples {
            graph.add_node(NodeKind::Sample, p);
        }
        graph
    }

    pub fn add_node(&mut self, kind: NodeKind, position: Point2D) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { id, kind, position });
        self.adjacency.push(Vec::new());
        id
    }

    /// Add the directed edge `from -> to` weighted by Euclidean distance.
    ///
    /// Adding an existing `(from, to)` pair returns the existing handle.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> EdgeId {
        assert!(from != to, "self-loop on {} is not a roadmap edge", from);
        if let Some(existing) = self.edge_between(from, to) {
            return existing;
        }

        let cost = self.node(from).position.distance(&self.node(to).position);
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(from, to, cost));
        self.adjacency[from.index()].push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Sample nodes in insertion order
    pub fn samples(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Sample)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Every edge in acceptance order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of `id` in acceptance order
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency[id.index()]
            .iter()
            .map(move |&e| (e, &self.edges[e.index()]))
    }

    /// Neighbors reachable from `id` with their edge cost
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.outgoing(id).map(|(_, e)| (e.to, e.cost))
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.adjacency[id.index()].len()
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.to == id).count()
    }

    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.adjacency[from.index()]
            .iter()
            .copied()
            .find(|&e| self.edges[e.index()].to == to)
    }

    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edge_between(from, to).map(|e| self.edge(e).cost)
    }
}
