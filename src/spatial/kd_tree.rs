//! Static 2-d tree for k-nearest-neighbor queries
//!
//! The tree is built once over a fixed point set and never mutated. Point
//! indices returned by queries refer to the order of the input slice.

use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::common::Point2D;

/// Result of a nearest-neighbor query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the point in the original input
    pub index: usize,
    /// Euclidean distance to the query point
    pub distance: f64,
}

/// Max-heap entry; the worst candidate sits on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    distance: OrderedFloat<f64>,
    index: usize,
}

/// KD-tree over 2D points
///
/// Nodes are stored implicitly: each subslice of `order` is a subtree whose
/// root is its middle element, split on x at even depth and y at odd depth.
#[derive(Debug, Clone)]
pub struct KdTree {
    points: Vec<Point2D>,
    order: Vec<usize>,
}

impl KdTree {
    pub fn new(points: Vec<Point2D>) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        Self::build(&points, &mut order, 0);
        KdTree { points, order }
    }

    fn build(points: &[Point2D], order: &mut [usize], depth: usize) {
        if order.len() <= 1 {
            return;
        }
        let axis = depth % 2;
        let mid = order.len() / 2;
        order.select_nth_unstable_by(mid, |&a, &b| {
            points[a].coord(axis).total_cmp(&points[b].coord(axis))
        });
        let (left, right) = order.split_at_mut(mid);
        Self::build(points, left, depth + 1);
        Self::build(points, &mut right[1..], depth + 1);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Find the k nearest neighbors of `query`, nearest first.
    ///
    /// Returns `min(k, len)` results. Equal distances are ordered by index.
    pub fn query_knn(&self, query: &Point2D, k: usize) -> Vec<Neighbor> {
        let k = k.min(self.points.len());
        if k == 0 {
            return Vec::new();
        }

        let mut heap = BinaryHeap::with_capacity(k + 1);
        self.search(&self.order, 0, query, k, &mut heap);

        heap.into_sorted_vec()
            .into_iter()
            .map(|c| Neighbor {
                index: c.index,
                distance: c.distance.into_inner(),
            })
            .collect()
    }

    /// Every indexed point ordered by distance from `query`
    pub fn query_all(&self, query: &Point2D) -> Vec<Neighbor> {
        self.query_knn(query, self.points.len())
    }

    fn search(
        &self,
        subtree: &[usize],
        depth: usize,
        query: &Point2D,
        k: usize,
        heap: &mut BinaryHeap<Candidate>,
    ) {
        if subtree.is_empty() {
            return;
        }

        let mid = subtree.len() / 2;
        let index = subtree[mid];
        let point = &self.points[index];

        heap.push(Candidate {
            distance: OrderedFloat(query.distance(point)),
            index,
        });
        if heap.len() > k {
            heap.pop();
        }

        let axis = depth % 2;
        let diff = query.coord(axis) - point.coord(axis);
        let (near, far) = if diff < 0.0 {
            (&subtree[..mid], &subtree[mid + 1..])
        } else {
            (&subtree[mid + 1..], &subtree[..mid])
        };

        self.search(near, depth + 1, query, k, heap);

        // `<=` keeps equal-distance points reachable for index tie-breaking
        let must_visit_far = match heap.peek() {
            Some(worst) => heap.len() < k || diff.abs() <= worst.distance.into_inner(),
            None => true,
        };
        if must_visit_far {
            self.search(far, depth + 1, query, k, heap);
        }
    }
}
