//! Geometric collision predicates for disks, points and segments

use crate::common::types::{CircleObstacle, Point2D, Segment};

/// True iff `point` lies strictly inside `obstacle`.
///
/// A point exactly on the boundary circle is collision-free.
pub fn point_in_circle(point: &Point2D, obstacle: &CircleObstacle) -> bool {
    point.distance(&obstacle.center) < obstacle.radius
}

/// Minimum distance from `point` to any point of `segment`
pub fn distance_to_segment(point: &Point2D, segment: &Segment) -> f64 {
    let a = segment.start.to_vector();
    let ab = segment.end.to_vector() - a;
    let ap = point.to_vector() - a;

    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return ap.norm();
    }

    // projection parameter clamped onto the segment span
    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (point.to_vector() - closest).norm()
}

/// True iff `segment` passes strictly within `obstacle.radius` of its center
/// anywhere along its length.
pub fn segment_intersects_circle(segment: &Segment, obstacle: &CircleObstacle) -> bool {
    distance_to_segment(&obstacle.center, segment) < obstacle.radius
}

/// True iff `point` is outside every obstacle
pub fn is_point_free(point: &Point2D, obstacles: &[CircleObstacle]) -> bool {
    !obstacles.iter().any(|o| point_in_circle(point, o))
}

/// True iff `segment` touches the interior of no obstacle
pub fn is_segment_free(segment: &Segment, obstacles: &[CircleObstacle]) -> bool {
    !obstacles.iter().any(|o| segment_intersects_circle(segment, o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_obstacle() -> CircleObstacle {
        CircleObstacle::new(Point2D::new(5.0, 5.0), 2.0)
    }

    #[test]
    fn test_point_in_circle_center_and_boundary() {
        let o = unit_obstacle();
        assert!(point_in_circle(&o.center, &o));
        assert!(point_in_circle(&Point2D::new(6.9, 5.0), &o));
        // boundary counts as free
        assert!(!point_in_circle(&Point2D::new(7.0, 5.0), &o));
        assert!(!point_in_circle(&Point2D::new(5.0, 9.0), &o));
    }

    #[test]
    fn test_segment_through_center_intersects() {
        let o = unit_obstacle();
        let seg = Segment::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));
        assert!(segment_intersects_circle(&seg, &o));
    }

    #[test]
    fn test_segment_far_away_is_free() {
        let o = unit_obstacle();
        let seg = Segment::new(Point2D::new(0.0, 8.0), Point2D::new(10.0, 8.0));
        assert!(!segment_intersects_circle(&seg, &o));
    }

    #[test]
    fn test_segment_clamps_to_endpoint() {
        let o = unit_obstacle();
        // the infinite line passes through the center but the segment stops short
        let seg = Segment::new(Point2D::new(0.0, 5.0), Point2D::new(2.5, 5.0));
        assert_relative_eq!(distance_to_segment(&o.center, &seg), 2.5);
        assert!(!segment_intersects_circle(&seg, &o));

        let seg = Segment::new(Point2D::new(0.0, 5.0), Point2D::new(3.5, 5.0));
        assert!(segment_intersects_circle(&seg, &o));
    }

    #[test]
    fn test_segment_interior_crossing_with_endpoints_outside() {
        let o = unit_obstacle();
        let seg = Segment::new(Point2D::new(5.0, 0.0), Point2D::new(5.0, 10.0));
        assert!(!point_in_circle(&seg.start, &o));
        assert!(!point_in_circle(&seg.end, &o));
        assert!(segment_intersects_circle(&seg, &o));
    }

    #[test]
    fn test_tangent_segment_is_free() {
        let o = unit_obstacle();
        let seg = Segment::new(Point2D::new(0.0, 7.0), Point2D::new(10.0, 7.0));
        assert_relative_eq!(distance_to_segment(&o.center, &seg), 2.0);
        assert!(!segment_intersects_circle(&seg, &o));
    }

    #[test]
    fn test_degenerate_segment() {
        let o = unit_obstacle();
        let p = Point2D::new(5.5, 5.0);
        assert!(segment_intersects_circle(&Segment::new(p, p), &o));
        let q = Point2D::new(9.0, 5.0);
        assert_relative_eq!(distance_to_segment(&o.center, &Segment::new(q, q)), 4.0);
    }

    #[test]
    fn test_free_helpers() {
        let obstacles = vec![unit_obstacle(), CircleObstacle::new(Point2D::new(0.0, 0.0), 1.0)];
        assert!(is_point_free(&Point2D::new(9.0, 1.0), &obstacles));
        assert!(!is_point_free(&Point2D::new(0.5, 0.0), &obstacles));
        let seg = Segment::new(Point2D::new(9.0, 0.0), Point2D::new(9.0, 10.0));
        assert!(is_segment_free(&seg, &obstacles));
        let seg = Segment::new(Point2D::new(-1.0, 0.5), Point2D::new(9.0, 0.5));
        assert!(!is_segment_free(&seg, &obstacles));
    }
}
