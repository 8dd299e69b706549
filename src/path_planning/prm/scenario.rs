//! Random planning scenarios: disk obstacles plus a free start and goal

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::common::{is_point_free, CircleObstacle, MapBounds, PlanningError, PlanningResult, Point2D};

/// Obstacle radius range on a 100 x 100 map; scaled with the map size
const MIN_RADIUS: u32 = 2;
const MAX_RADIUS: u32 = 10;
const REFERENCE_SIZE: f64 = 100.0;

/// A complete planning problem
#[derive(Debug, Clone)]
pub struct Scenario {
    pub bounds: MapBounds,
    pub obstacles: Vec<CircleObstacle>,
    pub start: Point2D,
    pub goal: Point2D,
}

impl Scenario {
    /// Generate `n_obstacles` disks fully inside `bounds`, then draw a start
    /// and a goal outside all of them.
    ///
    /// Start and goal are drawn by rejection, at most `max_attempts` times each.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: MapBounds,
        n_obstacles: usize,
        max_attempts: usize,
    ) -> PlanningResult<Self> {
        let obstacles = random_obstacles(rng, &bounds, n_obstacles);

        let start = random_free_point(rng, &bounds, &obstacles, max_attempts).ok_or_else(|| {
            PlanningError::ScenarioGeneration(format!("no free start after {} attempts", max_attempts))
        })?;
        let goal = random_free_point(rng, &bounds, &obstacles, max_attempts).ok_or_else(|| {
            PlanningError::ScenarioGeneration(format!("no free goal after {} attempts", max_attempts))
        })?;

        debug!(
            "scenario: {} obstacles, start ({:.2}, {:.2}), goal ({:.2}, {:.2})",
            obstacles.len(),
            start.x,
            start.y,
            goal.x,
            goal.y
        );
        Ok(Scenario { bounds, obstacles, start, goal })
    }
}

/// Disks with integer radius in [2, 10] (per 100 map units) lying inside `bounds`
pub fn random_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &MapBounds,
    n_obstacles: usize,
) -> Vec<CircleObstacle> {
    let scale = bounds.width.min(bounds.height) / REFERENCE_SIZE;
    let radius_dist = Uniform::new_inclusive(MIN_RADIUS, MAX_RADIUS);

    (0..n_obstacles)
        .map(|_| {
            // never wider than half the narrow side so the disk fits
            let r = (radius_dist.sample(rng) as f64 * scale)
                .min(0.5 * bounds.width.min(bounds.height));
            let x = Uniform::new_inclusive(r, bounds.width - r).sample(rng);
            let y = Uniform::new_inclusive(r, bounds.height - r).sample(rng);
            CircleObstacle::new(Point2D::new(x, y), r)
        })
        .collect()
}

/// Uniform point in `bounds` outside every obstacle
pub fn random_free_point<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &MapBounds,
    obstacles: &[CircleObstacle],
    max_attempts: usize,
) -> Option<Point2D> {
    let x_dist = Uniform::new_inclusive(0.0, bounds.width);
    let y_dist = Uniform::new_inclusive(0.0, bounds.height);
    (0..max_attempts)
        .map(|_| Point2D::new(x_dist.sample(rng), y_dist.sample(rng)))
        .find(|p| is_point_free(p, obstacles))
}
