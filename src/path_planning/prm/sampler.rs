//! Rejection sampling of collision-free configurations

use log::{debug, trace};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::common::{point_in_circle, CircleObstacle, MapBounds, PlanningError, PlanningResult, Point2D};
use crate::spatial::KdTree;

use super::config::PrmConfig;

/// Validity check against the K nearest obstacle centers
pub struct FreeSpaceChecker<'a> {
    obstacles: &'a [CircleObstacle],
    tree: KdTree,
    check_knn: usize,
}

impl<'a> FreeSpaceChecker<'a> {
    pub fn new(obstacles: &'a [CircleObstacle], check_knn: usize) -> Self {
        let tree = KdTree::new(obstacles.iter().map(|o| o.center).collect());
        FreeSpaceChecker {
            obstacles,
            tree,
            check_knn: check_knn.min(obstacles.len()),
        }
    }

    pub fn is_free(&self, point: &Point2D) -> bool {
        self.tree
            .query_knn(point, self.check_knn)
            .iter()
            .all(|n| !point_in_circle(point, &self.obstacles[n.index]))
    }
}

/// Draw `config.n_samples` collision-free points uniformly from `bounds`.
///
/// Termination is probabilistic; `config.max_sample_attempts` bounds the
/// number of draws and turns a hopeless configuration space into
/// [`PlanningError::SamplingExhausted`].
pub fn sample_points<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &MapBounds,
    obstacles: &[CircleObstacle],
    config: &PrmConfig,
) -> PlanningResult<Vec<Point2D>> {
    let checker = FreeSpaceChecker::new(obstacles, config.sample_check_knn);
    let x_dist = Uniform::new(0.0, bounds.width);
    let y_dist = Uniform::new(0.0, bounds.height);

    let mut samples = Vec::with_capacity(config.n_samples);
    let mut attempts = 0usize;

    while samples.len() < config.n_samples {
        if let Some(max) = config.max_sample_attempts {
            if attempts >= max {
                return Err(PlanningError::SamplingExhausted {
                    requested: config.n_samples,
                    collected: samples.len(),
                    attempts,
                });
            }
        }
        attempts += 1;

        let candidate = Point2D::new(x_dist.sample(rng), y_dist.sample(rng));
        if checker.is_free(&candidate) {
            samples.push(candidate);
        } else {
            trace!("rejected sample ({:.3}, {:.3})", candidate.x, candidate.y);
        }
    }

    debug!(
        "collected {} samples in {} attempts ({} rejected)",
        samples.len(),
        attempts,
        attempts - samples.len()
    );
    Ok(samples)
}
