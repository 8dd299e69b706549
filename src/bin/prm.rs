//! PRM path planning demo
//!
//! Generates a random map of disk obstacles, builds a probabilistic roadmap,
//! plans between a random start and goal and plots each stage.
//!
//! Usage: `prm [seed]`. Set `RUST_LOG=debug` for per-stage details.

use std::fs;

use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prm_planner::path_planning::prm::Scenario;
use prm_planner::utils::Visualizer;
use prm_planner::{MapBounds, PlanOutcome, PlanningResult, PrmConfig, PrmPlanner};

// Parameters
const MAP_SIZE: f64 = 100.0;
const N_SAMPLE: usize = 200; // number of sample points
const N_KNN: usize = 5; // number of edges per node
const SAMPLE_CHECK_KNN: usize = 3; // obstacles checked per sample
const MAX_START_GOAL_ATTEMPTS: usize = 10_000;

const SHOW_ANIMATION: bool = false;
const OUTPUT_DIR: &str = "img/path_planning";

fn run(seed: u64) -> PlanningResult<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bounds = MapBounds::new(MAP_SIZE, MAP_SIZE);
    let n_obstacles = rng.gen_range(5..=20);
    let scenario = Scenario::random(&mut rng, bounds, n_obstacles, MAX_START_GOAL_ATTEMPTS)?;
    info!(
        "{} obstacles, start ({:.1}, {:.1}), goal ({:.1}, {:.1})",
        scenario.obstacles.len(),
        scenario.start.x,
        scenario.start.y,
        scenario.goal.x,
        scenario.goal.y
    );

    let config = PrmConfig::new()
        .with_samples(N_SAMPLE)
        .with_knn(N_KNN)
        .with_sample_check_knn(SAMPLE_CHECK_KNN)
        .with_seed(seed);
    let mut planner = PrmPlanner::new(bounds, scenario.obstacles.clone(), config)?;

    let roadmap = planner.build_roadmap()?;
    let report = planner.solve(roadmap, scenario.start, scenario.goal)?;

    fs::create_dir_all(OUTPUT_DIR)?;

    let mut map = Visualizer::new();
    map.set_title("Initial Map (C-Space)")
        .set_bounds(&bounds)
        .plot_obstacles(&scenario.obstacles)
        .plot_start(scenario.start)
        .plot_goal(scenario.goal);
    map.save_svg(&format!("{}/prm_map.svg", OUTPUT_DIR))?;

    let mut final_plot = Visualizer::new();
    final_plot
        .set_bounds(&bounds)
        .plot_roadmap(&report.roadmap)
        .plot_obstacles(&scenario.obstacles)
        .plot_start(scenario.start)
        .plot_goal(scenario.goal);

    match &report.outcome {
        PlanOutcome::Found(trajectory) => {
            println!(
                "Path found! cost = {:.3}, {} waypoints",
                trajectory.cost(),
                trajectory.nodes().count()
            );
            final_plot.set_title("PRM Path Planning").plot_trajectory(trajectory);
        }
        PlanOutcome::NoPath => {
            println!("No path found!");
            final_plot.set_title("PRM Path Planning (no path)");
        }
    }

    let output = format!("{}/prm.svg", OUTPUT_DIR);
    final_plot.save_svg(&output)?;
    println!("Plot saved to {}", output);

    if SHOW_ANIMATION {
        final_plot.show()?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    println!("PRM path planning start!");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    println!("seed = {}", seed);

    if let Err(e) = run(seed) {
        error!("planning failed: {}", e);
        std::process::exit(1);
    }

    println!("Done!");
}
