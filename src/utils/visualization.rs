//! Visualization utilities for prm_planner
//!
//! Renders maps, roadmaps and trajectories with gnuplot.

use gnuplot::{Figure, Caption, Color, PointSymbol, PointSize, LineWidth, AxesCommon, AutoOption};

use crate::common::{CircleObstacle, MapBounds, Path2D, PlanningError, PlanningResult, Point2D};
use crate::path_planning::prm::{RoadmapGraph, Trajectory};

/// Vertices used to draw one obstacle disk
const CIRCLE_RESOLUTION: usize = 48;

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const GRAY: &str = "#808080";
    pub const LIGHT_GRAY: &str = "#C8C8C8";

    // Semantic colors
    pub const OBSTACLE: &str = BLACK;
    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const SAMPLE: &str = GRAY;
    pub const ROADMAP: &str = LIGHT_GRAY;
}

/// Style for path rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: colors::PATH.to_string(),
            line_width: 2.0,
            caption: "Path".to_string(),
        }
    }
}

/// Style for point rendering
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.0,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Polygon approximating the boundary of `obstacle`, closed
pub fn circle_outline(obstacle: &CircleObstacle) -> (Vec<f64>, Vec<f64>) {
    (0..=CIRCLE_RESOLUTION)
        .map(|i| {
            let a = 2.0 * std::f64::consts::PI * i as f64 / CIRCLE_RESOLUTION as f64;
            (
                obstacle.center.x + obstacle.radius * a.cos(),
                obstacle.center.y + obstacle.radius * a.sin(),
            )
        })
        .unzip()
}

/// One queued draw call
#[derive(Debug, Clone)]
enum Layer {
    Lines {
        x: Vec<f64>,
        y: Vec<f64>,
        color: String,
        line_width: f64,
        caption: Option<String>,
    },
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PointStyle,
    },
}

/// Main visualizer struct
///
/// Draw calls are queued and written into a single axes when the figure is
/// rendered, so every layer shares the map range and aspect ratio.
pub struct Visualizer {
    figure: Figure,
    layers: Vec<Layer>,
    title: String,
    x_label: String,
    y_label: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
    aspect_ratio: Option<f64>,
}

impl Visualizer {
    /// Create a new visualizer
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            layers: Vec::new(),
            title: String::new(),
            x_label: "x [m]".to_string(),
            y_label: "y [m]".to_string(),
            x_range: None,
            y_range: None,
            aspect_ratio: Some(1.0),
        }
    }

    /// Set the plot title
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Fix both axis ranges to the map area
    pub fn set_bounds(&mut self, bounds: &MapBounds) -> &mut Self {
        self.x_range = Some((0.0, bounds.width));
        self.y_range = Some((0.0, bounds.height));
        self
    }

    /// Draw obstacle outlines
    pub fn plot_obstacles(&mut self, obstacles: &[CircleObstacle]) -> &mut Self {
        for (i, obstacle) in obstacles.iter().enumerate() {
            let (x, y) = circle_outline(obstacle);
            self.layers.push(Layer::Lines {
                x,
                y,
                color: colors::OBSTACLE.to_string(),
                line_width: 1.5,
                caption: (i == 0).then(|| "Obstacles".to_string()),
            });
        }
        self
    }

    /// Draw sample nodes and roadmap edges
    pub fn plot_roadmap(&mut self, roadmap: &RoadmapGraph) -> &mut Self {
        for edge in roadmap.edges() {
            let a = roadmap.node(edge.from).position;
            let b = roadmap.node(edge.to).position;
            self.layers.push(Layer::Lines {
                x: vec![a.x, b.x],
                y: vec![a.y, b.y],
                color: colors::ROADMAP.to_string(),
                line_width: 0.5,
                caption: None,
            });
        }

        let samples: Vec<Point2D> = roadmap.samples().map(|n| n.position).collect();
        self.plot_points(
            &samples,
            &PointStyle::new(colors::SAMPLE, "Samples").with_symbol('.').with_size(1.0),
        )
    }

    /// Draw a planned trajectory
    pub fn plot_trajectory(&mut self, trajectory: &Trajectory) -> &mut Self {
        self.plot_path(&trajectory.to_path(), &PathStyle::default())
    }

    /// Plot a path
    pub fn plot_path(&mut self, path: &Path2D, style: &PathStyle) -> &mut Self {
        self.layers.push(Layer::Lines {
            x: path.x_coords(),
            y: path.y_coords(),
            color: style.color.clone(),
            line_width: style.line_width,
            caption: Some(style.caption.clone()),
        });
        self
    }

    /// Plot a single point (start, goal, etc.)
    pub fn plot_point(&mut self, point: Point2D, style: &PointStyle) -> &mut Self {
        self.plot_points(&[point], style)
    }

    /// Plot multiple points
    pub fn plot_points(&mut self, points: &[Point2D], style: &PointStyle) -> &mut Self {
        self.layers.push(Layer::Points {
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            style: style.clone(),
        });
        self
    }

    /// Finalize and show the plot
    pub fn show(&mut self) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .show()
            .map(|_| ())
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Save plot to SVG file
    pub fn save_svg(&mut self, path: &str) -> PlanningResult<()> {
        self.apply_settings();
        self.figure
            .save_to_svg(path, 800, 600)
            .map_err(|e| PlanningError::Visualization(e.to_string()))
    }

    /// Rebuild the figure as one axes holding every queued layer
    fn apply_settings(&mut self) {
        self.figure.clear_axes();
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label(&self.x_label, &[]);
        axes.set_y_label(&self.y_label, &[]);

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some(ratio) = self.aspect_ratio {
            axes.set_aspect_ratio(AutoOption::Fix(ratio));
        }

        for layer in &self.layers {
            match layer {
                Layer::Lines { x, y, color, line_width, caption } => match caption {
                    Some(caption) => {
                        axes.lines(x, y, &[Caption(caption.as_str()), Color(color.as_str()), LineWidth(*line_width)]);
                    }
                    None => {
                        axes.lines(x, y, &[Color(color.as_str()), LineWidth(*line_width)]);
                    }
                },
                Layer::Points { x, y, style } => {
                    axes.points(x, y, &[
                        Caption(style.caption.as_str()),
                        Color(style.color.as_str()),
                        PointSymbol(style.symbol),
                        PointSize(style.size),
                    ]);
                }
            }
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
