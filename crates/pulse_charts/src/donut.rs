use std::f32::consts::TAU;

use pulse_core::{Color, Path, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct DonutChartStyle {
    pub center: Point,
    pub radius: f32,
    /// Radius of the punched-out middle; emission-side decoration, not part
    /// of the wedge geometry.
    pub hole_radius: f32,
    pub track: Color,
    pub palette: Vec<Color>,
}

impl Default for DonutChartStyle {
    fn default() -> Self {
        Self {
            center: Point::new(50.0, 50.0),
            radius: 35.0,
            hole_radius: 25.0,
            track: Color::rgb8(0x1F, 0x29, 0x37),
            palette: vec![
                Color::rgb8(0x8B, 0x5C, 0xF6),
                Color::rgb8(0x3B, 0x82, 0xF6),
                Color::rgb8(0xEC, 0x48, 0x99),
            ],
        }
    }
}

/// One donut wedge: angular span, the SVG large-arc flag, the wedge path,
/// and the index of the display category it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonutSegment {
    pub category: usize,
    pub start_angle: f32,
    pub end_angle: f32,
    pub large_arc: bool,
    pub path: Path,
}

impl DonutSegment {
    pub fn span(&self) -> f32 {
        self.end_angle - self.start_angle
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Project proportion shares into donut wedges around `center`.
///
/// Shares are treated as percentages of a whole: a running cumulative total
/// maps `0..=100` onto `0..=TAU`. Shares that do not sum to 100 produce an
/// under- or over-full ring; that is the caller's contract to keep, not
/// this function's to enforce. A share of exactly 50 takes the major arc.
pub fn project_donut_segments(
    proportions: &[f32],
    center: Point,
    radius: f32,
) -> Vec<DonutSegment> {
    let mut segments = Vec::with_capacity(proportions.len());
    let mut cumulative = 0.0f32;

    for (category, &share) in proportions.iter().enumerate() {
        let start_angle = TAU * cumulative / 100.0;
        cumulative += share;
        let end_angle = TAU * cumulative / 100.0;

        let start = point_on_circle(center, radius, start_angle);
        let end = point_on_circle(center, radius, end_angle);
        let large_arc = share >= 50.0;

        let path = Path::new()
            .move_to(center.x, center.y)
            .line_to(start.x, start.y)
            .arc_to(radius, radius, 0.0, large_arc, true, end.x, end.y)
            .close();

        segments.push(DonutSegment {
            category,
            start_angle,
            end_angle,
            large_arc,
            path,
        });
    }

    segments
}

pub struct DonutChartModel {
    pub proportions: Vec<f32>,
    pub labels: Vec<String>,
    pub style: DonutChartStyle,
}

impl DonutChartModel {
    pub fn new(proportions: Vec<f32>, labels: Vec<String>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !proportions.is_empty(),
            "DonutChartModel requires at least one share"
        );
        anyhow::ensure!(
            proportions.len() == labels.len(),
            "each share needs a category label"
        );
        Ok(Self {
            proportions,
            labels,
            style: DonutChartStyle::default(),
        })
    }

    pub fn set_proportions(&mut self, proportions: Vec<f32>) {
        self.proportions = proportions;
    }

    pub fn segments(&self) -> Vec<DonutSegment> {
        project_donut_segments(&self.proportions, self.style.center, self.style.radius)
    }

    pub fn color(&self, category: usize) -> Color {
        self.style.palette[category % self.style.palette.len()]
    }

    /// `(label, share, color)` rows for legend rendering.
    pub fn legend(&self) -> Vec<(&str, f32, Color)> {
        self.labels
            .iter()
            .zip(&self.proportions)
            .enumerate()
            .map(|(i, (label, &share))| (label.as_str(), share, self.color(i)))
            .collect()
    }
}
