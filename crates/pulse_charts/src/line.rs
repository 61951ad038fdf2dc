use pulse_core::{svg_number, Color, Path, Point};
use serde::{Deserialize, Serialize};

use crate::scale::LinearScale;

/// Side length of the normalized output space all projections target
/// (an SVG viewbox of `0 0 100 100`, y growing downward).
pub const VIEW_SPAN: f32 = 100.0;

#[derive(Clone, Debug)]
pub struct LineChartStyle {
    pub stroke: Color,
    pub fill: Color,
    pub point_fill: Color,
    pub stroke_width: f32,
    pub point_radius: f32,

    /// Upper bound of the sample domain; samples are assumed to lie in
    /// `0..=domain_max` but are not validated against it.
    pub domain_max: f32,
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            stroke: Color::rgb8(0x8B, 0x5C, 0xF6),
            fill: Color::rgb8(0x8B, 0x5C, 0xF6).with_alpha(0.2),
            point_fill: Color::rgb8(0xFF, 0xFF, 0xFF),
            stroke_width: 2.0,
            point_radius: 2.0,
            domain_max: 100.0,
        }
    }
}

/// Geometry for one line/area panel: the projected polyline plus the closed
/// polygon that bounds the area under it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineProjection {
    pub points: Vec<Point>,
    pub outline: Vec<Point>,
}

impl LineProjection {
    /// SVG `points` attribute form: `"x,y x,y ..."`.
    pub fn polyline_points(&self) -> String {
        let pairs: Vec<String> = self
            .points
            .iter()
            .map(|p| format!("{},{}", svg_number(p.x), svg_number(p.y)))
            .collect();
        pairs.join(" ")
    }

    /// The area outline as a closed path for fill rendering.
    pub fn area_path(&self) -> Path {
        let mut iter = self.outline.iter();
        let Some(first) = iter.next() else {
            return Path::new();
        };
        let mut path = Path::new().move_to(first.x, first.y);
        for p in iter {
            path = path.line_to(p.x, p.y);
        }
        path.close()
    }
}

/// Project a sample series into the normalized viewbox.
///
/// `x = i / (N - 1) * 100`; `y` maps `0..=domain_max` onto `100..=0`, so
/// larger samples plot higher. With `domain_max = 100` this is exactly
/// `y = 100 - sample`.
///
/// A single sample has no horizontal extent and sits at `x = 0`; the
/// outline then pins an extra vertex to the right edge so the filled band
/// still spans the panel. An empty series projects to empty geometry.
pub fn project_line_series(samples: &[f32], domain_max: f32) -> LineProjection {
    let n = samples.len();
    if n == 0 {
        return LineProjection::default();
    }

    let y_scale = LinearScale::new(0.0, domain_max, VIEW_SPAN, 0.0);
    let mut points = Vec::with_capacity(n);
    for (i, &sample) in samples.iter().enumerate() {
        let x = if n > 1 {
            i as f32 / (n - 1) as f32 * VIEW_SPAN
        } else {
            0.0
        };
        points.push(Point::new(x, y_scale.map(sample)));
    }

    let first = points[0];
    let last = points[n - 1];
    let mut outline = Vec::with_capacity(n + 4);
    outline.push(Point::new(0.0, first.y));
    outline.extend_from_slice(&points);
    if last.x != VIEW_SPAN {
        outline.push(Point::new(VIEW_SPAN, last.y));
    }
    outline.push(Point::new(VIEW_SPAN, VIEW_SPAN));
    outline.push(Point::new(0.0, VIEW_SPAN));

    LineProjection { points, outline }
}

pub struct LineChartModel {
    pub samples: Vec<f32>,
    pub style: LineChartStyle,
}

impl LineChartModel {
    pub fn new(samples: Vec<f32>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !samples.is_empty(),
            "LineChartModel requires at least one sample"
        );
        Ok(Self {
            samples,
            style: LineChartStyle::default(),
        })
    }

    pub fn set_samples(&mut self, samples: Vec<f32>) {
        self.samples = samples;
    }

    pub fn project(&self) -> LineProjection {
        project_line_series(&self.samples, self.style.domain_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_n_points_with_pinned_endpoints() {
        let proj = project_line_series(&[35.0, 40.0, 30.0, 50.0, 45.0], 100.0);
        assert_eq!(proj.points.len(), 5);
        assert_eq!(proj.points[0].x, 0.0);
        assert_eq!(proj.points[4].x, 100.0);
        for (p, s) in proj.points.iter().zip([35.0, 40.0, 30.0, 50.0, 45.0]) {
            assert!((p.y - (100.0 - s)).abs() < 1e-4);
        }
    }

    #[test]
    fn single_sample_sits_on_the_left_edge() {
        let proj = project_line_series(&[42.0], 100.0);
        assert_eq!(proj.points, vec![Point::new(0.0, 58.0)]);
        assert_eq!(
            proj.outline,
            vec![
                Point::new(0.0, 58.0),
                Point::new(0.0, 58.0),
                Point::new(100.0, 58.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn empty_series_projects_to_nothing() {
        let proj = project_line_series(&[], 100.0);
        assert!(proj.points.is_empty());
        assert!(proj.outline.is_empty());
        assert!(proj.area_path().is_empty());
    }

    #[test]
    fn outline_closes_on_the_baseline() {
        let proj = project_line_series(&[0.0, 100.0], 100.0);
        assert_eq!(proj.points, vec![Point::new(0.0, 100.0), Point::new(100.0, 0.0)]);
        assert_eq!(
            proj.outline,
            vec![
                Point::new(0.0, 100.0),
                Point::new(0.0, 100.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
            ]
        );
    }

    #[test]
    fn polyline_points_match_svg_attribute_form() {
        let proj = project_line_series(&[0.0, 100.0], 100.0);
        assert_eq!(proj.polyline_points(), "0,100 100,0");
    }

    #[test]
    fn domain_max_rescales_y() {
        let proj = project_line_series(&[5.0], 10.0);
        assert!((proj.points[0].y - 50.0).abs() < 1e-4);
    }
}
