use pulse_core::{Color, Rect};

use crate::scale::BandScale;
use crate::VIEW_SPAN;

#[derive(Clone, Debug)]
pub struct BarChartStyle {
    /// Height cap as a percentage of the panel; samples above it clamp.
    pub max_height: f32,
    pub padding_inner: f32,
    pub padding_outer: f32,
    pub fills: Vec<Color>,
}

impl Default for BarChartStyle {
    fn default() -> Self {
        Self {
            max_height: 100.0,
            padding_inner: 0.3,
            padding_outer: 0.15,
            fills: vec![
                Color::rgb8(0x3B, 0x82, 0xF6),
                Color::rgb8(0x8B, 0x5C, 0xF6),
            ],
        }
    }
}

/// Clamp samples into `0..=max_height`; the height of a bar IS its sample
/// value (percent scale), nothing else. Non-finite samples flatten to zero.
pub fn project_bar_heights(samples: &[f32], max_height: f32) -> Vec<f32> {
    samples
        .iter()
        .map(|&v| {
            if v.is_finite() {
                v.clamp(0.0, max_height)
            } else {
                0.0
            }
        })
        .collect()
}

pub struct BarChartModel {
    pub samples: Vec<f32>,
    pub labels: Vec<String>,
    pub style: BarChartStyle,
}

impl BarChartModel {
    pub fn new(samples: Vec<f32>, labels: Vec<String>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            !samples.is_empty(),
            "BarChartModel requires at least one sample"
        );
        anyhow::ensure!(
            samples.len() == labels.len(),
            "each bar needs a label"
        );
        Ok(Self {
            samples,
            labels,
            style: BarChartStyle::default(),
        })
    }

    pub fn set_samples(&mut self, samples: Vec<f32>) {
        self.samples = samples;
    }

    pub fn heights(&self) -> Vec<f32> {
        project_bar_heights(&self.samples, self.style.max_height)
    }

    /// Bars laid out across the viewbox, growing up from the baseline.
    pub fn bars(&self) -> Vec<Rect> {
        let bands = BandScale::new(
            self.samples.len(),
            0.0,
            VIEW_SPAN,
            self.style.padding_inner,
            self.style.padding_outer,
        );
        self.heights()
            .iter()
            .enumerate()
            .map(|(i, &h)| {
                let x = bands.band_start(i).unwrap_or(0.0);
                Rect::new(x, VIEW_SPAN - h, bands.band_width(), h)
            })
            .collect()
    }

    pub fn fill(&self, idx: usize) -> Color {
        self.style.fills[idx % self.style.fills.len()]
    }
}
