//! Dashboard composition: stat cards plus the three chart panels, and the
//! serializable geometry bundle one refresh produces.

use pulse_core::Rect;
use serde::{Deserialize, Serialize};

use crate::bar::BarChartModel;
use crate::donut::{DonutChartModel, DonutSegment};
use crate::feed::{DashboardFeed, Feed};
use crate::format::{format_duration, format_grouped, format_percent, format_signed_percent};
use crate::line::{LineChartModel, LineProjection};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: String,
}

impl StatCard {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            change: change.into(),
        }
    }
}

/// Every descriptor one dashboard refresh hands to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardGeometry {
    pub stats: Vec<StatCard>,
    pub traffic: LineProjection,
    pub channel_bars: Vec<Rect>,
    pub source_segments: Vec<DonutSegment>,
}

pub struct DashboardModel {
    pub stats: Vec<StatCard>,
    pub traffic: LineChartModel,
    pub day_labels: Vec<String>,
    pub channels: BarChartModel,
    pub sources: DonutChartModel,
}

impl DashboardModel {
    /// The mock dashboard in its initial state: four stat cards, a traffic
    /// line panel labelled by weekday, six conversion channels, and the
    /// three-way traffic-source split.
    pub fn new() -> anyhow::Result<Self> {
        let feed = DashboardFeed::new();
        let stats = vec![
            StatCard::new("Total Users", format_grouped(8_249), format_signed_percent(12.5)),
            StatCard::new("Sessions", format_grouped(12_931), format_signed_percent(8.2)),
            StatCard::new("Bounce Rate", format_percent(27.3), format_signed_percent(-2.1)),
            StatCard::new(
                "Session Duration",
                format_duration(165),
                format_signed_percent(0.8),
            ),
        ];

        Ok(Self {
            stats,
            traffic: LineChartModel::new(feed.traffic.values().to_vec())?,
            day_labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .map(String::from)
                .to_vec(),
            channels: BarChartModel::new(
                feed.channels.values().to_vec(),
                ["Org", "Paid", "Soc", "Email", "Ref", "Dir"]
                    .map(String::from)
                    .to_vec(),
            )?,
            sources: DonutChartModel::new(
                feed.sources.values().to_vec(),
                ["Direct", "Organic", "Referral"].map(String::from).to_vec(),
            )?,
        })
    }

    /// Copy the feeds' current sequences into the chart models.
    pub fn apply(&mut self, feed: &DashboardFeed) {
        self.traffic.set_samples(feed.traffic.values().to_vec());
        self.channels.set_samples(feed.channels.values().to_vec());
        self.sources.set_proportions(feed.sources.values().to_vec());
    }

    /// Project everything for one refresh.
    pub fn snapshot(&self) -> DashboardGeometry {
        let traffic = self.traffic.project();
        let channel_bars = self.channels.bars();
        let source_segments = self.sources.segments();
        tracing::debug!(
            points = traffic.points.len(),
            bars = channel_bars.len(),
            segments = source_segments.len(),
            "projected dashboard snapshot"
        );
        DashboardGeometry {
            stats: self.stats.clone(),
            traffic,
            channel_bars,
            source_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_snapshot_matches_the_mock_layout() {
        let dash = DashboardModel::new().unwrap();
        let snap = dash.snapshot();
        assert_eq!(snap.stats.len(), 4);
        assert_eq!(snap.stats[0].value, "8,249");
        assert_eq!(snap.stats[3].value, "2m 45s");
        assert_eq!(snap.traffic.points.len(), 10);
        assert_eq!(snap.channel_bars.len(), 6);
        assert_eq!(snap.source_segments.len(), 3);
    }

    #[test]
    fn applying_a_ticked_feed_reprojects_the_charts() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut feed = DashboardFeed::new();
        let mut dash = DashboardModel::new().unwrap();
        let before = dash.snapshot();

        feed.tick(&mut rng);
        dash.apply(&feed);
        let after = dash.snapshot();

        assert_eq!(after.traffic.points.len(), 10);
        assert_ne!(before.traffic, after.traffic);
        assert_eq!(after.stats, before.stats);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let dash = DashboardModel::new().unwrap();
        let snap = dash.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: DashboardGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
