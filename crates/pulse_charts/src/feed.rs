//! Simulated live feeds for the dashboard.
//!
//! The projection modules never look in here: feeds only produce finished
//! sample sequences, and the caller decides when to tick them and which
//! model gets the result.

use rand::{Rng, RngCore};

/// A source of one sample sequence that advances on demand.
pub trait Feed {
    fn values(&self) -> &[f32];
    fn tick(&mut self, rng: &mut dyn RngCore);
}

/// Sliding ten-sample window of traffic values: each tick drops the oldest
/// sample and appends a fresh one in `40..80`.
pub struct TrafficFeed {
    window: Vec<f32>,
}

impl TrafficFeed {
    pub fn new() -> Self {
        Self {
            window: vec![35.0, 40.0, 30.0, 50.0, 45.0, 60.0, 55.0, 65.0, 70.0, 75.0],
        }
    }
}

impl Default for TrafficFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed for TrafficFeed {
    fn values(&self) -> &[f32] {
        &self.window
    }

    fn tick(&mut self, rng: &mut dyn RngCore) {
        self.window.remove(0);
        self.window.push(rng.gen_range(40..80) as f32);
    }
}

/// Per-channel conversion rates; every tick redraws all six in `35..85`.
pub struct ChannelFeed {
    rates: Vec<f32>,
}

impl ChannelFeed {
    pub fn new() -> Self {
        Self {
            rates: vec![65.0, 40.0, 75.0, 50.0, 85.0, 60.0],
        }
    }
}

impl Default for ChannelFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed for ChannelFeed {
    fn values(&self) -> &[f32] {
        &self.rates
    }

    fn tick(&mut self, rng: &mut dyn RngCore) {
        for rate in &mut self.rates {
            *rate = rng.gen_range(35..85) as f32;
        }
    }
}

/// Three traffic-source shares kept summing to exactly 100: the first two
/// are drawn from `40..70` and `20..40`, the third takes the remainder.
pub struct SourceSplitFeed {
    shares: [f32; 3],
}

impl SourceSplitFeed {
    pub fn new() -> Self {
        Self {
            shares: [60.0, 25.0, 15.0],
        }
    }
}

impl Default for SourceSplitFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Feed for SourceSplitFeed {
    fn values(&self) -> &[f32] {
        &self.shares
    }

    fn tick(&mut self, rng: &mut dyn RngCore) {
        let first = rng.gen_range(40..70);
        let second = rng.gen_range(20..40);
        let third = 100 - first - second;
        self.shares = [first as f32, second as f32, third as f32];
    }
}

/// The three dashboard feeds, ticked together on the caller's cadence.
pub struct DashboardFeed {
    pub traffic: TrafficFeed,
    pub channels: ChannelFeed,
    pub sources: SourceSplitFeed,
}

impl DashboardFeed {
    pub fn new() -> Self {
        Self {
            traffic: TrafficFeed::new(),
            channels: ChannelFeed::new(),
            sources: SourceSplitFeed::new(),
        }
    }

    pub fn tick(&mut self, rng: &mut dyn RngCore) {
        self.traffic.tick(rng);
        self.channels.tick(rng);
        self.sources.tick(rng);
        tracing::trace!(
            latest_traffic = self.traffic.values().last().copied().unwrap_or(0.0),
            "feeds advanced"
        );
    }
}

impl Default for DashboardFeed {
    fn default() -> Self {
        Self::new()
    }
}
