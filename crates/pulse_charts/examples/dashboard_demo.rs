//! Pulse dashboard demo
//!
//! Run with:
//! `cargo run -p pulse_charts --example dashboard_demo`
//!
//! Optional:
//! - Set `PULSE_TICKS` to control the number of refresh cycles (default: 3)
//! - Set `PULSE_TICK_MS` to control the refresh cadence (default: 3000)
//!
//! The demo owns the refresh timer: it ticks the simulated feeds, applies
//! each refresh to the dashboard model, and writes the final SVG snapshot
//! to stdout.

use std::time::Duration;

use anyhow::Result;
use pulse_charts::prelude::*;
use pulse_charts::svg;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ticks = env_usize("PULSE_TICKS", 3);
    let tick_ms = env_usize("PULSE_TICK_MS", 3000) as u64;

    let mut rng = StdRng::from_entropy();
    let mut feed = DashboardFeed::new();
    let mut dashboard = DashboardModel::new()?;

    for tick in 0..ticks {
        if tick > 0 {
            std::thread::sleep(Duration::from_millis(tick_ms));
        }
        feed.tick(&mut rng);
        dashboard.apply(&feed);

        let snap = dashboard.snapshot();
        tracing::info!(
            tick,
            latest_traffic = snap.traffic.points.last().map(|p| 100.0 - p.y),
            "dashboard refreshed"
        );
    }

    print!("{}", svg::dashboard_svg(&dashboard));
    Ok(())
}
