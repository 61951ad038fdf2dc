use std::f32::consts::TAU;

use pulse_charts::bar::project_bar_heights;
use pulse_charts::donut::project_donut_segments;
use pulse_charts::line::project_line_series;
use pulse_charts::prelude::*;
use pulse_core::Point;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CENTER: Point = Point::new(50.0, 50.0);

#[test]
fn line_projection_pins_first_and_last_x() {
    for n in 2..20usize {
        let samples: Vec<f32> = (0..n).map(|i| i as f32 * 3.0).collect();
        let proj = project_line_series(&samples, 100.0);
        assert_eq!(proj.points.len(), n);
        assert_eq!(proj.points[0].x, 0.0);
        assert_eq!(proj.points[n - 1].x, 100.0);
        for (p, s) in proj.points.iter().zip(&samples) {
            assert!((p.y - (100.0 - s)).abs() < 1e-3);
        }
    }
}

#[test]
fn single_sample_does_not_divide_by_zero() {
    let proj = project_line_series(&[70.0], 100.0);
    assert_eq!(proj.points, vec![Point::new(0.0, 30.0)]);
    assert!(proj.points[0].x.is_finite());
}

#[test]
fn full_scale_ramp_produces_the_documented_outline() {
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
fn donut_spans_sum_to_a_full_turn_when_shares_sum_to_100() {
    for shares in [
        vec![60.0, 25.0, 15.0],
        vec![50.0, 30.0, 20.0],
        vec![100.0],
        vec![10.0; 10],
    ] {
        let segs = project_donut_segments(&shares, CENTER, 35.0);
        let total: f32 = segs.iter().map(DonutSegment::span).sum();
        assert!((total - TAU).abs() < 1e-4, "shares {shares:?} spanned {total}");
    }
}

#[test]
fn donut_boundaries_for_the_observed_split() {
    let segs = project_donut_segments(&[60.0, 25.0, 15.0], CENTER, 35.0);
    let boundaries = [
        segs[0].start_angle,
        segs[1].start_angle,
        segs[2].start_angle,
        segs[2].end_angle,
    ];
    let expected = [0.0, TAU * 0.60, TAU * 0.85, TAU];
    for (got, want) in boundaries.iter().zip(expected) {
        assert!((got - want).abs() < 1e-3, "boundary {got} != {want}");
    }
}

#[test]
fn large_arc_threshold_is_inclusive_at_fifty() {
    let at_half = project_donut_segments(&[50.0, 30.0, 20.0], CENTER, 35.0);
    assert!(at_half[0].large_arc);
    assert!(!at_half[1].large_arc);

    let below_half = project_donut_segments(&[49.0, 31.0, 20.0], CENTER, 35.0);
    assert!(!below_half[0].large_arc);
}

#[test]
fn bar_heights_pass_through_in_range_values() {
    let heights = project_bar_heights(&[65.0, 40.0, 75.0, 50.0, 85.0, 60.0], 100.0);
    assert_eq!(heights, vec![65.0, 40.0, 75.0, 50.0, 85.0, 60.0]);
}

#[test]
fn projections_are_idempotent_bit_for_bit() {
    let samples = [35.0, 40.0, 30.0, 50.0, 45.0, 60.0, 55.0, 65.0, 70.0, 75.0];
    assert_eq!(
        project_line_series(&samples, 100.0),
        project_line_series(&samples, 100.0)
    );

    let shares = [60.0, 25.0, 15.0];
    assert_eq!(
        project_donut_segments(&shares, CENTER, 35.0),
        project_donut_segments(&shares, CENTER, 35.0)
    );

    assert_eq!(
        project_bar_heights(&shares, 100.0),
        project_bar_heights(&shares, 100.0)
    );
}

#[test]
fn ticked_dashboard_keeps_every_panel_in_the_viewbox() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut feed = DashboardFeed::new();
    let mut dash = DashboardModel::new().unwrap();

    for _ in 0..25 {
        feed.tick(&mut rng);
        dash.apply(&feed);
        let snap = dash.snapshot();

        for p in &snap.traffic.points {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
        for bar in &snap.channel_bars {
            assert!(bar.x >= 0.0 && bar.right() <= 100.0 + 1e-4);
            assert!(bar.y >= 0.0 && (bar.bottom() - 100.0).abs() < 1e-4);
        }
        let total: f32 = snap.source_segments.iter().map(DonutSegment::span).sum();
        assert!((total - TAU).abs() < 1e-4);
    }
}
