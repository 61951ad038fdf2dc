//! SVG emission for the computed geometry.
//!
//! Fragments target a `0 0 100 100` viewbox, the same normalized space the
//! projections produce. String assembly only; every visual decision here
//! comes off the models' styles.

use std::fmt::Write;

use pulse_core::svg_number;

use crate::bar::BarChartModel;
use crate::dashboard::DashboardModel;
use crate::donut::DonutChartModel;
use crate::line::LineChartModel;

const XMLNS: &str = "http://www.w3.org/2000/svg";

fn line_body(model: &LineChartModel) -> String {
    let proj = model.project();
    let style = &model.style;
    let mut out = String::new();
    if !proj.outline.is_empty() {
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}" fill-opacity="{}"/>"#,
            proj.area_path().to_svg_data(),
            style.fill.to_hex(),
            svg_number(style.fill.a),
        );
    }
    if proj.points.len() >= 2 {
        let _ = writeln!(
            out,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            proj.polyline_points(),
            style.stroke.to_hex(),
            svg_number(style.stroke_width),
        );
    }
    for p in &proj.points {
        let _ = writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            svg_number(p.x),
            svg_number(p.y),
            svg_number(style.point_radius),
            style.point_fill.to_hex(),
        );
    }
    out
}

fn bar_body(model: &BarChartModel) -> String {
    let mut out = String::new();
    for (i, bar) in model.bars().iter().enumerate() {
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            svg_number(bar.x),
            svg_number(bar.y),
            svg_number(bar.w),
            svg_number(bar.h),
            model.fill(i).to_hex(),
        );
    }
    out
}

fn donut_body(model: &DonutChartModel) -> String {
    let style = &model.style;
    let legend = model.legend();
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="10"/>"#,
        svg_number(style.center.x),
        svg_number(style.center.y),
        svg_number(style.radius),
        style.track.to_hex(),
    );
    for seg in model.segments() {
        let title = legend
            .get(seg.category)
            .map(|(label, share, _)| format!("{} ({}%)", xml_escape(label), svg_number(*share)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}"><title>{}</title></path>"#,
            seg.path.to_svg_data(),
            model.color(seg.category).to_hex(),
            title,
        );
    }
    let _ = writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        svg_number(style.center.x),
        svg_number(style.center.y),
        svg_number(style.hole_radius),
        style.track.to_hex(),
    );
    out
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn viewbox_svg(body: &str) -> String {
    format!(
        "<svg xmlns=\"{XMLNS}\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">\n{body}</svg>\n"
    )
}

fn placed_svg(x: f32, y: f32, w: f32, h: f32, body: &str) -> String {
    format!(
        "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">\n{body}</svg>\n",
        svg_number(x),
        svg_number(y),
        svg_number(w),
        svg_number(h),
    )
}

pub fn line_chart_svg(model: &LineChartModel) -> String {
    viewbox_svg(&line_body(model))
}

pub fn bar_chart_svg(model: &BarChartModel) -> String {
    viewbox_svg(&bar_body(model))
}

pub fn donut_chart_svg(model: &DonutChartModel) -> String {
    viewbox_svg(&donut_body(model))
}

/// One document with the three panels in the mock layout: the traffic line
/// panel across two thirds, bars and donut stacked in the last third.
pub fn dashboard_svg(model: &DashboardModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<svg xmlns=\"{XMLNS}\" viewBox=\"0 0 320 100\">");
    out.push_str(&placed_svg(0.0, 0.0, 210.0, 100.0, &line_body(&model.traffic)));
    out.push_str(&placed_svg(220.0, 0.0, 100.0, 45.0, &bar_body(&model.channels)));
    out.push_str(&placed_svg(220.0, 55.0, 100.0, 45.0, &donut_body(&model.sources)));
    let days = &model.day_labels;
    for (i, day) in days.iter().enumerate() {
        let x = (i as f32 + 0.5) / days.len().max(1) as f32 * 210.0;
        let _ = writeln!(
            out,
            r##"<text x="{}" y="99" font-size="4" text-anchor="middle" fill="#FFFFFF" fill-opacity="0.4">{}</text>"##,
            svg_number(x),
            xml_escape(day),
        );
    }
    out.push_str("</svg>\n");
    out
}
