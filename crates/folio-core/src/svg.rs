//! SVG markup for the skills radar chart.

use crate::constants::{RADAR_POINT_RADIUS, RADAR_TOOLTIP_LIFT};
use crate::content::SkillCategory;
use crate::radar::{percent_label, RadarChart};
use glam::DVec2;
use std::fmt::Write;

/// `points` attribute value: `"x,y x,y ..."`.
pub fn points_attr(points: &[DVec2]) -> String {
    let mut out = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render `chart` as a standalone `<svg>` element sized `size` px.
///
/// `categories` supplies the axis labels and must be the slice the chart was
/// projected from.
pub fn radar_svg(chart: &RadarChart, categories: &[SkillCategory], size: f64) -> String {
    let mut svg = String::new();
    _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' class='radar' width='{size}' height='{size}' viewBox='0 0 {size} {size}'>"
    );
    if chart.is_empty() {
        svg.push_str("</svg>");
        return svg;
    }

    _ = write!(
        svg,
        "<polygon class='radar-bg' points='{}' fill='rgba(255,255,255,0.02)' stroke='rgba(255,255,255,0.1)' stroke-width='1'/>",
        points_attr(&chart.reference_polygon)
    );

    for end in &chart.axis_endpoints {
        _ = write!(
            svg,
            "<line class='radar-axis' x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='rgba(255,255,255,0.1)' stroke-dasharray='4 4'/>",
            chart.center.x, chart.center.y, end.x, end.y
        );
    }

    _ = write!(
        svg,
        "<polygon class='radar-data' points='{}' fill='rgba(99,102,241,0.2)' stroke='#6366f1' stroke-width='2'/>",
        points_attr(&chart.data_polygon)
    );

    for (point, anchor) in chart.points.iter().zip(&chart.label_anchors) {
        let label = categories
            .get(point.category_index)
            .map(SkillCategory::short_label)
            .unwrap_or("");
        svg.push_str("<g class='radar-point'>");
        _ = write!(
            svg,
            "<circle cx='{:.2}' cy='{:.2}' r='{}' fill='#a855f7'/>",
            point.x, point.y, RADAR_POINT_RADIUS
        );
        _ = write!(
            svg,
            "<text class='radar-tooltip' x='{:.2}' y='{:.2}' text-anchor='middle' fill='white' font-size='12'>{}</text>",
            point.x,
            point.y - RADAR_TOOLTIP_LIFT,
            percent_label(point.value)
        );
        _ = write!(
            svg,
            "<text class='radar-label' x='{:.2}' y='{:.2}' text-anchor='middle' alignment-baseline='middle'>{}</text>",
            anchor.x,
            anchor.y,
            escape_xml(label)
        );
        svg.push_str("</g>");
    }
    svg.push_str("</svg>");
    svg
}
