//! Radar (polar) chart geometry for the skills section.
//!
//! Each skill category becomes one axis. Axis 0 points straight up and the
//! remaining axes follow clockwise in screen space (y grows downwards).

use crate::constants::{RADAR_LABEL_OFFSET, RADAR_MAX_VALUE, RADAR_PADDING, RADAR_SIZE};
use crate::content::SkillCategory;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RadarError {
    #[error("radar radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("radar max value must be finite and positive, got {0}")]
    InvalidScale(f64),
}

/// Where and how large the chart is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    pub center: DVec2,
    pub radius: f64,
    pub max_value: f64,
    pub label_offset: f64,
}

impl RadarLayout {
    /// Square chart of `size` px with the outer ring inset by the label padding.
    pub fn for_size(size: f64) -> Self {
        Self {
            center: DVec2::splat(size / 2.0),
            radius: size / 2.0 - RADAR_PADDING,
            max_value: RADAR_MAX_VALUE,
            label_offset: RADAR_LABEL_OFFSET,
        }
    }
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self::for_size(RADAR_SIZE)
    }
}

/// One projected data vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarPoint {
    pub category_index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadarChart {
    pub center: DVec2,
    pub radius: f64,
    pub max_value: f64,
    pub points: Vec<RadarPoint>,
    pub data_polygon: Vec<DVec2>,
    pub reference_polygon: Vec<DVec2>,
    pub axis_endpoints: Vec<DVec2>,
    pub label_anchors: Vec<DVec2>,
}

impl RadarChart {
    fn empty(layout: &RadarLayout) -> Self {
        Self {
            center: layout.center,
            radius: layout.radius,
            max_value: layout.max_value,
            points: Vec::new(),
            data_polygon: Vec::new(),
            reference_polygon: Vec::new(),
            axis_endpoints: Vec::new(),
            label_anchors: Vec::new(),
        }
    }

    pub fn axis_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Angle of `axis` in radians; axis 0 sits at -pi/2.
#[inline]
pub fn axis_angle(axis: usize, axis_count: usize) -> f64 {
    if axis_count == 0 {
        return -FRAC_PI_2;
    }
    axis as f64 * (TAU / axis_count as f64) - FRAC_PI_2
}

/// Place `value` on `axis`. The single mapping shared by data, reference,
/// axis and label geometry.
#[inline]
pub fn project_point(
    center: DVec2,
    radius: f64,
    max_value: f64,
    axis: usize,
    axis_count: usize,
    value: f64,
) -> DVec2 {
    if axis_count == 0 {
        return center;
    }
    let angle = axis_angle(axis, axis_count);
    let r = (value / max_value) * radius;
    DVec2::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Project category averages onto a regular polygon.
///
/// An empty category list yields an empty chart. Categories without skills
/// contribute 0 on their axis.
pub fn project_radar(
    categories: &[SkillCategory],
    layout: &RadarLayout,
) -> Result<RadarChart, RadarError> {
    if !layout.radius.is_finite() || layout.radius <= 0.0 {
        return Err(RadarError::InvalidRadius(layout.radius));
    }
    if !layout.max_value.is_finite() || layout.max_value <= 0.0 {
        return Err(RadarError::InvalidScale(layout.max_value));
    }

    let mut chart = RadarChart::empty(layout);
    let n = categories.len();
    if n == 0 {
        return Ok(chart);
    }

    let RadarLayout {
        center,
        radius,
        max_value,
        label_offset,
    } = *layout;
    let at = |axis: usize, r: f64, value: f64| project_point(center, r, max_value, axis, n, value);

    for (i, cat) in categories.iter().enumerate() {
        let value = cat.aggregate();
        let p = at(i, radius, value);
        chart.points.push(RadarPoint {
            category_index: i,
            value,
            x: p.x,
            y: p.y,
        });
        chart.data_polygon.push(p);
        chart.reference_polygon.push(at(i, radius, max_value));
        chart.axis_endpoints.push(at(i, radius, max_value));
        chart.label_anchors.push(at(i, radius + label_offset, max_value));
    }
    Ok(chart)
}

/// Display-only rounding of an aggregate, e.g. `87.6` -> `"88%"`.
pub fn percent_label(value: f64) -> String {
    format!("{}%", value.round() as i64)
}
