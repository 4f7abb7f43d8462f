//! Pointer-driven 3D tilt for card surfaces.
//!
//! The pointer position over a card is normalised to [-0.5, 0.5] on both axes
//! and mapped linearly to a rotation pair. A spring per axis smooths the
//! rotation so fast pointer motion lags instead of snapping. Clicking a card
//! "activates" it for inspection, which holds it flat.

use crate::constants::{
    CARD_MAX_TILT_DEG, CARD_SPRING_STIFFNESS, SHOWCASE_MAX_TILT_DEG, SHOWCASE_SPRING_STIFFNESS,
};
use crate::spring::{Spring, SpringConfig};
use glam::DVec2;

/// Bounding box of a surface in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Pointer offset from the surface center, in units of the surface size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub normalized_x: f64,
    pub normalized_y: f64,
}

impl PointerSample {
    pub const CENTER: Self = Self {
        normalized_x: 0.0,
        normalized_y: 0.0,
    };

    /// Not clamped: a pointer outside `rect` yields offsets beyond 0.5.
    /// A zero-sized rect yields the centered sample.
    pub fn from_client(pointer: DVec2, rect: SurfaceRect) -> Self {
        if rect.is_degenerate() {
            return Self::CENTER;
        }
        Self {
            normalized_x: (pointer.x - rect.left) / rect.width - 0.5,
            normalized_y: (pointer.y - rect.top) / rect.height - 0.5,
        }
    }
}

/// Rotation pair in degrees, as consumed by a CSS transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x_deg: f64,
    pub y_deg: f64,
}

impl Rotation {
    pub const NEUTRAL: Self = Self {
        x_deg: 0.0,
        y_deg: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!("rotateX({:.3}deg) rotateY({:.3}deg)", self.x_deg, self.y_deg)
    }
}

/// Linear map of `v` from `from` to `to`, unclamped.
#[inline]
pub fn map_range(v: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    to.0 + (v - from.0) / span * (to.1 - to.0)
}

/// Target rotation for a pointer sample.
///
/// Pointer above center (negative y) gives positive `x_deg`, tipping the top
/// edge away from the viewer; pointer right of center gives positive `y_deg`.
/// An active surface is always neutral.
pub fn compute_tilt(sample: PointerSample, active: bool, max_tilt_deg: f64) -> Rotation {
    if active {
        return Rotation::NEUTRAL;
    }
    Rotation {
        x_deg: map_range(sample.normalized_y, (-0.5, 0.5), (max_tilt_deg, -max_tilt_deg)),
        y_deg: map_range(sample.normalized_x, (-0.5, 0.5), (-max_tilt_deg, max_tilt_deg)),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_tilt_deg: f64,
    pub spring: SpringConfig,
}

impl TiltConfig {
    /// Project showcase cards: stronger tilt and a stiffer spring.
    pub fn showcase() -> Self {
        Self {
            max_tilt_deg: SHOWCASE_MAX_TILT_DEG,
            spring: SpringConfig::critically_damped(SHOWCASE_SPRING_STIFFNESS),
        }
    }

    pub fn card() -> Self {
        Self {
            max_tilt_deg: CARD_MAX_TILT_DEG,
            spring: SpringConfig::critically_damped(CARD_SPRING_STIFFNESS),
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::showcase()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TiltPhase {
    /// Not hovered, resting at neutral.
    #[default]
    Idle,
    /// Hovered, following the pointer.
    Tracking,
    /// Activated for inspection, held neutral.
    Frozen,
}

/// Tilt controller owned by a single card.
#[derive(Clone, Debug)]
pub struct TiltSurface {
    config: TiltConfig,
    phase: TiltPhase,
    hovered: bool,
    sample: PointerSample,
    spring_x: Spring,
    spring_y: Spring,
}

impl TiltSurface {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            phase: TiltPhase::Idle,
            hovered: false,
            sample: PointerSample::CENTER,
            spring_x: Spring::new(config.spring),
            spring_y: Spring::new(config.spring),
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == TiltPhase::Frozen
    }

    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    /// Rotation the springs are heading towards.
    pub fn target(&self) -> Rotation {
        compute_tilt(self.sample, self.is_active(), self.config.max_tilt_deg)
    }

    /// Rotation to render right now.
    pub fn rotation(&self) -> Rotation {
        if self.is_active() {
            return Rotation::NEUTRAL;
        }
        Rotation {
            x_deg: self.spring_x.value,
            y_deg: self.spring_y.value,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.spring_x.is_settled() && self.spring_y.is_settled()
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.phase == TiltPhase::Idle {
            self.set_phase(TiltPhase::Tracking);
        }
    }

    pub fn pointer_move(&mut self, pointer: DVec2, rect: SurfaceRect) {
        if !self.hovered {
            self.pointer_enter();
        }
        if self.is_active() {
            return;
        }
        self.sample = PointerSample::from_client(pointer, rect);
        self.retarget();
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.is_active() {
            return;
        }
        self.sample = PointerSample::CENTER;
        self.retarget();
        self.set_phase(TiltPhase::Idle);
    }

    pub fn toggle_active(&mut self) {
        let active = !self.is_active();
        self.set_active(active);
    }

    pub fn set_active(&mut self, active: bool) {
        self.sample = PointerSample::CENTER;
        if active {
            self.spring_x.snap_to(0.0);
            self.spring_y.snap_to(0.0);
            self.set_phase(TiltPhase::Frozen);
        } else {
            self.retarget();
            let next = if self.hovered {
                TiltPhase::Tracking
            } else {
                TiltPhase::Idle
            };
            self.set_phase(next);
        }
    }

    /// Advance the springs by one frame.
    pub fn step(&mut self, dt_sec: f64) -> Rotation {
        self.spring_x.step(dt_sec);
        self.spring_y.step(dt_sec);
        self.rotation()
    }

    fn retarget(&mut self) {
        let target = self.target();
        self.spring_x.set_target(target.x_deg);
        self.spring_y.set_target(target.y_deg);
    }

    fn set_phase(&mut self, next: TiltPhase) {
        if self.phase != next {
            log::debug!("[tilt] {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}

impl Default for TiltSurface {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}
