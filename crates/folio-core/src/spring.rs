//! Damped spring used to smooth tilt angles frame by frame.

use crate::constants::{
    SPRING_MASS, SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA,
    SPRING_REST_SPEED,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Damping ratio of exactly 1: fastest approach without overshoot.
    pub fn critically_damped(stiffness: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * SPRING_MASS).sqrt(),
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
    pub config: SpringConfig,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
            config,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump straight to `value` with no motion left.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.value == self.target
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f64) -> f64 {
        if self.is_settled() || dt_sec.is_nan() || dt_sec <= 0.0 {
            return self.value;
        }
        let dt = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let substeps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / f64::from(substeps);
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
            ..
        } = self.config;
        for _ in 0..substeps {
            let accel = (k * (self.target - self.value) - c * self.velocity) / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }
        if (self.target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
