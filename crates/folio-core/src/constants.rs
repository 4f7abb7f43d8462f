// Shared layout and interaction tuning constants used by the web frontend.

// Radar chart layout
pub const RADAR_SIZE: f64 = 300.0; // svg viewport edge in px
pub const RADAR_PADDING: f64 = 40.0; // room left around the outer ring for labels
pub const RADAR_MAX_VALUE: f64 = 100.0; // full-scale skill level
pub const RADAR_LABEL_OFFSET: f64 = 20.0; // label anchors sit this far beyond the radius
pub const RADAR_TOOLTIP_LIFT: f64 = 15.0; // percentage tooltip offset above a data point
pub const RADAR_POINT_RADIUS: f64 = 4.0;

// Skill detail bars
pub const SKILL_BARS_PER_CATEGORY: usize = 4;

// Tilt surfaces (degrees)
pub const SHOWCASE_MAX_TILT_DEG: f64 = 15.0; // project showcase cards
pub const CARD_MAX_TILT_DEG: f64 = 10.0; // generic 3d cards

// Spring smoothing
pub const SHOWCASE_SPRING_STIFFNESS: f64 = 300.0;
pub const CARD_SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_REST_DELTA: f64 = 0.01; // degrees
pub const SPRING_REST_SPEED: f64 = 0.01; // degrees per second
pub const SPRING_MAX_SUBSTEP_SEC: f64 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f64 = 0.1; // long frames (hidden tab) are clamped to this
