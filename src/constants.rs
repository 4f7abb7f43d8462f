/// DOM hooks the frontend binds to.
///
/// The host page provides these ids and classes; keeping them here keeps
/// string literals out of the wiring code.
// Data-driven containers
pub const HERO_CONTAINER_ID: &str = "hero-body";
pub const ABOUT_CONTAINER_ID: &str = "about-body";
pub const RADAR_CONTAINER_ID: &str = "skill-radar";
pub const SKILL_BARS_CONTAINER_ID: &str = "skill-bars";
pub const PROJECTS_CONTAINER_ID: &str = "projects-grid";
pub const EXPERIENCE_CONTAINER_ID: &str = "experience-list";
pub const EDUCATION_CONTAINER_ID: &str = "education-list";
pub const CONTACT_CONTAINER_ID: &str = "contact-body";
pub const RESUME_CONTAINER_ID: &str = "resume-body";

// Tilt surfaces
pub const SHOWCASE_CARD_SELECTOR: &str = ".project-card";
pub const PLAIN_CARD_SELECTOR: &str = ".card-3d"; // experience articles carry this class
pub const ACTIVE_CARD_CLASS: &str = "is-active"; // inspect mode: scaled up, held flat

// Navigation
pub const NAV_LINK_SELECTOR: &str = "[data-nav]"; // value is a section anchor id
pub const OPEN_RESUME_ID: &str = "open-resume";
pub const BACK_HOME_ID: &str = "back-home";
pub const PRINT_BUTTON_ID: &str = "print-resume";
pub const HIDDEN_CLASS: &str = "hidden";

// Card depth perspective applied in front of the tilt rotation (px)
pub const CARD_PERSPECTIVE_PX: f64 = 1000.0;
// Inspect mode zoom
pub const ACTIVE_CARD_SCALE: f64 = 1.1;
