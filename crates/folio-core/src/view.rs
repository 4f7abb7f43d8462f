//! Top-level page views and in-page navigation targets.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Resume,
}

impl View {
    pub fn toggle(self) -> Self {
        match self {
            View::Home => View::Resume,
            View::Resume => View::Home,
        }
    }

    /// Id of the container element holding this view.
    pub fn element_id(self) -> &'static str {
        match self {
            View::Home => "view-home",
            View::Resume => "view-resume",
        }
    }

    pub fn all() -> [View; 2] {
        [View::Home, View::Resume]
    }
}

/// Home page sections in scroll order: (anchor id, nav label).
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

/// Keyboard shortcuts between views.
pub fn view_for_key(key: &str, current: View) -> Option<View> {
    match (key, current) {
        ("Escape", View::Resume) => Some(View::Home),
        ("r" | "R", View::Home) => Some(View::Resume),
        _ => None,
    }
}
