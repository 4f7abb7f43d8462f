// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::{
    CARD_MAX_TILT_DEG, CARD_SPRING_STIFFNESS, NAV_SECTIONS, RADAR_LABEL_OFFSET, RADAR_PADDING,
    RADAR_SIZE, SHOWCASE_MAX_TILT_DEG, SHOWCASE_SPRING_STIFFNESS, SPRING_MAX_FRAME_SEC,
    SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA,
};

#[test]
#[allow(clippy::assertions_on_constants)]
fn radar_labels_fit_inside_viewport() {
    // labels sit between the outer ring and the svg edge
    assert!(RADAR_LABEL_OFFSET < RADAR_PADDING);
    assert!(RADAR_SIZE / 2.0 - RADAR_PADDING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_presets_are_ordered() {
    assert!(SHOWCASE_MAX_TILT_DEG > CARD_MAX_TILT_DEG);
    assert!(CARD_MAX_TILT_DEG > 0.0);
    assert!(SHOWCASE_SPRING_STIFFNESS > CARD_SPRING_STIFFNESS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_steps_are_sane() {
    assert!(SPRING_MAX_SUBSTEP_SEC < SPRING_MAX_FRAME_SEC);
    assert!(SPRING_REST_DELTA > 0.0);
    // substep stays well inside the stable range of the stiffest spring
    assert!(SHOWCASE_SPRING_STIFFNESS.sqrt() * SPRING_MAX_SUBSTEP_SEC < 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_presentation_constants() {
    assert!(ACTIVE_CARD_SCALE >= 1.0);
    assert!(CARD_PERSPECTIVE_PX > 0.0);
    assert!(SHOWCASE_CARD_SELECTOR.starts_with('.'));
    assert!(PLAIN_CARD_SELECTOR.starts_with('.'));
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        HERO_CONTAINER_ID,
        ABOUT_CONTAINER_ID,
        EDUCATION_CONTAINER_ID,
        CONTACT_CONTAINER_ID,
        RADAR_CONTAINER_ID,
        SKILL_BARS_CONTAINER_ID,
        PROJECTS_CONTAINER_ID,
        EXPERIENCE_CONTAINER_ID,
        RESUME_CONTAINER_ID,
        OPEN_RESUME_ID,
        BACK_HOME_ID,
        PRINT_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(!NAV_SECTIONS.iter().any(|(id, _)| id == a));
    }
}
