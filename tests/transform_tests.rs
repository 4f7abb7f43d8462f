// Host-side tests for card transform strings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod transform {
    include!("../src/transform.rs");
}

use folio_core::Rotation;
use transform::card_transform;

#[test]
fn neutral_card_has_identity_scale() {
    assert_eq!(
        card_transform(Rotation::NEUTRAL, false),
        "perspective(1000px) rotateX(0.000deg) rotateY(0.000deg) scale(1)"
    );
}

#[test]
fn active_card_is_zoomed() {
    let css = card_transform(Rotation::NEUTRAL, true);
    assert!(css.ends_with("scale(1.1)"), "{css}");
}

#[test]
fn rotation_is_embedded() {
    let css = card_transform(
        Rotation {
            x_deg: 7.25,
            y_deg: -3.0,
        },
        false,
    );
    assert!(css.contains("rotateX(7.250deg) rotateY(-3.000deg)"));
}
