use crate::constants::{ACTIVE_CARD_SCALE, CARD_PERSPECTIVE_PX};
use folio_core::Rotation;

/// CSS transform for a tilt card. Inspect mode zooms the card; the rotation
/// is already neutral there.
#[inline]
pub fn card_transform(rotation: Rotation, active: bool) -> String {
    let scale = if active { ACTIVE_CARD_SCALE } else { 1.0 };
    format!(
        "perspective({}px) {} scale({})",
        CARD_PERSPECTIVE_PX,
        rotation.to_css(),
        scale
    )
}
