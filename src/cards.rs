use crate::constants::{PLAIN_CARD_SELECTOR, SHOWCASE_CARD_SELECTOR};
use crate::dom;
use crate::transform::card_transform;
use folio_core::{TiltConfig, TiltSurface};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A DOM element and the tilt controller that drives it.
pub struct TiltCard {
    pub element: web::HtmlElement,
    pub surface: TiltSurface,
    /// Click toggles inspect mode.
    pub clickable: bool,
    /// Needs a transform write on the next frame even if settled.
    pub dirty: bool,
}

impl TiltCard {
    pub fn new(element: web::HtmlElement, config: TiltConfig, clickable: bool) -> Self {
        Self {
            element,
            surface: TiltSurface::new(config),
            clickable,
            dirty: true,
        }
    }

    pub fn apply(&self) {
        let css = card_transform(self.surface.rotation(), self.surface.is_active());
        dom::set_transform(&self.element, &css);
    }
}

pub type SharedCards = Rc<RefCell<Vec<TiltCard>>>;

/// Showcase cards tilt harder and can be clicked; plain cards only tilt.
pub fn collect(document: &web::Document) -> Vec<TiltCard> {
    let mut cards: Vec<TiltCard> = dom::query_all(document, SHOWCASE_CARD_SELECTOR)
        .into_iter()
        .map(|el| TiltCard::new(el, TiltConfig::showcase(), true))
        .collect();
    cards.extend(
        dom::query_all(document, PLAIN_CARD_SELECTOR)
            .into_iter()
            .map(|el| TiltCard::new(el, TiltConfig::card(), false)),
    );
    log::info!("[cards] bound {} tilt surfaces", cards.len());
    cards
}
