use crate::constants::{BACK_HOME_ID, NAV_LINK_SELECTOR, OPEN_RESUME_ID, PRINT_BUTTON_ID};
use crate::dom;
use crate::view;
use folio_core::{View, NAV_SECTIONS};
use web_sys as web;

/// Section links, the resume toggle buttons and print.
pub fn wire_navigation(document: &web::Document) {
    wire_section_links(document);

    let doc = document.clone();
    dom::add_click_listener(document, OPEN_RESUME_ID, move || {
        view::show(&doc, View::Resume);
    });
    let doc = document.clone();
    dom::add_click_listener(document, BACK_HOME_ID, move || {
        view::show(&doc, View::Home);
    });
    dom::add_click_listener(document, PRINT_BUTTON_ID, view::print);
}

fn wire_section_links(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(anchor) = link.get_attribute("data-nav") else {
            continue;
        };
        if !NAV_SECTIONS.iter().any(|(id, _)| *id == anchor) {
            log::warn!("[nav] unknown section '{}'", anchor);
            continue;
        }
        let doc = document.clone();
        dom::add_listener(&link.into(), "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            if view::current(&doc) != View::Home {
                view::show(&doc, View::Home);
            }
            dom::scroll_to_anchor(&doc, &anchor);
        });
    }
}
