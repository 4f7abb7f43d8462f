use crate::dom;
use crate::view;
use folio_core::view_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    // leave typing in form fields alone
    if let Some(target) = ev.target() {
        if let Ok(el) = target.dyn_into::<web::Element>() {
            let tag = el.tag_name();
            if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
                return;
            }
        }
    }
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let current = view::current(document);
    if let Some(next) = view_for_key(&ev.key(), current) {
        view::show(document, next);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(document: &web::Document) {
    let doc = document.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window.into(), "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &doc);
        });
    }
}
