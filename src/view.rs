use crate::constants::HIDDEN_CLASS;
use folio_core::View;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    let cl = el.class_list();
    // inline display is a fallback for pages without the utility class;
    // only that one property is touched
    let style = el.dyn_ref::<web::HtmlElement>().map(|h| h.style());
    if visible {
        _ = cl.remove_1(HIDDEN_CLASS);
        if let Some(style) = style {
            _ = style.remove_property("display");
        }
    } else {
        _ = cl.add_1(HIDDEN_CLASS);
        if let Some(style) = style {
            _ = style.set_property("display", "none");
        }
    }
}

/// Show `view` and hide the others.
pub fn show(document: &web::Document, view: View) {
    for v in View::all() {
        set_visible(document, v.element_id(), v == view);
    }
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
    log::info!("[view] {:?}", view);
}

#[inline]
pub fn current(document: &web::Document) -> View {
    let hidden = |id: &str| {
        document
            .get_element_by_id(id)
            .map(|el| el.class_list().contains(HIDDEN_CLASS))
            .unwrap_or(true)
    };
    if hidden(View::Home.element_id()) && !hidden(View::Resume.element_id()) {
        View::Resume
    } else {
        View::Home
    }
}

pub fn print() {
    if let Some(w) = web::window() {
        if let Err(e) = w.print() {
            log::error!("print failed: {:?}", e);
        }
    }
}
