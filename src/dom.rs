use folio_core::SurfaceRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a typed listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn set_inner_html(document: &web::Document, element_id: &str, html: &str) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => {
            log::warn!("[dom] missing #{}", element_id);
            false
        }
    }
}

#[inline]
pub fn surface_rect(el: &web::Element) -> SurfaceRect {
    let rect = el.get_bounding_client_rect();
    SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, transform: &str) {
    _ = el.style().set_property("transform", transform);
}

pub fn scroll_to_anchor(document: &web::Document, anchor_id: &str) {
    if let Some(el) = document.get_element_by_id(anchor_id) {
        el.scroll_into_view();
    }
}
