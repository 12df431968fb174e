use crate::constants::ANCHOR_SELECTOR;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let href_el = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(target_id) = href_el.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; querySelector errors and we skip.
            if let Ok(Some(target)) = doc.query_selector(&target_id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
