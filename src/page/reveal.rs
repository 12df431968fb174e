use crate::constants::{REVEAL_CLASS, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observer firing `on_visible(target, observer)` for each entry that becomes
/// at least [`REVEAL_THRESHOLD`] visible. The callback lives for the page.
pub fn visibility_observer(
    mut on_visible: impl FnMut(web::Element, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    if !dom::has_global("IntersectionObserver") {
        return None;
    }
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target(), &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok()?;
    closure.forget();
    Some(observer)
}

pub fn observe_all(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let Some(observer) = visibility_observer(|target, observer| {
        _ = target.class_list().add_1(REVEAL_CLASS);
        observer.unobserve(&target);
    }) else {
        // No observer support: reveal everything up front.
        for el in &elements {
            _ = el.class_list().add_1(REVEAL_CLASS);
        }
        return;
    };
    for el in &elements {
        observer.observe(el);
    }
}
