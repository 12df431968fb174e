//! Glue for the portfolio page hosting the background: theme switch, scroll
//! reveal, skill dots, smooth in-page anchors and the hero typewriter.
//! Each piece silently skips elements that are not on the page.

mod anchors;
pub mod attrs;
mod dots;
mod reveal;
mod text_type;
mod theme;
pub mod typewriter;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    theme::init(document);
    dots::render_all(document);
    anchors::wire_all(document);
    reveal::observe_all(document);
    text_type::start_all(document);
    log::debug!("[page] glue wired");
}

/// Run [`init`] now, or on `DOMContentLoaded` if the document is still parsing.
pub fn init_when_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        init(document);
        return;
    }
    let doc = document.clone();
    let closure = Closure::once_into_js(move || init(&doc));
    _ = document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
}
