use super::reveal::visibility_observer;
use super::typewriter::{parse_texts, Typewriter, TypewriterSettings};
use crate::constants::{TYPEWRITER_CURSOR_CLASS, TYPEWRITER_SELECTOR};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn start_all(document: &web::Document) {
    for el in dom::query_all(document, TYPEWRITER_SELECTOR) {
        start(document, el);
    }
}

fn start(document: &web::Document, el: web::Element) {
    let texts = parse_texts(&el.get_attribute("data-texts").unwrap_or_default());
    let settings = TypewriterSettings::from_attributes(|name| el.get_attribute(name));
    let Some(tw) = Typewriter::new(texts, settings) else {
        return;
    };

    if tw.settings().show_cursor {
        if let Ok(cursor) = document.create_element("span") {
            cursor.set_class_name(TYPEWRITER_CURSOR_CLASS);
            cursor.set_text_content(Some(&tw.settings().cursor));
            _ = el.insert_adjacent_element("afterend", &cursor);
        }
    }

    let on_visible = tw.settings().start_on_visible;
    let tw = Rc::new(RefCell::new(tw));
    if !on_visible {
        run(el, tw);
        return;
    }
    let target = el.clone();
    let pending = RefCell::new(Some(tw.clone()));
    match visibility_observer(move |_, observer| {
        observer.disconnect();
        if let Some(tw) = pending.borrow_mut().take() {
            run(el.clone(), tw);
        }
    }) {
        Some(observer) => observer.observe(&target),
        None => run(target, tw),
    }
}

fn run(el: web::Element, tw: Rc<RefCell<Typewriter>>) {
    let step = tw.borrow_mut().step();
    el.set_text_content(Some(&step.text));
    if let Some(delay) = step.next_delay_ms {
        dom::set_timeout(delay as i32, move || run(el, tw));
    }
}
