use super::attrs::skill_level;
use crate::constants::{DOTS_PER_SKILL, DOTS_SELECTOR, DOT_ACTIVE_CLASS};
use crate::dom;
use web_sys as web;

/// Fill every `.dots[data-level]` with a fixed row of dots, `level` of them lit.
pub fn render_all(document: &web::Document) {
    for el in dom::query_all(document, DOTS_SELECTOR) {
        let level = skill_level(el.get_attribute("data-level").as_deref());
        el.set_inner_html("");
        for i in 0..DOTS_PER_SKILL {
            let Ok(dot) = document.create_element("span") else {
                return;
            };
            if i < level {
                _ = dot.class_list().add_1(DOT_ACTIVE_CLASS);
            }
            _ = el.append_child(&dot);
        }
    }
}
