use crate::constants::{
    THEME_DARK, THEME_LIGHT, THEME_STORAGE_KEY, THEME_TOGGLE_ID, THEME_TRANSITION_CLASS,
    THEME_TRANSITION_MS,
};
use crate::dom;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

#[inline]
fn is_light(root: &web::Element) -> bool {
    root.class_list().contains(THEME_LIGHT)
}

pub fn init(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let saved = storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    if saved.as_deref() == Some(THEME_LIGHT) {
        _ = root.class_list().add_1(THEME_LIGHT);
    }
    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    _ = toggle.set_attribute("aria-checked", &is_light(&root).to_string());

    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let cl = root.class_list();
        _ = cl.add_1(THEME_TRANSITION_CLASS);
        let light = cl.toggle(THEME_LIGHT).unwrap_or_else(|_| is_light(&root));
        if let Some(s) = storage() {
            _ = s.set_item(THEME_STORAGE_KEY, if light { THEME_LIGHT } else { THEME_DARK });
        }
        _ = toggle.set_attribute("aria-checked", &light.to_string());
        let root_later = root.clone();
        dom::set_timeout(THEME_TRANSITION_MS, move || {
            _ = root_later.class_list().remove_1(THEME_TRANSITION_CLASS);
        });
    });
}
