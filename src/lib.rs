#![cfg(target_arch = "wasm32")]
use lines_core::config::{normalize, FloatingLinesOptions};
use lines_core::driver::AnimationDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod page;
mod render;
mod surface;

use frame::{WebDriver, WebHost};
use surface::DomSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lines-web starting");

    if let Some(document) = dom::window_document() {
        page::init_when_ready(&document);
    }
    Ok(())
}

/// Options object from JS. `undefined`, `null` or anything unparsable gives defaults.
fn read_options(options: &JsValue) -> FloatingLinesOptions {
    if options.is_undefined() || options.is_null() {
        return FloatingLinesOptions::default();
    }
    let json = js_sys::JSON::stringify(options)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    FloatingLinesOptions::from_json(&json).unwrap_or_else(|e| {
        log::warn!("[mount] options ignored: {}", e);
        FloatingLinesOptions::default()
    })
}

fn noop_cleanup() -> js_sys::Function {
    js_sys::Function::new_no_args("")
}

/// Mount a floating-lines canvas into `container`.
///
/// Resolves with a cleanup function once the first frame is scheduled.
/// Rejects if WebGPU is unavailable; the canvas is removed first.
#[wasm_bindgen(js_name = mountFloatingLines)]
pub async fn mount_floating_lines(
    container: JsValue,
    options: JsValue,
) -> Result<js_sys::Function, JsValue> {
    let Ok(container) = container.dyn_into::<web::HtmlElement>() else {
        log::warn!("[mount] container is not an element; nothing mounted");
        return Ok(noop_cleanup());
    };
    let params = normalize(&read_options(&options));

    let mut surface = DomSurface::attach(&container, &params.mix_blend_mode)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let size = surface.measure();
    surface.apply(&size);
    let (css_w, css_h) = surface.css_size();
    log::info!(
        "[mount] container {}x{} css px, ratio {}",
        css_w,
        css_h,
        size.pixel_ratio
    );

    let gpu = match render::GpuState::new(surface.canvas(), size).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            surface.detach();
            return Err(JsValue::from_str(&e.to_string()));
        }
    };

    let interactive = params.interactive;
    let driver: Rc<RefCell<WebDriver>> = Rc::new(RefCell::new(AnimationDriver::new(
        params,
        WebHost::new(surface, gpu),
    )));

    {
        let weak = Rc::downgrade(&driver);
        let mut d = driver.borrow_mut();
        d.host_mut().surface_mut().observe(move || {
            let Some(driver) = weak.upgrade() else {
                return;
            };
            if let Ok(mut d) = driver.try_borrow_mut() {
                let size = d.host().surface().measure();
                d.resize(size);
            }
        });
        if interactive {
            let canvas = d.host().surface().canvas().clone();
            if let Some(listeners) = events::wire_pointer(&canvas, Rc::downgrade(&driver)) {
                d.host_mut().set_pointer(listeners);
            }
        }
    }

    frame::start_loop(&driver);

    let cleanup = Closure::wrap(Box::new(move || match driver.try_borrow_mut() {
        Ok(mut d) => d.cleanup(),
        Err(_) => log::warn!("[mount] cleanup called during a frame; ignored"),
    }) as Box<dyn FnMut()>);
    Ok(cleanup.into_js_value().unchecked_into())
}
