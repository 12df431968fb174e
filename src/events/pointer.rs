use crate::frame::WebDriver;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// `pointermove` / `pointerleave` handlers attached to the mounted canvas.
pub struct PointerListeners {
    target: web::HtmlCanvasElement,
    on_move: PointerClosure,
    on_leave: PointerClosure,
}

impl PointerListeners {
    pub fn remove(self) {
        _ = self.target.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.target.remove_event_listener_with_callback(
            "pointerleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
    }
}

/// Position of `ev` relative to the canvas box, plus that box's size, in CSS px.
#[inline]
fn pointer_local(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let local = Vec2::new(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    );
    (local, Vec2::new(rect.width() as f32, rect.height() as f32))
}

pub fn wire_pointer(
    canvas: &web::HtmlCanvasElement,
    driver: Weak<RefCell<WebDriver>>,
) -> Option<PointerListeners> {
    let canvas_move = canvas.clone();
    let driver_move = driver.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(driver) = driver_move.upgrade() else {
            return;
        };
        let (local, size) = pointer_local(&ev, &canvas_move);
        if let Ok(mut d) = driver.try_borrow_mut() {
            d.pointer_move(local, size);
        }
    }) as Box<dyn FnMut(web::PointerEvent)>);

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        if let Some(driver) = driver.upgrade() {
            if let Ok(mut d) = driver.try_borrow_mut() {
                d.pointer_leave();
            }
        }
    }) as Box<dyn FnMut(web::PointerEvent)>);

    let wired = canvas
        .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
        .and_then(|_| {
            canvas.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref())
        });
    let listeners = PointerListeners {
        target: canvas.clone(),
        on_move,
        on_leave,
    };
    match wired {
        Ok(()) => Some(listeners),
        Err(e) => {
            log::warn!("[pointer] listener wiring failed: {:?}", e);
            listeners.remove();
            None
        }
    }
}
