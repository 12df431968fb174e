//! DOM side of the render surface: the mounted `<canvas>`, its sizing against
//! the container, and resize observation.

use crate::constants::{CANVAS_CLASS, CANVAS_STYLE};
use crate::dom;
use lines_core::surface::SurfaceState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomSurface {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    observer: Option<web::ResizeObserver>,
    on_resize: Option<Closure<dyn FnMut(js_sys::Array)>>,
}

impl DomSurface {
    /// Create a canvas filling `container` and apply the container blend mode.
    pub fn attach(container: &web::HtmlElement, mix_blend_mode: &str) -> anyhow::Result<Self> {
        let document = container
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("container is not in a document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_class_name(CANVAS_CLASS);
        _ = canvas.set_attribute("style", CANVAS_STYLE);
        _ = container
            .style()
            .set_property("mix-blend-mode", mix_blend_mode);
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
        Ok(Self {
            container: container.clone(),
            canvas,
            observer: None,
            on_resize: None,
        })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Container layout size in CSS pixels.
    pub fn css_size(&self) -> (f64, f64) {
        (
            self.container.client_width() as f64,
            self.container.client_height() as f64,
        )
    }

    /// Drawable size for the container at the current device pixel ratio.
    pub fn measure(&self) -> SurfaceState {
        let (w, h) = self.css_size();
        SurfaceState::measure(w, h, dom::device_pixel_ratio())
    }

    /// Set the canvas backing store to `surface`.
    pub fn apply(&self, surface: &SurfaceState) {
        self.canvas.set_width(surface.width);
        self.canvas.set_height(surface.height);
    }

    /// Call `on_resize` whenever the container box changes. Without
    /// `ResizeObserver` the surface keeps its initial size.
    pub fn observe(&mut self, mut on_resize: impl FnMut() + 'static) {
        if !dom::has_global("ResizeObserver") {
            log::info!("[surface] ResizeObserver unavailable; size fixed at mount");
            return;
        }
        let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            on_resize();
        }) as Box<dyn FnMut(js_sys::Array)>);
        match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.container);
                self.observer = Some(observer);
                self.on_resize = Some(closure);
            }
            Err(e) => log::warn!("[surface] ResizeObserver failed: {:?}", e),
        }
    }

    /// Stop observing and remove the canvas from the page.
    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.on_resize = None;
        self.canvas.remove();
    }
}
