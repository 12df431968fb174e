//! `requestAnimationFrame` host for the shared [`AnimationDriver`].

use crate::events::PointerListeners;
use crate::render::GpuState;
use crate::surface::DomSurface;
use instant::Instant;
use lines_core::driver::{AnimationDriver, FrameHost};
use lines_core::surface::SurfaceState;
use lines_core::uniforms::LineUniforms;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebDriver = AnimationDriver<WebHost>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct WebHost {
    started: Instant,
    tick: TickSlot,
    gpu: Option<GpuState>,
    surface: DomSurface,
    pointer: Option<PointerListeners>,
}

impl WebHost {
    pub fn new(surface: DomSurface, gpu: GpuState) -> Self {
        Self {
            started: Instant::now(),
            tick: Rc::new(RefCell::new(None)),
            gpu: Some(gpu),
            surface,
            pointer: None,
        }
    }

    /// Seconds since mount.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    #[inline]
    pub fn surface(&self) -> &DomSurface {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut DomSurface {
        &mut self.surface
    }

    pub fn set_pointer(&mut self, listeners: PointerListeners) {
        self.pointer = Some(listeners);
    }
}

impl FrameHost for WebHost {
    type Handle = i32;
    type Error = wgpu::SurfaceError;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let slot = self.tick.borrow();
        let cb = slot.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }

    fn configure_surface(&mut self, surface: &SurfaceState) -> SurfaceState {
        let applied = match &mut self.gpu {
            Some(gpu) => gpu.resize_if_needed(surface),
            None => *surface,
        };
        self.surface.apply(&applied);
        applied
    }

    fn push_uniforms(&mut self, uniforms: &LineUniforms) {
        if let Some(gpu) = &self.gpu {
            gpu.write_uniforms(uniforms);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        match &mut self.gpu {
            Some(gpu) => gpu.render(),
            None => Ok(()),
        }
    }

    fn release(&mut self) {
        if let Some(pointer) = self.pointer.take() {
            pointer.remove();
        }
        self.surface.detach();
        // Drops the tick closure and with it the loop's hold on the driver.
        self.tick.borrow_mut().take();
        if let Some(gpu) = self.gpu.take() {
            gpu.dispose();
        }
    }
}

/// Install the frame callback and move the driver to Running.
pub fn start_loop(driver: &Rc<RefCell<WebDriver>>) {
    let driver_tick = driver.clone();
    let tick = Closure::wrap(Box::new(move |_timestamp: f64| {
        if let Ok(mut d) = driver_tick.try_borrow_mut() {
            let elapsed = d.host().elapsed_secs();
            d.tick(elapsed);
        }
    }) as Box<dyn FnMut(f64)>);

    let mut d = driver.borrow_mut();
    *d.host().tick.borrow_mut() = Some(tick);
    let size = d.host().surface().measure();
    d.start(size);
}
