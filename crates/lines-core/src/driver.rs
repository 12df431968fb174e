//! Per-frame update/render cycle and session lifecycle.
//!
//! The driver owns the render parameters, the interaction tracker, the current
//! surface size and the uniform block. Everything platform-specific (frame
//! scheduling, GPU surface, listeners) sits behind [`FrameHost`], so the same
//! state machine runs under `requestAnimationFrame` in the browser and under a
//! winit event loop natively.
//!
//! Within a tick the order is fixed: smoothing, uniform upload, render, then
//! scheduling of the next frame. Cleanup cancels the pending frame before the
//! host releases its resources.

use crate::config::RenderParameters;
use crate::interaction::InteractionTracker;
use crate::surface::SurfaceState;
use crate::uniforms::LineUniforms;
use glam::Vec2;

/// Platform services needed by [`AnimationDriver`].
pub trait FrameHost {
    /// Token identifying a scheduled frame callback.
    type Handle;
    type Error: std::fmt::Debug;

    /// Schedule the next tick. `None` if the host cannot schedule.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
    /// Resize the drawable to `surface` and return the extent actually
    /// configured, which may be smaller if the device limits it.
    fn configure_surface(&mut self, surface: &SurfaceState) -> SurfaceState;
    fn push_uniforms(&mut self, uniforms: &LineUniforms);
    fn render(&mut self) -> Result<(), Self::Error>;
    /// Detach listeners and free GPU resources. Called at most once.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

pub struct AnimationDriver<H: FrameHost> {
    host: H,
    params: RenderParameters,
    tracker: InteractionTracker,
    /// Extent the host configured; the uniform resolution always matches it.
    surface: SurfaceState,
    requested: SurfaceState,
    uniforms: LineUniforms,
    state: DriverState,
    pending: Option<H::Handle>,
    released: bool,
    frames: u64,
}

impl<H: FrameHost> AnimationDriver<H> {
    pub fn new(params: RenderParameters, host: H) -> Self {
        let tracker = InteractionTracker::new(&params);
        let uniforms = LineUniforms::new(&params);
        Self {
            host,
            params,
            tracker,
            surface: SurfaceState::default(),
            requested: SurfaceState::default(),
            uniforms,
            state: DriverState::Stopped,
            pending: None,
            released: false,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    #[inline]
    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    #[inline]
    pub fn uniforms(&self) -> &LineUniforms {
        &self.uniforms
    }

    #[inline]
    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Stopped -> Running once the initial surface size is known.
    pub fn start(&mut self, surface: SurfaceState) {
        if self.released || self.state == DriverState::Running {
            return;
        }
        self.apply_surface(surface);
        self.state = DriverState::Running;
        self.pending = self.host.request_frame();
        log::info!(
            "[driver] running {}x{} @{}x, layers: {:?}",
            self.surface.width,
            self.surface.height,
            self.surface.pixel_ratio,
            self.params.enabled_layers().collect::<Vec<_>>()
        );
    }

    /// Republish a new drawable size; visible from the next frame on.
    pub fn resize(&mut self, surface: SurfaceState) {
        if self.released || surface == self.requested {
            return;
        }
        self.apply_surface(surface);
        log::debug!(
            "[driver] resized to {}x{}",
            self.surface.width,
            self.surface.height
        );
    }

    fn apply_surface(&mut self, surface: SurfaceState) {
        self.requested = surface;
        self.surface = self.host.configure_surface(&surface);
        if self.surface != surface {
            log::warn!(
                "[driver] surface limited to {}x{} (asked {}x{})",
                self.surface.width,
                self.surface.height,
                surface.width,
                surface.height
            );
        }
        self.uniforms.set_resolution(&self.surface);
    }

    /// Layout px -> configured device px, per axis.
    fn pixel_scale(&self) -> Vec2 {
        let ratio = self.surface.pixel_ratio;
        let fit = |applied: u32, asked: u32| applied as f32 / asked.max(1) as f32;
        Vec2::new(
            ratio * fit(self.surface.width, self.requested.width),
            ratio * fit(self.surface.height, self.requested.height),
        )
    }

    /// Pointer at `local` layout px over a surface of `size` layout px.
    pub fn pointer_move(&mut self, local: Vec2, size: Vec2) {
        if self.state == DriverState::Running {
            let scale = self.pixel_scale();
            self.tracker.pointer_move(local, size, scale);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.state == DriverState::Running {
            self.tracker.pointer_leave();
        }
    }

    /// One frame at `elapsed_sec` since mount. No-op unless Running.
    pub fn tick(&mut self, elapsed_sec: f32) {
        if self.state != DriverState::Running {
            return;
        }
        // The callback that got us here has fired.
        self.pending = None;

        self.tracker.step();
        self.uniforms.apply_frame(elapsed_sec, self.tracker.state());
        self.host.push_uniforms(&self.uniforms);
        match self.host.render() {
            Ok(()) => self.frames += 1,
            Err(e) => log::warn!("[driver] frame skipped: {:?}", e),
        }

        self.pending = self.host.request_frame();
    }

    /// Running -> Stopped. Cancels the pending frame, then releases the host.
    /// Safe to call any number of times.
    pub fn cleanup(&mut self) {
        if self.released {
            return;
        }
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.state = DriverState::Stopped;
        self.released = true;
        self.host.release();
        log::info!("[driver] stopped after {} frames", self.frames);
    }
}
