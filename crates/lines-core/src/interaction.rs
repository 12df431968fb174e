//! Damped pointer, pointer-presence and parallax state.
//!
//! Raw pointer events only move *targets*; [`InteractionTracker::step`] is run
//! once per frame and eases the *current* values toward them, so the shader
//! sees smooth motion and a gradual fade when the pointer leaves.

use crate::config::RenderParameters;
use crate::constants::POINTER_OFFSCREEN;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    /// Device pixels, bottom-left origin.
    pub target_pointer: Vec2,
    pub current_pointer: Vec2,
    pub target_influence: f32,
    pub current_influence: f32,
    pub target_parallax: Vec2,
    pub current_parallax: Vec2,
}

impl Default for InteractionState {
    fn default() -> Self {
        let offscreen = Vec2::splat(POINTER_OFFSCREEN);
        Self {
            target_pointer: offscreen,
            current_pointer: offscreen,
            target_influence: 0.0,
            current_influence: 0.0,
            target_parallax: Vec2::ZERO,
            current_parallax: Vec2::ZERO,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InteractionTracker {
    state: InteractionState,
    damping: f32,
    interactive: bool,
    parallax: bool,
    parallax_strength: f32,
}

impl InteractionTracker {
    pub fn new(params: &RenderParameters) -> Self {
        Self {
            state: InteractionState::default(),
            damping: params.mouse_damping,
            interactive: params.interactive,
            parallax: params.parallax,
            parallax_strength: params.parallax_strength,
        }
    }

    #[inline]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Pointer moved to `local` (layout px from the surface's top-left corner)
    /// over a surface of `size` layout px, with `pixel_scale` device px per
    /// layout px on each axis.
    pub fn pointer_move(&mut self, local: Vec2, size: Vec2, pixel_scale: Vec2) {
        if !self.interactive {
            return;
        }
        self.state.target_pointer = Vec2::new(local.x, size.y - local.y) * pixel_scale;
        self.state.target_influence = 1.0;
        if self.parallax && size.x > 0.0 && size.y > 0.0 {
            let center = size * 0.5;
            let offset = Vec2::new((local.x - center.x) / size.x, -(local.y - center.y) / size.y);
            self.state.target_parallax = offset * self.parallax_strength;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.interactive {
            self.state.target_influence = 0.0;
        }
    }

    /// One frame of exponential smoothing toward the current targets.
    pub fn step(&mut self) {
        let d = self.damping;
        let s = &mut self.state;
        if self.interactive {
            s.current_pointer = s.current_pointer.lerp(s.target_pointer, d);
            s.current_influence += (s.target_influence - s.current_influence) * d;
        }
        if self.parallax {
            s.current_parallax = s.current_parallax.lerp(s.target_parallax, d);
        }
    }
}
