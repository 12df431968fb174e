//! GPU uniform block consumed by `floating_lines.wgsl`.
//!
//! Layout mirrors the WGSL `Uniforms` struct (uniform address space rules):
//! scalars and `vec2`s first, padded to 64 bytes, then three 48-byte layer
//! records and eight `vec4` gradient stops. Total size is 336 bytes.

use crate::config::{RenderParameters, WaveLayer};
use crate::constants::{FLAG_INTERACTIVE, FLAG_PARALLAX, MAX_GRADIENT_STOPS, POINTER_OFFSCREEN};
use crate::interaction::InteractionState;
use crate::surface::SurfaceState;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LayerPacked {
    /// x, y, rotate, line spacing
    pub position: [f32; 4],
    /// phase base, phase step, weight, mirror x (0/1)
    pub shape: [f32; 4],
    /// line count, enabled (0/1), unused, unused
    pub counts: [u32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub animation_speed: f32,
    pub mouse: [f32; 2],
    pub parallax_offset: [f32; 2],
    pub bend_radius: f32,
    pub bend_strength: f32,
    pub bend_influence: f32,
    pub flags: u32,
    pub gradient_count: u32,
    pub _pad: [u32; 3],
    pub layers: [LayerPacked; 3],
    pub gradient: [[f32; 4]; MAX_GRADIENT_STOPS],
}

impl LayerPacked {
    fn new(layer: WaveLayer, params: &RenderParameters) -> Self {
        let cfg = params.layer(layer);
        Self {
            position: [
                cfg.position.x,
                cfg.position.y,
                cfg.position.rotate,
                cfg.line_spacing,
            ],
            shape: [
                layer.phase_base(),
                layer.phase_step(),
                layer.weight(),
                if layer.mirrors_x() { 1.0 } else { 0.0 },
            ],
            counts: [cfg.effective_line_count(), cfg.enabled as u32, 0, 0],
        }
    }
}

impl LineUniforms {
    /// Static part of the block; per-frame fields start at their idle values.
    pub fn new(params: &RenderParameters) -> Self {
        let mut flags = 0;
        if params.interactive {
            flags |= FLAG_INTERACTIVE;
        }
        if params.parallax {
            flags |= FLAG_PARALLAX;
        }
        let mut gradient = [[1.0, 1.0, 1.0, 1.0]; MAX_GRADIENT_STOPS];
        for (slot, stop) in gradient.iter_mut().zip(params.gradient.iter()) {
            *slot = stop.to_array4();
        }
        Self {
            resolution: [1.0, 1.0],
            time: 0.0,
            animation_speed: params.animation_speed,
            mouse: [POINTER_OFFSCREEN, POINTER_OFFSCREEN],
            parallax_offset: [0.0, 0.0],
            bend_radius: params.bend_radius,
            bend_strength: params.bend_strength,
            bend_influence: 0.0,
            flags,
            gradient_count: params.gradient.len().min(MAX_GRADIENT_STOPS) as u32,
            _pad: [0; 3],
            layers: WaveLayer::ALL.map(|l| LayerPacked::new(l, params)),
            gradient,
        }
    }

    #[inline]
    pub fn interactive(&self) -> bool {
        self.flags & FLAG_INTERACTIVE != 0
    }

    #[inline]
    pub fn parallax(&self) -> bool {
        self.flags & FLAG_PARALLAX != 0
    }

    pub fn set_resolution(&mut self, surface: &SurfaceState) {
        self.resolution = surface.resolution();
    }

    /// Copy the per-frame clock and damped interaction values in.
    pub fn apply_frame(&mut self, time: f32, interaction: &InteractionState) {
        self.time = time;
        if self.interactive() {
            self.mouse = interaction.current_pointer.to_array();
            self.bend_influence = interaction.current_influence;
        }
        if self.parallax() {
            self.parallax_offset = interaction.current_parallax.to_array();
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
