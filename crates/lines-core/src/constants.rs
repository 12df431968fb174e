// Defaults and tuning constants shared by the web and native front-ends.

// Gradient
pub const MAX_GRADIENT_STOPS: usize = 8;

// Line layout
pub const FALLBACK_LINE_COUNT: u32 = 6; // positional entry missing from a per-layer list
pub const FALLBACK_LINE_DISTANCE: f32 = 0.1; // caller-facing units
pub const DISABLED_LINE_SPACING: f32 = 0.01; // shader units, layer switched off
pub const DISTANCE_SCALE: f32 = 0.01; // caller-facing units -> shader units
pub const DEFAULT_LINE_COUNT: u32 = 6;
pub const DEFAULT_LINE_DISTANCE: f32 = 5.0;

// Wave positions (x, y, rotate)
pub const DEFAULT_TOP_POSITION: [f32; 3] = [10.0, 0.5, -0.4];
pub const DEFAULT_MIDDLE_POSITION: [f32; 3] = [5.0, 0.0, 0.2];
pub const DEFAULT_BOTTOM_POSITION: [f32; 3] = [2.0, -0.7, -1.0]; // option absent entirely
pub const FALLBACK_BOTTOM_POSITION: [f32; 3] = [2.0, -0.7, 0.4]; // option present, field missing

// Animation and interaction
pub const DEFAULT_ANIMATION_SPEED: f32 = 1.0;
pub const DEFAULT_BEND_RADIUS: f32 = 5.0;
pub const DEFAULT_BEND_STRENGTH: f32 = -0.5;
pub const DEFAULT_MOUSE_DAMPING: f32 = 0.05;
pub const DEFAULT_PARALLAX_STRENGTH: f32 = 0.2;
pub const DEFAULT_MIX_BLEND_MODE: &str = "screen";
pub const POINTER_OFFSCREEN: f32 = -1000.0; // device px, far outside any surface

// Surface
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Uniform flag bits (mirrored in floating_lines.wgsl)
pub const FLAG_INTERACTIVE: u32 = 1;
pub const FLAG_PARALLAX: u32 = 2;
