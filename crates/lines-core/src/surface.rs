use crate::constants::MAX_PIXEL_RATIO;

/// Drawable size in device pixels plus the pixel ratio used to derive it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
        }
    }
}

/// Device pixel ratio capped at [`MAX_PIXEL_RATIO`]; unusable values become 1.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        (device_pixel_ratio as f32).min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

impl SurfaceState {
    /// Size a drawable for a host box of `css_width` x `css_height` layout pixels.
    /// An empty box is treated as 1x1 so the GPU surface is never zero-sized.
    pub fn measure(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let ratio = clamp_pixel_ratio(device_pixel_ratio);
        let css = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        let px = |v: f64| ((css(v) * ratio as f64).floor() as u32).max(1);
        Self {
            width: px(css_width),
            height: px(css_height),
            pixel_ratio: ratio,
        }
    }

    /// A drawable that already has a fixed device-pixel size, such as a native
    /// window. The pixel ratio is recorded uncapped so pointer math lines up
    /// with the window.
    pub fn physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let ratio = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor as f32
        } else {
            1.0
        };
        Self {
            width: width.max(1),
            height: height.max(1),
            pixel_ratio: ratio,
        }
    }

    /// Clamp to the largest texture the device accepts.
    pub fn clamped(self, max_dimension: u32) -> Self {
        let max = max_dimension.max(1);
        Self {
            width: self.width.min(max),
            height: self.height.min(max),
            ..self
        }
    }

    #[inline]
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}
