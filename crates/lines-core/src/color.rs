//! Conversion of CSS-style hex color strings into normalized triplets.

use glam::Vec3;

/// Normalized RGB triplet, each channel in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Format as `#rrggbb`, rounding each channel to the nearest 8-bit step.
    pub fn to_hex(&self) -> String {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Padded to a `vec4` for uniform upload.
    pub fn to_array4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Resolve `#rgb`, `#rrggbb` (leading `#` optional). Anything malformed is white.
pub fn resolve_color(input: &str) -> Rgb {
    let value = input.trim();
    let value = value.strip_prefix('#').unwrap_or(value);
    parse_hex(value).unwrap_or(Rgb::WHITE)
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                let n = ch.to_digit(16)? as u8;
                *slot = n * 16 + n;
            }
            Some(Rgb::from_bytes(out[0], out[1], out[2]))
        }
        6 => Some(Rgb::from_bytes(
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
        )),
        _ => None,
    }
}
