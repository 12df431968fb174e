//! CPU transcription of `fs_lines` in `floating_lines.wgsl`.
//!
//! Evaluates one pixel from the same [`LineUniforms`] block the GPU reads, in
//! the same order and with the same f32 operations, so properties of the
//! shading can be checked without a GPU. `frag_coord` uses a bottom-left
//! origin with pixel centers at `+0.5`.

use crate::uniforms::{LayerPacked, LineUniforms};
use glam::{Vec2, Vec3, Vec4};

const BLACK: Vec3 = Vec3::ZERO;
const PINK: Vec3 = Vec3::new(233.0 / 255.0, 71.0 / 255.0, 245.0 / 255.0);
const BLUE: Vec3 = Vec3::new(47.0 / 255.0, 75.0 / 255.0, 162.0 / 255.0);

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn rotate(v: Vec2, r: f32) -> Vec2 {
    let (s, c) = (r.sin(), r.cos());
    Vec2::new(v.x * c + v.y * s, -v.x * s + v.y * c)
}

/// Gradient parameter of line `index` in a layer of `count` lines.
#[inline]
pub fn line_t(index: u32, count: u32) -> f32 {
    index as f32 / (count as f32 - 1.0).max(1.0)
}

/// Two-band procedural base color used when no gradient stops are set.
pub fn background_color(uv: Vec2) -> Vec3 {
    let y = (uv.x - 0.2).sin() * 0.3 - 0.1;
    let m = uv.y - y;
    let mut col = BLUE.lerp(BLACK, smoothstep(0.0, 1.0, m.abs()));
    col += PINK.lerp(BLACK, smoothstep(0.0, 1.0, (m - 0.8).abs()));
    col * 0.5
}

/// Color of the line at gradient position `t`; `base` when no stops are set.
pub fn line_color(u: &LineUniforms, t: f32, base: Vec3) -> Vec3 {
    let count = u.gradient_count as i32;
    if count <= 0 {
        return base;
    }
    let stop = |i: i32| Vec4::from_array(u.gradient[i as usize]).truncate();
    let c = if count == 1 {
        stop(0)
    } else {
        let scaled = t.clamp(0.0, 0.9999) * (count - 1) as f32;
        let idx = scaled.floor() as i32;
        let f = scaled - scaled.floor();
        let idx2 = (idx + 1).min(count - 1);
        stop(idx).lerp(stop(idx2), f)
    };
    c * 0.5
}

/// Glow kernel of one line whose centerline is a travelling sine.
pub fn wave(
    u: &LineUniforms,
    uv: Vec2,
    offset: f32,
    screen_uv: Vec2,
    mouse_uv: Vec2,
    bend: bool,
) -> f32 {
    let time = u.time * u.animation_speed;
    let amp = (offset + time * 0.2).sin() * 0.3;
    let mut y = (uv.x + offset + time * 0.1).sin() * amp;
    if bend {
        let d = screen_uv - mouse_uv;
        let influence = (-d.dot(d) * u.bend_radius).exp();
        y += (mouse_uv.y - screen_uv.y) * influence * u.bend_strength * u.bend_influence;
    }
    let m = uv.y - y;
    0.0175 / (m.abs() + 0.01).max(1e-3) + 0.01
}

/// Centered, aspect-corrected coordinates with the vertical axis flipped.
#[inline]
pub fn to_uv(u: &LineUniforms, p: Vec2) -> Vec2 {
    let res = Vec2::from_array(u.resolution);
    let uv = (2.0 * p - res) / res.y;
    Vec2::new(uv.x, -uv.y)
}

/// Contribution of every line of one layer on its own.
pub fn layer_contribution(
    u: &LineUniforms,
    layer: &LayerPacked,
    base_uv: Vec2,
    mouse_uv: Vec2,
    base_color: Vec3,
) -> Vec3 {
    let mut col = Vec3::ZERO;
    accumulate_layer(u, layer, base_uv, mouse_uv, base_color, &mut col);
    col
}

fn accumulate_layer(
    u: &LineUniforms,
    layer: &LayerPacked,
    base_uv: Vec2,
    mouse_uv: Vec2,
    base_color: Vec3,
    col: &mut Vec3,
) {
    if layer.counts[1] == 0 {
        return;
    }
    let [px, py, rot, spacing] = layer.position;
    let [phase_base, phase_step, weight, mirror] = layer.shape;
    let n = layer.counts[0];
    let mut ruv = rotate(base_uv, rot * (base_uv.length() + 1.0).ln());
    if mirror > 0.5 {
        ruv.x = -ruv.x;
    }
    for i in 0..n {
        let fi = i as f32;
        let color = line_color(u, line_t(i, n), base_color);
        let p = ruv + Vec2::new(spacing * fi + px, py);
        let offset = phase_base + phase_step * fi;
        *col += color * wave(u, p, offset, base_uv, mouse_uv, u.interactive()) * weight;
    }
}

/// Final color of the pixel at `frag_coord`. Alpha is always 1.
pub fn shade(u: &LineUniforms, frag_coord: Vec2) -> Vec4 {
    let mut base_uv = to_uv(u, frag_coord);
    if u.parallax() {
        base_uv += Vec2::from_array(u.parallax_offset);
    }
    let b = if u.gradient_count == 0 {
        background_color(base_uv)
    } else {
        BLACK
    };
    let mouse_uv = if u.interactive() {
        to_uv(u, Vec2::from_array(u.mouse))
    } else {
        Vec2::ZERO
    };
    let mut col = Vec3::ZERO;
    for layer in &u.layers {
        accumulate_layer(u, layer, base_uv, mouse_uv, b, &mut col);
    }
    col.extend(1.0)
}
