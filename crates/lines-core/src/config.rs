//! Mount options and their normalization into immutable render parameters.
//!
//! Options arrive as a JSON document (the browser serializes the caller's
//! options object, the native preview reads a file). Every field is optional
//! and deserialized leniently: a field with an unexpected type resolves to its
//! documented default instead of rejecting the whole document.

use crate::color::{resolve_color, Rgb};
use crate::constants::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use smallvec::SmallVec;
use std::path::{Path, PathBuf};

/// The three line families, in the order the shader composites them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveLayer {
    Bottom,
    Middle,
    Top,
}

impl WaveLayer {
    pub const ALL: [WaveLayer; 3] = [WaveLayer::Bottom, WaveLayer::Middle, WaveLayer::Top];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            WaveLayer::Bottom => 0,
            WaveLayer::Middle => 1,
            WaveLayer::Top => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveLayer::Bottom => "bottom",
            WaveLayer::Middle => "middle",
            WaveLayer::Top => "top",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bottom" => Some(WaveLayer::Bottom),
            "middle" => Some(WaveLayer::Middle),
            "top" => Some(WaveLayer::Top),
            _ => None,
        }
    }

    /// Wave phase offset of line 0.
    pub fn phase_base(self) -> f32 {
        match self {
            WaveLayer::Bottom => 1.5,
            WaveLayer::Middle => 2.0,
            WaveLayer::Top => 1.0,
        }
    }

    /// Phase increment per line index.
    pub fn phase_step(self) -> f32 {
        match self {
            WaveLayer::Bottom => 0.2,
            WaveLayer::Middle => 0.15,
            WaveLayer::Top => 0.2,
        }
    }

    /// Contribution weight applied to every line of the layer.
    pub fn weight(self) -> f32 {
        match self {
            WaveLayer::Bottom => 0.2,
            WaveLayer::Middle => 1.0,
            WaveLayer::Top => 0.1,
        }
    }

    /// Only the top layer mirrors its rotated x axis.
    pub fn mirrors_x(self) -> bool {
        matches!(self, WaveLayer::Top)
    }

    fn default_position(self) -> [f32; 3] {
        match self {
            WaveLayer::Bottom => DEFAULT_BOTTOM_POSITION,
            WaveLayer::Middle => DEFAULT_MIDDLE_POSITION,
            WaveLayer::Top => DEFAULT_TOP_POSITION,
        }
    }

    fn fallback_position(self) -> [f32; 3] {
        match self {
            WaveLayer::Bottom => FALLBACK_BOTTOM_POSITION,
            other => other.default_position(),
        }
    }
}

/// A per-layer option given either once for every layer or positionally,
/// aligned with `enabledWaves`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged, bound(deserialize = "T: DeserializeOwned"))]
pub enum PerLayer<T> {
    Uniform(T),
    /// A mistyped entry only loses its own slot.
    Positional(#[serde(deserialize_with = "lenient_entries")] Vec<Option<T>>),
}

impl<T: Copy> PerLayer<T> {
    /// Value for the layer at `slot` in `enabledWaves`; `None` when the
    /// positional list has no entry there.
    pub fn lookup(&self, slot: usize) -> Option<T> {
        match self {
            PerLayer::Uniform(v) => Some(*v),
            PerLayer::Positional(list) => list.get(slot).copied().flatten(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WavePositionOptions {
    #[serde(default, deserialize_with = "lenient")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub rotate: Option<f64>,
}

/// Caller-facing mount options. Field names match the JavaScript API.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatingLinesOptions {
    #[serde(default, deserialize_with = "lenient")]
    pub lines_gradient: Option<Vec<serde_json::Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub enabled_waves: Option<Vec<serde_json::Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub line_count: Option<PerLayer<f64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub line_distance: Option<PerLayer<f64>>,
    #[serde(default, deserialize_with = "lenient")]
    pub top_wave_position: Option<WavePositionOptions>,
    #[serde(default, deserialize_with = "lenient")]
    pub middle_wave_position: Option<WavePositionOptions>,
    #[serde(default, deserialize_with = "lenient")]
    pub bottom_wave_position: Option<WavePositionOptions>,
    #[serde(default, deserialize_with = "lenient")]
    pub animation_speed: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub interactive: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub bend_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub bend_strength: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub mouse_damping: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub parallax: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub parallax_strength: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub mix_blend_mode: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FloatingLinesOptions {
    /// Parse an options document. `null` and an empty document yield defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    fn position_for(&self, layer: WaveLayer) -> Option<&WavePositionOptions> {
        match layer {
            WaveLayer::Bottom => self.bottom_wave_position.as_ref(),
            WaveLayer::Middle => self.middle_wave_position.as_ref(),
            WaveLayer::Top => self.top_wave_position.as_ref(),
        }
    }
}

/// Deserialize into `T` if the JSON value has the right shape, otherwise `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| serde_json::from_value(v).ok())
        .collect())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WavePosition {
    pub x: f32,
    pub y: f32,
    pub rotate: f32,
}

impl From<[f32; 3]> for WavePosition {
    fn from(v: [f32; 3]) -> Self {
        Self {
            x: v[0],
            y: v[1],
            rotate: v[2],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub enabled: bool,
    pub line_count: u32,
    /// Already scaled to shader units.
    pub line_spacing: f32,
    pub position: WavePosition,
}

impl LayerConfig {
    /// Number of lines the layer actually draws.
    pub fn effective_line_count(&self) -> u32 {
        if self.enabled {
            self.line_count
        } else {
            0
        }
    }
}

pub type GradientStops = SmallVec<[Rgb; MAX_GRADIENT_STOPS]>;

/// Fully resolved, immutable parameters for one mounted session.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParameters {
    /// Indexed by [`WaveLayer::index`].
    pub layers: [LayerConfig; 3],
    pub gradient: GradientStops,
    pub animation_speed: f32,
    pub interactive: bool,
    pub bend_radius: f32,
    pub bend_strength: f32,
    pub mouse_damping: f32,
    pub parallax: bool,
    pub parallax_strength: f32,
    pub mix_blend_mode: String,
}

impl RenderParameters {
    #[inline]
    pub fn layer(&self, layer: WaveLayer) -> &LayerConfig {
        &self.layers[layer.index()]
    }

    pub fn enabled_layers(&self) -> impl Iterator<Item = WaveLayer> + '_ {
        WaveLayer::ALL
            .into_iter()
            .filter(|l| self.layer(*l).enabled)
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        normalize(&FloatingLinesOptions::default())
    }
}

fn finite_or(value: Option<f64>, default: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v as f32,
        _ => default,
    }
}

fn line_count_from(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.floor().min(u32::MAX as f64) as u32
}

fn resolve_position(layer: WaveLayer, supplied: Option<&WavePositionOptions>) -> WavePosition {
    match supplied {
        None => layer.default_position().into(),
        Some(p) => {
            let [fx, fy, fr] = layer.fallback_position();
            WavePosition {
                x: finite_or(p.x, fx),
                y: finite_or(p.y, fy),
                rotate: finite_or(p.rotate, fr),
            }
        }
    }
}

/// Merge caller options with the default table. Never fails.
pub fn normalize(options: &FloatingLinesOptions) -> RenderParameters {
    // Raw names keep their positions; unknown or non-string entries still
    // occupy a slot for positional lookups.
    let names: Vec<Option<&str>> = match &options.enabled_waves {
        Some(list) => list.iter().map(|v| v.as_str()).collect(),
        None => vec![Some("top"), Some("middle"), Some("bottom")],
    };
    let slot_of = |layer: WaveLayer| names.iter().position(|n| *n == Some(layer.name()));

    let counts = options
        .line_count
        .clone()
        .unwrap_or_else(|| PerLayer::Positional(vec![Some(DEFAULT_LINE_COUNT as f64)]));
    let distances = options
        .line_distance
        .clone()
        .unwrap_or_else(|| PerLayer::Positional(vec![Some(DEFAULT_LINE_DISTANCE as f64)]));

    let layers = WaveLayer::ALL.map(|layer| {
        let position = resolve_position(layer, options.position_for(layer));
        match slot_of(layer) {
            Some(slot) => {
                let count = counts
                    .lookup(slot)
                    .map(line_count_from)
                    .unwrap_or(FALLBACK_LINE_COUNT);
                let distance = finite_or(distances.lookup(slot), FALLBACK_LINE_DISTANCE);
                LayerConfig {
                    enabled: true,
                    line_count: count,
                    line_spacing: distance * DISTANCE_SCALE,
                    position,
                }
            }
            None => LayerConfig {
                enabled: false,
                line_count: 0,
                line_spacing: DISABLED_LINE_SPACING,
                position,
            },
        }
    });

    let gradient: GradientStops = options
        .lines_gradient
        .iter()
        .flatten()
        .take(MAX_GRADIENT_STOPS)
        .map(|v| resolve_color(v.as_str().unwrap_or("")))
        .collect();
    if let Some(list) = &options.lines_gradient {
        if list.len() > MAX_GRADIENT_STOPS {
            log::warn!(
                "[config] linesGradient has {} stops, using the first {}",
                list.len(),
                MAX_GRADIENT_STOPS
            );
        }
    }

    let mix_blend_mode = options
        .mix_blend_mode
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_MIX_BLEND_MODE)
        .to_string();

    RenderParameters {
        layers,
        gradient,
        animation_speed: finite_or(options.animation_speed, DEFAULT_ANIMATION_SPEED),
        interactive: options.interactive.unwrap_or(true),
        bend_radius: finite_or(options.bend_radius, DEFAULT_BEND_RADIUS),
        bend_strength: finite_or(options.bend_strength, DEFAULT_BEND_STRENGTH),
        mouse_damping: finite_or(options.mouse_damping, DEFAULT_MOUSE_DAMPING).clamp(0.0, 1.0),
        parallax: options.parallax.unwrap_or(true),
        parallax_strength: finite_or(options.parallax_strength, DEFAULT_PARALLAX_STRENGTH),
        mix_blend_mode,
    }
}
