//! Tunable knobs for the hexagon background.
//!
//! The page picks a [`Preset`] in code. Static markup may tweak it through
//! a JSON `data-hex-field` attribute on `<body>`; nothing is persisted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::model::Rgb;

pub const MARKUP_ATTR: &str = "data-hex-field";

/// Below these the grid explodes into millions of cells.
pub const MIN_HEX_SIZE: f64 = 4.0;
pub const MIN_COMPACTION: f64 = 0.25;
pub const MIN_VISIBILITY_RADIUS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HexFieldConfig {
    /// Nominal hexagon radius in pixels; drives grid spacing.
    pub hex_size: f64,
    /// Pointer distance at which a cell stops being drawn.
    pub visibility_radius: f64,
    /// Displacement magnitude applied to highlighted cells.
    pub offset: f64,
    pub stroke_color: Rgb,
    /// Vertical compaction of rows (1.0 = regular hex spacing).
    pub compaction: f64,
    /// Drawn outline radius as a fraction of `hex_size`.
    pub outline_scale: f64,
    pub line_width: f64,
}

impl Default for HexFieldConfig {
    fn default() -> Self {
        Self {
            hex_size: 25.0,
            visibility_radius: 100.0,
            offset: 10.0,
            stroke_color: Rgb::WHITE,
            compaction: 0.9,
            outline_scale: 0.6,
            line_width: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Large, loosely packed cells with a wide reveal radius.
    Classic,
    #[default]
    Compact,
    Indigo,
}

impl Preset {
    pub fn config(self) -> HexFieldConfig {
        match self {
            Preset::Classic => HexFieldConfig {
                hex_size: 50.0,
                visibility_radius: 300.0,
                compaction: 1.0,
                ..HexFieldConfig::default()
            },
            Preset::Compact => HexFieldConfig::default(),
            Preset::Indigo => HexFieldConfig {
                stroke_color: Rgb {
                    r: 129,
                    g: 140,
                    b: 248,
                },
                ..HexFieldConfig::default()
            },
        }
    }
}

impl HexFieldConfig {
    /// Replace unusable geometry with defaults and raise tiny values to
    /// their minimums so grid generation stays bounded.
    pub fn sanitized(self) -> Self {
        let d = HexFieldConfig::default();
        let positive = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            hex_size: positive(self.hex_size, d.hex_size).max(MIN_HEX_SIZE),
            visibility_radius: positive(self.visibility_radius, d.visibility_radius)
                .max(MIN_VISIBILITY_RADIUS),
            offset: if self.offset.is_finite() { self.offset } else { d.offset },
            stroke_color: self.stroke_color,
            compaction: positive(self.compaction, d.compaction).max(MIN_COMPACTION),
            outline_scale: positive(self.outline_scale, d.outline_scale),
            line_width: positive(self.line_width, d.line_width),
        }
    }
}

/// Markup tweak: an optional preset plus individual knobs laid over it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverride {
    preset: Option<Preset>,
    hex_size: Option<f64>,
    visibility_radius: Option<f64>,
    offset: Option<f64>,
    stroke_color: Option<Rgb>,
    compaction: Option<f64>,
    outline_scale: Option<f64>,
    line_width: Option<f64>,
}

impl ConfigOverride {
    fn apply(self, base: Preset) -> HexFieldConfig {
        let mut cfg = self.preset.unwrap_or(base).config();
        if let Some(v) = self.hex_size {
            cfg.hex_size = v;
        }
        if let Some(v) = self.visibility_radius {
            cfg.visibility_radius = v;
        }
        if let Some(v) = self.offset {
            cfg.offset = v;
        }
        if let Some(v) = self.stroke_color {
            cfg.stroke_color = v;
        }
        if let Some(v) = self.compaction {
            cfg.compaction = v;
        }
        if let Some(v) = self.outline_scale {
            cfg.outline_scale = v;
        }
        if let Some(v) = self.line_width {
            cfg.line_width = v;
        }
        cfg.sanitized()
    }
}

/// Parse a markup tweak such as `{"preset": "indigo", "hex_size": 30}` on top of `base`.
/// Unknown presets and unknown keys are errors.
pub fn parse(raw: &str, base: Preset) -> Result<HexFieldConfig, serde_json::Error> {
    let o: ConfigOverride = serde_json::from_str(raw)?;
    Ok(o.apply(base))
}

/// Config for `preset`, adjusted by the page's [`MARKUP_ATTR`] if present.
pub fn resolve(preset: Preset) -> HexFieldConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(MARKUP_ATTR));
    match raw {
        Some(raw) => parse(&raw, preset).unwrap_or_else(|e| {
            log::warn!("ignoring invalid {MARKUP_ATTR}: {e}");
            preset.config()
        }),
        None => preset.config(),
    }
}
