//! Controller tuning parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    BRUSH_WIDTH, DEFAULT_COLOR, LINE_STROKE_WIDTH, MAX_ZOOM, MIN_ZOOM, PASTE_OFFSET, TEXT_FONT_FAMILY, TEXT_FONT_SIZE,
    TEXT_FONT_WEIGHT, TEXT_PLACEHOLDER, ZOOM_STEP,
};
use crate::error::ConfigError;
use crate::shape::Font;

/// Defaults for freshly placed text objects.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefaults {
    pub placeholder: String,
    pub font: Font,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            placeholder: TEXT_PLACEHOLDER.to_string(),
            font: Font {
                family: TEXT_FONT_FAMILY.to_string(),
                size: TEXT_FONT_SIZE,
                weight: TEXT_FONT_WEIGHT.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    /// Offset applied to both axes of pasted shapes.
    pub paste_offset: f64,
    /// Fill of new shapes, and stroke of new lines.
    pub default_color: String,
    pub line_stroke_width: f64,
    pub brush_width: f64,
    pub text: TextDefaults,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
            paste_offset: PASTE_OFFSET,
            default_color: DEFAULT_COLOR.to_string(),
            line_stroke_width: LINE_STROKE_WIDTH,
            brush_width: BRUSH_WIDTH,
            text: TextDefaults::default(),
        }
    }
}

impl ControllerConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `WHITEBOARD_MIN_ZOOM`: default 0.2
    /// - `WHITEBOARD_MAX_ZOOM`: default 1.0
    /// - `WHITEBOARD_ZOOM_STEP`: default 0.001
    /// - `WHITEBOARD_PASTE_OFFSET`: default 20
    /// - `WHITEBOARD_DEFAULT_COLOR`: default `#aabbcc`
    /// - `WHITEBOARD_BRUSH_WIDTH`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not a finite number, or if
    /// the zoom range is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup. Used by [`Self::from_env`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            min_zoom: parse_f64(&lookup, "WHITEBOARD_MIN_ZOOM", defaults.min_zoom)?,
            max_zoom: parse_f64(&lookup, "WHITEBOARD_MAX_ZOOM", defaults.max_zoom)?,
            zoom_step: parse_f64(&lookup, "WHITEBOARD_ZOOM_STEP", defaults.zoom_step)?,
            paste_offset: parse_f64(&lookup, "WHITEBOARD_PASTE_OFFSET", defaults.paste_offset)?,
            default_color: lookup("WHITEBOARD_DEFAULT_COLOR").unwrap_or(defaults.default_color),
            line_stroke_width: defaults.line_stroke_width,
            brush_width: parse_f64(&lookup, "WHITEBOARD_BRUSH_WIDTH", defaults.brush_width)?,
            text: defaults.text,
        };
        if config.min_zoom > config.max_zoom {
            return Err(ConfigError::ZoomRange { min: config.min_zoom, max: config.max_zoom });
        }
        Ok(config)
    }
}

fn parse_f64<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}
