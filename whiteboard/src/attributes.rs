//! Display projection of the selected shape for the attributes panel.
//!
//! The panel shows plain strings: dimensions are the scaled bounding box
//! rounded to whole units, and fields that do not apply to a shape kind are
//! empty. Edits flow back the other way through [`AttributeEdit`].

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;

use serde::{Deserialize, Serialize};

use crate::shape::{Bounds, Geometry, Shape};

/// Attribute panel contents for a single selected shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementAttributes {
    pub width: String,
    pub height: String,
    pub font_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub fill: String,
    pub stroke: String,
}

impl ElementAttributes {
    /// Project every field from `shape`.
    #[must_use]
    pub fn project(shape: &Shape) -> Self {
        let (width, height) = dimensions(shape);
        let (font_size, font_family, font_weight) = match &shape.geometry {
            Geometry::Text { font, .. } => (format_number(font.size), font.family.clone(), font.weight.clone()),
            _ => (String::new(), String::new(), String::new()),
        };
        Self {
            width,
            height,
            font_size,
            font_family,
            font_weight,
            fill: shape.style.fill.clone().unwrap_or_default(),
            stroke: shape.style.stroke.clone().unwrap_or_default(),
        }
    }

    /// Refresh only the dimensions, leaving the other fields as they were.
    pub fn rescale(&mut self, shape: &Shape) {
        let (width, height) = dimensions(shape);
        self.width = width;
        self.height = height;
    }
}

fn dimensions(shape: &Shape) -> (String, String) {
    match shape.scaled_bounds() {
        Some(Bounds { width, height, .. }) => (format_number(width), format_number(height)),
        None => (String::new(), String::new()),
    }
}

fn format_number(v: f64) -> String {
    format!("{v:.0}")
}

/// A single edit coming from the attributes panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AttributeEdit {
    /// Target scaled width; sets `scale_x`.
    Width(f64),
    /// Target scaled height; sets `scale_y`.
    Height(f64),
    Fill(String),
    Stroke(String),
    FontSize(f64),
    FontFamily(String),
    FontWeight(String),
}

impl AttributeEdit {
    /// Apply the edit. Returns `false` when it does not apply to this shape:
    /// font edits on non-text shapes, non-positive or non-finite sizes, or a
    /// dimension edit on a shape whose base extent is zero.
    pub fn apply(&self, shape: &mut Shape) -> bool {
        match self {
            Self::Width(target) => {
                let Some(scale) = scale_for(*target, shape.bounds().map(|b| b.width)) else {
                    return false;
                };
                shape.scale_x = scale;
                true
            }
            Self::Height(target) => {
                let Some(scale) = scale_for(*target, shape.bounds().map(|b| b.height)) else {
                    return false;
                };
                shape.scale_y = scale;
                true
            }
            Self::Fill(color) => {
                shape.style.fill = Some(color.clone());
                true
            }
            Self::Stroke(color) => {
                shape.style.stroke = Some(color.clone());
                true
            }
            Self::FontSize(size) => match &mut shape.geometry {
                Geometry::Text { font, .. } if size.is_finite() && *size > 0.0 => {
                    font.size = *size;
                    true
                }
                _ => false,
            },
            Self::FontFamily(family) => match &mut shape.geometry {
                Geometry::Text { font, .. } => {
                    font.family.clone_from(family);
                    true
                }
                _ => false,
            },
            Self::FontWeight(weight) => match &mut shape.geometry {
                Geometry::Text { font, .. } => {
                    font.weight.clone_from(weight);
                    true
                }
                _ => false,
            },
        }
    }
}

fn scale_for(target: f64, base: Option<f64>) -> Option<f64> {
    let base = base?;
    if !target.is_finite() || target <= 0.0 || base <= 0.0 {
        return None;
    }
    Some(target / base)
}
