//! Error types for the whiteboard crate.
//!
//! None of these are fatal to a drawing session: the controller logs them and
//! degrades to "no visible change".

use crate::shape::ShapeId;

/// Failures reported by a rendering surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no shape with id {0} on the surface")]
    UnknownShape(ShapeId),
    #[error("shape codec failed: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Failures while reading the clipboard payload.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("clipboard payload is not an array of shapes")]
    NotAnArray,
    #[error("clipboard entry is not a shape: {0}")]
    Shape(#[from] SurfaceError),
}

/// Invalid controller configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("zoom range is empty: min {min} > max {max}")]
    ZoomRange { min: f64, max: f64 },
}
