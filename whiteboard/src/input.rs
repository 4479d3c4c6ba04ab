//! Input model: tools, modifier keys, and the gesture state.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of an event.
//! `GestureState` is the transient drawing gesture tracked between
//! pointer-down and pointer-up; it is owned by the controller and never read
//! by any other path while a gesture is in flight.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::factory::ShapeKind;
use crate::shape::ShapeId;

/// Which toolbar entry is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Drag out a rectangle.
    Rectangle,
    /// Drag out a circle from its center.
    Circle,
    /// Drag out a triangle.
    Triangle,
    /// Drag out a straight line.
    Line,
    /// Native brush strokes drawn by the surface.
    Freeform,
    /// Place a text object on click.
    Text,
    /// Delete the current selection.
    Delete,
    /// Clear the whole board.
    Reset,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 9] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
        Tool::Line,
        Tool::Freeform,
        Tool::Text,
        Tool::Delete,
        Tool::Reset,
    ];

    /// The shape a drag with this tool produces, if it is a drag tool.
    #[must_use]
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Circle => Some(ShapeKind::Circle),
            Self::Triangle => Some(ShapeKind::Triangle),
            Self::Line => Some(ShapeKind::Line),
            _ => None,
        }
    }

    /// Whether pointer input with this tool creates content on the board.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self.shape_kind().is_some() || matches!(self, Self::Freeform | Self::Text)
    }

    /// Whether this tool acts once when chosen instead of staying active.
    #[must_use]
    pub fn is_one_shot(self) -> bool {
        matches!(self, Self::Delete | Self::Reset)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Line => "line",
            Self::Freeform => "freeform",
            Self::Text => "text",
            Self::Delete => "delete",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"c"`, `"/"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Case-insensitive comparison against a key name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Transient state of the drawing gesture.
///
/// `active_shape` is only set between pointer-down and pointer-up of a
/// shape-producing gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// A pointer-down started a drawing gesture that has not ended yet.
    pub is_drawing: bool,
    /// Surface-space pointer position recorded at pointer-down.
    pub initial_pointer: Option<Point>,
    /// The shape being sized by this gesture, once it exists on the surface.
    pub active_shape: Option<ShapeId>,
}

impl GestureState {
    /// Forget everything about the current gesture.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.is_drawing && self.initial_pointer.is_none() && self.active_shape.is_none()
    }
}
