//! Shape factory: one geometric rule per drag-created kind.
//!
//! `create_shape` and `resize_shape` are pure apart from identity generation;
//! the same `(kind, pointer, anchor)` always yields the same geometry. No
//! degenerate-size validation happens here.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::config::ControllerConfig;
use crate::shape::{Geometry, Shape, Style};

/// Shapes that are created by dragging from an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Line,
}

/// Geometry of a `kind` dragged from `anchor` to `pointer`.
#[must_use]
pub fn geometry_for(kind: ShapeKind, pointer: Point, anchor: Point) -> Geometry {
    match kind {
        ShapeKind::Rectangle => Geometry::Rect {
            left: anchor.x,
            top: anchor.y,
            width: pointer.x - anchor.x,
            height: pointer.y - anchor.y,
        },
        ShapeKind::Triangle => Geometry::Triangle {
            left: anchor.x,
            top: anchor.y,
            width: pointer.x - anchor.x,
            height: pointer.y - anchor.y,
        },
        ShapeKind::Circle => Geometry::Circle { center: anchor, radius: anchor.distance(pointer) },
        ShapeKind::Line => Geometry::Line { start: anchor, end: pointer },
    }
}

/// Default style for a new shape of `kind`.
#[must_use]
pub fn style_for(kind: ShapeKind, config: &ControllerConfig) -> Style {
    match kind {
        ShapeKind::Line => Style {
            fill: None,
            stroke: Some(config.default_color.clone()),
            stroke_width: config.line_stroke_width,
        },
        ShapeKind::Rectangle | ShapeKind::Circle | ShapeKind::Triangle => {
            Style { fill: Some(config.default_color.clone()), stroke: None, stroke_width: 1.0 }
        }
    }
}

/// Create a new shape with a fresh identity.
#[must_use]
pub fn create_shape(kind: ShapeKind, pointer: Point, anchor: Point, config: &ControllerConfig) -> Shape {
    Shape::new(geometry_for(kind, pointer, anchor), style_for(kind, config))
}

/// Update an in-progress shape for a new pointer position.
///
/// Rectangles and triangles keep their corner and take the pointer delta as
/// size, circles take the distance from the anchor as radius, and lines move
/// their second endpoint. Shapes that are not drag-created are left alone.
pub fn resize_shape(shape: &mut Shape, pointer: Point, anchor: Point) {
    match &mut shape.geometry {
        Geometry::Rect { width, height, .. } | Geometry::Triangle { width, height, .. } => {
            *width = pointer.x - anchor.x;
            *height = pointer.y - anchor.y;
        }
        Geometry::Circle { radius, .. } => *radius = anchor.distance(pointer),
        Geometry::Line { end, .. } => *end = pointer,
        Geometry::Text { .. } | Geometry::Path { .. } => {}
    }
}

/// Create a text object at `pointer` using the configured font.
#[must_use]
pub fn create_text(pointer: Point, content: &str, config: &ControllerConfig) -> Shape {
    Shape::new(
        Geometry::Text {
            left: pointer.x,
            top: pointer.y,
            content: content.to_string(),
            font: config.text.font.clone(),
        },
        Style { fill: Some(config.default_color.clone()), stroke: None, stroke_width: 1.0 },
    )
}
