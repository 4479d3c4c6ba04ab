//! Shape model: geometry, style, and bounding boxes of drawable objects.
//!
//! A [`Shape`] is what the rendering surface owns once it has been inserted.
//! Its [`Geometry`] is a tagged variant per kind so that every consumer
//! (factory, clamping, attribute projection) matches exhaustively instead of
//! probing optional fields. Shapes serialize to plain JSON objects, which is
//! the clipboard format and the surface's serialize/deserialize form.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{GLYPH_WIDTH_RATIO, LINE_HEIGHT};

/// Unique identifier for a shape, stable for the shape's lifetime.
pub type ShapeId = Uuid;

/// Font attributes of a text shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub weight: String,
}

/// Per-kind geometry payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Geometry {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rect { left: f64, top: f64, width: f64, height: f64 },
    /// Isosceles triangle inscribed in its bounding box.
    Triangle { left: f64, top: f64, width: f64, height: f64 },
    /// Circle around `center`.
    Circle { center: Point, radius: f64 },
    /// Straight segment between two endpoints.
    Line { start: Point, end: Point },
    /// Editable text anchored at its top-left corner.
    Text { left: f64, top: f64, content: String, font: Font },
    /// Freeform stroke produced by the surface's brush.
    Path { points: Vec<Point> },
}

/// Fill and stroke of a shape. `None` means "not painted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

/// Axis-aligned bounding box, always with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Build from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x <= self.left + self.width && pt.y >= self.top && pt.y <= self.top + self.height
    }
}

/// A drawable object on the whiteboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub geometry: Geometry,
    pub style: Style,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Shape {
    /// Wrap geometry and style with a freshly generated identity.
    #[must_use]
    pub fn new(geometry: Geometry, style: Style) -> Self {
        Self { id: Uuid::new_v4(), geometry, style, scale_x: 1.0, scale_y: 1.0 }
    }

    /// Short lowercase name of the geometry kind, e.g. `"rect"`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self.geometry {
            Geometry::Rect { .. } => "rect",
            Geometry::Triangle { .. } => "triangle",
            Geometry::Circle { .. } => "circle",
            Geometry::Line { .. } => "line",
            Geometry::Text { .. } => "text",
            Geometry::Path { .. } => "path",
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.geometry, Geometry::Text { .. })
    }

    /// Unscaled bounding box. `None` for a path without points.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        match &self.geometry {
            Geometry::Rect { left, top, width, height } | Geometry::Triangle { left, top, width, height } => Some(
                Bounds::from_corners(Point::new(*left, *top), Point::new(left + width, top + height)),
            ),
            Geometry::Circle { center, radius } => {
                let r = radius.abs();
                Some(Bounds { left: center.x - r, top: center.y - r, width: r * 2.0, height: r * 2.0 })
            }
            Geometry::Line { start, end } => Some(Bounds::from_corners(*start, *end)),
            Geometry::Text { left, top, content, font } => {
                #[allow(clippy::cast_precision_loss)]
                let glyphs = content.chars().count() as f64;
                Some(Bounds {
                    left: *left,
                    top: *top,
                    width: glyphs * font.size * GLYPH_WIDTH_RATIO,
                    height: font.size * LINE_HEIGHT,
                })
            }
            Geometry::Path { points } => {
                let first = points.first()?;
                let (mut min, mut max) = (*first, *first);
                for p in points.iter().skip(1) {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                Some(Bounds::from_corners(min, max))
            }
        }
    }

    /// Bounding box with the scale factors applied to its size.
    /// The top-left corner is the scaling origin and does not move.
    #[must_use]
    pub fn scaled_bounds(&self) -> Option<Bounds> {
        self.bounds().map(|b| Bounds {
            width: b.width * self.scale_x.abs(),
            height: b.height * self.scale_y.abs(),
            ..b
        })
    }

    /// Move the shape by `(dx, dy)` without changing its size.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match &mut self.geometry {
            Geometry::Rect { left, top, .. } | Geometry::Triangle { left, top, .. } | Geometry::Text { left, top, .. } => {
                *left += dx;
                *top += dy;
            }
            Geometry::Circle { center, .. } => {
                center.x += dx;
                center.y += dy;
            }
            Geometry::Line { start, end } => {
                for p in [start, end] {
                    p.x += dx;
                    p.y += dy;
                }
            }
            Geometry::Path { points } => {
                for p in points {
                    p.x += dx;
                    p.y += dy;
                }
            }
        }
    }

    /// Move the shape so its bounding box's top-left corner is at `(left, top)`.
    /// Returns `false` when the shape has no bounds.
    pub fn set_position(&mut self, left: f64, top: f64) -> bool {
        let Some(b) = self.bounds() else {
            return false;
        };
        self.translate(left - b.left, top - b.top);
        true
    }
}
