#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or surface space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport of the surface: a surface point `p` is drawn on screen at
/// `p * zoom + offset`.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub offset: Point,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset: Point::default(), zoom: 1.0 }
    }
}

impl Camera {
    /// Surface coordinates of a screen-space position.
    #[must_use]
    pub fn surface_point(&self, screen: Point) -> Point {
        Point::new((screen.x - self.offset.x) / self.zoom, (screen.y - self.offset.y) / self.zoom)
    }

    /// Set `zoom`, moving the offset so the surface point under `screen`
    /// stays under it.
    pub fn zoom_to_point(&mut self, screen: Point, zoom: f64) {
        let pinned = self.surface_point(screen);
        self.offset = Point::new(screen.x - pinned.x * zoom, screen.y - pinned.y * zoom);
        self.zoom = zoom;
    }
}

/// Zoom factor after one wheel notification.
///
/// `delta_y` is the raw vertical wheel delta; the result is clamped to
/// `[min, max]`.
#[must_use]
pub fn next_zoom(zoom: f64, delta_y: f64, step: f64, min: f64, max: f64) -> f64 {
    (zoom + delta_y * step).clamp(min, max)
}
