//! Keep dragged shapes inside the visible surface.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::shape::Shape;
use crate::surface::SurfaceSize;

/// Move `shape` so its scaled bounding box lies within `size`.
///
/// Each axis is clamped independently to `[0, size - extent]`. A shape
/// larger than the surface on an axis is pinned to 0 on that axis.
/// Returns `true` if the shape moved; shapes without bounds never move.
#[allow(clippy::float_cmp)]
pub fn clamp_to_surface(shape: &mut Shape, size: SurfaceSize) -> bool {
    let Some(b) = shape.scaled_bounds() else {
        return false;
    };
    let left = clamp_axis(b.left, b.width, size.width);
    let top = clamp_axis(b.top, b.height, size.height);
    if left == b.left && top == b.top {
        return false;
    }
    shape.translate(left - b.left, top - b.top);
    true
}

fn clamp_axis(pos: f64, extent: f64, limit: f64) -> f64 {
    pos.min(limit - extent).max(0.0)
}
