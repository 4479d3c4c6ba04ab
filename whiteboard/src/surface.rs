//! Rendering surface seam and the in-memory reference scene.
//!
//! The controller never draws. It talks to a [`Surface`], which owns the
//! shapes once they are inserted and provides selection, hit-testing, the
//! viewport transform and the plain-object codec. [`Scene`] implements the
//! trait without any graphics backend; hosts with a real canvas implement
//! the trait over their scene graph.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::HashSet;

use serde_json::Value;

use crate::camera::{Camera, Point};
use crate::error::SurfaceError;
use crate::shape::{Shape, ShapeId};

/// Pixel dimensions of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

/// Everything the controller needs from the rendering layer.
pub trait Surface {
    /// Add a shape on top of the existing ones. A shape with the same id is replaced.
    fn insert(&mut self, shape: Shape);

    /// Remove a shape, returning it if it was present.
    fn remove(&mut self, id: &ShapeId) -> Option<Shape>;

    fn get(&self, id: &ShapeId) -> Option<&Shape>;

    fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape>;

    /// Ids of all shapes in draw order (bottom first).
    fn ids(&self) -> Vec<ShapeId>;

    /// Allow or forbid interactive selection of a shape. Returns `false` for unknown ids.
    fn set_selectable(&mut self, id: &ShapeId, selectable: bool) -> bool;

    /// Ids of the currently selected shapes. May include a text object that is being edited.
    fn active_selection(&self) -> Vec<ShapeId>;

    /// Replace the selection. Unknown ids are dropped.
    fn set_active_selection(&mut self, ids: Vec<ShapeId>);

    fn discard_selection(&mut self);

    /// Whether the shape is a text object currently in inline edit mode.
    fn is_editing(&self, id: &ShapeId) -> bool;

    /// Topmost selectable shape under a surface-space point.
    fn hit_test(&self, pt: Point) -> Option<ShapeId>;

    fn zoom(&self) -> f64;

    /// Set the zoom factor, keeping the screen-space `center` fixed.
    fn set_zoom(&mut self, zoom: f64, center: Point);

    /// Convert a screen-space pointer position to surface coordinates.
    fn pointer(&self, screen: Point) -> Point;

    fn size(&self) -> SurfaceSize;

    fn resize(&mut self, width: f64, height: f64);

    /// Switch native free-drawing (brush) mode on or off.
    fn set_drawing_mode(&mut self, enabled: bool, brush_width: f64);

    fn is_drawing_mode(&self) -> bool;

    /// Plain-object form of a shape.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if the id is not on the surface.
    fn serialize(&self, id: &ShapeId) -> Result<Value, SurfaceError> {
        let shape = self.get(id).ok_or(SurfaceError::UnknownShape(*id))?;
        Ok(serde_json::to_value(shape)?)
    }

    /// Rebuild a shape from its plain-object form. The shape is not inserted.
    ///
    /// # Errors
    ///
    /// Returns `Codec` if the value does not describe a shape.
    fn deserialize(&self, value: Value) -> Result<Shape, SurfaceError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// In-memory [`Surface`] with no rendering backend.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Shape>,
    unselectable: HashSet<ShapeId>,
    selection: Vec<ShapeId>,
    editing: Option<ShapeId>,
    camera: Camera,
    size: SurfaceSize,
    drawing_mode: bool,
    brush_width: f64,
}

impl Scene {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { size: SurfaceSize { width, height }, ..Self::default() }
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.objects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn is_selectable(&self, id: &ShapeId) -> bool {
        self.get(id).is_some() && !self.unselectable.contains(id)
    }

    #[must_use]
    pub fn brush_width(&self) -> f64 {
        self.brush_width
    }

    /// Select the topmost selectable shape under `pt`, or clear the selection.
    pub fn select_at(&mut self, pt: Point) -> Option<ShapeId> {
        let hit = self.hit_test(pt);
        self.selection = hit.into_iter().collect();
        hit
    }

    /// Put a text object into inline edit mode. It also becomes part of the
    /// selection, as editing implies selecting.
    pub fn begin_text_edit(&mut self, id: &ShapeId) -> bool {
        if !self.get(id).is_some_and(Shape::is_text) {
            return false;
        }
        self.editing = Some(*id);
        if !self.selection.contains(id) {
            self.selection.push(*id);
        }
        true
    }

    pub fn end_text_edit(&mut self) {
        self.editing = None;
    }
}

impl Surface for Scene {
    fn insert(&mut self, shape: Shape) {
        if let Some(existing) = self.objects.iter_mut().find(|s| s.id == shape.id) {
            *existing = shape;
        } else {
            self.objects.push(shape);
        }
    }

    fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.objects.iter().position(|s| s.id == *id)?;
        self.unselectable.remove(id);
        self.selection.retain(|s| s != id);
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        Some(self.objects.remove(index))
    }

    fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.objects.iter().find(|s| s.id == *id)
    }

    fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.objects.iter_mut().find(|s| s.id == *id)
    }

    fn ids(&self) -> Vec<ShapeId> {
        self.objects.iter().map(|s| s.id).collect()
    }

    fn set_selectable(&mut self, id: &ShapeId, selectable: bool) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if selectable {
            self.unselectable.remove(id);
        } else {
            self.unselectable.insert(*id);
        }
        true
    }

    fn active_selection(&self) -> Vec<ShapeId> {
        self.selection.clone()
    }

    fn set_active_selection(&mut self, ids: Vec<ShapeId>) {
        self.selection = ids.into_iter().filter(|id| self.get(id).is_some()).collect();
    }

    fn discard_selection(&mut self) {
        self.selection.clear();
        self.editing = None;
    }

    fn is_editing(&self, id: &ShapeId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    fn hit_test(&self, pt: Point) -> Option<ShapeId> {
        self.objects
            .iter()
            .rev()
            .filter(|s| !self.unselectable.contains(&s.id))
            .find(|s| s.scaled_bounds().is_some_and(|b| b.contains(pt)))
            .map(|s| s.id)
    }

    fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    fn set_zoom(&mut self, zoom: f64, center: Point) {
        self.camera.zoom_to_point(center, zoom);
    }

    fn pointer(&self, screen: Point) -> Point {
        self.camera.surface_point(screen)
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = SurfaceSize { width, height };
    }

    fn set_drawing_mode(&mut self, enabled: bool, brush_width: f64) {
        self.drawing_mode = enabled;
        self.brush_width = brush_width;
    }

    fn is_drawing_mode(&self) -> bool {
        self.drawing_mode
    }
}
