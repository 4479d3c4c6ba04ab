//! Drawing session controller.
//!
//! Owns the [`Surface`], the injected collaborators and the transient gesture
//! state. Every input handler takes `&mut self`, runs to completion and
//! returns the [`Action`]s the host should apply (tool highlight, attribute
//! panel, cursor, default-prevention, repaint).
//!
//! Gesture lifecycle for drag tools:
//!
//! | Event | Effect |
//! |-------|--------|
//! | pointer-down | record the anchor, start drawing |
//! | first pointer-move | create the shape at the anchor and insert it |
//! | later pointer-moves | resize the shape to the pointer |
//! | pointer-up | sync the shape, revert to the select tool |
//!
//! Text places a shape on pointer-down and finalizes on pointer-up.
//! Freeform hands drawing over to the surface's brush; the finished stroke
//! arrives through [`Controller::on_path_created`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::attributes::{AttributeEdit, ElementAttributes};
use crate::bounds::clamp_to_surface;
use crate::camera::{Point, next_zoom};
use crate::config::ControllerConfig;
use crate::factory::{create_shape, create_text, resize_shape};
use crate::hooks::{Clipboard, HistoryManager, MemoryClipboard, NoopHistory, NoopStore, ShapeStore};
use crate::input::{GestureState, Key, Modifiers, Tool, WheelDelta};
use crate::keys::{KeyCommand, commands_for, copy_selection, decode_paste, deletable_selection};
use crate::shape::{Geometry, Shape, ShapeId};
use crate::surface::Surface;

/// Pointer cursor requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Crosshair,
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// The active tool changed; highlight it in the toolbar.
    ToolChanged(Tool),
    /// New contents for the attributes panel.
    AttributesChanged(ElementAttributes),
    SetCursor(Cursor),
    /// Suppress the browser's default handling of the triggering event.
    PreventDefault,
    RenderNeeded,
}

pub struct Controller<S: Surface> {
    surface: S,
    store: Box<dyn ShapeStore>,
    history: Box<dyn HistoryManager>,
    clipboard: Box<dyn Clipboard>,
    config: ControllerConfig,
    tool: Tool,
    gesture: GestureState,
    editing: bool,
    attributes: Option<ElementAttributes>,
}

impl<S: Surface> Controller<S> {
    /// Controller with a no-op store and history and an in-memory clipboard.
    #[must_use]
    pub fn new(surface: S, config: ControllerConfig) -> Self {
        Self {
            surface,
            store: Box::new(NoopStore),
            history: Box::new(NoopHistory),
            clipboard: Box::new(MemoryClipboard::new()),
            config,
            tool: Tool::Select,
            gesture: GestureState::default(),
            editing: false,
            attributes: None,
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: Box<dyn ShapeStore>) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: Box<dyn HistoryManager>) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for hosts that drive native surface behavior
    /// (selection, text editing) before notifying the controller.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// The last projection sent to the attributes panel.
    #[must_use]
    pub fn attributes(&self) -> Option<&ElementAttributes> {
        self.attributes.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    // --- Toolbar ---

    /// Switch tools. Aborts any gesture in flight.
    ///
    /// `Delete` and `Reset` act immediately and leave `Select` active.
    pub fn select_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.abort_gesture();
        if self.surface.is_drawing_mode() {
            self.surface.set_drawing_mode(false, self.config.brush_width);
        }
        let mut actions = Vec::new();
        if tool.is_one_shot() {
            if tool == Tool::Reset {
                self.reset_board();
            } else {
                let removed = self.delete_selection();
                info!(removed, "deleted selection from toolbar");
            }
            actions.push(Action::RenderNeeded);
            self.activate(Tool::Select, &mut actions);
        } else {
            self.activate(tool, &mut actions);
        }
        actions
    }

    fn activate(&mut self, tool: Tool, actions: &mut Vec<Action>) {
        self.tool = tool;
        let selectable = !tool.is_drawing();
        for id in self.surface.ids() {
            self.surface.set_selectable(&id, selectable);
        }
        if selectable {
            actions.push(Action::SetCursor(Cursor::Default));
        } else {
            self.surface.discard_selection();
            actions.push(Action::SetCursor(Cursor::Crosshair));
        }
        info!(tool = %tool, "tool changed");
        actions.push(Action::ToolChanged(tool));
    }

    fn abort_gesture(&mut self) {
        if let Some(id) = self.gesture.active_shape
            && self.surface.remove(&id).is_some()
        {
            debug!(id = %id, "aborted in-progress shape");
        }
        self.gesture.clear();
    }

    // --- Pointer ---

    /// Start a gesture. A gesture still open from an earlier pointer-down
    /// (its pointer-up never arrived) is aborted first.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.gesture.is_idle() {
            warn!(tool = %self.tool, "pointer-down during an open gesture; aborting it");
            self.abort_gesture();
        }
        self.gesture.is_drawing = false;
        let pointer = self.surface.pointer(screen_pt);
        match self.tool {
            Tool::Select | Tool::Delete | Tool::Reset => Vec::new(),
            Tool::Text => {
                let shape = create_text(pointer, &self.config.text.placeholder, &self.config);
                let id = shape.id;
                self.surface.insert(shape);
                self.surface.set_selectable(&id, false);
                self.gesture.initial_pointer = Some(pointer);
                self.gesture.active_shape = Some(id);
                debug!(id = %id, x = pointer.x, y = pointer.y, "placed text");
                vec![Action::RenderNeeded]
            }
            Tool::Freeform => {
                self.gesture.is_drawing = true;
                self.gesture.initial_pointer = Some(pointer);
                self.surface.set_drawing_mode(true, self.config.brush_width);
                debug!("freeform stroke started");
                Vec::new()
            }
            Tool::Rectangle | Tool::Circle | Tool::Triangle | Tool::Line => {
                self.gesture.is_drawing = true;
                self.gesture.initial_pointer = Some(pointer);
                debug!(tool = %self.tool, x = pointer.x, y = pointer.y, "drag started");
                Vec::new()
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.gesture.is_drawing || self.tool == Tool::Freeform {
            return Vec::new();
        }
        let (Some(anchor), Some(kind)) = (self.gesture.initial_pointer, self.tool.shape_kind()) else {
            return Vec::new();
        };
        let pointer = self.surface.pointer(screen_pt);
        match self.gesture.active_shape {
            Some(id) => {
                let Some(shape) = self.surface.get_mut(&id) else {
                    warn!(id = %id, "active shape vanished from surface");
                    self.gesture.clear();
                    return Vec::new();
                };
                resize_shape(shape, pointer, anchor);
            }
            None => {
                let shape = create_shape(kind, pointer, anchor, &self.config);
                let id = shape.id;
                self.surface.insert(shape);
                self.surface.set_selectable(&id, false);
                self.gesture.active_shape = Some(id);
                debug!(id = %id, kind = ?kind, "shape created");
            }
        }
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.gesture.initial_pointer.is_none() {
            return Vec::new();
        }
        let active = self.gesture.active_shape;
        self.gesture.clear();
        if self.tool == Tool::Freeform {
            debug!("freeform stroke ended");
            return Vec::new();
        }
        let Some(id) = active else {
            debug!(tool = %self.tool, "click without drag");
            return Vec::new();
        };
        let Some(shape) = self.surface.get(&id) else {
            warn!(id = %id, "active shape vanished before commit");
            return Vec::new();
        };
        self.store.sync_shape(shape);
        info!(id = %id, kind = shape.kind_name(), "shape committed");

        let mut actions = vec![Action::RenderNeeded];
        if !self.surface.is_drawing_mode() {
            self.activate(Tool::Select, &mut actions);
            self.surface.set_active_selection(vec![id]);
            actions.extend(self.on_selection_created(&[id]));
        }
        actions
    }

    /// Accept a finished brush stroke from the surface.
    pub fn on_path_created(&mut self, mut path: Shape) -> Vec<Action> {
        path.id = Uuid::new_v4();
        let id = path.id;
        self.store.sync_shape(&path);
        self.surface.insert(path);
        if self.tool.is_drawing() {
            self.surface.set_selectable(&id, false);
        }
        info!(id = %id, "path committed");
        vec![Action::RenderNeeded]
    }

    // --- Selection and object events ---

    /// The surface selected `ids`. Projects attributes for a single selection.
    pub fn on_selection_created(&mut self, ids: &[ShapeId]) -> Vec<Action> {
        if self.editing {
            debug!("attribute panel is being edited; selection ignored");
            return Vec::new();
        }
        let [id] = ids else {
            return Vec::new();
        };
        let Some(shape) = self.surface.get(id) else {
            warn!(id = %id, "selection of unknown shape");
            return Vec::new();
        };
        let attrs = ElementAttributes::project(shape);
        self.attributes = Some(attrs.clone());
        vec![Action::AttributesChanged(attrs)]
    }

    /// The host is resizing `id` interactively.
    pub fn on_object_scaling(&mut self, id: &ShapeId) -> Vec<Action> {
        let Some(shape) = self.surface.get(id) else {
            warn!(id = %id, "scaling unknown shape");
            return Vec::new();
        };
        let attrs = self.attributes.get_or_insert_with(ElementAttributes::default);
        attrs.rescale(shape);
        vec![Action::AttributesChanged(attrs.clone())]
    }

    /// The host is dragging `id`. Keeps it inside the surface.
    pub fn on_object_moving(&mut self, id: &ShapeId) -> Vec<Action> {
        let size = self.surface.size();
        let Some(shape) = self.surface.get_mut(id) else {
            warn!(id = %id, "moving unknown shape");
            return Vec::new();
        };
        if clamp_to_surface(shape, size) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// An interactive move/scale finished. Syncs every target.
    pub fn on_object_modified(&mut self, ids: &[ShapeId]) -> Vec<Action> {
        for id in ids {
            match self.surface.get(id) {
                Some(shape) => self.store.sync_shape(shape),
                None => warn!(id = %id, "modified unknown shape"),
            }
        }
        Vec::new()
    }

    /// Apply an edit from the attributes panel to the single selected shape.
    pub fn edit_attribute(&mut self, edit: &AttributeEdit) -> Vec<Action> {
        let selection = self.surface.active_selection();
        let [id] = selection.as_slice() else {
            debug!(selected = selection.len(), "attribute edit needs exactly one selected shape");
            return Vec::new();
        };
        let Some(shape) = self.surface.get_mut(id) else {
            return Vec::new();
        };
        if !edit.apply(shape) {
            warn!(id = %id, edit = ?edit, "attribute edit rejected");
            return Vec::new();
        }
        self.store.sync_shape(shape);
        let attrs = ElementAttributes::project(shape);
        self.attributes = Some(attrs.clone());
        vec![Action::AttributesChanged(attrs), Action::RenderNeeded]
    }

    /// Replace the content of a text shape after inline editing.
    pub fn on_text_changed(&mut self, id: &ShapeId, content: &str) -> Vec<Action> {
        let Some(shape) = self.surface.get_mut(id) else {
            warn!(id = %id, "text change for unknown shape");
            return Vec::new();
        };
        let kind = shape.kind_name();
        let Geometry::Text { content: current, .. } = &mut shape.geometry else {
            warn!(id = %id, kind, "text change for non-text shape");
            return Vec::new();
        };
        content.clone_into(current);
        self.store.sync_shape(shape);
        vec![Action::RenderNeeded]
    }

    /// The attributes panel gained (`true`) or lost focus.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    // --- Viewport ---

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let cfg = &self.config;
        let zoom = next_zoom(self.surface.zoom(), delta.dy, cfg.zoom_step, cfg.min_zoom, cfg.max_zoom);
        self.surface.set_zoom(zoom, screen_pt);
        debug!(zoom, "zoom changed");
        vec![Action::PreventDefault, Action::RenderNeeded]
    }

    pub fn on_resize(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.surface.resize(width, height);
        vec![Action::RenderNeeded]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        for command in commands_for(key, modifiers) {
            match command {
                KeyCommand::Copy => self.copy(),
                KeyCommand::Paste => actions.extend(self.paste()),
                KeyCommand::Delete => {
                    if self.delete_selection() > 0 {
                        actions.push(Action::RenderNeeded);
                    }
                }
                KeyCommand::Undo => self.history.undo(),
                KeyCommand::Redo => self.history.redo(),
                KeyCommand::PreventDefault => actions.push(Action::PreventDefault),
            }
        }
        actions
    }

    fn copy(&mut self) {
        match copy_selection(&self.surface) {
            Ok(Some(payload)) => {
                debug!(bytes = payload.len(), "selection copied");
                self.clipboard.set(payload);
            }
            Ok(None) => debug!("nothing selected to copy"),
            Err(e) => error!(error = %e, "copy failed"),
        }
    }

    fn paste(&mut self) -> Vec<Action> {
        let Some(payload) = self.clipboard.get() else {
            debug!("clipboard is empty");
            return Vec::new();
        };
        let shapes = match decode_paste(&self.surface, &payload, self.config.paste_offset) {
            Ok(shapes) => shapes,
            Err(e) => {
                error!(error = %e, "paste failed");
                return Vec::new();
            }
        };
        if shapes.is_empty() {
            return Vec::new();
        }
        let selectable = !self.tool.is_drawing();
        let mut ids = Vec::with_capacity(shapes.len());
        for shape in shapes {
            self.store.sync_shape(&shape);
            ids.push(shape.id);
            self.surface.insert(shape);
        }
        for id in &ids {
            self.surface.set_selectable(id, selectable);
        }
        info!(count = ids.len(), "pasted shapes");
        let mut actions = vec![Action::RenderNeeded];
        if selectable {
            self.surface.set_active_selection(ids.clone());
            actions.extend(self.on_selection_created(&ids));
        }
        actions
    }

    fn delete_selection(&mut self) -> usize {
        let mut removed = 0;
        for id in deletable_selection(&self.surface) {
            if self.surface.remove(&id).is_some() {
                self.store.delete_shape(&id);
                removed += 1;
            }
        }
        self.surface.discard_selection();
        if removed > 0 {
            info!(removed, "deleted shapes");
        }
        removed
    }

    fn reset_board(&mut self) {
        let ids = self.surface.ids();
        for id in &ids {
            if self.surface.remove(id).is_some() {
                self.store.delete_shape(id);
            }
        }
        self.surface.discard_selection();
        self.attributes = None;
        info!(removed = ids.len(), "board reset");
    }
}
