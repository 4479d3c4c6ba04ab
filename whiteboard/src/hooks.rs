//! External collaborators injected into the controller.
//!
//! Persistence, history and the clipboard are seams with trivial contracts.
//! Each has an implementation that is good enough for a session that does
//! not need the real thing.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::shape::{Shape, ShapeId};

/// Store that mirrors finished shapes, keyed by shape id.
pub trait ShapeStore {
    /// Record the current state of a shape.
    fn sync_shape(&mut self, shape: &Shape);

    /// Forget a shape that was removed from the board.
    fn delete_shape(&mut self, id: &ShapeId);
}

/// Undo / redo provider.
pub trait HistoryManager {
    fn undo(&mut self);

    fn redo(&mut self);
}

/// Holder of the serialized copy buffer.
pub trait Clipboard {
    fn get(&self) -> Option<String>;

    fn set(&mut self, payload: String);
}

/// Store that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl ShapeStore for NoopStore {
    fn sync_shape(&mut self, _shape: &Shape) {}

    fn delete_shape(&mut self, _id: &ShapeId) {}
}

/// Store that keeps the latest synced copy of every shape in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    shapes: HashMap<ShapeId, Shape>,
    syncs: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of `sync_shape` calls received so far.
    #[must_use]
    pub fn sync_count(&self) -> usize {
        self.syncs
    }
}

impl ShapeStore for MemoryStore {
    fn sync_shape(&mut self, shape: &Shape) {
        self.syncs += 1;
        self.shapes.insert(shape.id, shape.clone());
    }

    fn delete_shape(&mut self, id: &ShapeId) {
        self.shapes.remove(id);
    }
}

/// History that has nothing to undo.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHistory;

impl HistoryManager for NoopHistory {
    fn undo(&mut self) {
        debug!("undo requested; no history attached");
    }

    fn redo(&mut self) {
        debug!("redo requested; no history attached");
    }
}

/// Clipboard held in process memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    payload: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard pre-filled with `payload`.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self { payload: Some(payload.into()) }
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&self) -> Option<String> {
        self.payload.clone()
    }

    fn set(&mut self, payload: String) {
        self.payload = Some(payload);
    }
}

// Shared handles let a host keep inspecting a collaborator after handing it
// to the controller.

impl<T: ShapeStore + ?Sized> ShapeStore for Rc<RefCell<T>> {
    fn sync_shape(&mut self, shape: &Shape) {
        self.borrow_mut().sync_shape(shape);
    }

    fn delete_shape(&mut self, id: &ShapeId) {
        self.borrow_mut().delete_shape(id);
    }
}

impl<T: HistoryManager + ?Sized> HistoryManager for Rc<RefCell<T>> {
    fn undo(&mut self) {
        self.borrow_mut().undo();
    }

    fn redo(&mut self) {
        self.borrow_mut().redo();
    }
}

impl<T: Clipboard + ?Sized> Clipboard for Rc<RefCell<T>> {
    fn get(&self) -> Option<String> {
        self.borrow().get()
    }

    fn set(&mut self, payload: String) {
        self.borrow_mut().set(payload);
    }
}
