//! Keyboard shortcuts and the clipboard operations they trigger.
//!
//! | Key | Modifier | Command |
//! |-----|----------|---------|
//! | `c` | ctrl / meta | copy |
//! | `v` | ctrl / meta | paste |
//! | `x` | ctrl / meta | cut (copy, then delete) |
//! | `z` | ctrl / meta | undo |
//! | `y` | ctrl / meta | redo |
//! | `Backspace`, `Delete` | none | delete selection |
//! | `/` | not shift | suppress the browser default |
//!
//! Rules are evaluated independently, so one key event can yield several
//! commands. The clipboard payload is a JSON array of serialized shapes.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use serde_json::Value;
use uuid::Uuid;

use crate::error::ClipboardError;
use crate::input::{Key, Modifiers};
use crate::shape::{Shape, ShapeId};
use crate::surface::Surface;

/// A command produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Copy,
    Paste,
    Delete,
    Undo,
    Redo,
    PreventDefault,
}

/// Commands for a key-down event, in execution order.
#[must_use]
pub fn commands_for(key: &Key, modifiers: Modifiers) -> Vec<KeyCommand> {
    let mut out = Vec::new();
    let command = modifiers.command();
    if command && key.is("c") {
        out.push(KeyCommand::Copy);
    }
    if command && key.is("v") {
        out.push(KeyCommand::Paste);
    }
    if key.is("Backspace") || key.is("Delete") {
        out.push(KeyCommand::Delete);
    }
    if command && key.is("x") {
        out.push(KeyCommand::Copy);
        out.push(KeyCommand::Delete);
    }
    if command && key.is("z") {
        out.push(KeyCommand::Undo);
    }
    if command && key.is("y") {
        out.push(KeyCommand::Redo);
    }
    if key.is("/") && !modifiers.shift {
        out.push(KeyCommand::PreventDefault);
    }
    out
}

/// Serialize the active selection as a clipboard payload.
///
/// Returns `Ok(None)` when nothing is selected.
///
/// # Errors
///
/// Returns an error if a selected shape cannot be serialized.
pub fn copy_selection<S: Surface + ?Sized>(surface: &S) -> Result<Option<String>, ClipboardError> {
    let selection = surface.active_selection();
    if selection.is_empty() {
        return Ok(None);
    }
    let items = selection.iter().map(|id| surface.serialize(id)).collect::<Result<Vec<_>, _>>()?;
    Ok(Some(serde_json::to_string(&Value::Array(items))?))
}

/// Decode a clipboard payload into shapes ready to insert.
///
/// Every element is decoded before any is returned, so a bad element
/// rejects the whole payload. Each shape gets a fresh id and is moved by
/// `offset` on both axes.
///
/// # Errors
///
/// Returns an error if the payload is not JSON, not an array, or contains
/// an element that is not a shape.
pub fn decode_paste<S: Surface + ?Sized>(surface: &S, payload: &str, offset: f64) -> Result<Vec<Shape>, ClipboardError> {
    let Value::Array(items) = serde_json::from_str::<Value>(payload)? else {
        return Err(ClipboardError::NotAnArray);
    };
    let mut shapes = items.into_iter().map(|item| surface.deserialize(item)).collect::<Result<Vec<_>, _>>()?;
    for shape in &mut shapes {
        shape.id = Uuid::new_v4();
        shape.translate(offset, offset);
    }
    Ok(shapes)
}

/// Selected shapes that may be deleted: everything except a text object in edit mode.
#[must_use]
pub fn deletable_selection<S: Surface + ?Sized>(surface: &S) -> Vec<ShapeId> {
    surface.active_selection().into_iter().filter(|id| !surface.is_editing(id)).collect()
}
