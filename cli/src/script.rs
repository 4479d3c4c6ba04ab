//! Gesture scripts: a JSON array of UI events replayed through a controller.
//!
//! Shapes are addressed by their index in draw order at the time the step
//! runs, since ids are generated during replay.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use serde::{Deserialize, Serialize};
use tracing::debug;
use whiteboard::attributes::AttributeEdit;
use whiteboard::camera::Point;
use whiteboard::controller::{Action, Controller};
use whiteboard::input::{Key, Modifiers, Tool, WheelDelta};
use whiteboard::shape::{Geometry, Shape, ShapeId, Style};
use whiteboard::surface::{Scene, Surface};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("step {step}: no shape at index {index}")]
    NoShape { step: usize, index: usize },
    #[error("step {step}: text editing needs a text shape at index {index}")]
    NotText { step: usize, index: usize },
}

/// One UI event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Tool {
        tool: Tool,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
    Wheel {
        x: f64,
        y: f64,
        dy: f64,
        #[serde(default)]
        dx: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Select shapes by index, as a click or marquee on the surface would.
    Select {
        shapes: Vec<usize>,
    },
    /// Enter inline editing on a text shape, optionally replacing its content.
    EditText {
        shape: usize,
        #[serde(default)]
        content: Option<String>,
    },
    /// A finished brush stroke.
    Path {
        points: Vec<Point>,
    },
    Attribute {
        edit: AttributeEdit,
    },
    Editing {
        editing: bool,
    },
    Resize {
        width: f64,
        height: f64,
    },
    /// Drag a shape by an offset.
    Moving {
        shape: usize,
        dx: f64,
        dy: f64,
    },
    /// Set a shape's scale factors interactively.
    Scaling {
        shape: usize,
        scale_x: f64,
        scale_y: f64,
    },
    /// End of an interactive move or scale on the given shapes.
    Modified {
        shapes: Vec<usize>,
    },
}

/// Final state of a replayed session.
#[derive(Debug, Serialize)]
pub struct Report {
    pub actions: Vec<Action>,
    pub shapes: Vec<Shape>,
    pub zoom: f64,
    pub tool: Tool,
}

/// Run every step in order and collect the emitted actions.
///
/// # Errors
///
/// Returns an error if a step addresses a shape that does not exist.
pub fn replay(ctl: &mut Controller<Scene>, steps: &[Step]) -> Result<Report, ScriptError> {
    let mut actions = Vec::new();
    for (step, op) in steps.iter().enumerate() {
        debug!(step, op = ?op, "replaying");
        actions.extend(run(ctl, step, op)?);
    }
    Ok(Report {
        actions,
        shapes: ctl.surface().shapes().cloned().collect(),
        zoom: ctl.surface().zoom(),
        tool: ctl.tool(),
    })
}

fn run(ctl: &mut Controller<Scene>, step: usize, op: &Step) -> Result<Vec<Action>, ScriptError> {
    let actions = match op {
        Step::Tool { tool } => ctl.select_tool(*tool),
        Step::Down { x, y } => ctl.on_pointer_down(Point::new(*x, *y)),
        Step::Move { x, y } => ctl.on_pointer_move(Point::new(*x, *y)),
        Step::Up => ctl.on_pointer_up(),
        Step::Wheel { x, y, dy, dx } => ctl.on_wheel(Point::new(*x, *y), WheelDelta { dx: *dx, dy: *dy }),
        Step::Key { key, modifiers } => ctl.on_key_down(&Key::new(key), *modifiers),
        Step::Select { shapes } => {
            let ids = shapes.iter().map(|&index| shape_at(ctl, step, index)).collect::<Result<Vec<_>, _>>()?;
            ctl.surface_mut().set_active_selection(ids.clone());
            ctl.on_selection_created(&ids)
        }
        Step::EditText { shape, content } => {
            let id = shape_at(ctl, step, *shape)?;
            if !ctl.surface_mut().begin_text_edit(&id) {
                return Err(ScriptError::NotText { step, index: *shape });
            }
            match content {
                Some(content) => ctl.on_text_changed(&id, content),
                None => Vec::new(),
            }
        }
        Step::Path { points } => {
            let style = Style {
                fill: None,
                stroke: Some(ctl.config().default_color.clone()),
                stroke_width: ctl.config().brush_width,
            };
            ctl.on_path_created(Shape::new(Geometry::Path { points: points.clone() }, style))
        }
        Step::Attribute { edit } => ctl.edit_attribute(edit),
        Step::Editing { editing } => {
            ctl.set_editing(*editing);
            Vec::new()
        }
        Step::Resize { width, height } => ctl.on_resize(*width, *height),
        Step::Moving { shape, dx, dy } => {
            let id = shape_at(ctl, step, *shape)?;
            if let Some(target) = ctl.surface_mut().get_mut(&id) {
                target.translate(*dx, *dy);
            }
            ctl.on_object_moving(&id)
        }
        Step::Scaling { shape, scale_x, scale_y } => {
            let id = shape_at(ctl, step, *shape)?;
            if let Some(target) = ctl.surface_mut().get_mut(&id) {
                target.scale_x = *scale_x;
                target.scale_y = *scale_y;
            }
            ctl.on_object_scaling(&id)
        }
        Step::Modified { shapes } => {
            let ids = shapes.iter().map(|&index| shape_at(ctl, step, index)).collect::<Result<Vec<_>, _>>()?;
            ctl.on_object_modified(&ids)
        }
    };
    Ok(actions)
}

fn shape_at(ctl: &Controller<Scene>, step: usize, index: usize) -> Result<ShapeId, ScriptError> {
    ctl.surface().ids().get(index).copied().ok_or(ScriptError::NoShape { step, index })
}
