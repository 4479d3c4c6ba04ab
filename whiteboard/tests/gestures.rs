//! End-to-end drawing sessions against the in-memory scene.
#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use whiteboard::camera::Point;
use whiteboard::config::ControllerConfig;
use whiteboard::controller::{Action, Controller, Cursor};
use whiteboard::hooks::{MemoryClipboard, MemoryStore};
use whiteboard::input::{Key, Modifiers, Tool, WheelDelta};
use whiteboard::shape::Geometry;
use whiteboard::surface::{Scene, Surface};

fn session() -> (Controller<Scene>, Rc<RefCell<MemoryStore>>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let ctl = Controller::new(Scene::new(800.0, 600.0), ControllerConfig::default())
        .with_store(Box::new(Rc::clone(&store)))
        .with_clipboard(Box::new(MemoryClipboard::new()));
    (ctl, store)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn ctrl() -> Modifiers {
    Modifiers { ctrl: true, ..Modifiers::default() }
}

#[test]
fn draw_rectangle_then_circle() {
    let (mut ctl, store) = session();

    assert!(ctl.select_tool(Tool::Rectangle).contains(&Action::SetCursor(Cursor::Crosshair)));
    ctl.on_pointer_down(pt(10.0, 10.0));
    ctl.on_pointer_move(pt(60.0, 30.0));
    ctl.on_pointer_move(pt(110.0, 60.0));
    let up = ctl.on_pointer_up();
    assert!(up.contains(&Action::ToolChanged(Tool::Select)));

    ctl.select_tool(Tool::Circle);
    ctl.on_pointer_down(pt(0.0, 0.0));
    ctl.on_pointer_move(pt(3.0, 4.0));
    ctl.on_pointer_up();

    let shapes: Vec<_> = ctl.surface().shapes().cloned().collect();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].geometry, Geometry::Rect { left: 10.0, top: 10.0, width: 100.0, height: 50.0 });
    assert_eq!(shapes[1].geometry, Geometry::Circle { center: pt(0.0, 0.0), radius: 5.0 });
    assert_eq!(store.borrow().len(), 2);
    assert_eq!(ctl.tool(), Tool::Select);
}

#[test]
fn copy_paste_then_delete_original() {
    let (mut ctl, store) = session();
    ctl.select_tool(Tool::Triangle);
    ctl.on_pointer_down(pt(100.0, 100.0));
    ctl.on_pointer_move(pt(140.0, 130.0));
    ctl.on_pointer_up();
    let original = ctl.surface().ids()[0];

    ctl.on_key_down(&Key::new("c"), ctrl());
    ctl.on_key_down(&Key::new("v"), ctrl());
    let pasted = ctl.surface().ids()[1];
    assert_eq!(
        ctl.surface().get(&pasted).map(|s| s.geometry.clone()),
        Some(Geometry::Triangle { left: 120.0, top: 120.0, width: 40.0, height: 30.0 })
    );

    ctl.surface_mut().set_active_selection(vec![original]);
    ctl.on_key_down(&Key::new("Delete"), Modifiers::default());
    assert_eq!(ctl.surface().ids(), vec![pasted]);
    assert!(store.borrow().get(&original).is_none());
    assert!(store.borrow().get(&pasted).is_some());
}

#[test]
fn text_being_edited_survives_delete() {
    let (mut ctl, _store) = session();
    ctl.select_tool(Tool::Text);
    ctl.on_pointer_down(pt(20.0, 20.0));
    ctl.on_pointer_up();
    let text = ctl.surface().ids()[0];
    assert_eq!(ctl.surface().active_selection(), vec![text]);

    ctl.surface_mut().begin_text_edit(&text);
    ctl.on_key_down(&Key::new("Backspace"), Modifiers::default());
    assert_eq!(ctl.surface().ids(), vec![text]);
}

#[test]
fn zoomed_drag_and_clamped_move() {
    let (mut ctl, _store) = session();
    ctl.on_wheel(pt(0.0, 0.0), WheelDelta { dx: 0.0, dy: -500.0 });
    assert!((ctl.surface().zoom() - 0.5).abs() < 1e-9);

    ctl.select_tool(Tool::Rectangle);
    ctl.on_pointer_down(pt(5.0, 5.0));
    ctl.on_pointer_move(pt(25.0, 25.0));
    ctl.on_pointer_up();
    let id = ctl.surface().ids()[0];
    let bounds = ctl.surface().get(&id).and_then(whiteboard::shape::Shape::bounds);
    let bounds = bounds.map(|b| (b.left.round(), b.top.round(), b.width.round(), b.height.round()));
    assert_eq!(bounds, Some((10.0, 10.0, 40.0, 40.0)));

    if let Some(shape) = ctl.surface_mut().get_mut(&id) {
        shape.translate(-100.0, 1000.0);
    }
    ctl.on_object_moving(&id);
    ctl.on_object_modified(&[id]);
    let left_top = ctl.surface().get(&id).and_then(whiteboard::shape::Shape::scaled_bounds).map(|b| (b.left, b.top));
    assert_eq!(left_top, Some((0.0, 560.0)));
}

#[test]
fn reset_after_freeform_strokes() {
    let (mut ctl, store) = session();
    ctl.select_tool(Tool::Freeform);
    ctl.on_pointer_down(pt(0.0, 0.0));
    ctl.on_pointer_up();
    let stroke = whiteboard::shape::Shape::new(
        Geometry::Path { points: vec![pt(0.0, 0.0), pt(10.0, 5.0), pt(20.0, 0.0)] },
        whiteboard::shape::Style { fill: None, stroke: Some("#000000".into()), stroke_width: 5.0 },
    );
    ctl.on_path_created(stroke);
    assert_eq!(ctl.tool(), Tool::Freeform);
    assert_eq!(store.borrow().len(), 1);

    ctl.select_tool(Tool::Reset);
    assert!(ctl.surface().ids().is_empty());
    assert!(store.borrow().is_empty());
    assert!(!ctl.surface().is_drawing_mode());
}
