#![allow(clippy::float_cmp)]

use whiteboard::config::ControllerConfig;

use super::*;

fn controller() -> Controller<Scene> {
    Controller::new(Scene::new(800.0, 600.0), ControllerConfig::default())
}

fn steps(json: &str) -> Vec<Step> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn parses_every_op() {
    let parsed = steps(
        r#"[
            {"op": "tool", "tool": "rectangle"},
            {"op": "down", "x": 1, "y": 2},
            {"op": "move", "x": 3, "y": 4},
            {"op": "up"},
            {"op": "wheel", "x": 0, "y": 0, "dy": -10},
            {"op": "key", "key": "c", "modifiers": {"ctrl": true}},
            {"op": "select", "shapes": [0]},
            {"op": "edit_text", "shape": 0, "content": "hi"},
            {"op": "path", "points": [{"x": 0, "y": 0}]},
            {"op": "attribute", "edit": {"field": "fill", "value": "red"}},
            {"op": "editing", "editing": true},
            {"op": "resize", "width": 10, "height": 10},
            {"op": "moving", "shape": 0, "dx": 1, "dy": 1},
            {"op": "scaling", "shape": 0, "scale_x": 2, "scale_y": 2},
            {"op": "modified", "shapes": [0]}
        ]"#,
    );
    assert_eq!(parsed.len(), 15);
    assert_eq!(parsed[3], Step::Up);
    assert_eq!(parsed[4], Step::Wheel { x: 0.0, y: 0.0, dy: -10.0, dx: 0.0 });
    assert_eq!(
        parsed[5],
        Step::Key { key: "c".into(), modifiers: Modifiers { ctrl: true, ..Modifiers::default() } }
    );
}

#[test]
fn unknown_op_is_rejected() {
    assert!(serde_json::from_str::<Vec<Step>>(r#"[{"op": "teleport"}]"#).is_err());
}

#[test]
fn replay_draws_and_reports() {
    let mut ctl = controller();
    let script = steps(
        r#"[
            {"op": "tool", "tool": "rectangle"},
            {"op": "down", "x": 10, "y": 10},
            {"op": "move", "x": 110, "y": 60},
            {"op": "up"}
        ]"#,
    );
    let report = replay(&mut ctl, &script).unwrap();
    assert_eq!(report.shapes.len(), 1);
    assert_eq!(report.shapes[0].geometry, Geometry::Rect { left: 10.0, top: 10.0, width: 100.0, height: 50.0 });
    assert_eq!(report.tool, Tool::Select);
    assert_eq!(report.zoom, 1.0);
    assert!(report.actions.contains(&Action::ToolChanged(Tool::Select)));
}

#[test]
fn replay_path_and_edit_text() {
    let mut ctl = controller();
    let script = steps(
        r#"[
            {"op": "tool", "tool": "freeform"},
            {"op": "path", "points": [{"x": 0, "y": 0}, {"x": 4, "y": 4}]},
            {"op": "tool", "tool": "text"},
            {"op": "down", "x": 50, "y": 50},
            {"op": "up"},
            {"op": "edit_text", "shape": 1, "content": "Hello"}
        ]"#,
    );
    let report = replay(&mut ctl, &script).unwrap();
    assert_eq!(report.shapes.len(), 2);
    assert_eq!(report.shapes[0].style.stroke_width, 5.0);
    assert!(matches!(&report.shapes[1].geometry, Geometry::Text { content, .. } if content == "Hello"));
}

#[test]
fn replay_scaling_reports_dimensions() {
    let mut ctl = controller();
    let script = steps(
        r#"[
            {"op": "tool", "tool": "rectangle"},
            {"op": "down", "x": 0, "y": 0},
            {"op": "move", "x": 10, "y": 20},
            {"op": "up"},
            {"op": "scaling", "shape": 0, "scale_x": 3, "scale_y": 1}
        ]"#,
    );
    let report = replay(&mut ctl, &script).unwrap();
    let Some(Action::AttributesChanged(attrs)) = report.actions.last() else {
        panic!("expected attributes, got {:?}", report.actions.last());
    };
    assert_eq!(attrs.width, "30");
    assert_eq!(attrs.height, "20");
}

#[test]
fn missing_shape_index_is_an_error() {
    let mut ctl = controller();
    let err = replay(&mut ctl, &steps(r#"[{"op": "select", "shapes": [2]}]"#)).unwrap_err();
    assert!(matches!(err, ScriptError::NoShape { step: 0, index: 2 }));
}

#[test]
fn edit_text_on_rect_is_an_error() {
    let mut ctl = controller();
    let script = steps(
        r#"[
            {"op": "tool", "tool": "circle"},
            {"op": "down", "x": 50, "y": 50},
            {"op": "move", "x": 60, "y": 50},
            {"op": "up"},
            {"op": "edit_text", "shape": 0}
        ]"#,
    );
    let err = replay(&mut ctl, &script).unwrap_err();
    assert!(matches!(err, ScriptError::NotText { step: 4, index: 0 }));
}
