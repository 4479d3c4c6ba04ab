#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn style() -> Style {
    Style { fill: Some("#aabbcc".into()), stroke: None, stroke_width: 1.0 }
}

fn rect(left: f64, top: f64, width: f64, height: f64) -> Shape {
    Shape::new(Geometry::Rect { left, top, width, height }, style())
}

// =============================================================
// Identity
// =============================================================

#[test]
fn new_shapes_get_distinct_ids() {
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = rect(0.0, 0.0, 1.0, 1.0);
    assert_ne!(a.id, b.id);
    assert_eq!(a.geometry, b.geometry);
}

#[test]
fn new_shapes_have_unit_scale() {
    let s = rect(0.0, 0.0, 1.0, 1.0);
    assert_eq!(s.scale_x, 1.0);
    assert_eq!(s.scale_y, 1.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn rect_bounds_match_geometry() {
    let b = rect(10.0, 20.0, 100.0, 50.0).bounds().unwrap();
    assert_eq!(b, Bounds { left: 10.0, top: 20.0, width: 100.0, height: 50.0 });
}

#[test]
fn rect_bounds_normalize_negative_drag() {
    let b = rect(100.0, 100.0, -40.0, -30.0).bounds().unwrap();
    assert_eq!(b, Bounds { left: 60.0, top: 70.0, width: 40.0, height: 30.0 });
}

#[test]
fn circle_bounds_surround_center() {
    let s = Shape::new(Geometry::Circle { center: Point::new(50.0, 50.0), radius: 5.0 }, style());
    assert_eq!(s.bounds().unwrap(), Bounds { left: 45.0, top: 45.0, width: 10.0, height: 10.0 });
}

#[test]
fn line_bounds_span_endpoints() {
    let s = Shape::new(Geometry::Line { start: Point::new(30.0, 5.0), end: Point::new(10.0, 25.0) }, style());
    assert_eq!(s.bounds().unwrap(), Bounds { left: 10.0, top: 5.0, width: 20.0, height: 20.0 });
}

#[test]
fn text_bounds_scale_with_font_and_content() {
    let font = Font { family: "Helvetica".into(), size: 10.0, weight: "400".into() };
    let s = Shape::new(Geometry::Text { left: 1.0, top: 2.0, content: "abcd".into(), font }, style());
    let b = s.bounds().unwrap();
    assert_eq!(b.left, 1.0);
    assert_eq!(b.top, 2.0);
    assert!((b.width - 4.0 * 10.0 * GLYPH_WIDTH_RATIO).abs() < 1e-9);
    assert!((b.height - 10.0 * LINE_HEIGHT).abs() < 1e-9);
}

#[test]
fn empty_path_has_no_bounds() {
    let s = Shape::new(Geometry::Path { points: vec![] }, style());
    assert!(s.bounds().is_none());
    assert!(s.scaled_bounds().is_none());
}

#[test]
fn path_bounds_cover_all_points() {
    let points = vec![Point::new(5.0, 5.0), Point::new(-5.0, 20.0), Point::new(15.0, 0.0)];
    let s = Shape::new(Geometry::Path { points }, style());
    assert_eq!(s.bounds().unwrap(), Bounds { left: -5.0, top: 0.0, width: 20.0, height: 20.0 });
}

#[test]
fn scaled_bounds_keep_origin() {
    let mut s = rect(10.0, 10.0, 100.0, 50.0);
    s.scale_x = 2.0;
    s.scale_y = 0.5;
    let b = s.scaled_bounds().unwrap();
    assert_eq!(b, Bounds { left: 10.0, top: 10.0, width: 200.0, height: 25.0 });
}

#[test]
fn bounds_contains_edges() {
    let b = Bounds { left: 0.0, top: 0.0, width: 10.0, height: 10.0 };
    assert!(b.contains(Point::new(0.0, 10.0)));
    assert!(b.contains(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(10.5, 5.0)));
}

// =============================================================
// Movement
// =============================================================

#[test]
fn set_position_moves_bounding_box_corner() {
    let mut s = Shape::new(Geometry::Circle { center: Point::new(50.0, 50.0), radius: 10.0 }, style());
    assert!(s.set_position(0.0, 0.0));
    assert_eq!(s.geometry, Geometry::Circle { center: Point::new(10.0, 10.0), radius: 10.0 });
}

#[test]
fn set_position_on_negative_rect_uses_normalized_corner() {
    let mut s = rect(100.0, 100.0, -40.0, -30.0);
    assert!(s.set_position(0.0, 0.0));
    let b = s.bounds().unwrap();
    assert_eq!((b.left, b.top), (0.0, 0.0));
}

#[test]
fn set_position_without_bounds_is_rejected() {
    let mut s = Shape::new(Geometry::Path { points: vec![] }, style());
    assert!(!s.set_position(1.0, 1.0));
}

#[test]
fn translate_line_moves_both_endpoints() {
    let mut s = Shape::new(Geometry::Line { start: Point::new(0.0, 0.0), end: Point::new(1.0, 1.0) }, style());
    s.translate(2.0, 3.0);
    assert_eq!(s.geometry, Geometry::Line { start: Point::new(2.0, 3.0), end: Point::new(3.0, 4.0) });
}

// =============================================================
// Serde
// =============================================================

#[test]
fn geometry_is_tagged_by_type() {
    let s = rect(1.0, 2.0, 3.0, 4.0);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["geometry"]["type"], json!("rect"));
    assert_eq!(v["geometry"]["width"], json!(3.0));
    assert_eq!(v["style"]["fill"], json!("#aabbcc"));
}

#[test]
fn missing_scale_defaults_to_one() {
    let v = json!({
        "id": Uuid::nil(),
        "geometry": { "type": "circle", "center": { "x": 1.0, "y": 2.0 }, "radius": 3.0 },
        "style": { "fill": null, "stroke": "#000", "stroke_width": 1.0 },
    });
    let s: Shape = serde_json::from_value(v).unwrap();
    assert_eq!(s.scale_x, 1.0);
    assert_eq!(s.scale_y, 1.0);
    assert_eq!(s.kind_name(), "circle");
}

#[test]
fn unknown_geometry_type_is_rejected() {
    let v = json!({
        "id": Uuid::nil(),
        "geometry": { "type": "hexagon" },
        "style": { "fill": null, "stroke": null, "stroke_width": 1.0 },
    });
    assert!(serde_json::from_value::<Shape>(v).is_err());
}
