#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = ControllerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ControllerConfig::default());
    assert_eq!(cfg.min_zoom, 0.2);
    assert_eq!(cfg.max_zoom, 1.0);
    assert_eq!(cfg.zoom_step, 0.001);
    assert_eq!(cfg.paste_offset, 20.0);
    assert_eq!(cfg.default_color, "#aabbcc");
    assert_eq!(cfg.brush_width, 5.0);
    assert_eq!(cfg.text.placeholder, "Tap to edit");
    assert_eq!(cfg.text.font.family, "Helvetica");
    assert_eq!(cfg.text.font.size, 36.0);
    assert_eq!(cfg.text.font.weight, "400");
}

#[test]
fn overrides_are_parsed() {
    let cfg = ControllerConfig::from_lookup(lookup_from(&[
        ("WHITEBOARD_MIN_ZOOM", "0.1"),
        ("WHITEBOARD_MAX_ZOOM", " 4 "),
        ("WHITEBOARD_PASTE_OFFSET", "5"),
        ("WHITEBOARD_DEFAULT_COLOR", "#123456"),
    ]))
    .unwrap();
    assert_eq!(cfg.min_zoom, 0.1);
    assert_eq!(cfg.max_zoom, 4.0);
    assert_eq!(cfg.paste_offset, 5.0);
    assert_eq!(cfg.default_color, "#123456");
}

#[test]
fn garbage_number_is_rejected() {
    let err = ControllerConfig::from_lookup(lookup_from(&[("WHITEBOARD_ZOOM_STEP", "fast")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "WHITEBOARD_ZOOM_STEP", value: "fast".into() });
    assert!(err.to_string().contains("WHITEBOARD_ZOOM_STEP"));
}

#[test]
fn non_finite_number_is_rejected() {
    let err = ControllerConfig::from_lookup(lookup_from(&[("WHITEBOARD_BRUSH_WIDTH", "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "WHITEBOARD_BRUSH_WIDTH", .. }));
}

#[test]
fn inverted_zoom_range_is_rejected() {
    let err = ControllerConfig::from_lookup(lookup_from(&[("WHITEBOARD_MIN_ZOOM", "2"), ("WHITEBOARD_MAX_ZOOM", "1")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::ZoomRange { min: 2.0, max: 1.0 });
}
