//! Shared constants for the whiteboard crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest zoom factor reachable with the wheel (20%).
pub const MIN_ZOOM: f64 = 0.2;

/// Largest zoom factor reachable with the wheel (100%).
pub const MAX_ZOOM: f64 = 1.0;

/// Zoom change per pixel of vertical wheel delta.
pub const ZOOM_STEP: f64 = 0.001;

// ── Styling ─────────────────────────────────────────────────────

/// Fill (or stroke, for lines) given to every newly created shape.
pub const DEFAULT_COLOR: &str = "#aabbcc";

/// Stroke width of newly created lines.
pub const LINE_STROKE_WIDTH: f64 = 2.0;

/// Brush width used when the surface enters free-drawing mode.
pub const BRUSH_WIDTH: f64 = 5.0;

// ── Text ────────────────────────────────────────────────────────

/// Content of a freshly placed text object.
pub const TEXT_PLACEHOLDER: &str = "Tap to edit";

pub const TEXT_FONT_FAMILY: &str = "Helvetica";

pub const TEXT_FONT_SIZE: f64 = 36.0;

pub const TEXT_FONT_WEIGHT: &str = "400";

/// Average glyph advance as a fraction of the font size, for text bounds.
pub const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.16;

// ── Clipboard ───────────────────────────────────────────────────

/// Offset applied to both axes of every pasted shape so it does not
/// land exactly on top of its source.
pub const PASTE_OFFSET: f64 = 20.0;
