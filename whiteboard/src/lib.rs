//! Drawing session controller for a shape-based whiteboard.
//!
//! The crate turns raw pointer, wheel, keyboard and object events into shape
//! edits on a rendering surface. It never draws pixels itself: the surface is
//! an external capability behind the [`surface::Surface`] trait, and
//! persistence, history and the clipboard are injected through the traits in
//! [`hooks`]. Every handler on [`controller::Controller`] returns the
//! [`controller::Action`]s the host UI should apply.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Gesture state machine, tool switching, event handlers |
//! | [`factory`] | Shape construction and per-kind resizing |
//! | [`shape`] | Shape model: geometry, style, bounds |
//! | [`surface`] | Surface trait and the in-memory [`surface::Scene`] |
//! | [`hooks`] | Store, history and clipboard collaborators |
//! | [`attributes`] | Attribute panel projection and edits |
//! | [`bounds`] | Clamping dragged shapes to the surface |
//! | [`keys`] | Keyboard shortcuts and clipboard payloads |
//! | [`camera`] | Zoom and screen/surface coordinate conversion |
//! | [`input`] | Tools, modifiers, keys and the gesture state |
//! | [`config`] | Tunables with environment overrides |
//! | [`error`] | Error types |
//! | [`consts`] | Default constants (zoom limits, colours, fonts) |

pub mod attributes;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod factory;
pub mod hooks;
pub mod input;
pub mod keys;
pub mod shape;
pub mod surface;
