//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` events into [`crate::types::GardenInput`]: key presses become
//! directional presses or pause, left mouse clicks become taps at the clicked
//! terminal cell, focus loss pauses the garden and resizes are forwarded.

pub mod map;

pub use zen_garden_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
