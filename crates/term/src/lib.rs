//! Terminal "game renderer" module.
//!
//! A small rendering layer for playing the garden in a terminal. It renders
//! into a plain framebuffer that is then flushed to the terminal, instead of
//! using a widget toolkit.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`garden_view`]: garden snapshot to framebuffer (pure)
//! - [`renderer`]: raw-mode terminal session and diff flushing

pub mod fb;
pub mod garden_view;
pub mod renderer;

pub use zen_garden_core as core;
pub use zen_garden_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use garden_view::{GardenView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
