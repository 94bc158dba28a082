//! Core garden logic module - pure, deterministic, and testable
//!
//! This module contains the garden rules, state management, and redraw scheduling.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: time is passed in as `now_ms`, nothing reads a clock
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: runs under any host that can deliver taps and key presses
//!
//! # Module Structure
//!
//! - [`grid`]: tile geometry, pixel/tile conversion and border classification
//! - [`features`]: placed features and the tap rule (plant, advance, sweep)
//! - [`garden`]: run-mode state machine, lifecycle hooks and the redraw tick
//! - [`scheduler`]: coalescing single-slot redraw request
//! - [`snapshot`]: render-ready copy of a garden frame
//! - [`config`]: `ZEN_GARDEN_*` environment configuration
//!
//! # Example
//!
//! ```
//! use zen_garden_core::{Garden, GardenConfig, GridGeometry, TapOutcome};
//! use zen_garden_core::types::{Coordinate, Direction, Mode};
//!
//! let geometry = GridGeometry::square(20, 14, 14).unwrap();
//! let mut garden = Garden::new(geometry, GardenConfig::default());
//! assert_eq!(garden.mode(), Mode::Ready);
//!
//! garden.press(Direction::Up, 0);
//! assert_eq!(garden.mode(), Mode::Running);
//!
//! let outcome = garden.tap(25, 25, 0);
//! assert_eq!(outcome, TapOutcome::Planted(Coordinate::new(1, 1)));
//!
//! // The tap asked for an immediate redraw.
//! assert!(garden.tick(0));
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod garden;
pub mod grid;
pub mod scheduler;
pub mod snapshot;

pub use zen_garden_types as types;

// Re-export commonly used types for convenience
pub use config::GardenConfig;
pub use error::GardenError;
pub use features::{Feature, FeatureCollection, TapOutcome};
pub use garden::{Garden, SavedState};
pub use grid::{GridGeometry, PixelRect, TileGrid};
pub use scheduler::RedrawScheduler;
pub use snapshot::{FeatureSprite, GardenSnapshot, StatusLine};
