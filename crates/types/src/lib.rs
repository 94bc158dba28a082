//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the garden.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Garden Dimensions
//!
//! The garden is a rectangular grid of tiles. The outer ring of tiles forms a
//! border (corners and edges), everything inside is raked rock.
//!
//! - **Default tile count**: at most 14 tiles per axis
//! - **Minimum tile count**: 2 per axis, so corners never collapse into edges
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Default periodic redraw interval |
//! | `IDLE_POLL_MS` | 500 | Input poll timeout when no redraw is pending |
//!
//! # Examples
//!
//! ```
//! use zen_garden_types::{Coordinate, Direction, Mode, TileKind, FEATURE_STAGES};
//!
//! let a = Coordinate::new(1, 1);
//! let b = Coordinate::new(4, 5);
//! assert_eq!(a.distance(b), 5.0);
//!
//! assert_eq!(Direction::Up.as_str(), "up");
//! assert_eq!(Mode::Ready.as_str(), "ready");
//! assert!(TileKind::TopLeft.is_corner());
//! assert_eq!(FEATURE_STAGES, 4);
//! ```

/// Number of feature art variants. A feature disappears once its stage reaches this.
pub const FEATURE_STAGES: u8 = 4;

/// Smallest grid extent (in tiles) along either axis.
pub const MIN_GRID_TILES: u16 = 2;

/// Default cap on tiles per axis.
pub const DEFAULT_MAX_TILES: u16 = 14;

/// Default periodic redraw interval in milliseconds.
pub const TICK_MS: u32 = 250;

/// Input poll timeout used by hosts when nothing is scheduled.
pub const IDLE_POLL_MS: u32 = 500;

/// Status text shown while waiting for the first start.
pub const READY_TEXT: &str = "Zen Garden\nPress Up To Play";

/// Status text shown while paused.
pub const PAUSED_TEXT: &str = "Paused\nPress Up To Resume";

/// A position on the tile grid, in tile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Coordinate) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// True when the distance to `other`, truncated to whole tiles, is within `threshold`.
    ///
    /// ```
    /// use zen_garden_types::Coordinate;
    ///
    /// let c = Coordinate::new(0, 0);
    /// assert!(c.is_near(Coordinate::new(1, 1), 1));
    /// assert!(!c.is_near(Coordinate::new(2, 0), 1));
    /// ```
    pub fn is_near(&self, other: Coordinate, threshold: u32) -> bool {
        (self.distance(other) as u32) <= threshold
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

/// Background tile kinds.
///
/// The outer ring of the grid is the garden's wooden frame; the interior is rock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Rock,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TileKind {
    pub const ALL: [TileKind; 9] = [
        TileKind::Rock,
        TileKind::Top,
        TileKind::Bottom,
        TileKind::Left,
        TileKind::Right,
        TileKind::TopLeft,
        TileKind::TopRight,
        TileKind::BottomLeft,
        TileKind::BottomRight,
    ];

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            TileKind::TopLeft | TileKind::TopRight | TileKind::BottomLeft | TileKind::BottomRight
        )
    }

    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            TileKind::Top | TileKind::Bottom | TileKind::Left | TileKind::Right
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Rock => "rock",
            TileKind::Top => "top",
            TileKind::Bottom => "bottom",
            TileKind::Left => "left",
            TileKind::Right => "right",
            TileKind::TopLeft => "top_left",
            TileKind::TopRight => "top_right",
            TileKind::BottomLeft => "bottom_left",
            TileKind::BottomRight => "bottom_right",
        }
    }
}

/// A tile slot on the grid
///
/// - `None`: cleared (nothing drawn until the next classification)
/// - `Some(TileKind)`: classified background tile
pub type Tile = Option<TileKind>;

/// Run mode of the garden engine.
///
/// - **Ready**: launched, waiting for the first start; starting clears the garden
/// - **Running**: taps redraw immediately and the periodic tick is armed
/// - **Paused**: the host went away; starting resumes with features intact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Ready,
    Running,
    Paused,
}

impl Mode {
    /// Status text for this mode, or `None` when the status line is hidden.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Mode::Ready => Some(READY_TEXT),
            Mode::Running => None,
            Mode::Paused => Some(PAUSED_TEXT),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ready => "ready",
            Mode::Running => "running",
            Mode::Paused => "paused",
        }
    }
}

/// Directional key presses. Only `Up` has an effect (start/resume).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Inputs that drive the garden engine.
///
/// These are produced by the host (terminal input mapping, tests) and
/// consumed by `Garden::apply_input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenInput {
    /// Tap at a pixel position (terminal column/row in the terminal host)
    Tap { x: i32, y: i32 },
    /// Directional key press
    Direction(Direction),
    /// Host-level pause (app backgrounded, focus lost)
    Pause,
    /// Drawing surface changed size
    Resize { width: u16, height: u16 },
}
