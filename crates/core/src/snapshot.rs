//! Render-ready copy of one garden frame: tiles, stone sprites and status line.

use crate::grid::{GridGeometry, PixelRect, TileGrid};
use crate::types::{Coordinate, Mode};

/// One feature ready to draw: where, and which art variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSprite {
    pub coord: Coordinate,
    pub rect: PixelRect,
    pub art: u8,
}

/// Status text sink state. The text is kept while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusLine {
    pub text: &'static str,
    pub visible: bool,
}

impl StatusLine {
    /// Text to show, if the line is visible.
    pub fn shown(&self) -> Option<&'static str> {
        self.visible.then_some(self.text)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenSnapshot {
    pub mode: Mode,
    pub geometry: GridGeometry,
    pub tiles: TileGrid,
    pub sprites: Vec<FeatureSprite>,
    pub status: StatusLine,
}

impl GardenSnapshot {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            mode: Mode::Ready,
            geometry,
            tiles: TileGrid::new(&geometry),
            sprites: Vec::new(),
            status: StatusLine::default(),
        }
    }

    pub fn sprite_at(&self, coord: Coordinate) -> Option<&FeatureSprite> {
        self.sprites.iter().find(|s| s.coord == coord)
    }
}
