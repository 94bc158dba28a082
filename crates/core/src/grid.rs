//! Grid model - tile geometry and background classification
//!
//! The garden background is a `width x height` grid of tiles. The outer ring
//! is the frame (four corners, four edges) and everything inside is rock.
//! Classification is pure and cheap, so the engine recomputes it on every
//! update instead of caching it; this keeps resizes trivially correct.
//!
//! Pixel units are whatever the host draws in. In the terminal host one pixel
//! is one character cell.

use crate::error::{GardenError, Result};
use crate::types::{Coordinate, Tile, TileKind, MIN_GRID_TILES};

/// Pixel rectangle on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

/// Tile size, tile counts and the pixel offset of the grid origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridGeometry {
    tile_width: u16,
    tile_height: u16,
    width: u16,
    height: u16,
    offset_x: i32,
    offset_y: i32,
}

impl GridGeometry {
    /// Create a geometry with explicit tile counts.
    ///
    /// Fails with [`GardenError::InvalidGeometry`] when either axis has fewer
    /// than two tiles or a tile dimension is zero.
    pub fn new(
        tile_width: u16,
        tile_height: u16,
        width: u16,
        height: u16,
        offset_x: i32,
        offset_y: i32,
    ) -> Result<Self> {
        if width < MIN_GRID_TILES || height < MIN_GRID_TILES || tile_width == 0 || tile_height == 0
        {
            return Err(GardenError::InvalidGeometry {
                width,
                height,
                tile_width,
                tile_height,
            });
        }
        Ok(Self {
            tile_width,
            tile_height,
            width,
            height,
            offset_x,
            offset_y,
        })
    }

    /// Square tiles with the origin at (0, 0).
    pub fn square(tile_size: u16, width: u16, height: u16) -> Result<Self> {
        Self::new(tile_size, tile_size, width, height, 0, 0)
    }

    /// Fit as many whole tiles as possible into a viewport and center them.
    ///
    /// At most `max_tiles` tiles are used per axis. The leftover pixels are
    /// split evenly into the offset, so the grid sits in the middle.
    pub fn fit(
        viewport_width: u16,
        viewport_height: u16,
        tile_width: u16,
        tile_height: u16,
        max_tiles: u16,
    ) -> Result<Self> {
        if tile_width == 0 || tile_height == 0 {
            return Err(GardenError::InvalidGeometry {
                width: 0,
                height: 0,
                tile_width,
                tile_height,
            });
        }

        let width = (viewport_width / tile_width).min(max_tiles);
        let height = (viewport_height / tile_height).min(max_tiles);
        let offset_x = (viewport_width - width * tile_width) / 2;
        let offset_y = (viewport_height - height * tile_height) / 2;

        Self::new(
            tile_width,
            tile_height,
            width,
            height,
            i32::from(offset_x),
            i32::from(offset_y),
        )
    }

    pub fn tile_width(&self) -> u16 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u16 {
        self.tile_height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    pub fn tile_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Grid extent in pixels, as `(width, height)`, saturating at `i32::MAX`.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            i32::from(self.width).saturating_mul(i32::from(self.tile_width)),
            i32::from(self.height).saturating_mul(i32::from(self.tile_height)),
        )
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < i32::from(self.width) && c.y < i32::from(self.height)
    }

    /// Map a pixel position to the tile under it.
    ///
    /// The position is made relative to the grid origin and divided by the
    /// tile size with truncation toward zero. Positions left of or above the
    /// origin, and tiles past the last row/column, are off-grid and yield `None`.
    pub fn tile_at(&self, px: i32, py: i32) -> Option<Coordinate> {
        let rx = px.checked_sub(self.offset_x)?;
        let ry = py.checked_sub(self.offset_y)?;
        // Truncation would fold the margin onto tile 0.
        if rx < 0 || ry < 0 {
            return None;
        }
        let c = Coordinate::new(rx / i32::from(self.tile_width), ry / i32::from(self.tile_height));
        self.contains(c).then_some(c)
    }

    /// Pixel rectangle covered by the tile at `c`.
    ///
    /// Positions saturate at the `i32` range for extreme geometries.
    pub fn tile_rect(&self, c: Coordinate) -> PixelRect {
        PixelRect {
            x: self
                .offset_x
                .saturating_add(c.x.saturating_mul(i32::from(self.tile_width))),
            y: self
                .offset_y
                .saturating_add(c.y.saturating_mul(i32::from(self.tile_height))),
            width: self.tile_width,
            height: self.tile_height,
        }
    }

    /// Classify a single tile. Corners take precedence over edges.
    pub fn classify(&self, x: u16, y: u16) -> TileKind {
        let last_x = self.width - 1;
        let last_y = self.height - 1;

        if x == 0 && y == 0 {
            TileKind::TopLeft
        } else if x == last_x && y == 0 {
            TileKind::TopRight
        } else if x == 0 && y == last_y {
            TileKind::BottomLeft
        } else if x == last_x && y == last_y {
            TileKind::BottomRight
        } else if y == 0 {
            TileKind::Top
        } else if x == 0 {
            TileKind::Left
        } else if y == last_y {
            TileKind::Bottom
        } else if x == last_x {
            TileKind::Right
        } else {
            TileKind::Rock
        }
    }
}

/// Row-major grid of background tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// A cleared grid sized for `geometry`.
    pub fn new(geometry: &GridGeometry) -> Self {
        Self {
            width: geometry.width(),
            height: geometry.height(),
            tiles: vec![None; geometry.tile_count()],
        }
    }

    /// A grid with every tile classified.
    pub fn classified(geometry: &GridGeometry) -> Self {
        let mut grid = Self::new(geometry);
        grid.classify(geometry);
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Tile {
        self.idx(x, y).and_then(|i| self.tiles[i])
    }

    pub fn set(&mut self, x: u16, y: u16, tile: Tile) {
        if let Some(i) = self.idx(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// Drop every tile (the transient overlay) without reallocating.
    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// Resize to `geometry` and classify every tile.
    pub fn classify(&mut self, geometry: &GridGeometry) {
        self.width = geometry.width();
        self.height = geometry.height();
        self.tiles.resize(geometry.tile_count(), None);

        for y in 0..self.height {
            for x in 0..self.width {
                let kind = geometry.classify(x, y);
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Number of tiles of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == Some(kind)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_grids() {
        assert!(matches!(
            GridGeometry::square(20, 1, 5),
            Err(GardenError::InvalidGeometry { width: 1, height: 5, .. })
        ));
        assert!(GridGeometry::square(20, 5, 0).is_err());
        assert!(GridGeometry::square(0, 5, 5).is_err());
        assert!(GridGeometry::square(20, 2, 2).is_ok());
    }

    #[test]
    fn two_by_two_is_all_corners() {
        let g = GridGeometry::square(10, 2, 2).unwrap();
        let grid = TileGrid::classified(&g);
        assert_eq!(grid.get(0, 0), Some(TileKind::TopLeft));
        assert_eq!(grid.get(1, 0), Some(TileKind::TopRight));
        assert_eq!(grid.get(0, 1), Some(TileKind::BottomLeft));
        assert_eq!(grid.get(1, 1), Some(TileKind::BottomRight));
    }

    #[test]
    fn classification_counts() {
        for (w, h) in [(2u16, 2u16), (3, 2), (2, 7), (5, 4), (14, 14)] {
            let g = GridGeometry::square(20, w, h).unwrap();
            let grid = TileGrid::classified(&g);
            let w_ = w as usize;
            let h_ = h as usize;

            let corners: usize = TileKind::ALL
                .iter()
                .filter(|k| k.is_corner())
                .map(|k| grid.count(*k))
                .sum();
            let edges: usize = TileKind::ALL
                .iter()
                .filter(|k| k.is_edge())
                .map(|k| grid.count(*k))
                .sum();
            let rock = grid.count(TileKind::Rock);

            assert_eq!(corners, 4, "{w}x{h}");
            assert_eq!(edges, 2 * (w_ - 2) + 2 * (h_ - 2), "{w}x{h}");
            assert_eq!(rock, (w_ - 2) * (h_ - 2), "{w}x{h}");
            assert_eq!(corners + edges + rock, w_ * h_);
            assert!(grid.tiles().iter().all(|t| t.is_some()));
        }
    }

    #[test]
    fn edges_sit_on_their_side() {
        let g = GridGeometry::square(20, 5, 4).unwrap();
        let grid = TileGrid::classified(&g);
        assert_eq!(grid.get(2, 0), Some(TileKind::Top));
        assert_eq!(grid.get(2, 3), Some(TileKind::Bottom));
        assert_eq!(grid.get(0, 2), Some(TileKind::Left));
        assert_eq!(grid.get(4, 2), Some(TileKind::Right));
        assert_eq!(grid.get(2, 2), Some(TileKind::Rock));
        assert_eq!(grid.get(5, 0), None);
    }

    #[test]
    fn tile_at_truncates_and_rejects_off_grid() {
        let g = GridGeometry::new(20, 20, 14, 14, 7, 3).unwrap();
        assert_eq!(g.tile_at(7, 3), Some(Coordinate::new(0, 0)));
        assert_eq!(g.tile_at(7 + 39, 3 + 40), Some(Coordinate::new(1, 2)));
        // Margin left of / above the origin.
        assert_eq!(g.tile_at(2, 10), None);
        assert_eq!(g.tile_at(10, 0), None);
        // Past the last tile.
        assert_eq!(g.tile_at(7 + 14 * 20, 10), None);
        assert_eq!(g.tile_at(7 + 14 * 20 - 1, 10), Some(Coordinate::new(13, 0)));
        // Far-off positions are off-grid, not an overflow.
        assert_eq!(g.tile_at(i32::MIN, 0), None);
        assert_eq!(g.tile_at(10, i32::MIN), None);
        assert_eq!(g.tile_at(i32::MAX, i32::MAX), None);

        let g = GridGeometry::new(20, 20, 14, 14, -5, -5).unwrap();
        assert_eq!(g.tile_at(i32::MAX, 0), None);
    }

    #[test]
    fn tile_rect_uses_offset_and_size() {
        let g = GridGeometry::new(2, 1, 10, 10, 5, 4).unwrap();
        assert_eq!(
            g.tile_rect(Coordinate::new(3, 2)),
            PixelRect {
                x: 11,
                y: 6,
                width: 2,
                height: 1
            }
        );
    }

    #[test]
    fn extreme_geometry_saturates() {
        let g = GridGeometry::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX, i32::MAX, 0).unwrap();
        let far = Coordinate::new(i32::from(u16::MAX) - 1, i32::from(u16::MAX) - 1);
        let rect = g.tile_rect(far);
        assert_eq!((rect.x, rect.y), (i32::MAX, i32::MAX));
        assert_eq!(g.pixel_size(), (i32::MAX, i32::MAX));

        let g = GridGeometry::new(300, 300, 300, 300, 0, 0).unwrap();
        assert_eq!(g.pixel_size(), (90_000, 90_000));
    }

    #[test]
    fn fit_centers_and_caps() {
        let g = GridGeometry::fit(81, 24, 2, 1, 14).unwrap();
        assert_eq!((g.width(), g.height()), (14, 14));
        assert_eq!(g.offset(), ((81 - 28) / 2, (24 - 14) / 2));

        let g = GridGeometry::fit(9, 5, 2, 1, 100).unwrap();
        assert_eq!((g.width(), g.height()), (4, 5));
        assert_eq!(g.offset(), (0, 0));
    }

    #[test]
    fn fit_rejects_tiny_viewports() {
        assert!(GridGeometry::fit(3, 24, 2, 1, 14).is_err());
        assert!(GridGeometry::fit(80, 1, 2, 1, 14).is_err());
        assert!(GridGeometry::fit(80, 24, 0, 1, 14).is_err());
    }

    #[test]
    fn clear_keeps_size() {
        let g = GridGeometry::square(20, 3, 3).unwrap();
        let mut grid = TileGrid::classified(&g);
        grid.clear();
        assert_eq!(grid.tiles().len(), 9);
        assert!(grid.tiles().iter().all(|t| t.is_none()));
    }
}
