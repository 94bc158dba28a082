//! GardenView: maps a `core::GardenSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FeatureSprite, GardenSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coordinate, TileKind, FEATURE_STAGES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SAND: Rgb = Rgb::new(196, 180, 140);
const RAKE: Rgb = Rgb::new(150, 135, 100);
const WOOD_FG: Rgb = Rgb::new(240, 220, 190);
const WOOD_BG: Rgb = Rgb::new(110, 75, 45);

/// Glyph per feature stage, smallest pebble first.
const FEATURE_GLYPHS: [char; FEATURE_STAGES as usize] = ['.', 'o', 'O', '@'];

const FEATURE_COLORS: [Rgb; FEATURE_STAGES as usize] = [
    Rgb::new(90, 90, 90),
    Rgb::new(70, 75, 80),
    Rgb::new(50, 55, 60),
    Rgb::new(30, 35, 40),
];

const HINT: &str = "up: start  p: pause  click: place stone  q: quit";

/// A lightweight terminal renderer for the garden.
#[derive(Debug, Clone)]
pub struct GardenView {
    /// Key hint on the bottom row, when there is room below the grid.
    show_hint: bool,
}

impl Default for GardenView {
    fn default() -> Self {
        Self { show_hint: true }
    }
}

impl GardenView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GardenSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let geometry = &snap.geometry;
        let tile_w = geometry.tile_width();
        let tile_h = geometry.tile_height();
        let (origin_x, origin_y) = geometry.offset();

        // Background. Cleared tiles stay blank.
        for y in 0..snap.tiles.height() {
            for x in 0..snap.tiles.width() {
                let Some(kind) = snap.tiles.get(x, y) else {
                    continue;
                };
                let rect = geometry.tile_rect(Coordinate::new(i32::from(x), i32::from(y)));
                let style = tile_style(kind);
                fb.fill_rect_with(rect, style, |dx, dy| {
                    tile_glyph(kind, dx, dy, tile_w, tile_h)
                });
            }
        }

        for sprite in &snap.sprites {
            self.draw_sprite(fb, sprite);
        }

        let (grid_w, grid_h) = geometry.pixel_size();
        if let Some(text) = snap.status.shown() {
            let lines = text.lines().count() as i32;
            let mut y = origin_y.saturating_add((grid_h - lines) / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            for line in text.lines() {
                fb.put_str_centered(origin_x, grid_w, y, line, style);
                y = y.saturating_add(1);
            }
        }

        let grid_bottom = origin_y.saturating_add(grid_h);
        let last_row = i32::from(viewport.height) - 1;
        if self.show_hint && last_row >= grid_bottom {
            let style = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str_centered(0, i32::from(viewport.width), last_row, HINT, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GardenSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_sprite(&self, fb: &mut FrameBuffer, sprite: &FeatureSprite) {
        let art = usize::from(sprite.art);
        debug_assert!(art < FEATURE_GLYPHS.len(), "stage {art} has no art");
        let (Some(&glyph), Some(&fg)) = (FEATURE_GLYPHS.get(art), FEATURE_COLORS.get(art)) else {
            return;
        };
        let mut style = CellStyle::new(fg, SAND);
        style.bold = art + 1 == FEATURE_GLYPHS.len();
        fb.fill_rect(sprite.rect, glyph, style);
    }
}

fn tile_style(kind: TileKind) -> CellStyle {
    match kind {
        TileKind::Rock => CellStyle::new(RAKE, SAND),
        TileKind::Top
        | TileKind::Bottom
        | TileKind::Left
        | TileKind::Right
        | TileKind::TopLeft
        | TileKind::TopRight
        | TileKind::BottomLeft
        | TileKind::BottomRight => CellStyle::new(WOOD_FG, WOOD_BG),
    }
}

/// Character at local position (`dx`, `dy`) of a `w x h` tile.
///
/// Frame tiles draw their line along the side they belong to, so a ring of
/// frame tiles forms one continuous box.
fn tile_glyph(kind: TileKind, dx: u16, dy: u16, w: u16, h: u16) -> char {
    let top = dy == 0;
    let bottom = dy + 1 == h;
    let left = dx == 0;
    let right = dx + 1 == w;

    let corner = |vertical: bool, horizontal: bool, ch: char| match (vertical, horizontal) {
        (true, true) => ch,
        (false, true) => '─',
        (true, false) => '│',
        (false, false) => ' ',
    };

    match kind {
        TileKind::Rock => {
            if left && top {
                '·'
            } else {
                ' '
            }
        }
        TileKind::Top => if top { '─' } else { ' ' },
        TileKind::Bottom => if bottom { '─' } else { ' ' },
        TileKind::Left => if left { '│' } else { ' ' },
        TileKind::Right => if right { '│' } else { ' ' },
        TileKind::TopLeft => corner(left, top, '┌'),
        TileKind::TopRight => corner(right, top, '┐'),
        TileKind::BottomLeft => corner(left, bottom, '└'),
        TileKind::BottomRight => corner(right, bottom, '┘'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_tiles_form_a_box() {
        assert_eq!(tile_glyph(TileKind::TopLeft, 0, 0, 2, 1), '┌');
        assert_eq!(tile_glyph(TileKind::TopLeft, 1, 0, 2, 1), '─');
        assert_eq!(tile_glyph(TileKind::TopRight, 0, 0, 2, 1), '─');
        assert_eq!(tile_glyph(TileKind::TopRight, 1, 0, 2, 1), '┐');
        assert_eq!(tile_glyph(TileKind::Left, 0, 0, 2, 1), '│');
        assert_eq!(tile_glyph(TileKind::Right, 1, 0, 2, 1), '│');
        assert_eq!(tile_glyph(TileKind::Right, 0, 0, 2, 1), ' ');
    }

    #[test]
    fn tall_corner_tiles_draw_both_sides() {
        assert_eq!(tile_glyph(TileKind::BottomRight, 2, 2, 3, 3), '┘');
        assert_eq!(tile_glyph(TileKind::BottomRight, 2, 0, 3, 3), '│');
        assert_eq!(tile_glyph(TileKind::BottomRight, 0, 2, 3, 3), '─');
        assert_eq!(tile_glyph(TileKind::BottomRight, 0, 0, 3, 3), ' ');
    }

    #[test]
    fn every_stage_has_art() {
        assert_eq!(FEATURE_GLYPHS.len(), FEATURE_STAGES as usize);
        assert_eq!(FEATURE_COLORS.len(), FEATURE_STAGES as usize);
    }
}
