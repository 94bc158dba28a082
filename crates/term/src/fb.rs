//! Framebuffer and style types for terminal rendering.
//!
//! Drawing calls take signed coordinates and silently clip, so callers can
//! draw garden rectangles that hang off the edge of a small terminal.

use crate::core::PixelRect;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `s` left to right starting at (`x`, `y`), clipped to the buffer.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let Ok(i) = i32::try_from(i) else { break };
            self.set(x.saturating_add(i), y, style.cell(ch));
        }
    }

    /// Write `s` horizontally centered within `[x, x + width)`.
    pub fn put_str_centered(&mut self, x: i32, width: i32, y: i32, s: &str, style: CellStyle) {
        let len = i32::try_from(s.chars().count()).unwrap_or(i32::MAX);
        let start = x.saturating_add(width.saturating_sub(len).max(0) / 2);
        self.put_str(start, y, s, style);
    }

    /// Fill `rect`, choosing each glyph from its position inside the rect.
    ///
    /// Only the part of `rect` inside the buffer is visited.
    pub fn fill_rect_with(
        &mut self,
        rect: PixelRect,
        style: CellStyle,
        mut glyph: impl FnMut(u16, u16) -> char,
    ) {
        let (dx0, dx1) = clip_span(rect.x, rect.width, self.width);
        let (dy0, dy1) = clip_span(rect.y, rect.height, self.height);
        for dy in dy0..dy1 {
            for dx in dx0..dx1 {
                let ch = glyph(dx, dy);
                self.set(
                    rect.x.saturating_add(i32::from(dx)),
                    rect.y.saturating_add(i32::from(dy)),
                    style.cell(ch),
                );
            }
        }
    }

    pub fn fill_rect(&mut self, rect: PixelRect, ch: char, style: CellStyle) {
        self.fill_rect_with(rect, style, |_, _| ch);
    }

    /// The characters of row `y` as a string (empty when out of range).
    pub fn row_text(&self, y: i32) -> String {
        (0..i32::from(self.width))
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

/// Local offsets `[start, end)` of a span at `pos` with length `len` that fall
/// inside `[0, limit)`.
fn clip_span(pos: i32, len: u16, limit: u16) -> (u16, u16) {
    let pos = i64::from(pos);
    let start = (-pos).clamp(0, i64::from(len));
    let end = (i64::from(limit) - pos).clamp(start, i64::from(len));
    // Both values lie in `0..=len`.
    (start as u16, end as u16)
}
