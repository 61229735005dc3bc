//! Terminal drawing surface backed by a ratatui buffer.

use courtside_core::{Rgb, Rgba};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::layout::{LayoutOptions, Viewport};
use crate::surface::Surface;

/// How many logical pixels one terminal cell covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

impl CellMetrics {
    /// Logical viewport covered by a terminal area. Terminals have no
    /// device pixel ratio, so it is always 1.
    pub fn viewport_for(&self, area: Rect) -> Viewport {
        Viewport::new(
            area.width as f64 * self.width_px,
            area.height as f64 * self.height_px,
            1.0,
        )
    }

    /// `options` with square cells one terminal column wide, so every
    /// column gets exactly one background cell and rows are never skipped.
    pub fn align_layout(&self, options: LayoutOptions) -> LayoutOptions {
        LayoutOptions {
            wide_cell_px: self.width_px,
            narrow_cell_px: self.width_px,
            ..options
        }
    }
}

/// A [`Surface`] that rasterizes glyphs into terminal cells.
///
/// Glyph colors are composited over `backdrop`, since terminal cells have
/// no alpha channel.
pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    metrics: CellMetrics,
    backdrop: Rgb,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, metrics: CellMetrics, backdrop: Rgb) -> Self {
        Self {
            buf,
            area,
            metrics,
            backdrop,
        }
    }

    /// Terminal cell containing the logical point `(x, y)`, if inside the
    /// area.
    fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.metrics.width_px).floor();
        let row = (y / self.metrics.height_px).floor();
        if col >= self.area.width as f64 || row >= self.area.height as f64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Surface for TerminalSurface<'_> {
    fn resize_backing(&mut self, _backing: (u32, u32), _logical: (f64, f64)) {
        // Terminal cells are the backing store; nothing to resize.
    }

    fn clear(&mut self) {
        let bg = to_color(self.backdrop);
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn fill_glyph(&mut self, glyph: char, x: f64, y: f64, _font_px: f64, color: Rgba) {
        let Some(pos) = self.cell_at(x, y) else {
            return;
        };
        let fg = to_color(color.over(self.backdrop));
        let bg = to_color(self.backdrop);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(glyph).set_fg(fg).set_bg(bg);
        }
    }
}
