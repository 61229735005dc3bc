//! Viewport measurement and cell-grid layout.

/// Largest cell grid a layout may produce. Bigger grids leave the
/// background inert instead of exhausting memory.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Size of the drawing surface in logical (CSS-like) pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

/// Tunables for turning a viewport into a cell grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Viewports narrower than this use `narrow_cell_px`.
    pub narrow_breakpoint_px: f64,
    pub wide_cell_px: f64,
    pub narrow_cell_px: f64,
    /// Upper bound on the backing-buffer scale factor.
    pub max_pixel_ratio: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 768.0,
            wide_cell_px: 14.0,
            narrow_cell_px: 18.0,
            max_pixel_ratio: 2.0,
        }
    }
}

/// Cell grid and buffer sizes derived from a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    /// Logical surface size, unscaled.
    pub logical: (f64, f64),
    /// Backing-buffer size in physical pixels.
    pub backing: (u32, u32),
    /// Scale applied to the backing buffer.
    pub pixel_ratio: f64,
    /// Edge length of one square cell in logical pixels.
    pub cell_px: f64,
    pub narrow: bool,
    pub cols: usize,
    pub rows: usize,
}

impl CellLayout {
    /// Lay out a grid over `viewport`. Returns `None` for an empty or
    /// non-finite viewport, meaning there is nothing to draw on, and for
    /// grids of more than [`MAX_GRID_CELLS`] cells.
    pub fn compute(viewport: Viewport, options: &LayoutOptions) -> Option<Self> {
        let Viewport {
            width,
            height,
            device_pixel_ratio,
        } = viewport;
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return None;
        }

        let narrow = width < options.narrow_breakpoint_px;
        let cell_px = if narrow {
            options.narrow_cell_px
        } else {
            options.wide_cell_px
        };
        if !(cell_px.is_finite() && cell_px > 0.0) {
            return None;
        }

        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let pixel_ratio = ratio.min(options.max_pixel_ratio.max(1.0));

        let cols = (width / cell_px).ceil();
        let rows = (height / cell_px).ceil();
        if cols * rows > MAX_GRID_CELLS as f64 {
            log::warn!("{cols}x{rows} cell grid is too large to draw");
            return None;
        }

        Some(Self {
            logical: (width, height),
            backing: (
                (width * pixel_ratio).round() as u32,
                (height * pixel_ratio).round() as u32,
            ),
            pixel_ratio,
            cell_px,
            narrow,
            cols: cols as usize,
            rows: rows as usize,
        })
    }

    /// Font size for glyphs, slightly smaller than a cell.
    pub fn font_px(&self) -> f64 {
        let inset = if self.narrow { 6.0 } else { 4.0 };
        (self.cell_px - inset).max(1.0)
    }

    /// Logical-pixel center of a cell.
    pub fn cell_center(&self, col: usize, row: usize) -> (f64, f64) {
        let half = self.cell_px / 2.0;
        (
            col as f64 * self.cell_px + half,
            row as f64 * self.cell_px + half,
        )
    }

    /// Whether two layouts need the same density grids.
    pub fn same_grid(&self, other: &CellLayout) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout() {
        let layout = CellLayout::compute(Viewport::new(1400.0, 700.0, 1.0), &LayoutOptions::default())
            .unwrap();
        assert!(!layout.narrow);
        assert_eq!(layout.cell_px, 14.0);
        assert_eq!((layout.cols, layout.rows), (100, 50));
        assert_eq!(layout.font_px(), 10.0);
        assert_eq!(layout.backing, (1400, 700));
    }

    #[test]
    fn test_narrow_layout_rounds_up() {
        let layout = CellLayout::compute(Viewport::new(375.0, 667.0, 3.0), &LayoutOptions::default())
            .unwrap();
        assert!(layout.narrow);
        assert_eq!(layout.cell_px, 18.0);
        assert_eq!((layout.cols, layout.rows), (21, 38));
        assert_eq!(layout.font_px(), 12.0);
    }

    #[test]
    fn test_pixel_ratio_is_capped() {
        let layout = CellLayout::compute(Viewport::new(375.0, 667.0, 3.0), &LayoutOptions::default())
            .unwrap();
        assert_eq!(layout.pixel_ratio, 2.0);
        assert_eq!(layout.backing, (750, 1334));
        assert_eq!(layout.logical, (375.0, 667.0));
    }

    #[test]
    fn test_bad_pixel_ratio_falls_back_to_one() {
        let layout = CellLayout::compute(Viewport::new(800.0, 600.0, 0.0), &LayoutOptions::default())
            .unwrap();
        assert_eq!(layout.pixel_ratio, 1.0);
    }

    #[test]
    fn test_empty_viewport_has_no_layout() {
        let options = LayoutOptions::default();
        assert!(CellLayout::compute(Viewport::new(0.0, 600.0, 1.0), &options).is_none());
        assert!(CellLayout::compute(Viewport::new(800.0, f64::NAN, 1.0), &options).is_none());
    }

    #[test]
    fn test_oversized_grid_has_no_layout() {
        let tiny_cells = LayoutOptions {
            wide_cell_px: 0.00001,
            narrow_cell_px: 0.00001,
            ..LayoutOptions::default()
        };
        assert!(CellLayout::compute(Viewport::new(640.0, 384.0, 1.0), &tiny_cells).is_none());

        let options = LayoutOptions::default();
        assert!(CellLayout::compute(Viewport::new(1e9, 1e9, 1.0), &options).is_none());
        assert!(CellLayout::compute(Viewport::new(f64::MAX, 10.0, 1.0), &options).is_none());

        // Right at the limit still lays out.
        let layout = CellLayout::compute(Viewport::new(1024.0 * 14.0, 1024.0 * 14.0, 1.0), &options)
            .unwrap();
        assert_eq!(layout.cols * layout.rows, MAX_GRID_CELLS);
    }

    #[test]
    fn test_cell_center() {
        let layout = CellLayout::compute(Viewport::new(1400.0, 700.0, 1.0), &LayoutOptions::default())
            .unwrap();
        assert_eq!(layout.cell_center(0, 0), (7.0, 7.0));
        assert_eq!(layout.cell_center(2, 1), (35.0, 21.0));
    }
}
