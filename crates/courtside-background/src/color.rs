//! Two-tone coloring of density cells.

use courtside_core::{Palette, Rgba};

/// Above this density cells use the primary accent at full strength.
const STRONG_DENSITY: f32 = 0.5;
/// Above this density cells still use the primary accent, dimmed.
const MEDIUM_DENSITY: f32 = 0.25;

/// Base opacity of any visible cell.
const BASE_OPACITY: f32 = 0.06;
/// Opacity gained per unit of density.
const OPACITY_PER_DENSITY: f32 = 0.35;

/// Color for a cell of the given density.
///
/// Dense cells (the shapes themselves) take the primary accent and faint
/// ambient cells take the secondary accent, all at low opacity.
pub fn tone(density: f32, palette: Palette) -> Rgba {
    let opacity = BASE_OPACITY + density * OPACITY_PER_DENSITY;
    if density > STRONG_DENSITY {
        palette.primary().with_alpha(opacity)
    } else if density > MEDIUM_DENSITY {
        palette.primary().with_alpha(opacity * 0.7)
    } else {
        palette.secondary().with_alpha(opacity * 0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_cells_use_primary() {
        let color = tone(0.9, Palette::Court);
        assert_eq!(color.rgb, Palette::Court.primary());
        assert!((color.alpha - (0.06 + 0.9 * 0.35)).abs() < 1e-6);
    }

    #[test]
    fn test_medium_cells_are_dimmed_primary() {
        let color = tone(0.4, Palette::Ice);
        assert_eq!(color.rgb, Palette::Ice.primary());
        assert!((color.alpha - (0.06 + 0.4 * 0.35) * 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_faint_cells_use_secondary() {
        let color = tone(0.1, Palette::Court);
        assert_eq!(color.rgb, Palette::Court.secondary());
        assert!((color.alpha - (0.06 + 0.1 * 0.35) * 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_edges_are_exclusive() {
        assert_eq!(tone(0.5, Palette::Court).rgb, Palette::Court.primary());
        assert!(tone(0.5, Palette::Court).alpha < tone(0.51, Palette::Court).alpha);
        assert_eq!(tone(0.25, Palette::Court).rgb, Palette::Court.secondary());
    }
}
