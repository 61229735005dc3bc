//! Density-to-glyph mapping.

/// Glyphs ordered by visual weight, light to heavy.
pub const DENSITY_GLYPHS: &[char] = &[' ', '.', '·', ':', '+', '*', '#', '@'];

/// Cells below this density are left empty.
pub const MIN_VISIBLE_DENSITY: f32 = 0.02;

/// Pick the glyph for a density in `[0, 1]`.
///
/// Heavier glyphs always correspond to higher densities; out-of-range
/// input clamps to the ends of the table.
pub fn glyph_for(density: f32) -> char {
    let len = DENSITY_GLYPHS.len();
    let scaled = (density.max(0.0) * len as f32).floor() as usize;
    DENSITY_GLYPHS[scaled.min(len - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(ch: char) -> usize {
        DENSITY_GLYPHS.iter().position(|&g| g == ch).unwrap()
    }

    #[test]
    fn test_table_ends() {
        assert_eq!(glyph_for(0.0), ' ');
        assert_eq!(glyph_for(0.99), '@');
        assert_eq!(glyph_for(1.0), '@');
        assert_eq!(glyph_for(7.5), '@');
        assert_eq!(glyph_for(-1.0), ' ');
    }

    #[test]
    fn test_mapping_is_monotonic() {
        let mut previous = 0;
        for i in 0..=1000 {
            let w = weight(glyph_for(i as f32 / 1000.0));
            assert!(w >= previous, "density {} went lighter", i as f32 / 1000.0);
            previous = w;
        }
        assert_eq!(previous, DENSITY_GLYPHS.len() - 1);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(glyph_for(0.124), ' ');
        assert_eq!(glyph_for(0.126), '.');
        assert_eq!(glyph_for(0.5), '+');
    }
}
