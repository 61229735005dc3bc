//! Accent colors and palettes.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Attach an alpha value, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// RGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// Composite this color over an opaque backdrop.
    pub fn over(self, backdrop: Rgb) -> Rgb {
        let mix = |fg: u8, bg: u8| {
            let fg = fg as f32;
            let bg = bg as f32;
            (bg + (fg - bg) * self.alpha).round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.rgb.0, backdrop.0),
            mix(self.rgb.1, backdrop.1),
            mix(self.rgb.2, backdrop.2),
        )
    }
}

/// Two-tone accent palette for the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Lime shapes over violet ambience.
    #[default]
    Court,
    Ice,
    Ember,
    Mono,
}

impl Palette {
    /// Accent used for the dense, dominant parts of a scene.
    pub fn primary(self) -> Rgb {
        match self {
            Palette::Court => Rgb(180, 255, 57),
            Palette::Ice => Rgb(125, 211, 252),
            Palette::Ember => Rgb(251, 146, 60),
            Palette::Mono => Rgb(229, 231, 235),
        }
    }

    /// Accent used for faint, ambient density.
    pub fn secondary(self) -> Rgb {
        match self {
            Palette::Court => Rgb(168, 85, 247),
            Palette::Ice => Rgb(59, 130, 246),
            Palette::Ember => Rgb(220, 38, 38),
            Palette::Mono => Rgb(107, 114, 128),
        }
    }

    /// Cycle to the next palette.
    pub fn next(self) -> Self {
        match self {
            Palette::Court => Palette::Ice,
            Palette::Ice => Palette::Ember,
            Palette::Ember => Palette::Mono,
            Palette::Mono => Palette::Court,
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Palette::Court => "court",
            Palette::Ice => "ice",
            Palette::Ember => "ember",
            Palette::Mono => "mono",
        }
    }
}
