//! Parametric shape primitives.

use serde::{Deserialize, Serialize};

/// A shape primitive in normalized coordinates (0.0-1.0 of surface width
/// and height, y growing downward).
///
/// Every variant carries a `density` weight in `[0, 1]`: the most "ink" the
/// shape can contribute at any point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Filled disc with a faint glow past its edge.
    Circle { cx: f64, cy: f64, r: f64, density: f64 },
    /// Thin ring segment between two angles (radians).
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start_angle: f64,
        end_angle: f64,
        density: f64,
    },
    /// Finite stroke from `(x1, y1)` to `(x2, y2)`.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        density: f64,
    },
    /// Axis-aligned filled box centered on `(cx, cy)`.
    Rect {
        cx: f64,
        cy: f64,
        w: f64,
        h: f64,
        density: f64,
    },
    /// Cubic bezier stroke with control points `(cx1, cy1)` and `(cx2, cy2)`.
    Bezier {
        x1: f64,
        y1: f64,
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        x2: f64,
        y2: f64,
        density: f64,
    },
}

impl Shape {
    /// The shape's density weight.
    pub fn density(&self) -> f64 {
        match *self {
            Shape::Circle { density, .. }
            | Shape::Arc { density, .. }
            | Shape::Line { density, .. }
            | Shape::Rect { density, .. }
            | Shape::Bezier { density, .. } => density,
        }
    }

    /// Short lowercase name of the variant, as used in config files.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Arc { .. } => "arc",
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rect",
            Shape::Bezier { .. } => "bezier",
        }
    }
}
