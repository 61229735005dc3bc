//! Shape and scene density sampling.
//!
//! All functions here are pure: `(shape, point) -> density`. Densities are
//! clamped into `[0, shape.density()]`.

use std::f64::consts::TAU;

use courtside_core::{Scene, Shape};

/// Half-width of the radial band an arc occupies.
const ARC_BAND: f64 = 0.015;
/// Stroke half-thickness of a line segment.
const LINE_THICKNESS: f64 = 0.012;
/// Stroke half-thickness of a bezier curve.
const BEZIER_THICKNESS: f64 = 0.015;
/// Number of segments a bezier is split into (samples = steps + 1).
const BEZIER_STEPS: u32 = 50;
/// Circle glow reaches this multiple of the radius.
const GLOW_REACH: f64 = 1.8;
/// Peak glow density relative to the circle's own density.
const GLOW_WEIGHT: f64 = 0.2;
/// Inverse of the depth at which a rectangle's interior saturates.
const RECT_EDGE_RAMP: f64 = 30.0;

/// Density `shape` contributes at the normalized point `(x, y)`.
pub fn sample_shape(shape: &Shape, x: f64, y: f64) -> f64 {
    let raw = match *shape {
        Shape::Circle { cx, cy, r, density } => sample_circle(x - cx, y - cy, r, density),
        Shape::Arc {
            cx,
            cy,
            r,
            start_angle,
            end_angle,
            density,
        } => sample_arc(x - cx, y - cy, r, start_angle, end_angle, density),
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            density,
        } => sample_line(x, y, (x1, y1), (x2, y2), density),
        Shape::Rect {
            cx,
            cy,
            w,
            h,
            density,
        } => sample_rect((x - cx).abs(), (y - cy).abs(), w / 2.0, h / 2.0, density),
        Shape::Bezier {
            x1,
            y1,
            cx1,
            cy1,
            cx2,
            cy2,
            x2,
            y2,
            density,
        } => {
            let dist = bezier_distance(x, y, [(x1, y1), (cx1, cy1), (cx2, cy2), (x2, y2)]);
            falloff(dist, BEZIER_THICKNESS, density)
        }
    };

    let max = shape.density().max(0.0);
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, max) }
}

/// Density of a scene at `(x, y)`: the strongest shape wins, nothing sums.
pub fn sample_scene(scene: &Scene, x: f64, y: f64) -> f64 {
    scene
        .shapes()
        .iter()
        .map(|shape| sample_shape(shape, x, y))
        .fold(0.0, f64::max)
}

/// Linear ramp from `density` at distance 0 down to 0 at `thickness`.
fn falloff(dist: f64, thickness: f64, density: f64) -> f64 {
    if dist < thickness {
        density * (1.0 - dist / thickness)
    } else {
        0.0
    }
}

fn sample_circle(dx: f64, dy: f64, r: f64, density: f64) -> f64 {
    if r <= 0.0 {
        return 0.0;
    }
    let dist = dx.hypot(dy);
    if dist <= r {
        density * (1.0 - dist / r)
    } else if dist < r * GLOW_REACH {
        let glow_width = r * (GLOW_REACH - 1.0);
        density * GLOW_WEIGHT * (1.0 - (dist - r) / glow_width)
    } else {
        0.0
    }
}

fn sample_arc(dx: f64, dy: f64, r: f64, start: f64, end: f64, density: f64) -> f64 {
    let mut angle = dy.atan2(dx);
    if angle < 0.0 {
        angle += TAU;
    }
    // Spans running past a full turn also catch the wrapped angle.
    let in_span = |a: f64| a >= start && a <= end;
    if !in_span(angle) && !in_span(angle + TAU) {
        return 0.0;
    }
    falloff((dx.hypot(dy) - r).abs(), ARC_BAND, density)
}

fn sample_line(x: f64, y: f64, from: (f64, f64), to: (f64, f64), density: f64) -> f64 {
    let lx = to.0 - from.0;
    let ly = to.1 - from.1;
    let len2 = lx * lx + ly * ly;
    if len2 == 0.0 {
        return 0.0;
    }
    let t = (((x - from.0) * lx + (y - from.1) * ly) / len2).clamp(0.0, 1.0);
    let px = from.0 + t * lx;
    let py = from.1 + t * ly;
    falloff((x - px).hypot(y - py), LINE_THICKNESS, density)
}

fn sample_rect(dx: f64, dy: f64, hw: f64, hh: f64, density: f64) -> f64 {
    if dx < hw && dy < hh {
        let edge_dist = (hw - dx).min(hh - dy);
        density * (edge_dist * RECT_EDGE_RAMP).min(1.0)
    } else {
        0.0
    }
}

/// Approximate distance to a cubic bezier by sampling it uniformly in `t`.
fn bezier_distance(x: f64, y: f64, [p0, p1, p2, p3]: [(f64, f64); 4]) -> f64 {
    (0..=BEZIER_STEPS)
        .map(|i| {
            let t = i as f64 / BEZIER_STEPS as f64;
            let it = 1.0 - t;
            let w0 = it * it * it;
            let w1 = 3.0 * it * it * t;
            let w2 = 3.0 * it * t * t;
            let w3 = t * t * t;
            let bx = w0 * p0.0 + w1 * p1.0 + w2 * p2.0 + w3 * p3.0;
            let by = w0 * p0.1 + w1 * p1.1 + w2 * p2.1 + w3 * p3.1;
            (x - bx).hypot(y - by)
        })
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn unit_circle() -> Shape {
        Shape::Circle {
            cx: 0.5,
            cy: 0.5,
            r: 0.1,
            density: 1.0,
        }
    }

    fn sample_shapes() -> Vec<Shape> {
        vec![
            unit_circle(),
            Shape::Arc {
                cx: 0.65,
                cy: 0.32,
                r: 0.06,
                start_angle: 0.0,
                end_angle: PI,
                density: 1.0,
            },
            Shape::Line {
                x1: 0.1,
                y1: 0.2,
                x2: 0.8,
                y2: 0.6,
                density: 0.5,
            },
            Shape::Rect {
                cx: 0.72,
                cy: 0.22,
                w: 0.02,
                h: 0.18,
                density: 0.9,
            },
            Shape::Bezier {
                x1: 0.15,
                y1: 0.7,
                cx1: 0.3,
                cy1: 0.05,
                cx2: 0.5,
                cy2: 0.05,
                x2: 0.65,
                y2: 0.28,
                density: 0.8,
            },
        ]
    }

    #[test]
    fn test_circle_center_boundary_and_midpoint() {
        let circle = unit_circle();
        assert!(approx(sample_shape(&circle, 0.5, 0.5), 1.0));
        assert!(approx(sample_shape(&circle, 0.5, 0.6), 0.0));
        assert!(approx(sample_shape(&circle, 0.5, 0.55), 0.5));
    }

    #[test]
    fn test_circle_glow() {
        let circle = unit_circle();
        // Halfway through the glow band: 0.2 * (1 - 0.5).
        let glow = sample_shape(&circle, 0.5, 0.64);
        assert!((glow - 0.1).abs() < 1e-6, "glow was {glow}");
        assert_eq!(sample_shape(&circle, 0.5, 0.69), 0.0);
    }

    #[test]
    fn test_far_points_are_zero() {
        for shape in sample_shapes() {
            for (x, y) in [(-2.0, -2.0), (3.0, 0.5), (0.5, 5.0), (-1.0, 4.0)] {
                assert_eq!(sample_shape(&shape, x, y), 0.0, "{shape:?} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_density_stays_in_range() {
        for shape in sample_shapes() {
            let max = shape.density();
            for i in 0..=60 {
                for j in 0..=60 {
                    let d = sample_shape(&shape, i as f64 / 60.0, j as f64 / 60.0);
                    assert!((0.0..=max).contains(&d), "{shape:?} gave {d}");
                }
            }
        }
    }

    #[test]
    fn test_degenerate_line_is_zero() {
        let line = Shape::Line {
            x1: 0.4,
            y1: 0.4,
            x2: 0.4,
            y2: 0.4,
            density: 1.0,
        };
        assert_eq!(sample_shape(&line, 0.4, 0.4), 0.0);
        assert_eq!(sample_shape(&line, 0.401, 0.4), 0.0);
    }

    #[test]
    fn test_line_falloff_and_endpoint_clamp() {
        let line = Shape::Line {
            x1: 0.2,
            y1: 0.5,
            x2: 0.8,
            y2: 0.5,
            density: 1.0,
        };
        assert!(approx(sample_shape(&line, 0.5, 0.5), 1.0));
        assert!((sample_shape(&line, 0.5, 0.506) - 0.5).abs() < 1e-6);
        // Beyond the end cap the distance is measured to the endpoint.
        assert_eq!(sample_shape(&line, 0.85, 0.5), 0.0);
        assert!(sample_shape(&line, 0.805, 0.5) > 0.0);
    }

    #[test]
    fn test_arc_respects_angular_span() {
        // Lower half in screen space (angles 0..PI point downward).
        let rim = Shape::Arc {
            cx: 0.5,
            cy: 0.5,
            r: 0.1,
            start_angle: 0.0,
            end_angle: PI,
            density: 1.0,
        };
        assert!(approx(sample_shape(&rim, 0.5, 0.6), 1.0));
        assert_eq!(sample_shape(&rim, 0.5, 0.4), 0.0);
        assert_eq!(sample_shape(&rim, 0.5, 0.63), 0.0);
    }

    #[test]
    fn test_arc_span_past_full_turn() {
        let arc = Shape::Arc {
            cx: 0.5,
            cy: 0.5,
            r: 0.1,
            start_angle: 1.5 * PI,
            end_angle: 2.5 * PI,
            density: 1.0,
        };
        // Angle 0 (to the right) is only inside the span once wrapped.
        assert!(approx(sample_shape(&arc, 0.6, 0.5), 1.0));
        // Angle PI (to the left) is outside.
        assert_eq!(sample_shape(&arc, 0.4, 0.5), 0.0);
    }

    #[test]
    fn test_rect_saturates_inside() {
        let rect = Shape::Rect {
            cx: 0.5,
            cy: 0.5,
            w: 0.4,
            h: 0.4,
            density: 0.8,
        };
        assert!(approx(sample_shape(&rect, 0.5, 0.5), 0.8));
        // 0.01 inside the left edge: 0.8 * 0.3.
        assert!((sample_shape(&rect, 0.31, 0.5) - 0.24).abs() < 1e-6);
        assert_eq!(sample_shape(&rect, 0.29, 0.5), 0.0);
    }

    #[test]
    fn test_bezier_passes_through_endpoints() {
        let curve = Shape::Bezier {
            x1: 0.1,
            y1: 0.9,
            cx1: 0.3,
            cy1: 0.1,
            cx2: 0.7,
            cy2: 0.1,
            x2: 0.9,
            y2: 0.9,
            density: 0.6,
        };
        assert!(approx(sample_shape(&curve, 0.1, 0.9), 0.6));
        assert!(approx(sample_shape(&curve, 0.9, 0.9), 0.6));
        assert_eq!(sample_shape(&curve, 0.5, 0.9), 0.0);
    }

    #[test]
    fn test_scene_takes_max_not_sum() {
        let scene = Scene::new(
            "overlap",
            vec![
                unit_circle(),
                Shape::Circle {
                    cx: 0.5,
                    cy: 0.5,
                    r: 0.2,
                    density: 0.6,
                },
            ],
        );
        let a = sample_shape(&scene.shapes()[0], 0.5, 0.55);
        let b = sample_shape(&scene.shapes()[1], 0.5, 0.55);
        assert!(a > 0.0 && b > 0.0);
        assert_eq!(sample_scene(&scene, 0.5, 0.55), a.max(b));
    }

    #[test]
    fn test_empty_scene_is_zero() {
        let scene = Scene::new("empty", Vec::new());
        assert_eq!(sample_scene(&scene, 0.5, 0.5), 0.0);
    }
}
