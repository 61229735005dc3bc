//! Built-in sport scenes.

use std::f64::consts::PI;

use courtside_core::{Scene, Shape};

/// Names of the built-in scenes, in display order.
pub const BUILTIN_SCENE_NAMES: &[&str] = &["basketball", "football", "baseball", "soccer"];

const fn circle(cx: f64, cy: f64, r: f64, density: f64) -> Shape {
    Shape::Circle { cx, cy, r, density }
}

const fn line(x1: f64, y1: f64, x2: f64, y2: f64, density: f64) -> Shape {
    Shape::Line {
        x1,
        y1,
        x2,
        y2,
        density,
    }
}

const fn arc(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64, density: f64) -> Shape {
    Shape::Arc {
        cx,
        cy,
        r,
        start_angle,
        end_angle,
        density,
    }
}

/// Cubic bezier from `from` to `to` through two control points.
const fn bezier(
    from: (f64, f64),
    c1: (f64, f64),
    c2: (f64, f64),
    to: (f64, f64),
    density: f64,
) -> Shape {
    Shape::Bezier {
        x1: from.0,
        y1: from.1,
        cx1: c1.0,
        cy1: c1.1,
        cx2: c2.0,
        cy2: c2.1,
        x2: to.0,
        y2: to.1,
        density,
    }
}

/// Hoop, backboard and a ball on its way in.
const BASKETBALL: &[Shape] = &[
    Shape::Rect {
        cx: 0.72,
        cy: 0.22,
        w: 0.02,
        h: 0.18,
        density: 0.9,
    },
    // Rim, open side down.
    arc(0.65, 0.32, 0.06, 0.0, PI, 1.0),
    // Net
    line(0.59, 0.32, 0.62, 0.48, 0.5),
    line(0.65, 0.32, 0.65, 0.50, 0.5),
    line(0.71, 0.32, 0.68, 0.48, 0.5),
    bezier((0.15, 0.7), (0.3, 0.05), (0.5, 0.05), (0.65, 0.28), 0.8),
    circle(0.15, 0.7, 0.035, 1.0),
    // Court line and three-point arc
    line(0.05, 0.85, 0.95, 0.85, 0.3),
    arc(0.72, 0.85, 0.28, PI, PI * 1.75, 0.25),
];

/// Quarterback throwing a spiral at the posts.
const FOOTBALL: &[Shape] = &[
    // Stick figure: head, torso, arms, legs
    circle(0.25, 0.35, 0.03, 0.9),
    line(0.25, 0.38, 0.25, 0.58, 0.8),
    line(0.25, 0.42, 0.32, 0.35, 0.7),
    line(0.25, 0.42, 0.18, 0.48, 0.6),
    line(0.25, 0.58, 0.20, 0.72, 0.6),
    line(0.25, 0.58, 0.30, 0.72, 0.6),
    circle(0.34, 0.33, 0.025, 1.0),
    bezier((0.34, 0.33), (0.5, 0.1), (0.65, 0.15), (0.82, 0.45), 0.6),
    // Rotation marks along the flight path
    circle(0.45, 0.18, 0.008, 0.4),
    circle(0.55, 0.15, 0.008, 0.4),
    circle(0.65, 0.18, 0.008, 0.4),
    circle(0.75, 0.30, 0.008, 0.4),
    // Goal posts
    line(0.85, 0.2, 0.85, 0.75, 0.4),
    line(0.80, 0.2, 0.85, 0.2, 0.5),
    line(0.90, 0.2, 0.85, 0.2, 0.5),
    // Field
    line(0.05, 0.75, 0.95, 0.75, 0.2),
    line(0.4, 0.72, 0.4, 0.78, 0.15),
    line(0.6, 0.72, 0.6, 0.78, 0.15),
];

/// Batter sending one over the fence.
const BASEBALL: &[Shape] = &[
    circle(0.3, 0.45, 0.03, 0.9),
    line(0.3, 0.48, 0.3, 0.65, 0.8),
    line(0.3, 0.52, 0.38, 0.46, 0.7),
    // Bat
    line(0.38, 0.46, 0.48, 0.40, 0.9),
    line(0.3, 0.65, 0.26, 0.78, 0.6),
    line(0.3, 0.65, 0.34, 0.78, 0.6),
    bezier((0.48, 0.40), (0.55, 0.15), (0.7, 0.08), (0.88, 0.2), 0.7),
    circle(0.88, 0.2, 0.02, 1.0),
    // Impact burst
    circle(0.48, 0.40, 0.015, 0.6),
    // Diamond
    line(0.3, 0.82, 0.50, 0.72, 0.3),
    line(0.50, 0.72, 0.3, 0.62, 0.3),
    line(0.3, 0.62, 0.10, 0.72, 0.3),
    line(0.10, 0.72, 0.3, 0.82, 0.3),
    // Bases
    circle(0.3, 0.82, 0.012, 0.5),
    circle(0.50, 0.72, 0.012, 0.5),
    circle(0.3, 0.62, 0.012, 0.5),
    circle(0.10, 0.72, 0.012, 0.5),
];

/// Kicker putting the ball into the net.
const SOCCER: &[Shape] = &[
    circle(0.35, 0.5, 0.03, 0.9),
    line(0.35, 0.53, 0.35, 0.68, 0.8),
    line(0.35, 0.56, 0.28, 0.60, 0.6),
    line(0.35, 0.56, 0.42, 0.60, 0.6),
    // Standing and kicking legs
    line(0.35, 0.68, 0.30, 0.82, 0.6),
    line(0.35, 0.68, 0.42, 0.72, 0.8),
    circle(0.44, 0.72, 0.025, 1.0),
    bezier((0.44, 0.72), (0.55, 0.35), (0.7, 0.30), (0.82, 0.45), 0.6),
    // Goal frame
    line(0.75, 0.3, 0.75, 0.7, 0.7),
    line(0.92, 0.3, 0.92, 0.7, 0.7),
    line(0.75, 0.3, 0.92, 0.3, 0.7),
    // Net
    line(0.80, 0.3, 0.80, 0.7, 0.2),
    line(0.85, 0.3, 0.85, 0.7, 0.2),
    line(0.75, 0.43, 0.92, 0.43, 0.2),
    line(0.75, 0.57, 0.92, 0.57, 0.2),
    line(0.05, 0.82, 0.95, 0.82, 0.2),
];

/// Look up a built-in scene by name.
pub fn builtin_scene(name: &str) -> Option<Scene> {
    let shapes = match name {
        "basketball" => BASKETBALL,
        "football" => FOOTBALL,
        "baseball" => BASEBALL,
        "soccer" => SOCCER,
        _ => return None,
    };
    Some(Scene::new(name, shapes.to_vec()))
}

/// All built-in scenes in display order.
pub fn builtin_scenes() -> Vec<Scene> {
    BUILTIN_SCENE_NAMES
        .iter()
        .filter_map(|name| builtin_scene(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample_scene;

    #[test]
    fn test_catalog_order() {
        let names: Vec<_> = builtin_scenes().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, BUILTIN_SCENE_NAMES);
        assert!(builtin_scene("curling").is_none());
    }

    #[test]
    fn test_densities_are_normalized() {
        for scene in builtin_scenes() {
            assert!(!scene.shapes().is_empty());
            for shape in scene.shapes() {
                assert!((0.0..=1.0).contains(&shape.density()), "{}", scene.name());
            }
        }
    }

    #[test]
    fn test_balls_are_solid() {
        // Each scene's ball sits at full density.
        let basketball = builtin_scene("basketball").unwrap();
        assert!((sample_scene(&basketball, 0.15, 0.7) - 1.0).abs() < 1e-9);
        let baseball = builtin_scene("baseball").unwrap();
        assert!((sample_scene(&baseball, 0.88, 0.2) - 1.0).abs() < 1e-9);
    }
}
