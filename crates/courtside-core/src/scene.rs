//! Named scenes.

use serde::{Deserialize, Serialize};

use crate::Shape;

/// One themed tableau: a named, ordered list of shapes.
///
/// Scenes are immutable once built; the fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    name: String,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create a scene from its name and shapes.
    pub fn new(name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }

    /// Scene name, e.g. `"basketball"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shapes in definition order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}
