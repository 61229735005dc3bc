//! Core types shared by the courtside crates.
//!
//! Everything here is plain immutable data: shape primitives in normalized
//! coordinates, named scenes built from them, accent colors and the
//! user-facing animation settings.

mod color;
mod scene;
mod settings;
mod shape;

pub use color::{Palette, Rgb, Rgba};
pub use scene::Scene;
pub use settings::AnimationSpeed;
pub use shape::Shape;
