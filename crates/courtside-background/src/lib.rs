//! Procedural ASCII background for courtside.
//!
//! Scenes of parametric shapes are rasterized into per-cell density grids,
//! cross-faded along a repeating timeline and drawn as glyphs whose weight
//! and color follow the density. Drawing goes through the [`Surface`]
//! trait; [`TerminalSurface`] draws into a ratatui buffer.

mod chars;
mod color;
mod grid;
mod layout;
mod sampler;
mod scenes;
mod state;
mod surface;
mod terminal;
mod timeline;

pub use chars::{DENSITY_GLYPHS, MIN_VISIBLE_DENSITY, glyph_for};
pub use color::tone;
pub use grid::{DensityGrid, precompute_all};
pub use layout::{CellLayout, LayoutOptions, MAX_GRID_CELLS, Viewport};
pub use sampler::{sample_scene, sample_shape};
pub use scenes::{BUILTIN_SCENE_NAMES, builtin_scene, builtin_scenes};
pub use state::{Background, BackgroundOptions};
pub use surface::{FrameHandle, FrameScheduler, ResizeSource, Surface};
pub use terminal::{CellMetrics, TerminalSurface};
pub use timeline::{Phase, Timeline, blend};
