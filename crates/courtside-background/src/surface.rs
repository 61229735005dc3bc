//! Interfaces the background draws through.
//!
//! The renderer never touches a terminal, canvas or event loop directly.
//! Its owner supplies a [`Surface`] for each frame plus a [`FrameScheduler`]
//! and a [`ResizeSource`] that live as long as the background.

use courtside_core::Rgba;

/// A drawable 2D surface addressed in logical pixels.
pub trait Surface {
    /// Size the backing buffer independently of the logical size.
    fn resize_backing(&mut self, backing: (u32, u32), logical: (f64, f64));

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Draw one character centered on `(x, y)`.
    fn fill_glyph(&mut self, glyph: char, x: f64, y: f64, font_px: f64, color: Rgba);
}

/// Opaque token for a requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Per-frame callback scheduling, in the manner of `requestAnimationFrame`.
///
/// After `request_frame`, the owner calls [`Background::frame`] once with a
/// millisecond timestamp, unless the handle is cancelled first.
///
/// [`Background::frame`]: crate::Background::frame
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Source of size-change notifications for the surface.
///
/// While observing, the owner forwards every size change to
/// [`Background::resize`].
///
/// [`Background::resize`]: crate::Background::resize
pub trait ResizeSource {
    fn observe(&mut self);
    fn disconnect(&mut self);
}
