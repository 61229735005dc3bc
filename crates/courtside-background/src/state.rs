//! Background lifecycle: mount, frames, resize, teardown.

use courtside_core::{AnimationSpeed, Palette, Scene};

use crate::chars::{MIN_VISIBLE_DENSITY, glyph_for};
use crate::color::tone;
use crate::grid::{DensityGrid, precompute_all};
use crate::layout::{CellLayout, LayoutOptions, Viewport};
use crate::surface::{FrameHandle, FrameScheduler, ResizeSource, Surface};
use crate::timeline::{Phase, Timeline, blend};

/// Options fixed for the lifetime of one mounted background.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BackgroundOptions {
    /// Render a single static frame and never animate.
    pub reduced_motion: bool,
    pub speed: AnimationSpeed,
    pub palette: Palette,
    pub layout: LayoutOptions,
    /// Scene the timeline starts on.
    pub start_scene: usize,
}

/// Animated density-field background.
///
/// All mutable state lives here: the layout, the precomputed grids and the
/// animation clock origin. The frame scheduler and resize source are owned
/// so that dropping the background always cancels the pending frame and
/// stops observing resizes.
pub struct Background<S: FrameScheduler, R: ResizeSource> {
    options: BackgroundOptions,
    scenes: Vec<Scene>,
    timeline: Timeline,
    layout: Option<CellLayout>,
    grids: Vec<DensityGrid>,
    /// Timestamp (ms) of the first animated frame.
    start_ms: Option<f64>,
    pending: Option<FrameHandle>,
    last_phase: Option<Phase>,
    frames_rendered: u64,
    scheduler: S,
    resize_source: R,
    observing: bool,
}

impl<S: FrameScheduler, R: ResizeSource> Background<S, R> {
    /// Mount the background onto a surface of the given size.
    ///
    /// With no viewport (or an empty one) or no scenes, the background stays
    /// inert: it schedules nothing, observes nothing and draws nothing.
    pub fn mount(
        scenes: Vec<Scene>,
        options: BackgroundOptions,
        viewport: Option<Viewport>,
        scheduler: S,
        resize_source: R,
    ) -> Self {
        let timeline = Timeline::for_speed(options.speed, scenes.len());
        let mut background = Self {
            options,
            scenes,
            timeline,
            layout: None,
            grids: Vec::new(),
            start_ms: None,
            pending: None,
            last_phase: None,
            frames_rendered: 0,
            scheduler,
            resize_source,
            observing: false,
        };

        let layout = viewport.and_then(|v| CellLayout::compute(v, &background.options.layout));
        let Some(layout) = layout.filter(|_| !background.scenes.is_empty()) else {
            log::info!("background has no surface or scenes; staying inert");
            return background;
        };

        background.apply_layout(layout);
        background.resize_source.observe();
        background.observing = true;
        background.pending = Some(background.scheduler.request_frame());
        log::info!(
            "mounted background: {}x{} cells, {} scenes, reduced motion {}",
            layout.cols,
            layout.rows,
            background.scenes.len(),
            background.options.reduced_motion
        );
        background
    }

    /// Handle a frame requested earlier. `timestamp_ms` is a monotonic
    /// high-resolution clock reading.
    ///
    /// Frames that were never requested (or were cancelled) are ignored.
    pub fn frame(&mut self, surface: &mut impl Surface, timestamp_ms: f64) {
        if self.pending.take().is_none() {
            return;
        }

        let elapsed = if self.options.reduced_motion {
            0.0
        } else {
            let start = *self.start_ms.get_or_insert(timestamp_ms);
            ((timestamp_ms - start) / 1000.0).max(0.0)
        };
        self.draw(surface, elapsed);

        if !self.options.reduced_motion {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    /// Handle a size change of the surface.
    ///
    /// Grids are regenerated only when the cell grid changes shape. With
    /// reduced motion on, a single frame is requested to repaint the
    /// static image at the new size.
    pub fn resize(&mut self, viewport: Option<Viewport>) {
        if !self.observing {
            return;
        }

        match viewport.and_then(|v| CellLayout::compute(v, &self.options.layout)) {
            Some(layout) => self.apply_layout(layout),
            None => {
                log::debug!("surface collapsed; dropping density grids");
                self.layout = None;
                self.grids.clear();
            }
        }

        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    /// Cancel the pending frame and stop observing resizes. Idempotent;
    /// also runs on drop.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.observing {
            self.resize_source.disconnect();
            self.observing = false;
            log::info!(
                "background torn down after {} frames",
                self.frames_rendered
            );
        }
        self.grids.clear();
        self.layout = None;
    }

    /// Whether a frame is currently requested.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn layout(&self) -> Option<&CellLayout> {
        self.layout.as_ref()
    }

    /// One grid per scene, at the current layout's resolution.
    pub fn grids(&self) -> &[DensityGrid] {
        &self.grids
    }

    pub fn options(&self) -> &BackgroundOptions {
        &self.options
    }

    /// Scene shown by the most recent frame.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.last_phase.and_then(|p| self.scenes.get(p.current))
    }

    /// Phase drawn by the most recent frame.
    pub fn last_phase(&self) -> Option<Phase> {
        self.last_phase
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn resize_source(&self) -> &R {
        &self.resize_source
    }

    fn apply_layout(&mut self, layout: CellLayout) {
        let regenerate = self.layout.is_none_or(|old| !old.same_grid(&layout));
        if regenerate {
            self.grids = precompute_all(&self.scenes, layout.cols, layout.rows);
            log::debug!(
                "precomputed {} grids at {}x{} (cell {}px, ratio {})",
                self.grids.len(),
                layout.cols,
                layout.rows,
                layout.cell_px,
                layout.pixel_ratio
            );
        }
        self.layout = Some(layout);
    }

    fn draw(&mut self, surface: &mut impl Surface, elapsed: f64) {
        let Some(layout) = self.layout else {
            return;
        };

        let offset = self.options.start_scene as f64 * self.timeline.slot_secs();
        let phase = self.timeline.phase_at(elapsed + offset);
        let (Some(current), Some(next)) = (self.grids.get(phase.current), self.grids.get(phase.next))
        else {
            return;
        };

        surface.resize_backing(layout.backing, layout.logical);
        surface.clear();

        let font_px = layout.font_px();
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let density = blend(current.get(col, row), next.get(col, row), phase.progress);
                if density < MIN_VISIBLE_DENSITY {
                    continue;
                }
                let glyph = glyph_for(density);
                if glyph == ' ' {
                    continue;
                }
                let (x, y) = layout.cell_center(col, row);
                surface.fill_glyph(glyph, x, y, font_px, tone(density, self.options.palette));
            }
        }

        self.last_phase = Some(phase);
        self.frames_rendered += 1;
    }
}

impl<S: FrameScheduler, R: ResizeSource> Drop for Background<S, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
