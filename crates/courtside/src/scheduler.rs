//! Frame scheduling and resize observation for the terminal event loop.

use std::time::{Duration, Instant};

use courtside_background::{FrameHandle, FrameScheduler, ResizeSource};

/// Frame scheduler paced to a fixed frame rate.
///
/// The event loop asks [`TickScheduler::time_until_due`] how long it may
/// block on input, then calls [`TickScheduler::take_due`] to collect the
/// frame timestamp once the frame is due.
#[derive(Debug)]
pub struct TickScheduler {
    origin: Instant,
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
    last_taken: Option<Instant>,
}

impl TickScheduler {
    pub fn new(fps: u32) -> Self {
        Self::with_origin(Instant::now(), fps)
    }

    fn with_origin(origin: Instant, fps: u32) -> Self {
        Self {
            origin,
            interval: Duration::from_secs(1) / fps.max(1),
            next_id: 1,
            pending: None,
            last_taken: None,
        }
    }

    /// Time left before the pending frame is due, or `None` if no frame is
    /// requested.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Take the pending frame if it is due, returning its timestamp in
    /// milliseconds since the scheduler was created.
    pub fn take_due(&mut self, now: Instant) -> Option<f64> {
        let (_, due) = self.pending?;
        if now < due {
            return None;
        }
        self.pending = None;
        self.last_taken = Some(now);
        Some(now.duration_since(self.origin).as_secs_f64() * 1000.0)
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        let due = match self.last_taken {
            Some(last) => last + self.interval,
            None => Instant::now(),
        };
        self.pending = Some((handle, due));
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.is_some_and(|(pending, _)| pending == handle) {
            self.pending = None;
        }
    }
}

/// Tracks whether terminal resize events should reach the background.
#[derive(Debug, Default)]
pub struct TerminalResize {
    observing: bool,
}

impl TerminalResize {
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}

impl ResizeSource for TerminalResize {
    fn observe(&mut self) {
        self.observing = true;
    }

    fn disconnect(&mut self) {
        self.observing = false;
    }
}
