//! Scene timeline as a pure function of elapsed time.

use courtside_core::AnimationSpeed;

/// Repeating timeline: each scene is held for `display_secs`, then fades
/// into the next over `fade_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    display_secs: f64,
    fade_secs: f64,
    scene_count: usize,
}

/// Where the timeline stands at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// Scene being shown (or faded out of).
    pub current: usize,
    /// Scene being faded into.
    pub next: usize,
    /// Cross-fade progress in `[0, 1]`; 0 while the scene is held.
    pub progress: f64,
}

impl Timeline {
    pub fn new(display_secs: f64, fade_secs: f64, scene_count: usize) -> Self {
        Self {
            display_secs: display_secs.max(0.0),
            fade_secs: fade_secs.max(0.0),
            scene_count,
        }
    }

    /// Timeline with the durations of an animation speed preset.
    pub fn for_speed(speed: AnimationSpeed, scene_count: usize) -> Self {
        Self::new(speed.display_secs(), speed.fade_secs(), scene_count)
    }

    /// Length of one scene's slot (hold plus fade).
    pub fn slot_secs(&self) -> f64 {
        self.display_secs + self.fade_secs
    }

    /// Length of a full pass over every scene.
    pub fn cycle_secs(&self) -> f64 {
        self.slot_secs() * self.scene_count as f64
    }

    /// Phase at `elapsed` seconds since the timeline origin.
    pub fn phase_at(&self, elapsed: f64) -> Phase {
        let slot = self.slot_secs();
        let cycle = self.cycle_secs();
        if self.scene_count == 0 || slot <= 0.0 || !elapsed.is_finite() {
            return Phase {
                current: 0,
                next: if self.scene_count > 1 { 1 } else { 0 },
                progress: 0.0,
            };
        }

        let t = elapsed.rem_euclid(cycle);
        let current = ((t / slot).floor() as usize).min(self.scene_count - 1);
        let next = (current + 1) % self.scene_count;
        let within = t - current as f64 * slot;

        let progress = if within > self.display_secs && self.fade_secs > 0.0 {
            ((within - self.display_secs) / self.fade_secs).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Phase {
            current,
            next,
            progress,
        }
    }
}

/// Cross-fade two densities: exactly `current` at 0, exactly `next` at 1.
pub fn blend(current: f32, next: f32, progress: f64) -> f32 {
    let p = progress.clamp(0.0, 1.0) as f32;
    current * (1.0 - p) + next * p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::new(5.0, 1.5, 4)
    }

    #[test]
    fn test_hold_then_fade() {
        let tl = timeline();
        assert_eq!(
            tl.phase_at(0.0),
            Phase {
                current: 0,
                next: 1,
                progress: 0.0
            }
        );
        assert_eq!(tl.phase_at(4.9).progress, 0.0);
        assert!((tl.phase_at(5.75).progress - 0.5).abs() < 1e-9);
        assert_eq!(tl.phase_at(6.6).current, 1);
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let tl = timeline();
        assert_eq!(tl.cycle_secs(), 26.0);
        let last = tl.phase_at(19.6);
        assert_eq!((last.current, last.next), (3, 0));
        assert_eq!(tl.phase_at(26.0 + 1.0), tl.phase_at(1.0));
        assert_eq!(tl.phase_at(26.0 * 10.0 + 13.0).current, 2);
    }

    #[test]
    fn test_single_scene_fades_into_itself() {
        let tl = Timeline::new(5.0, 1.5, 1);
        let phase = tl.phase_at(6.0);
        assert_eq!((phase.current, phase.next), (0, 0));
    }

    #[test]
    fn test_degenerate_timelines() {
        assert_eq!(Timeline::new(5.0, 1.5, 0).phase_at(3.0).progress, 0.0);
        assert_eq!(Timeline::new(0.0, 0.0, 3).phase_at(3.0).current, 0);
        assert_eq!(timeline().phase_at(f64::NAN).current, 0);
    }

    #[test]
    fn test_blend_endpoints_are_exact() {
        for (a, b) in [(0.3, 0.9), (1.0, 0.0), (0.0, 0.0), (0.125, 0.7)] {
            assert_eq!(blend(a, b, 0.0), a);
            assert_eq!(blend(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_blend_is_monotonic() {
        let (a, b) = (0.2_f32, 0.8_f32);
        let mut previous = blend(a, b, 0.0);
        for i in 1..=100 {
            let value = blend(a, b, i as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_speed_presets() {
        let tl = Timeline::for_speed(AnimationSpeed::Fast, 4);
        assert!(tl.cycle_secs() < timeline().cycle_secs());
        assert!((tl.cycle_secs() - 4.0 * (3.0 + 0.9)).abs() < 1e-9);
    }
}
