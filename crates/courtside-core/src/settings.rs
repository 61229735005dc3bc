//! User-facing animation settings.

use serde::{Deserialize, Serialize};

/// Seconds a scene stays on screen at medium speed.
const BASE_DISPLAY_SECS: f64 = 5.0;
/// Seconds spent cross-fading into the next scene at medium speed.
const BASE_FADE_SECS: f64 = 1.5;

/// How quickly the background cycles through its scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    fn scale(self) -> f64 {
        match self {
            AnimationSpeed::Slow => 1.6,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 0.6,
        }
    }

    /// How long each scene is held before the cross-fade starts.
    pub fn display_secs(self) -> f64 {
        BASE_DISPLAY_SECS * self.scale()
    }

    /// Length of the cross-fade between consecutive scenes.
    pub fn fade_secs(self) -> f64 {
        BASE_FADE_SECS * self.scale()
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}
