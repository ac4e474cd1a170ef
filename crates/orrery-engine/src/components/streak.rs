//! A single meteor streak — straight-line travel with a sine opacity arch.

use glam::Vec3;

/// Opacity at the peak of the fade envelope.
pub const PEAK_OPACITY: f32 = 0.7;

/// One particle streak of a meteor shower. Generated once when the owning
/// shower starts, immutable thereafter.
#[derive(Debug, Clone)]
pub struct MeteorStreak {
    pub start: Vec3,
    pub end: Vec3,
    /// Unit travel direction, derived once at generation (constant for a
    /// straight streak, so never recomputed per frame).
    pub direction: Vec3,
    /// Seconds after the shower starts before this streak begins moving.
    pub delay: f32,
    /// Seconds of travel.
    pub duration: f32,
    /// Render-only streak length.
    pub length: f32,
    /// Render-only streak thickness.
    pub width: f32,
}

/// Per-frame sample of a streak, consumed by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct StreakSample {
    pub position: Vec3,
    pub visible: bool,
    pub opacity: f32,
}

impl MeteorStreak {
    pub fn new(start: Vec3, end: Vec3, delay: f32, duration: f32, length: f32, width: f32) -> Self {
        Self {
            start,
            end,
            direction: (end - start).normalize_or_zero(),
            delay,
            duration,
            length,
            width,
        }
    }

    /// Sample the streak at `local_t` seconds since the owning shower started.
    ///
    /// Progress clamps to [0, 1]; the streak is invisible exactly at both
    /// travel endpoints, and opacity follows a single sine arch that peaks
    /// at mid-travel. A streak whose delay never elapses within the shower
    /// stays at progress 0 and is permanently invisible — intended
    /// staggering, not an error.
    pub fn sample(&self, local_t: f32) -> StreakSample {
        let progress = ((local_t - self.delay) / self.duration).clamp(0.0, 1.0);
        StreakSample {
            position: self.start.lerp(self.end, progress),
            visible: progress > 0.0 && progress < 1.0,
            opacity: (PEAK_OPACITY * (std::f32::consts::PI * progress).sin()).max(0.0),
        }
    }
}
