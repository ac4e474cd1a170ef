//! Meteor shower — procedural streak generation and lifecycle.

use serde::{Deserialize, Serialize};

use crate::components::streak::{MeteorStreak, StreakSample};
use crate::core::error::ConfigError;
use crate::core::rng::Rng;

/// Parameters for generating one meteor shower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowerConfig {
    /// Number of streaks. At least 1.
    pub count: u32,
    /// Shower runtime in seconds (also each streak's travel duration).
    pub duration: f32,
    /// Radius of the sphere the streaks fall toward.
    pub radius: f32,
    /// Streak color (r, g, b) in [0, 1].
    pub color: (f32, f32, f32),
    /// Latest delay a streak may receive; spreads entries across the
    /// runtime instead of all appearing at once.
    pub max_stagger: f32,
    /// How far outside `radius` streaks spawn.
    pub outer_offset: f32,
    /// How far inside `radius` streaks end (travel is inward, simulating
    /// atmospheric entry).
    pub inner_offset: f32,
}

impl Default for ShowerConfig {
    fn default() -> Self {
        Self {
            count: 16,
            duration: 3.0,
            radius: 100.0,
            // #bbf8ff
            color: (0.733, 0.973, 1.0),
            max_stagger: 1.8,
            outer_offset: 20.0,
            inner_offset: 10.0,
        }
    }
}

impl ShowerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count < 1 {
            return Err(ConfigError::ZeroCount { what: "shower" });
        }
        if self.duration <= 0.0 {
            return Err(ConfigError::NonPositiveDuration {
                value: self.duration,
            });
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                what: "shower",
                value: self.radius,
            });
        }
        if self.max_stagger < 0.0 {
            return Err(ConfigError::NegativeStagger {
                value: self.max_stagger,
            });
        }
        Ok(())
    }

    /// Variant of `base` with randomized intensity, used for auto-triggered
    /// showers: 12–21 streaks over 2.8–4.8 seconds.
    pub fn randomized(base: &Self, rng: &mut Rng) -> Self {
        let duration = 2.8 + rng.next_f32() * 2.0;
        Self {
            count: 12 + rng.next_int(10),
            duration,
            max_stagger: duration * 0.6,
            ..base.clone()
        }
    }
}

/// A running meteor shower: an immutable batch of streaks plus lifecycle
/// state. The start timestamp is latched on the first observed frame; the
/// end transition is edge-triggered exactly once.
pub struct MeteorShower {
    streaks: Vec<MeteorStreak>,
    duration: f32,
    color: (f32, f32, f32),
    start: Option<f64>,
    ended: bool,
}

impl MeteorShower {
    /// Generate a shower from `config`. Directions are sampled uniformly on
    /// the unit sphere; each streak travels from `radius + outer_offset` to
    /// `radius - inner_offset` along its own direction.
    pub fn generate(config: &ShowerConfig, rng: &mut Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut streaks = Vec::with_capacity(config.count as usize);
        for _ in 0..config.count {
            let dir = rng.unit_sphere();
            streaks.push(MeteorStreak::new(
                dir * (config.radius + config.outer_offset),
                dir * (config.radius - config.inner_offset),
                rng.next_f32() * config.max_stagger,
                config.duration,
                7.0 + rng.next_f32() * 10.0,
                0.11 + rng.next_f32() * 0.15,
            ));
        }
        log::debug!(
            "generated meteor shower: {} streaks over {:.1}s",
            streaks.len(),
            config.duration
        );
        Ok(Self {
            streaks,
            duration: config.duration,
            color: config.color,
            start: None,
            ended: false,
        })
    }

    /// Observe the shower at `global_t`. Latches the start timestamp on the
    /// first call and returns true exactly once, on the frame the shower
    /// expires. Later observations are no-ops.
    pub fn update(&mut self, global_t: f64) -> bool {
        let start = *self.start.get_or_insert(global_t);
        if !self.ended && (global_t - start) as f32 > self.duration {
            self.ended = true;
            log::debug!("meteor shower ended after {:.2}s", global_t - start);
            return true;
        }
        false
    }

    /// Whether the shower is still within its runtime at `global_t`.
    /// True before the first observed frame (the shower has not started
    /// counting yet).
    pub fn is_active(&self, global_t: f64) -> bool {
        match self.start {
            Some(start) => (global_t - start) as f32 <= self.duration,
            None => true,
        }
    }

    /// Seconds since the first observed frame (0 before any observation).
    pub fn local_time(&self, global_t: f64) -> f32 {
        self.start.map_or(0.0, |s| (global_t - s) as f32)
    }

    /// Sample every streak at `global_t`, in generation order.
    pub fn samples(&self, global_t: f64) -> impl Iterator<Item = StreakSample> + '_ {
        let local_t = self.local_time(global_t);
        self.streaks.iter().map(move |s| s.sample(local_t))
    }

    pub fn streaks(&self) -> &[MeteorStreak] {
        &self.streaks
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn color(&self) -> (f32, f32, f32) {
        self.color
    }
}
