//! Static star field — positions and twinkle seeds, generated once.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::rng::Rng;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarFieldConfig {
    pub count: usize,
    /// Sphere radius the stars sit on. Should match the skybox radius so
    /// no point lands outside it.
    pub radius: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            count: 800,
            radius: 100.0,
        }
    }
}

impl StarFieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count < 1 {
            return Err(ConfigError::ZeroCount { what: "star field" });
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                what: "star field",
                value: self.radius,
            });
        }
        Ok(())
    }
}

/// A fixed set of points on a near-constant-radius sphere, each carrying a
/// twinkle seed in [0, 1) that desynchronizes its brightness oscillation.
/// Immutable after generation; only brightness/size vary per frame.
pub struct StarField {
    positions: Vec<Vec3>,
    seeds: Vec<f32>,
}

impl StarField {
    pub fn generate(config: &StarFieldConfig, rng: &mut Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut positions = Vec::with_capacity(config.count);
        let mut seeds = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let dir = rng.unit_sphere();
            let r = config.radius * (0.97 + 0.02 * rng.next_f32());
            positions.push(dir * r);
            seeds.push(rng.next_f32());
        }
        Ok(Self { positions, seeds })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn seeds(&self) -> &[f32] {
        &self.seeds
    }
}
