//! Celestial bodies — static orbital parameters, pure position math.
//!
//! Orbital math uses f64 throughout: θ accumulates without wraparound, and
//! sessions of many hours must not lose precision. Convert to f32 only at
//! the output-buffer boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Ring ornament attached to a body (e.g. Saturn). Has no motion model of
/// its own: its position copies the owning body's position every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RingDesc {
    /// Inner radius in render units.
    pub inner: f32,
    /// Outer radius in render units.
    pub outer: f32,
}

/// A body on a circular, coplanar orbit around the origin.
///
/// Defined once at configuration time and never mutated. Inclined orbits
/// are an extension point; `position` currently keeps y = 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    /// Render scale of the body itself.
    pub radius: f32,
    /// Distance from the origin. Must be positive.
    pub orbit_radius: f64,
    /// Radians per second. Signed: negative values orbit retrograde.
    /// Constant for the body's lifetime.
    pub angular_speed: f64,
    /// Display color (r, g, b) in [0, 1].
    pub color: (f32, f32, f32),
    #[serde(default)]
    pub ring: Option<RingDesc>,
}

impl CelestialBody {
    pub fn new(
        name: impl Into<String>,
        radius: f32,
        orbit_radius: f64,
        angular_speed: f64,
        color: (f32, f32, f32),
    ) -> Result<Self, ConfigError> {
        let body = Self {
            name: name.into(),
            radius,
            orbit_radius,
            angular_speed,
            color,
            ring: None,
        };
        body.validate()?;
        Ok(body)
    }

    pub fn with_ring(mut self, ring: RingDesc) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orbit_radius <= 0.0 {
            return Err(ConfigError::NonPositiveOrbit {
                body: self.name.clone(),
                value: self.orbit_radius,
            });
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius {
                what: "body",
                value: self.radius,
            });
        }
        Ok(())
    }

    /// Orbital position at `elapsed` seconds. Pure function of the body's
    /// static parameters — no state, recomputed every frame.
    pub fn position(&self, elapsed: f64) -> DVec3 {
        let theta = elapsed * self.angular_speed;
        DVec3::new(
            self.orbit_radius * theta.cos(),
            0.0,
            self.orbit_radius * theta.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> CelestialBody {
        CelestialBody::new("Earth", 0.32, 6.5, 0.02, (0.2, 0.5, 0.97)).unwrap()
    }

    #[test]
    fn position_stays_on_orbit() {
        let body = earth();
        for t in [0.0, 1.0, 60.0, 3600.0, 86400.0] {
            let p = body.position(t);
            assert!((p.length() - 6.5).abs() < 1e-9, "t = {t}, r = {}", p.length());
        }
    }

    #[test]
    fn position_coplanar() {
        let body = earth();
        assert_eq!(body.position(123.456).y, 0.0);
    }

    #[test]
    fn unbounded_theta_keeps_precision() {
        // Many hours of session time: θ far past 2π, distance must hold.
        let body = earth();
        let p = body.position(1.0e7);
        assert!((p.length() - 6.5).abs() < 1e-6, "r = {}", p.length());
    }

    #[test]
    fn signed_speed_reverses_direction() {
        let prograde = CelestialBody::new("a", 1.0, 5.0, 0.02, (1.0, 1.0, 1.0)).unwrap();
        let retrograde = CelestialBody::new("b", 1.0, 5.0, -0.02, (1.0, 1.0, 1.0)).unwrap();
        let t = 10.0;
        let p = prograde.position(t);
        let r = retrograde.position(t);
        assert!((p.x - r.x).abs() < 1e-12);
        assert!((p.z + r.z).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_orbit() {
        let err = CelestialBody::new("bad", 1.0, 0.0, 0.02, (1.0, 1.0, 1.0));
        assert!(matches!(err, Err(ConfigError::NonPositiveOrbit { .. })));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = CelestialBody::new("bad", -1.0, 5.0, 0.02, (1.0, 1.0, 1.0));
        assert!(matches!(err, Err(ConfigError::NonPositiveRadius { .. })));
    }
}
