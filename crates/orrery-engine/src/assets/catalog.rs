//! Body catalog — the built-in solar system plus JSON loading.
//!
//! Visual radii and angular speeds are exaggerated for readability, not to
//! scale. Angular speeds are small enough (≤ 0.04 rad/s) that θ stays
//! numerically tame over multi-hour sessions.

use serde::{Deserialize, Serialize};

use crate::components::body::{CelestialBody, RingDesc};
use crate::core::error::ConfigError;

/// The eight main planets on circular display orbits.
pub fn solar_system() -> Vec<CelestialBody> {
    let planets: [(&str, f32, f64, f64, (f32, f32, f32)); 8] = [
        ("Mercury", 0.15, 4.0, 0.04, (0.733, 0.733, 0.733)),
        ("Venus", 0.3, 5.0, 0.03, (0.886, 0.757, 0.42)),
        ("Earth", 0.32, 6.5, 0.02, (0.247, 0.514, 0.973)),
        ("Mars", 0.2, 8.0, 0.017, (0.757, 0.267, 0.055)),
        ("Jupiter", 0.7, 10.0, 0.009, (0.855, 0.647, 0.125)),
        ("Saturn", 0.6, 12.0, 0.007, (0.902, 0.761, 0.545)),
        ("Uranus", 0.4, 14.0, 0.005, (0.565, 0.878, 0.937)),
        ("Neptune", 0.39, 16.0, 0.004, (0.341, 0.459, 0.565)),
    ];
    planets
        .into_iter()
        .map(|(name, radius, orbit, speed, color)| {
            let body = CelestialBody {
                name: name.to_string(),
                radius,
                orbit_radius: orbit,
                angular_speed: speed,
                color,
                ring: None,
            };
            if name == "Saturn" {
                body.with_ring(RingDesc {
                    inner: 0.75,
                    outer: 1.1,
                })
            } else {
                body
            }
        })
        .collect()
}

/// Raw catalog entry as it appears in JSON: colors as hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub radius: f32,
    pub orbit: f64,
    pub speed: f64,
    /// "#rgb" or "#rrggbb".
    pub color: String,
    #[serde(default)]
    pub ring: Option<RingDesc>,
}

/// Body catalog loaded from JSON at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub bodies: Vec<BodyDescriptor>,
}

impl Catalog {
    /// Parse a catalog from a JSON string and convert it into validated
    /// bodies. Any malformed entry rejects the whole catalog.
    pub fn from_json(json: &str) -> Result<Vec<CelestialBody>, ConfigError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog
            .bodies
            .into_iter()
            .map(|desc| {
                let color = parse_hex_color(&desc.color)?;
                let body =
                    CelestialBody::new(desc.name, desc.radius, desc.orbit, desc.speed, color)?;
                Ok(match desc.ring {
                    Some(ring) => body.with_ring(ring),
                    None => body,
                })
            })
            .collect()
    }
}

/// Parse "#rgb" or "#rrggbb" into (r, g, b) in [0, 1].
pub fn parse_hex_color(value: &str) -> Result<(f32, f32, f32), ConfigError> {
    let bad = || ConfigError::BadColor {
        value: value.to_string(),
    };
    let hex = value.strip_prefix('#').ok_or_else(bad)?;
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    let (r, g, b) = match hex.len() {
        3 => {
            // "#bbb" expands each nibble: b -> bb
            let expand = |c: &str| channel(&format!("{c}{c}"));
            (
                expand(&hex[0..1])?,
                expand(&hex[1..2])?,
                expand(&hex[2..3])?,
            )
        }
        6 => (
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ),
        _ => return Err(bad()),
    };
    Ok((
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ))
}
