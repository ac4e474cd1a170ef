//! Configuration errors, raised at construction time.
//!
//! The per-frame path is infallible: every value that could make it fail
//! is rejected here before the animation loop starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{what} count must be at least 1")]
    ZeroCount { what: &'static str },

    #[error("duration must be positive, got {value}")]
    NonPositiveDuration { value: f32 },

    #[error("{what} radius must be positive, got {value}")]
    NonPositiveRadius { what: &'static str, value: f32 },

    #[error("body {body:?}: orbit radius must be positive, got {value}")]
    NonPositiveOrbit { body: String, value: f64 },

    #[error("stagger must not be negative, got {value}")]
    NegativeStagger { value: f32 },

    #[error("scheduler interval must not be negative, got {value}")]
    NegativeInterval { value: f32 },

    #[error("invalid color {value:?}, expected #rgb or #rrggbb")]
    BadColor { value: String },

    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
}
