//! Star twinkle evaluation — two desynchronized oscillations plus a
//! hash-derived sparkle term, so no two seeds ever phase-lock.
//!
//! Evaluated per point, per frame, for fields of hundreds to low thousands
//! of stars: everything here is O(1) and allocation-free.

/// GLSL-style fract: always in [0, 1), also for negative inputs.
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Point size at time `t` for a star with the given twinkle seed.
#[inline]
pub fn point_size(seed: f32, t: f32) -> f32 {
    2.0 + 4.5 * (1.7 * t + 31.0 * seed).sin().abs()
}

/// Brightness at time `t` for a star with the given twinkle seed.
/// Bounded in (0, 1.92]: base oscillation in [0.4, 1.6], sparkle
/// multiplier in [0.8, 1.2).
#[inline]
pub fn brightness(seed: f32, t: f32) -> f32 {
    let twinkle = 0.4 + 1.2 * (2.3 * t + 52.0 * seed).sin().abs();
    let sparkle = fract((17.0 * t + 120.0 * seed).sin() * 43758.5453);
    twinkle * (0.8 + 0.4 * sparkle)
}
