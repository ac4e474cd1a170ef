//! Per-frame output buffers consumed by the external renderer.
//!
//! Instance structs are Pod with fixed float strides so a renderer can copy
//! them straight into GPU instance buffers without per-frame conversion.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-body instance data: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Render scale of the body.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 when the body carries a ring ornament, else 0.0.
    pub has_ring: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-ring instance data: 8 floats = 32 bytes stride. Position copies the
/// owning body's position computed earlier in the same frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub inner: f32,
    pub outer: f32,
    _pad: [f32; 3],
}

impl RingInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(x: f32, y: f32, z: f32, inner: f32, outer: f32) -> Self {
        Self {
            x,
            y,
            z,
            inner,
            outer,
            _pad: [0.0; 3],
        }
    }
}

/// Per-streak instance data: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StreakInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// 0.0 = fully faded, peaks mid-travel.
    pub opacity: f32,
    /// 1.0 when the streak should be drawn, else 0.0.
    pub visible: f32,
    pub width: f32,
    pub length: f32,
    _pad: f32,
}

impl StreakInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(position: Vec3, opacity: f32, visible: bool, width: f32, length: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            opacity,
            visible: if visible { 1.0 } else { 0.0 },
            width,
            length,
            _pad: 0.0,
        }
    }
}

/// Per-star attribute data: 4 floats = 16 bytes stride. Star positions are
/// static and exposed separately; only these attributes change per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StarInstance {
    pub brightness: f32,
    pub size: f32,
    _pad: [f32; 2],
}

impl StarInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(brightness: f32, size: f32) -> Self {
        Self {
            brightness,
            size,
            _pad: [0.0; 2],
        }
    }
}

/// All per-frame render output. Vectors retain capacity across frames;
/// the star buffer is sized once and rewritten in place.
pub struct FrameBuffer {
    pub bodies: Vec<BodyInstance>,
    pub rings: Vec<RingInstance>,
    pub streaks: Vec<StreakInstance>,
    pub stars: Vec<StarInstance>,
}

impl FrameBuffer {
    pub fn new(body_capacity: usize, star_count: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(body_capacity),
            rings: Vec::with_capacity(4),
            streaks: Vec::with_capacity(32),
            stars: vec![StarInstance::default(); star_count],
        }
    }

    /// Raw pointer to body instance data for zero-copy renderer reads.
    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr() as *const f32
    }

    pub fn streaks_ptr(&self) -> *const f32 {
        self.streaks.as_ptr() as *const f32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.stars.as_ptr() as *const f32
    }
}
