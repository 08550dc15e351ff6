//! Interleaved vertex record used for GPU upload.
//!
//! The generator produces a flat `f32` stream of 8 floats per vertex. Because
//! [`SphereVertex`] is `#[repr(C)]` with only `f32` fields, that stream can be
//! viewed as `&[SphereVertex]` without copying.

use glam::{Vec2, Vec3};

/// Floats per interleaved vertex: 3 position, 3 normal, 2 texture coordinate.
pub const FLOATS_PER_VERTEX: usize = 8;

/// A single interleaved sphere vertex (32 bytes).
///
/// Layout:
///   - `[0..12)`  position `[f32; 3]`
///   - `[12..24)` normal `[f32; 3]`
///   - `[24..32)` tex_coord `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
    /// Equirectangular texture coordinate `(s, t)`.
    pub tex_coord: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [f32; FLOATS_PER_VERTEX]);

impl SphereVertex {
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coord: tex_coord.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn tex_coord(&self) -> Vec2 {
        Vec2::from_array(self.tex_coord)
    }
}
