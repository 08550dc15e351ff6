//! Canonical `wgpu::VertexBufferLayout` for sphere meshes.
//!
//! Every pipeline that draws a [`SphereVertex`] stream references
//! [`SPHERE_VERTEX_LAYOUT`] so attribute offsets cannot drift from the struct.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field     |
//! |----------|--------|-----------|-----------|
//! | 0        | 0      | Float32x3 | position  |
//! | 1        | 12     | Float32x3 | normal    |
//! | 2        | 24     | Float32x2 | tex_coord |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::packed::SphereVertex;

/// Vertex attributes covering all 32 bytes of [`SphereVertex`].
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(SphereVertex, position) as u64,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(SphereVertex, normal) as u64,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: mem::offset_of!(SphereVertex, tex_coord) as u64,
        shader_location: 2,
    },
];

/// The vertex buffer layout for sphere mesh pipelines (32-byte stride).
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<SphereVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

/// Owned copy of [`SPHERE_VERTEX_LAYOUT`].
pub fn sphere_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    SPHERE_VERTEX_LAYOUT
}

const _: () = assert!(
    mem::size_of::<SphereVertex>() == 32,
    "SphereVertex size changed, update SPHERE_VERTEX_LAYOUT"
);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[1].offset == 12);
const _: () = assert!(SPHERE_VERTEX_ATTRIBUTES[2].offset == 24);
