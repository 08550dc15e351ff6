//! Geometry buffer: raw attribute arrays, triangle indices, and the packed stream.

use crate::packed::{FLOATS_PER_VERTEX, SphereVertex};

/// Storage for one generated mesh.
///
/// `positions`, `normals` and `tex_coords` are the separate arrays written by the
/// generator; `interleaved` is derived from them and is what gets uploaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    /// Vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Vertex normals, 3 floats per vertex.
    pub normals: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex.
    pub tex_coords: Vec<f32>,
    /// Triangle indices, 3 per counter-clockwise triangle.
    pub indices: Vec<u32>,
    /// Packed vertex stream, [`FLOATS_PER_VERTEX`] floats per vertex.
    pub interleaved: Vec<f32>,
}

impl GeometryBuffer {
    /// An empty buffer with no allocations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty every array, keeping allocations for the next build.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
        self.interleaved.clear();
    }

    /// Reserve room for `vertex_count` vertices and `index_count` indices.
    pub fn reserve(&mut self, vertex_count: usize, index_count: usize) {
        self.positions.reserve(vertex_count * 3);
        self.normals.reserve(vertex_count * 3);
        self.tex_coords.reserve(vertex_count * 2);
        self.indices.reserve(index_count);
        self.interleaved.reserve(vertex_count * FLOATS_PER_VERTEX);
    }

    /// Append one vertex position.
    pub fn push_position(&mut self, x: f32, y: f32, z: f32) {
        self.positions.extend_from_slice(&[x, y, z]);
    }

    /// Append one vertex normal.
    pub fn push_normal(&mut self, nx: f32, ny: f32, nz: f32) {
        self.normals.extend_from_slice(&[nx, ny, nz]);
    }

    /// Append one texture coordinate pair.
    pub fn push_tex_coord(&mut self, s: f32, t: f32) {
        self.tex_coords.extend_from_slice(&[s, t]);
    }

    /// Append a counter-clockwise triangle by vertex index.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Number of vertices in the raw position array.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Number of triangles in the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// `true` before the first vertex is pushed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The packed stream viewed as vertex records (zero-copy).
    pub fn vertices(&self) -> &[SphereVertex] {
        bytemuck::cast_slice(&self.interleaved)
    }

    /// The packed stream as bytes for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.interleaved)
    }

    /// The index array as bytes for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_triangle() -> GeometryBuffer {
        let mut geo = GeometryBuffer::new();
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
            geo.push_position(x, y, 0.0);
            geo.push_normal(0.0, 0.0, 1.0);
            geo.push_tex_coord(x, y);
        }
        geo.push_triangle(0, 1, 2);
        geo.interleaved = crate::interleave(&geo.positions, &geo.normals, &geo.tex_coords);
        geo
    }

    #[test]
    fn test_empty_buffer() {
        let geo = GeometryBuffer::new();
        assert!(geo.is_empty());
        assert_eq!(geo.vertex_count(), 0);
        assert_eq!(geo.index_count(), 0);
        assert!(geo.vertices().is_empty());
    }

    #[test]
    fn test_counts_and_byte_views() {
        let geo = one_triangle();
        assert_eq!(geo.vertex_count(), 3);
        assert_eq!(geo.triangle_count(), 1);
        assert_eq!(geo.vertices().len(), 3);
        assert_eq!(geo.vertex_bytes().len(), 3 * 32);
        assert_eq!(geo.index_bytes().len(), 3 * 4);
    }

    #[test]
    fn test_clear_empties_every_array() {
        let mut geo = one_triangle();
        geo.clear();
        assert_eq!(geo, GeometryBuffer::new());
    }
}
