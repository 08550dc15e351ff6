//! Orbit rings drawn as closed line loops.

use glam::Vec3;
use wgpu::util::DeviceExt;

/// Vertex layout for ring points: one `Float32x3` position at location 0.
pub const ORBIT_VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }],
};

/// Line-list indices joining `point_count` points into a closed loop:
/// `0,1, 1,2, ..., n-1,0`.
///
/// Fewer than two points produce no segments.
pub fn ring_indices(point_count: u32) -> Vec<u32> {
    if point_count < 2 {
        return Vec::new();
    }
    (0..point_count)
        .flat_map(|i| [i, (i + 1) % point_count])
        .collect()
}

/// An orbit ring uploaded for `LineList` drawing.
pub struct GpuOrbitRing {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    /// Number of indices (used in `draw_indexed`).
    pub index_count: u32,
    pub point_count: u32,
}

impl GpuOrbitRing {
    /// Upload `points` (as produced by `circle_points`) and their loop indices.
    pub fn upload(device: &wgpu::Device, label: &str, points: &[Vec3]) -> Self {
        let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
        let indices = ring_indices(points.len() as u32);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-orbit-vertices")),
            contents: bytemuck::cast_slice(&positions),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label}-orbit-indices")),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            point_count: points.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_closes_on_first_point() {
        assert_eq!(ring_indices(4), vec![0, 1, 1, 2, 2, 3, 3, 0]);
    }

    #[test]
    fn test_every_point_has_two_neighbours() {
        let indices = ring_indices(128);
        assert_eq!(indices.len(), 256);
        let mut degree = vec![0u32; 128];
        for &i in &indices {
            degree[i as usize] += 1;
        }
        assert!(degree.iter().all(|&d| d == 2));
    }

    #[test]
    fn test_degenerate_rings_are_empty() {
        assert!(ring_indices(0).is_empty());
        assert!(ring_indices(1).is_empty());
        assert_eq!(ring_indices(2), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_layout_matches_point_size() {
        assert_eq!(ORBIT_VERTEX_LAYOUT.array_stride, 12);
        assert_eq!(ORBIT_VERTEX_LAYOUT.attributes.len(), 1);
    }

    #[test]
    fn test_upload_orbit_ring() {
        let Some(device) = pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions::default())
                .await
                .ok()?;
            adapter
                .request_device(&wgpu::DeviceDescriptor::default())
                .await
                .ok()
                .map(|(device, _queue)| device)
        }) else {
            return; // graceful skip when no GPU
        };
        let points = orrery_query::circle_points(1.395, 64, Vec3::ZERO).unwrap();
        let ring = GpuOrbitRing::upload(&device, "moon", &points);
        assert_eq!(ring.point_count, 64);
        assert_eq!(ring.index_count, 128);
        assert_eq!(ring.vertex_buffer.size(), 64 * 12);
    }
}
