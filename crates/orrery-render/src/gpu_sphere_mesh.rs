//! GPU-resident sphere storage: a [`MeshStorage`] backed by wgpu buffers.
//!
//! [`GpuMeshStorage`] keeps clones of the device and queue so a
//! [`SphereMesh`](orrery_mesh::SphereMesh) can push fresh data after every
//! rebuild without threading GPU handles through its setters.

use orrery_mesh::{MeshStorage, SphereVertex};
use wgpu::util::DeviceExt;

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
}

/// Vertex and index buffers for one sphere.
///
/// Uploads write into the existing buffers when the new data fits and
/// reallocate otherwise. [`MeshStorage::release`] destroys both buffers.
pub struct GpuMeshStorage {
    device: wgpu::Device,
    queue: wgpu::Queue,
    label: String,
    buffers: Option<MeshBuffers>,
    vertex_count: u32,
    index_count: u32,
    reuses: u64,
    reallocations: u64,
}

impl GpuMeshStorage {
    /// Empty storage. Buffers are created on the first upload.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, label: impl Into<String>) -> Self {
        Self {
            device: device.clone(),
            queue: queue.clone(),
            label: label.into(),
            buffers: None,
            vertex_count: 0,
            index_count: 0,
            reuses: 0,
            reallocations: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `true` while buffers are allocated.
    pub fn is_resident(&self) -> bool {
        self.buffers.is_some()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn vertex_buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffers.as_ref().map(|b| &b.vertex)
    }

    pub fn index_buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffers.as_ref().map(|b| &b.index)
    }

    /// Allocated size of the vertex buffer in bytes (0 when released).
    pub fn vertex_buffer_size(&self) -> u64 {
        self.buffers.as_ref().map_or(0, |b| b.vertex.size())
    }

    /// Allocated size of the index buffer in bytes (0 when released).
    pub fn index_buffer_size(&self) -> u64 {
        self.buffers.as_ref().map_or(0, |b| b.index.size())
    }

    /// Total GPU memory held by this mesh in bytes.
    pub fn total_gpu_bytes(&self) -> u64 {
        self.vertex_buffer_size() + self.index_buffer_size()
    }

    /// Uploads that wrote into existing buffers.
    pub fn reuses(&self) -> u64 {
        self.reuses
    }

    /// Uploads that had to create new buffers.
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }

    fn allocate(&self, vertex_bytes: &[u8], index_bytes: &[u8]) -> MeshBuffers {
        let vertex = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{}-vertices", self.label)),
                contents: vertex_bytes,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });
        let index = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{}-indices", self.label)),
                contents: index_bytes,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            });
        MeshBuffers { vertex, index }
    }
}

impl MeshStorage for GpuMeshStorage {
    fn store(&mut self, vertices: &[SphereVertex], indices: &[u32]) {
        let vertex_bytes: &[u8] = bytemuck::cast_slice(vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(indices);

        let fits = self.buffers.as_ref().is_some_and(|b| {
            vertex_bytes.len() as u64 <= b.vertex.size()
                && index_bytes.len() as u64 <= b.index.size()
        });

        if fits && let Some(buffers) = &self.buffers {
            self.queue.write_buffer(&buffers.vertex, 0, vertex_bytes);
            self.queue.write_buffer(&buffers.index, 0, index_bytes);
            self.reuses += 1;
        } else {
            if let Some(old) = self.buffers.take() {
                old.vertex.destroy();
                old.index.destroy();
            }
            self.buffers = Some(self.allocate(vertex_bytes, index_bytes));
            self.reallocations += 1;
            log::debug!(
                "{}: allocated {} vertex bytes, {} index bytes",
                self.label,
                vertex_bytes.len(),
                index_bytes.len()
            );
        }

        self.vertex_count = vertices.len() as u32;
        self.index_count = indices.len() as u32;
    }

    fn release(&mut self) {
        if let Some(buffers) = self.buffers.take() {
            buffers.vertex.destroy();
            buffers.index.destroy();
        }
        self.vertex_count = 0;
        self.index_count = 0;
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }
}
