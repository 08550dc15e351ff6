//! wgpu-backed storage for sphere meshes and orbit rings.

pub mod gpu_sphere_mesh;
pub mod orbit_ring;

pub use gpu_sphere_mesh::GpuMeshStorage;
pub use orbit_ring::{GpuOrbitRing, ORBIT_VERTEX_LAYOUT, ring_indices};
