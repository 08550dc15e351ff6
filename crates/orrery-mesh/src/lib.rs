//! UV-sphere tessellation: shape parameters, geometry buffers, interleaving, and the
//! parameter-change reconciler that keeps a sphere mesh and its storage in sync.

pub mod error;
pub mod geometry;
pub mod interleave;
pub mod packed;
pub mod shape;
pub mod sphere;
pub mod sphere_mesh;
pub mod storage;
pub mod vertex_format;

pub use error::MeshError;
pub use geometry::GeometryBuffer;
pub use interleave::{deinterleave, interleave, interleave_into};
pub use packed::{FLOATS_PER_VERTEX, SphereVertex};
pub use shape::{MIN_SECTOR_COUNT, MIN_STACK_COUNT, ShapeParameters};
pub use sphere::{face_normal, generate_sphere};
pub use sphere_mesh::{RebuildPolicy, SphereMesh};
pub use storage::{HostStorage, MeshStorage};
pub use vertex_format::{SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT, sphere_vertex_buffer_layout};
