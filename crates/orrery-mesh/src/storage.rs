//! Storage seam between mesh generation and wherever the packed data lives.
//!
//! A [`SphereMesh`](crate::SphereMesh) owns exactly one storage and hands it the
//! freshly packed vertices and indices after each rebuild. GPU backends live in
//! the render crate; [`HostStorage`] keeps meshes usable without a device.

use crate::packed::SphereVertex;

/// Destination for a packed mesh.
///
/// Not required to be `Send` or `Sync`: a storage belongs to the thread that
/// owns its mesh.
pub trait MeshStorage {
    /// Replace whatever is stored with `vertices` and `indices`.
    fn store(&mut self, vertices: &[SphereVertex], indices: &[u32]);

    /// Drop the stored contents. A later [`store`](Self::store) must still work.
    fn release(&mut self);

    /// Number of indices available to draw.
    fn index_count(&self) -> u32;
}

/// CPU-side storage that only tracks what it was given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostStorage {
    vertex_count: usize,
    index_count: u32,
    uploads: u64,
    releases: u64,
}

impl HostStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices currently held.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Times [`MeshStorage::store`] has been called.
    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Times [`MeshStorage::release`] has been called.
    pub fn releases(&self) -> u64 {
        self.releases
    }

    /// Bytes the held vertex and index data would occupy on a device.
    pub fn resident_bytes(&self) -> usize {
        self.vertex_count * std::mem::size_of::<SphereVertex>()
            + self.index_count as usize * std::mem::size_of::<u32>()
    }
}

impl MeshStorage for HostStorage {
    fn store(&mut self, vertices: &[SphereVertex], indices: &[u32]) {
        self.vertex_count = vertices.len();
        self.index_count = indices.len() as u32;
        self.uploads += 1;
    }

    fn release(&mut self) {
        self.vertex_count = 0;
        self.index_count = 0;
        self.releases += 1;
    }

    fn index_count(&self) -> u32 {
        self.index_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_then_release() {
        let mut storage = HostStorage::new();
        storage.store(&[SphereVertex::default(); 4], &[0, 1, 2, 2, 3, 0]);
        assert_eq!(storage.vertex_count(), 4);
        assert_eq!(storage.index_count(), 6);
        assert_eq!(storage.resident_bytes(), 4 * 32 + 6 * 4);

        storage.release();
        assert_eq!(storage.index_count(), 0);
        assert_eq!(storage.resident_bytes(), 0);
        assert_eq!(storage.uploads(), 1);
        assert_eq!(storage.releases(), 1);
    }

    #[test]
    fn test_store_replaces_previous_contents() {
        let mut storage = HostStorage::new();
        storage.store(&[SphereVertex::default(); 10], &[0; 30]);
        storage.store(&[SphereVertex::default(); 3], &[0, 1, 2]);
        assert_eq!(storage.vertex_count(), 3);
        assert_eq!(storage.index_count(), 3);
        assert_eq!(storage.uploads(), 2);
    }
}
