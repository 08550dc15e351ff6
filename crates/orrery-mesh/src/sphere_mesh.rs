//! A sphere mesh that rebuilds itself when its shape parameters change.
//!
//! The mesh is either *stable* (geometry matches the current parameters) or
//! *dirty* (the parameters differ from the ones the geometry was built from). With
//! [`RebuildPolicy::Immediate`] the setter rebuilds before returning, so the
//! dirty state is never observable. With [`RebuildPolicy::Deferred`] rebuilds
//! wait for [`SphereMesh::reconcile`], which lets several setters in one frame
//! share a single rebuild.
//!
//! Instances are not safe for concurrent mutation. Rebuild before any reader
//! (such as a draw call) touches the geometry or storage.

use std::fmt;

use tracing::debug;

use crate::error::MeshError;
use crate::geometry::GeometryBuffer;
use crate::packed::SphereVertex;
use crate::shape::ShapeParameters;
use crate::sphere::generate_sphere;
use crate::storage::{HostStorage, MeshStorage};

/// When a parameter change turns into a rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RebuildPolicy {
    /// Rebuild inside the setter that changed the value.
    #[default]
    Immediate,
    /// Mark dirty; rebuild on the next [`SphereMesh::reconcile`].
    Deferred,
}

/// A generated sphere plus the storage that holds its packed copy.
pub struct SphereMesh {
    params: ShapeParameters,
    /// Parameters the current geometry was generated from.
    built: ShapeParameters,
    geometry: GeometryBuffer,
    storage: Box<dyn MeshStorage>,
    policy: RebuildPolicy,
    generation: u64,
    dirty: bool,
}

impl SphereMesh {
    /// Generate a sphere and store it, rebuilding immediately on changes.
    pub fn new(params: ShapeParameters, storage: Box<dyn MeshStorage>) -> Self {
        Self::with_policy(params, storage, RebuildPolicy::Immediate)
    }

    /// Generate a sphere and store it, using `policy` for later changes.
    pub fn with_policy(
        params: ShapeParameters,
        storage: Box<dyn MeshStorage>,
        policy: RebuildPolicy,
    ) -> Self {
        let mut mesh = Self {
            params,
            built: params,
            geometry: GeometryBuffer::new(),
            storage,
            policy,
            generation: 0,
            dirty: true,
        };
        mesh.rebuild();
        mesh
    }

    /// A mesh backed by [`HostStorage`], for use without a GPU.
    pub fn headless(params: ShapeParameters) -> Self {
        Self::new(params, Box::new(HostStorage::new()))
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn policy(&self) -> RebuildPolicy {
        self.policy
    }

    /// Number of rebuilds so far. Starts at 1 after construction and only
    /// moves when a rebuild actually happens.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` while a parameter change is waiting for [`reconcile`](Self::reconcile).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Geometry from the most recent rebuild.
    pub fn geometry(&self) -> &GeometryBuffer {
        &self.geometry
    }

    /// Packed vertex stream, eight floats per vertex.
    pub fn interleaved(&self) -> &[f32] {
        &self.geometry.interleaved
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        self.geometry.vertices()
    }

    pub fn indices(&self) -> &[u32] {
        &self.geometry.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    /// Index count to pass to the draw call.
    pub fn index_count(&self) -> u32 {
        self.geometry.index_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.geometry.triangle_count()
    }

    pub fn storage(&self) -> &dyn MeshStorage {
        self.storage.as_ref()
    }

    /// Switch policy. Going back to [`RebuildPolicy::Immediate`] flushes any
    /// pending change.
    pub fn set_policy(&mut self, policy: RebuildPolicy) {
        self.policy = policy;
        if policy == RebuildPolicy::Immediate {
            self.reconcile();
        }
    }

    /// Replace all parameters at once. Costs at most one rebuild. Setting the
    /// parameters the geometry was built from clears a pending change.
    pub fn set(&mut self, params: ShapeParameters) {
        if params == self.params {
            return;
        }
        self.params = params;
        self.dirty = self.params != self.built;
        if self.dirty && self.policy == RebuildPolicy::Immediate {
            self.rebuild();
        }
    }

    /// Change the radius. Invalid radii are rejected without touching the mesh.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), MeshError> {
        let mut next = self.params;
        next.set_radius(radius)?;
        self.set(next);
        Ok(())
    }

    /// Change the sector count. The value is clamped first, so setting a value
    /// that clamps to the current count is a no-op.
    pub fn set_sector_count(&mut self, sector_count: u32) {
        let mut next = self.params;
        next.set_sector_count(sector_count);
        self.set(next);
    }

    /// Change the stack count, clamped like [`set_sector_count`](Self::set_sector_count).
    pub fn set_stack_count(&mut self, stack_count: u32) {
        let mut next = self.params;
        next.set_stack_count(stack_count);
        self.set(next);
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        let mut next = self.params;
        next.set_smooth(smooth);
        self.set(next);
    }

    /// Rebuild if the parameters differ from the ones the geometry was built
    /// from. Returns whether a rebuild happened.
    pub fn reconcile(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        generate_sphere(&self.params, &mut self.geometry);
        self.built = self.params;
        self.storage
            .store(self.geometry.vertices(), &self.geometry.indices);
        self.generation += 1;
        self.dirty = false;
        debug!(
            radius = self.params.radius(),
            sectors = self.params.sector_count(),
            stacks = self.params.stack_count(),
            smooth = self.params.smooth(),
            vertices = self.geometry.vertex_count(),
            triangles = self.geometry.triangle_count(),
            generation = self.generation,
            "sphere mesh rebuilt"
        );
    }
}

impl Drop for SphereMesh {
    fn drop(&mut self) {
        self.storage.release();
    }
}

impl fmt::Debug for SphereMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SphereMesh")
            .field("params", &self.params)
            .field("policy", &self.policy)
            .field("generation", &self.generation)
            .field("dirty", &self.dirty)
            .field("vertices", &self.geometry.vertex_count())
            .field("indices", &self.geometry.index_count())
            .finish()
    }
}
