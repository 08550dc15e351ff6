//! Shape parameters for a UV sphere.

use crate::error::MeshError;

/// Fewest longitude divisions a sphere can have.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Fewest latitude bands a sphere can have.
pub const MIN_STACK_COUNT: u32 = 2;

/// Radius, tessellation counts, and shading mode of a UV sphere.
///
/// Counts below [`MIN_SECTOR_COUNT`] / [`MIN_STACK_COUNT`] are raised to the
/// minimum on every assignment. The radius must be positive and representable
/// as a normal `f32` whose reciprocal is finite, since vertex output is `f32`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParameters {
    radius: f64,
    sector_count: u32,
    stack_count: u32,
    smooth: bool,
}

impl ShapeParameters {
    /// Build a parameter set, clamping the counts and validating the radius.
    pub fn new(
        radius: f64,
        sector_count: u32,
        stack_count: u32,
        smooth: bool,
    ) -> Result<Self, MeshError> {
        Ok(Self {
            radius: validate_radius(radius)?,
            sector_count: sector_count.max(MIN_SECTOR_COUNT),
            stack_count: stack_count.max(MIN_STACK_COUNT),
            smooth,
        })
    }

    /// Distance from the center to every vertex.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Longitude divisions.
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Latitude bands from pole to pole.
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Whether the mesh is shaded with per-vertex normals.
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// Replace the radius. Values that are non-positive, non-finite, or
    /// outside the normal `f32` range are rejected and leave the current
    /// radius untouched.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), MeshError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Replace the sector count, raising it to [`MIN_SECTOR_COUNT`] if needed.
    pub fn set_sector_count(&mut self, sector_count: u32) {
        self.sector_count = sector_count.max(MIN_SECTOR_COUNT);
    }

    /// Replace the stack count, raising it to [`MIN_STACK_COUNT`] if needed.
    pub fn set_stack_count(&mut self, stack_count: u32) {
        self.stack_count = stack_count.max(MIN_STACK_COUNT);
    }

    /// Replace the shading mode.
    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    /// Vertices produced for these parameters: one ring of `sectors + 1` per stack boundary.
    pub fn vertex_count(&self) -> usize {
        (self.sector_count as usize + 1) * (self.stack_count as usize + 1)
    }

    /// Triangles produced: quad strips everywhere except the two polar fans.
    pub fn triangle_count(&self) -> usize {
        2 * self.sector_count as usize * (self.stack_count as usize - 1)
    }

    /// Indices produced: three per triangle.
    pub fn index_count(&self) -> usize {
        self.triangle_count() * 3
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            radius: 1.0,
            sector_count: 36,
            stack_count: 18,
            smooth: true,
        }
    }
}

fn validate_radius(radius: f64) -> Result<f64, MeshError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(MeshError::InvalidParameter {
            name: "radius",
            value: radius,
            reason: "must be finite and greater than zero",
        });
    }
    let single = radius as f32;
    if !single.is_normal() || !(1.0 / single).is_finite() {
        return Err(MeshError::InvalidParameter {
            name: "radius",
            value: radius,
            reason: "must be within the normal f32 range",
        });
    }
    Ok(radius)
}
