//! Renderable bodies and the free functions that update and query them.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use orrery_config::{BodyConfig, BodyKindSetting};
use orrery_mesh::{MeshStorage, RebuildPolicy, ShapeParameters, SphereMesh};
use orrery_query::{Ray, circle_points};

use crate::error::SceneError;

/// A circular orbit in the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub center: Vec3,
    /// Distance from `center`. Zero pins the body to the center.
    pub radius: f32,
    /// Simulation seconds per revolution. Zero means stationary.
    pub period: f32,
    /// Current angle in radians, from +X towards +Z, kept in `[0, 2π)`.
    pub angle: f32,
}

impl Orbit {
    /// Position on the orbit at the current angle.
    pub fn position(&self) -> Vec3 {
        self.center + Vec3::new(self.angle.cos(), 0.0, self.angle.sin()) * self.radius
    }

    pub fn is_moving(&self) -> bool {
        self.period > 0.0 && self.radius > 0.0
    }

    fn advance(&mut self, dt: f32) {
        if self.period > 0.0 {
            self.angle = (self.angle + TAU * dt / self.period).rem_euclid(TAU);
        }
    }
}

/// What a body is, with the fields only that kind carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyKind {
    /// Fixed light source.
    Sun,
    Planet(Orbit),
}

/// A named sphere placed in the scene.
pub struct Body {
    pub name: String,
    pub position: Vec3,
    pub kind: BodyKind,
    pub mesh: SphereMesh,
}

impl Body {
    /// Build a body and its mesh from config, storing the mesh in `storage`.
    pub fn from_config(
        config: &BodyConfig,
        policy: RebuildPolicy,
        storage: Box<dyn MeshStorage>,
    ) -> Result<Self, SceneError> {
        let params = ShapeParameters::new(
            config.radius,
            config.sector_count,
            config.stack_count,
            config.smooth,
        )
        .map_err(|source| SceneError::Mesh {
            name: config.name.clone(),
            source,
        })?;

        let kind = match config.kind {
            BodyKindSetting::Sun => BodyKind::Sun,
            BodyKindSetting::Planet => {
                if !(config.orbit_radius.is_finite() && config.orbit_radius >= 0.0) {
                    return Err(SceneError::InvalidOrbit {
                        name: config.name.clone(),
                        reason: "orbit radius must be finite and non-negative",
                    });
                }
                if !(config.orbital_period.is_finite() && config.orbital_period >= 0.0) {
                    return Err(SceneError::InvalidOrbit {
                        name: config.name.clone(),
                        reason: "orbital period must be finite and non-negative",
                    });
                }
                BodyKind::Planet(Orbit {
                    center: Vec3::from_array(config.orbit_center),
                    radius: config.orbit_radius,
                    period: config.orbital_period,
                    angle: config.phase_degrees.to_radians().rem_euclid(TAU),
                })
            }
        };

        let position = match kind {
            BodyKind::Sun => Vec3::from_array(config.position),
            BodyKind::Planet(orbit) => orbit.position(),
        };

        Ok(Self {
            name: config.name.clone(),
            position,
            kind,
            mesh: SphereMesh::with_policy(params, storage, policy),
        })
    }

    /// Radius of the body's sphere.
    pub fn radius(&self) -> f32 {
        self.mesh.params().radius() as f32
    }
}

/// Advance a body by `dt` simulation seconds. Suns never move.
pub fn update_body(body: &mut Body, dt: f32) {
    match &mut body.kind {
        BodyKind::Sun => {}
        BodyKind::Planet(orbit) => {
            orbit.advance(dt);
            body.position = orbit.position();
        }
    }
}

/// Model matrix for drawing the body. The radius is baked into the mesh, so
/// this is a pure translation.
pub fn model_matrix(body: &Body) -> Mat4 {
    Mat4::from_translation(body.position)
}

/// Orbit radius of a planet; `0.0` for a sun.
pub fn orbit_radius(body: &Body) -> f32 {
    match body.kind {
        BodyKind::Sun => 0.0,
        BodyKind::Planet(orbit) => orbit.radius,
    }
}

/// Distance along `ray` to the body's surface, if the ray hits it.
pub fn hit_distance(body: &Body, ray: &Ray) -> Option<f32> {
    ray.sphere_distance(body.position, body.radius())
}

/// Closed-loop points tracing the body's orbit, or `None` for suns and
/// bodies pinned to their orbit center.
pub fn orbit_ring(body: &Body, segments: u32) -> Result<Option<Vec<Vec3>>, SceneError> {
    match body.kind {
        BodyKind::Planet(orbit) if orbit.radius > 0.0 => {
            Ok(Some(circle_points(orbit.radius, segments, orbit.center)?))
        }
        _ => Ok(None),
    }
}
