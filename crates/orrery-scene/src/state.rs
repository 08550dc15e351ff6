//! Per-session scene state: bodies, camera, timing, and view toggles.
//!
//! One [`SceneState`] is built at startup, mutated once per frame through
//! [`SceneState::advance`], and dropped at shutdown, releasing every mesh's
//! storage.

use std::collections::HashSet;

use glam::{Vec2, Vec3};
use orrery_config::{BodyConfig, Config, CullModeSetting, SceneConfig};
use orrery_mesh::{HostStorage, MeshStorage, RebuildPolicy, SphereMesh};
use orrery_query::Ray;
use tracing::{info, trace, warn};

use crate::body::{Body, hit_distance, orbit_ring, update_body};
use crate::camera::FlyCamera;
use crate::error::SceneError;
use crate::frame_timer::FrameTimer;

/// Rendering and simulation switches.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewToggles {
    pub wireframe: bool,
    pub cull_mode: CullModeSetting,
    pub show_orbits: bool,
    pub show_labels: bool,
    pub simulation_running: bool,
    /// Simulation seconds per real second.
    pub time_scale: f32,
    pub orbit_segments: u32,
}

impl ViewToggles {
    pub fn toggle_cull_mode(&mut self) {
        self.cull_mode = match self.cull_mode {
            CullModeSetting::Back => CullModeSetting::Front,
            CullModeSetting::Front => CullModeSetting::Back,
        };
    }
}

impl From<&SceneConfig> for ViewToggles {
    fn from(config: &SceneConfig) -> Self {
        Self {
            wireframe: config.wireframe,
            cull_mode: config.cull_mode,
            show_orbits: config.show_orbits,
            show_labels: config.show_labels,
            simulation_running: config.simulation_running,
            time_scale: config.time_scale,
            orbit_segments: config.orbit_segments,
        }
    }
}

/// The nearest body under a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    /// Index into [`SceneState::bodies`].
    pub index: usize,
    /// Distance along the ray to the body's surface.
    pub distance: f32,
}

pub struct SceneState {
    pub camera: FlyCamera,
    pub timer: FrameTimer,
    pub view: ViewToggles,
    bodies: Vec<Body>,
    focus: Option<usize>,
    policy: RebuildPolicy,
    simulation_time: f64,
}

impl SceneState {
    /// Build every configured body, asking `storage_for` for each mesh's storage.
    pub fn from_config<F>(config: &Config, mut storage_for: F) -> Result<Self, SceneError>
    where
        F: FnMut(&BodyConfig) -> Box<dyn MeshStorage>,
    {
        let policy = if config.scene.deferred_rebuild {
            RebuildPolicy::Deferred
        } else {
            RebuildPolicy::Immediate
        };

        let mut names = HashSet::new();
        let mut bodies = Vec::with_capacity(config.bodies.len());
        for body_config in &config.bodies {
            if !names.insert(body_config.name.as_str()) {
                return Err(SceneError::DuplicateBody(body_config.name.clone()));
            }
            bodies.push(Body::from_config(
                body_config,
                policy,
                storage_for(body_config),
            )?);
        }

        let focus = bodies.iter().position(|b| b.name == config.scene.focus);
        if focus.is_none() {
            warn!(focus = %config.scene.focus, "focus body not found; shape controls disabled");
        }

        let triangles: usize = bodies.iter().map(|b| b.mesh.triangle_count()).sum();
        info!(
            bodies = bodies.len(),
            triangles,
            ?policy,
            "scene constructed"
        );

        Ok(Self {
            camera: FlyCamera::from_config(&config.camera),
            timer: FrameTimer::new(),
            view: ViewToggles::from(&config.scene),
            bodies,
            focus,
            policy,
            simulation_time: 0.0,
        })
    }

    /// A scene whose meshes live in [`HostStorage`].
    pub fn headless(config: &Config) -> Result<Self, SceneError> {
        Self::from_config(config, |_| Box::new(HostStorage::new()))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn body_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    /// The body the interactive shape controls edit.
    pub fn focus(&self) -> Option<&Body> {
        self.focus.map(|i| &self.bodies[i])
    }

    pub fn focus_mesh_mut(&mut self) -> Option<&mut SphereMesh> {
        self.focus.map(|i| &mut self.bodies[i].mesh)
    }

    pub fn rebuild_policy(&self) -> RebuildPolicy {
        self.policy
    }

    /// Apply `policy` to every mesh. Switching to immediate flushes pending edits.
    pub fn set_rebuild_policy(&mut self, policy: RebuildPolicy) {
        self.policy = policy;
        for body in &mut self.bodies {
            body.mesh.set_policy(policy);
        }
    }

    /// Sum of every mesh's generation. The difference between two readings is
    /// the number of rebuilds in between, whether they ran in a setter or in
    /// [`advance`](Self::advance).
    pub fn mesh_generations(&self) -> u64 {
        self.bodies.iter().map(|b| b.mesh.generation()).sum()
    }

    /// Simulation seconds elapsed, after time scaling.
    pub fn simulation_time(&self) -> f64 {
        self.simulation_time
    }

    /// Run one frame of `dt` real seconds: record timing, move bodies if the
    /// simulation is running, then reconcile every mesh.
    ///
    /// Returns the number of meshes rebuilt.
    pub fn advance(&mut self, dt: f32) -> usize {
        self.timer.tick(dt);

        if self.view.simulation_running {
            let sim_dt = dt * self.view.time_scale;
            for body in &mut self.bodies {
                update_body(body, sim_dt);
            }
            self.simulation_time += f64::from(sim_dt);
        }

        let mut rebuilt = 0;
        for body in &mut self.bodies {
            if body.mesh.reconcile() {
                trace!(body = %body.name, "reconciled");
                rebuilt += 1;
            }
        }
        rebuilt
    }

    /// Nearest body hit by `ray`.
    pub fn pick_ray(&self, ray: &Ray) -> Option<Pick> {
        self.bodies
            .iter()
            .enumerate()
            .filter_map(|(index, body)| {
                hit_distance(body, ray).map(|distance| Pick { index, distance })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Nearest body under the cursor, given in pixels within `viewport`.
    pub fn pick(&self, cursor: Vec2, viewport: Vec2) -> Option<Pick> {
        let ray = self.camera.cursor_ray(cursor, viewport)?;
        self.pick_ray(&ray)
    }

    /// Orbit ring points for each orbiting planet, keyed by body name.
    /// Empty while orbits are hidden.
    pub fn orbit_rings(&self) -> Result<Vec<(&str, Vec<Vec3>)>, SceneError> {
        if !self.view.show_orbits {
            return Ok(Vec::new());
        }
        let mut rings = Vec::new();
        for body in &self.bodies {
            if let Some(points) = orbit_ring(body, self.view.orbit_segments)? {
                rings.push((body.name.as_str(), points));
            }
        }
        Ok(rings)
    }
}
