//! Headless orrery driver.
//!
//! Loads `config.ron`, applies CLI overrides, and builds the scene, storing
//! meshes on the GPU when an adapter is available. It then runs a scripted
//! session: the focus sphere is re-tessellated mid-run, the camera sweeps
//! from the Earth towards the Sun, and the body under the screen centre is
//! picked every frame.
//!
//! Run with `cargo run -p orrery-demo -- --frames 600 --sectors 12 --deferred true`.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use orrery_config::{CliArgs, Config, default_config_dir};
use orrery_mesh::ShapeParameters;
use orrery_render::{GpuMeshStorage, GpuOrbitRing};
use orrery_scene::SceneState;
use tracing::{error, info, warn};

/// Degrees of yaw swept over the whole run: -90 (down -Z) to 0 (towards +X).
const CAMERA_SWEEP_DEGREES: f32 = 90.0;

fn request_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    pollster::block_on(async {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok()?;
        info!(adapter = ?adapter.get_info().name, "using GPU adapter");
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orrery-device"),
                ..Default::default()
            })
            .await
            .ok()
    })
}

/// Upload one ring per orbiting planet.
fn upload_orbit_rings(state: &SceneState, device: &wgpu::Device) -> Vec<GpuOrbitRing> {
    match state.orbit_rings() {
        Ok(rings) => rings
            .iter()
            .map(|(name, points)| GpuOrbitRing::upload(device, name, points))
            .collect(),
        Err(e) => {
            warn!(%e, "orbit rings skipped");
            Vec::new()
        }
    }
}

/// Shape edits a user would make with the sliders, keyed to points in the run.
fn scripted_shape_edit(
    state: &mut SceneState,
    frame: u32,
    frames: u32,
    original: Option<ShapeParameters>,
) {
    let Some(mesh) = state.focus_mesh_mut() else {
        return;
    };
    if frame == frames / 4 {
        let params = *mesh.params();
        mesh.set_sector_count(params.sector_count() / 3);
        mesh.set_stack_count(params.stack_count() / 3);
        info!(frame, "coarsened focus sphere");
    } else if frame == frames / 2 {
        let smooth = mesh.params().smooth();
        mesh.set_smooth(!smooth);
        info!(frame, smooth = !smooth, "toggled shading");
    } else if frame == frames * 3 / 4
        && let Some(params) = original
    {
        mesh.set(params);
        info!(frame, "restored focus sphere");
    }
}

fn run(state: &mut SceneState, args: &CliArgs, config: &Config) {
    let viewport = Vec2::new(config.window.width as f32, config.window.height as f32);
    let center = viewport * 0.5;
    let frames = args.frames;
    let original = state.focus().map(|body| *body.mesh.params());

    let yaw_step = if state.camera.mouse_sensitivity > 0.0 && frames > 0 {
        CAMERA_SWEEP_DEGREES / frames as f32 / state.camera.mouse_sensitivity
    } else {
        0.0
    };

    let mut last_pick: Option<String> = None;
    let start_generations = state.mesh_generations();

    for frame in 0..frames {
        scripted_shape_edit(state, frame, frames, original);
        state.camera.process_mouse_movement(yaw_step, 0.0);

        let rebuilt = state.advance(args.timestep);
        if rebuilt > 0
            && let Some(focus) = state.focus()
        {
            info!(
                frame,
                generation = focus.mesh.generation(),
                vertices = focus.mesh.vertex_count(),
                triangles = focus.mesh.triangle_count(),
                "meshes reconciled"
            );
        }

        let picked = state
            .pick(center, viewport)
            .map(|pick| state.bodies()[pick.index].name.clone());
        if picked != last_pick {
            info!(
                frame,
                body = picked.as_deref().unwrap_or("none"),
                "body under cursor"
            );
            last_pick = picked;
        }

        if config.debug.show_fps
            && frame % 60 == 59
            && let Some(fps) = state.timer.average_fps()
        {
            info!(frame, fps, "frame rate");
        }
    }

    info!(
        frames = state.timer.frame_count(),
        simulation_seconds = state.simulation_time(),
        total_rebuilds = state.mesh_generations() - start_generations,
        "session finished"
    );
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".orrery"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let gpu = request_device();
    let built = match &gpu {
        Some((device, queue)) => SceneState::from_config(&config, |body| {
            Box::new(GpuMeshStorage::new(device, queue, body.name.clone()))
        }),
        None => {
            info!("no GPU adapter, meshes stay on the host");
            SceneState::headless(&config)
        }
    };
    let mut state = match built {
        Ok(state) => state,
        Err(e) => {
            error!(%e, "failed to build scene");
            std::process::exit(1);
        }
    };

    let rings = match &gpu {
        Some((device, _)) => upload_orbit_rings(&state, device),
        None => Vec::new(),
    };
    let ring_indices: u32 = rings.iter().map(|ring| ring.index_count).sum();
    info!(rings = rings.len(), ring_indices, "orbit rings ready");

    run(&mut state, &args, &config);
}
