//! Scene orchestration for the orrery: bodies on circular orbits, a fly camera
//! with cursor picking, frame timing, and view toggles, all owned by one
//! [`SceneState`].

pub mod body;
pub mod camera;
pub mod error;
pub mod frame_timer;
pub mod state;

pub use body::{Body, BodyKind, Orbit, hit_distance, model_matrix, orbit_radius, orbit_ring, update_body};
pub use camera::{CameraMovement, FlyCamera};
pub use error::SceneError;
pub use frame_timer::{FPS_WINDOW, FrameTimer};
pub use state::{Pick, SceneState, ViewToggles};
