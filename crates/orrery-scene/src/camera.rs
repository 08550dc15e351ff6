//! Yaw/pitch fly camera with zoom and cursor picking rays.

use glam::{Mat4, Vec2, Vec3};
use orrery_config::CameraConfig;
use orrery_query::Ray;

const PITCH_LIMIT_DEGREES: f32 = 89.0;
const MIN_ZOOM_DEGREES: f32 = 1.0;
const MAX_ZOOM_DEGREES: f32 = 45.0;

/// Keyboard-driven movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// A free-flying perspective camera. Angles are stored in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Heading in degrees; -90 looks down -Z.
    pub yaw: f32,
    /// Elevation in degrees, clamped to ±89.
    pub pitch: f32,
    /// Vertical field of view in degrees, clamped to [1, 45].
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of mouse movement.
    pub mouse_sensitivity: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl FlyCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            yaw: config.yaw_degrees,
            pitch: config
                .pitch_degrees
                .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES),
            zoom: config.fov_degrees.clamp(MIN_ZOOM_DEGREES, MAX_ZOOM_DEGREES),
            near: config.near,
            far: config.far,
            speed: config.speed,
            mouse_sensitivity: config.mouse_sensitivity,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Move along the camera basis for `dt` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => Vec3::Y,
            CameraMovement::Down => Vec3::NEG_Y,
        };
        self.position += offset * velocity;
    }

    /// Rotate by a mouse delta in pixels. Positive `dy` looks up.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch + dy * self.mouse_sensitivity)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.update_vectors();
    }

    /// Scrolling up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM_DEGREES, MAX_ZOOM_DEGREES);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect_ratio, self.near, self.far)
    }

    /// World-space ray from the camera through a cursor position.
    ///
    /// `cursor` is in pixels from the top-left corner of a `viewport` of the
    /// given size. Returns `None` for an empty viewport.
    pub fn cursor_ray(&self, cursor: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ndc_x = 2.0 * cursor.x / viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * cursor.y / viewport.y;
        let half_height = (self.zoom.to_radians() * 0.5).tan();
        let half_width = half_height * viewport.x / viewport.y;

        let direction =
            self.front + self.right * (ndc_x * half_width) + self.up * (ndc_y * half_height);
        Ray::new(self.position, direction)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_default_camera_looks_down_neg_z() {
        let camera = FlyCamera::default();
        assert!(approx(camera.front(), Vec3::NEG_Z));
        assert!(approx(camera.right(), Vec3::X));
        assert!(approx(camera.up(), Vec3::Y));
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(camera.pitch, 89.0);
        camera.process_mouse_movement(0.0, -20_000.0);
        assert_eq!(camera.pitch, -89.0);
        assert!(camera.front().is_normalized());
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom, 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom, 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn test_forward_movement_scales_with_time() {
        let mut camera = FlyCamera::default();
        camera.process_keyboard(CameraMovement::Forward, 0.4);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 2.0)));
        camera.process_keyboard(CameraMovement::Right, 0.4);
        assert!(approx(camera.position, Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn test_yaw_turns_right() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(900.0, 0.0);
        assert!(approx(camera.front(), Vec3::X));
    }

    #[test]
    fn test_center_cursor_ray_is_front() {
        let camera = FlyCamera::default();
        let ray = camera
            .cursor_ray(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0))
            .unwrap();
        assert_eq!(ray.origin, camera.position);
        assert!(approx(ray.direction, Vec3::NEG_Z));
    }

    #[test]
    fn test_corner_ray_matches_projection() {
        let camera = FlyCamera::default();
        let viewport = Vec2::new(1280.0, 720.0);
        let ray = camera.cursor_ray(Vec2::ZERO, viewport).unwrap();

        let clip = camera.projection_matrix(viewport.x / viewport.y)
            * camera.view_matrix()
            * ray.at(10.0).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!((ndc.x + 1.0).abs() < 1e-4, "ndc {ndc}");
        assert!((ndc.y - 1.0).abs() < 1e-4, "ndc {ndc}");
    }

    #[test]
    fn test_empty_viewport_has_no_ray() {
        let camera = FlyCamera::default();
        assert!(camera.cursor_ray(Vec2::ZERO, Vec2::ZERO).is_none());
    }
}
