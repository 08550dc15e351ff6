//! Analytic ray–sphere tests.
//!
//! Both functions take a unit-length direction and do not normalize it.

use glam::Vec3;

/// A ray with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` if `direction` has no usable length.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        Some(Self {
            origin,
            direction: direction.try_normalize()?,
        })
    }

    /// Ray from `origin` through `target`.
    pub fn towards(origin: Vec3, target: Vec3) -> Option<Self> {
        Self::new(origin, target - origin)
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        ray_intersects_sphere(self.origin, self.direction, center, radius)
    }

    pub fn sphere_distance(&self, center: Vec3, radius: f32) -> Option<f32> {
        ray_sphere_distance(self.origin, self.direction, center, radius)
    }
}

/// Roots `(t0, t1)` of the ray/sphere equation, or `None` if the closest
/// approach lies outside the sphere.
fn sphere_roots(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<(f32, f32)> {
    debug_assert!(
        direction.is_normalized(),
        "ray direction must be unit length, got {direction}"
    );
    let l = center - origin;
    let tca = l.dot(direction);
    let d2 = l.dot(l) - tca * tca;
    let r2 = radius * radius;
    if d2 > r2 {
        return None;
    }
    let thc = (r2 - d2).sqrt();
    Some((tca - thc, tca + thc))
}

/// `true` unless the ray misses the sphere or the sphere lies entirely behind
/// the origin. An origin inside the sphere counts as a hit.
pub fn ray_intersects_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> bool {
    match sphere_roots(origin, direction, center, radius) {
        Some((t0, t1)) => !(t0 < 0.0 && t1 < 0.0),
        None => false,
    }
}

/// Distance along the ray to the first surface hit. Returns `0.0` when the
/// origin is inside the sphere.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let (t0, t1) = sphere_roots(origin, direction, center, radius)?;
    if t1 < 0.0 {
        None
    } else {
        Some(t0.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_toward_sphere_hits() {
        assert!(ray_intersects_sphere(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_sphere_behind_ray_misses() {
        assert!(!ray_intersects_sphere(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_diagonal_ray_aimed_at_center_hits() {
        let origin = Vec3::new(10.0, 10.0, 10.0);
        assert!(ray_intersects_sphere(origin, (-origin).normalize(), Vec3::ZERO, 1.0));
    }

    #[test]
    fn test_ray_passing_beside_sphere_misses() {
        assert!(!ray_intersects_sphere(
            Vec3::new(2.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_grazing_ray_hits() {
        assert!(ray_intersects_sphere(
            Vec3::new(1.0, 0.0, -5.0),
            Vec3::Z,
            Vec3::ZERO,
            1.0
        ));
    }

    #[test]
    fn test_origin_inside_sphere_hits() {
        assert!(ray_intersects_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 1.0));
        assert_eq!(ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::ZERO, 1.0), Some(0.0));
    }

    #[test]
    fn test_distance_to_near_surface() {
        let d = ray_sphere_distance(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, Vec3::ZERO, 1.0).unwrap();
        assert!((d - 4.0).abs() < 1e-5, "distance {d}");
    }

    #[test]
    fn test_distance_none_when_behind() {
        assert_eq!(
            ray_sphere_distance(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z, Vec3::ZERO, 1.0),
            None
        );
    }

    #[test]
    fn test_offset_center() {
        let center = Vec3::new(214.0, 0.0, 0.0);
        let ray = Ray::towards(Vec3::new(0.0, 0.0, 3.0), center).unwrap();
        assert!(ray.intersects_sphere(center, 10.0));
        let d = ray.sphere_distance(center, 10.0).unwrap();
        let expected = (center - ray.origin).length() - 10.0;
        assert!((d - expected).abs() < 1e-2);
        assert!((ray.at(d) - center).length() - 10.0 < 1e-2);
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }
}
