//! Orbit ring polylines in the XZ plane.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::error::QueryError;

/// `segments` points evenly spaced on a circle of `radius` around `offset`,
/// lying in the plane `y = offset.y`.
///
/// Point `i` sits at angle `i * 2π / segments`, measured from +X towards +Z.
/// The first point is not repeated at the end; draw the result as a closed loop.
pub fn circle_points(radius: f32, segments: u32, offset: Vec3) -> Result<Vec<Vec3>, QueryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(QueryError::InvalidParameter {
            name: "radius",
            value: radius as f64,
            reason: "must be finite and greater than zero",
        });
    }
    if segments == 0 {
        return Err(QueryError::InvalidParameter {
            name: "segments",
            value: 0.0,
            reason: "must be at least 1",
        });
    }

    let increment = TAU / segments as f32;
    Ok((0..segments)
        .map(|i| {
            let theta = i as f32 * increment;
            Vec3::new(
                radius * theta.cos() + offset.x,
                offset.y,
                radius * theta.sin() + offset.z,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_four_segments_hit_the_axes() {
        let points = circle_points(5.0, 4, Vec3::ZERO).unwrap();
        assert_eq!(points.len(), 4);
        assert!(approx(points[0], Vec3::new(5.0, 0.0, 0.0)));
        assert!(approx(points[1], Vec3::new(0.0, 0.0, 5.0)));
        assert!(approx(points[2], Vec3::new(-5.0, 0.0, 0.0)));
        assert!(approx(points[3], Vec3::new(0.0, 0.0, -5.0)));
        for p in &points {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 5.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_offset_translates_every_point() {
        let offset = Vec3::new(214.0, 3.0, -7.0);
        let points = circle_points(1.395, 64, offset).unwrap();
        assert_eq!(points.len(), 64);
        for p in &points {
            assert_eq!(p.y, 3.0);
            let flat = Vec3::new(p.x - offset.x, 0.0, p.z - offset.z);
            assert!((flat.length() - 1.395).abs() < 1e-4);
        }
    }

    #[test]
    fn test_no_closing_duplicate() {
        let points = circle_points(2.0, 8, Vec3::ZERO).unwrap();
        assert!(!approx(points[0], points[7]));
        let spacing = (points[1] - points[0]).length();
        let closing = (points[0] - points[7]).length();
        assert!((spacing - closing).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(matches!(
            circle_points(0.0, 8, Vec3::ZERO),
            Err(QueryError::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            circle_points(-1.0, 8, Vec3::ZERO),
            Err(QueryError::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            circle_points(1.0, 0, Vec3::ZERO),
            Err(QueryError::InvalidParameter { name: "segments", .. })
        ));
    }
}
