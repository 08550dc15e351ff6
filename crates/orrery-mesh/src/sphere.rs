//! UV-sphere generation.
//!
//! Stacks are latitude bands swept from pole to pole, sectors are longitude
//! divisions. Each ring holds `sector_count + 1` vertices so the texture seam
//! gets its own column. The two polar rows collapse to a single point, so the
//! triangles that would be degenerate there are skipped and each pole becomes a
//! triangle fan without special-casing the pole vertex.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::geometry::GeometryBuffer;
use crate::interleave::interleave_into;
use crate::shape::ShapeParameters;

/// Fill `out` with the sphere described by `params`.
///
/// Previous contents of `out` are discarded. Texture coordinates are emitted for
/// every vertex regardless of the shading mode, so the packed stride is always
/// eight floats.
pub fn generate_sphere(params: &ShapeParameters, out: &mut GeometryBuffer) {
    let radius = params.radius();
    let sectors = params.sector_count();
    let stacks = params.stack_count();

    out.clear();
    out.reserve(params.vertex_count(), params.index_count());

    let length_inv = (1.0 / radius) as f32;
    let sector_step = TAU / sectors as f64;
    let stack_step = PI / stacks as f64;

    for i in 0..=stacks {
        // Sweeps from -π/2 downward; the sign fixes winding and V orientation.
        let stack_angle = -FRAC_PI_2 - i as f64 * stack_step;
        let xy = radius * stack_angle.cos();
        let y = (radius * stack_angle.sin()) as f32;

        for j in 0..=sectors {
            let sector_angle = j as f64 * sector_step;
            let x = (xy * sector_angle.cos()) as f32;
            let z = (xy * sector_angle.sin()) as f32;

            out.push_position(x, y, z);
            out.push_normal(x * length_inv, y * length_inv, z * length_inv);

            let s = 1.0 - j as f32 / sectors as f32;
            let t = i as f32 / stacks as f32;
            out.push_tex_coord(s, t);
        }
    }

    let ring = sectors + 1;
    for i in 0..stacks {
        let mut k1 = i * ring;
        let mut k2 = k1 + ring;

        for _ in 0..sectors {
            if i != 0 {
                out.push_triangle(k1, k2, k1 + 1);
            }
            if i != stacks - 1 {
                out.push_triangle(k1 + 1, k2, k2 + 1);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    interleave_into(
        &mut out.interleaved,
        &out.positions,
        &out.normals,
        &out.tex_coords,
    );
}

/// Unit normal of triangle `(a, b, c)` with counter-clockwise front faces.
///
/// Returns [`Vec3::ZERO`] for degenerate triangles.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}
