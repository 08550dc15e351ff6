//! Merging separate attribute arrays into one packed vertex stream, and back.

use crate::packed::FLOATS_PER_VERTEX;

/// Pack positions, normals, and texture coordinates into one flat stream of
/// [`FLOATS_PER_VERTEX`] floats per vertex.
///
/// # Panics
///
/// Panics if the arrays do not describe the same number of vertices
/// (`positions.len() == normals.len() == 3 * n`, `tex_coords.len() == 2 * n`).
pub fn interleave(positions: &[f32], normals: &[f32], tex_coords: &[f32]) -> Vec<f32> {
    let mut packed = Vec::new();
    interleave_into(&mut packed, positions, normals, tex_coords);
    packed
}

/// Same as [`interleave`] but writes into `out`, replacing its contents and
/// keeping its allocation.
pub fn interleave_into(out: &mut Vec<f32>, positions: &[f32], normals: &[f32], tex_coords: &[f32]) {
    assert_eq!(
        positions.len() % 3,
        0,
        "position array length {} is not a multiple of 3",
        positions.len()
    );
    let vertex_count = positions.len() / 3;
    assert_eq!(
        normals.len(),
        positions.len(),
        "normal array must match position array"
    );
    assert_eq!(
        tex_coords.len(),
        vertex_count * 2,
        "texture coordinate array must hold 2 floats per vertex"
    );

    out.clear();
    out.reserve(vertex_count * FLOATS_PER_VERTEX);
    for ((p, n), t) in positions
        .chunks_exact(3)
        .zip(normals.chunks_exact(3))
        .zip(tex_coords.chunks_exact(2))
    {
        out.extend_from_slice(p);
        out.extend_from_slice(n);
        out.extend_from_slice(t);
    }
}

/// Split a packed stream back into `(positions, normals, tex_coords)`.
///
/// # Panics
///
/// Panics if `packed.len()` is not a multiple of [`FLOATS_PER_VERTEX`].
pub fn deinterleave(packed: &[f32]) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    assert_eq!(
        packed.len() % FLOATS_PER_VERTEX,
        0,
        "packed length {} is not a multiple of {FLOATS_PER_VERTEX}",
        packed.len()
    );
    let vertex_count = packed.len() / FLOATS_PER_VERTEX;
    let mut positions = Vec::with_capacity(vertex_count * 3);
    let mut normals = Vec::with_capacity(vertex_count * 3);
    let mut tex_coords = Vec::with_capacity(vertex_count * 2);

    for record in packed.chunks_exact(FLOATS_PER_VERTEX) {
        positions.extend_from_slice(&record[0..3]);
        normals.extend_from_slice(&record[3..6]);
        tex_coords.extend_from_slice(&record[6..8]);
    }

    (positions, normals, tex_coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_order_is_position_normal_texcoord() {
        let packed = interleave(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
            &[0.7, 0.8, 0.9, 1.0],
        );
        assert_eq!(
            packed,
            vec![
                1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 0.7, 0.8, //
                4.0, 5.0, 6.0, 0.4, 0.5, 0.6, 0.9, 1.0,
            ]
        );
    }

    #[test]
    fn test_deinterleave_restores_inputs() {
        let positions = [0.0, 1.0, 0.0, -1.0, 0.0, 0.5, 0.25, 0.25, 0.25];
        let normals = [0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        let tex_coords = [1.0, 0.0, 0.5, 0.5, 0.0, 1.0];

        let packed = interleave(&positions, &normals, &tex_coords);
        let (p, n, t) = deinterleave(&packed);
        assert_eq!(p, positions);
        assert_eq!(n, normals);
        assert_eq!(t, tex_coords);
    }

    #[test]
    fn test_interleave_into_replaces_previous_contents() {
        let mut out = vec![9.0; 40];
        interleave_into(&mut out, &[1.0, 1.0, 1.0], &[0.0, 0.0, 1.0], &[0.5, 0.5]);
        assert_eq!(out.len(), FLOATS_PER_VERTEX);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_empty_input_packs_to_empty() {
        assert!(interleave(&[], &[], &[]).is_empty());
    }

    #[test]
    #[should_panic(expected = "texture coordinate array")]
    fn test_missing_tex_coords_fails_fast() {
        interleave(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0], &[]);
    }

    #[test]
    #[should_panic(expected = "normal array")]
    fn test_mismatched_normals_fail_fast() {
        interleave(&[0.0, 0.0, 1.0], &[], &[0.0, 0.0]);
    }
}
