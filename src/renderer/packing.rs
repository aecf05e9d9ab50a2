//! Procedural packing of strand index streams into renderable primitives.
//!
//! Output vertices carry an index-carrying encoding instead of spatial
//! coordinates: the x component holds the value the shader uses to fetch
//! real data from the GPU buffers. The two packers encode different
//! things on purpose — triangle vertices store the flat position in the
//! index stream (the shader reconstructs the triangle index from it),
//! line vertices store the vertex-buffer index directly.

use super::mesh_builder::{MeshBuilder, PrimitiveTopology, RenderPrimitive};
use crate::error::StrandError;

/// Vertices emitted per quad-expansion unit (one hair segment).
const TRIANGLE_STRIDE: usize = 6;
/// Vertices emitted per line segment.
const LINE_STRIDE: usize = 2;

const PLACEHOLDER_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];
const PLACEHOLDER_UV: [f32; 2] = [1.0, 1.0];

/// Pack the triangle-expansion index stream into triangle-list primitives
/// of at most `capacity` vertices.
///
/// Processes whole strides of 6; a trailing partial stride is dropped.
/// When a primitive fills up, the local index counter restarts at zero
/// with the fresh primitive — the shader-side index expectations depend on
/// this reset-on-overflow policy.
///
/// # Errors
///
/// Returns [`StrandError::Capacity`] if `capacity` is below the stride —
/// the packer could never make progress.
pub fn build_triangle_primitives(
    triangle_indices: &[u32],
    capacity: usize,
) -> Result<Vec<RenderPrimitive>, StrandError> {
    if capacity < TRIANGLE_STRIDE {
        return Err(StrandError::Capacity {
            requested: TRIANGLE_STRIDE,
            capacity,
        });
    }

    let mut builder = MeshBuilder::new(PrimitiveTopology::Triangles, capacity);
    let mut local: u32 = 0;

    // The index values themselves are not encoded here; the shader fetches
    // them from the triangle-indices GPU buffer using the flat stream
    // position carried in x.
    for unit in 0..triangle_indices.len() / TRIANGLE_STRIDE {
        if !builder.has_space(TRIANGLE_STRIDE) {
            local = 0;
        }

        let base = unit * TRIANGLE_STRIDE;
        let mut positions = [[0.0f32; 3]; TRIANGLE_STRIDE];
        let mut indices = [0u32; TRIANGLE_STRIDE];
        for j in 0..TRIANGLE_STRIDE {
            positions[j] = [(base + j) as f32, 0.0, 0.0];
            indices[j] = local + j as u32;
        }

        builder.append(
            &positions,
            &indices,
            &[PLACEHOLDER_UV; TRIANGLE_STRIDE],
            &[PLACEHOLDER_NORMAL; TRIANGLE_STRIDE],
        )?;
        local += TRIANGLE_STRIDE as u32;
    }

    Ok(builder.finish())
}

/// Pack the line index stream into line-list primitives of at most
/// `capacity` vertices.
///
/// Same partitioning discipline as the triangle packer with stride 2;
/// vertex x carries `line_indices[offset]` — a vertex-buffer index, not a
/// stream position.
///
/// # Errors
///
/// Returns [`StrandError::Capacity`] if `capacity` is below the stride.
pub fn build_line_primitives(
    line_indices: &[u32],
    capacity: usize,
) -> Result<Vec<RenderPrimitive>, StrandError> {
    if capacity < LINE_STRIDE {
        return Err(StrandError::Capacity {
            requested: LINE_STRIDE,
            capacity,
        });
    }

    let mut builder = MeshBuilder::new(PrimitiveTopology::Lines, capacity);
    let mut local: u32 = 0;

    for pair in line_indices.chunks_exact(LINE_STRIDE) {
        if !builder.has_space(LINE_STRIDE) {
            local = 0;
        }

        let positions =
            [[pair[0] as f32, 0.0, 0.0], [pair[1] as f32, 0.0, 0.0]];
        let indices = [local, local + 1];

        builder.append(
            &positions,
            &indices,
            &[PLACEHOLDER_UV; LINE_STRIDE],
            &[PLACEHOLDER_NORMAL; LINE_STRIDE],
        )?;
        local += LINE_STRIDE as u32;
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_vertices(primitives: &[RenderPrimitive]) -> usize {
        primitives.iter().map(RenderPrimitive::vertex_count).sum()
    }

    #[test]
    fn empty_streams_pack_to_empty_lists() {
        assert!(build_triangle_primitives(&[], 100).unwrap().is_empty());
        assert!(build_line_primitives(&[], 100).unwrap().is_empty());
    }

    #[test]
    fn triangle_packing_preserves_total_vertex_count() {
        // 4 units of 6 = 24 vertices.
        let stream: Vec<u32> = (0..24).collect();
        let primitives = build_triangle_primitives(&stream, 100).unwrap();
        assert_eq!(total_vertices(&primitives), 24);
        assert!(primitives.iter().all(|p| p.vertex_count() <= 100));
    }

    #[test]
    fn no_primitive_exceeds_a_non_stride_multiple_capacity() {
        // Capacity 10 holds only one unit of 6.
        let stream: Vec<u32> = (0..30).collect();
        let primitives = build_triangle_primitives(&stream, 10).unwrap();
        assert_eq!(primitives.len(), 5);
        assert!(primitives.iter().all(|p| p.vertex_count() <= 10));
        assert_eq!(total_vertices(&primitives), 30);
    }

    #[test]
    fn triangle_x_encodes_flat_stream_position() {
        let stream: Vec<u32> = vec![9; 12];
        let primitives = build_triangle_primitives(&stream, 100).unwrap();
        let xs: Vec<f32> =
            primitives[0].positions.iter().map(|p| p[0]).collect();
        assert_eq!(
            xs,
            (0..12).map(|i| i as f32).collect::<Vec<_>>()
        );
    }

    #[test]
    fn trailing_partial_stride_is_dropped() {
        let stream: Vec<u32> = (0..7).collect();
        let primitives = build_triangle_primitives(&stream, 100).unwrap();
        assert_eq!(total_vertices(&primitives), 6);

        let lines = build_line_primitives(&[0, 1, 1], 100).unwrap();
        assert_eq!(total_vertices(&lines), 2);
    }

    #[test]
    fn capacity_below_stride_is_fatal() {
        assert!(matches!(
            build_triangle_primitives(&[0; 6], 5),
            Err(StrandError::Capacity { .. })
        ));
        assert!(matches!(
            build_line_primitives(&[0, 1], 1),
            Err(StrandError::Capacity { .. })
        ));
    }

    #[test]
    fn two_strand_scenario_splits_eight_and_four() {
        // 2 strands of 4 vertices each; 12 line index entries, capacity 8.
        let line_indices = [0, 1, 1, 2, 2, 3, 4, 5, 5, 6, 6, 7];
        let primitives = build_line_primitives(&line_indices, 8).unwrap();
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[0].vertex_count(), 8);
        assert_eq!(primitives[1].vertex_count(), 4);

        // x encodes vertex identity straight from the line index stream.
        let xs: Vec<f32> = primitives
            .iter()
            .flat_map(|p| p.positions.iter().map(|v| v[0]))
            .collect();
        let expected: Vec<f32> =
            line_indices.iter().map(|&i| i as f32).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn local_indices_restart_with_each_primitive() {
        let line_indices = [0, 1, 1, 2, 2, 3, 4, 5, 5, 6, 6, 7];
        let primitives = build_line_primitives(&line_indices, 8).unwrap();
        assert_eq!(primitives[0].indices, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(primitives[1].indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn line_vertices_carry_placeholder_attributes() {
        let primitives = build_line_primitives(&[0, 1], 8).unwrap();
        assert_eq!(primitives[0].normals, vec![[0.0, 1.0, 0.0]; 2]);
        assert_eq!(primitives[0].uvs, vec![[1.0, 1.0]; 2]);
    }
}
