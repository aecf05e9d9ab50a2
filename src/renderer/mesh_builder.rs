//! Capacity-bounded accumulation of renderable primitives.
//!
//! The builder accepts vertex batches and partitions them into primitives
//! of at most `capacity` vertices. Partition boundaries carry no semantic
//! meaning — they exist only to respect the host mesh format's ceiling.

use crate::error::StrandError;

/// Topology tag carried by a packed primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Line-list topology (thin strands).
    Lines,
    /// Triangle-list topology (thick-strand quad expansion).
    Triangles,
}

/// A finalized renderable primitive.
///
/// Positions are index-encoded: the x component carries an integer the
/// shader dereferences against the GPU buffers; normals are a constant +Y
/// placeholder and uvs a constant (1,1) placeholder, both ignored by the
/// shader for this encoding.
#[derive(Clone, Debug)]
pub struct RenderPrimitive {
    /// Topology tag for pipeline selection.
    pub topology: PrimitiveTopology,
    /// Index-encoded vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Placeholder normals.
    pub normals: Vec<[f32; 3]>,
    /// Placeholder texture coordinates.
    pub uvs: Vec<[f32; 2]>,
    /// Primitive-local vertex indices.
    pub indices: Vec<u32>,
}

impl RenderPrimitive {
    /// Number of vertices in this primitive.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Accumulates vertex batches into primitives of bounded size.
pub struct MeshBuilder {
    topology: PrimitiveTopology,
    capacity: usize,
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
    finished: Vec<RenderPrimitive>,
}

impl MeshBuilder {
    /// Builder for primitives of `topology` holding at most `capacity`
    /// vertices each.
    #[must_use]
    pub fn new(topology: PrimitiveTopology, capacity: usize) -> Self {
        Self {
            topology,
            capacity,
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// Vertices the active primitive can still accept.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.positions.len()
    }

    /// Whether the active primitive can accept `count` more vertices.
    #[must_use]
    pub fn has_space(&self, count: usize) -> bool {
        count <= self.remaining()
    }

    /// Append one vertex batch. A batch that does not fit the active
    /// primitive finalizes it and starts a fresh one.
    ///
    /// All four slices must describe the same vertices; a length mismatch
    /// would desynchronize the finished primitive's attribute streams.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Capacity`] if the batch is larger than the
    /// total capacity — no primitive could ever hold it.
    pub fn append(
        &mut self,
        positions: &[[f32; 3]],
        indices: &[u32],
        uvs: &[[f32; 2]],
        normals: &[[f32; 3]],
    ) -> Result<(), StrandError> {
        debug_assert_eq!(positions.len(), indices.len());
        debug_assert_eq!(positions.len(), uvs.len());
        debug_assert_eq!(positions.len(), normals.len());
        if positions.len() > self.capacity {
            return Err(StrandError::Capacity {
                requested: positions.len(),
                capacity: self.capacity,
            });
        }
        if !self.has_space(positions.len()) {
            self.rotate();
        }
        self.positions.extend_from_slice(positions);
        self.indices.extend_from_slice(indices);
        self.uvs.extend_from_slice(uvs);
        self.normals.extend_from_slice(normals);
        Ok(())
    }

    fn rotate(&mut self) {
        if self.positions.is_empty() {
            return;
        }
        self.finished.push(RenderPrimitive {
            topology: self.topology,
            positions: std::mem::take(&mut self.positions),
            normals: std::mem::take(&mut self.normals),
            uvs: std::mem::take(&mut self.uvs),
            indices: std::mem::take(&mut self.indices),
        });
    }

    /// Finalize into the ordered primitive list. Zero appends yield an
    /// empty list.
    #[must_use]
    pub fn finish(mut self) -> Vec<RenderPrimitive> {
        self.rotate();
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: [f32; 3] = [0.0, 1.0, 0.0];
    const UV: [f32; 2] = [1.0, 1.0];

    #[test]
    fn empty_builder_finishes_empty() {
        let builder = MeshBuilder::new(PrimitiveTopology::Lines, 8);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn batches_rotate_at_capacity() {
        let mut builder = MeshBuilder::new(PrimitiveTopology::Triangles, 4);
        for _ in 0..3 {
            builder
                .append(&[[0.0; 3]; 2], &[0, 1], &[UV; 2], &[N; 2])
                .unwrap();
        }
        let primitives = builder.finish();
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[0].vertex_count(), 4);
        assert_eq!(primitives[1].vertex_count(), 2);
    }

    #[test]
    fn oversized_batch_is_a_capacity_error() {
        let mut builder = MeshBuilder::new(PrimitiveTopology::Lines, 4);
        let err = builder
            .append(&[[0.0; 3]; 6], &[0; 6], &[UV; 6], &[N; 6])
            .unwrap_err();
        assert!(matches!(
            err,
            StrandError::Capacity {
                requested: 6,
                capacity: 4
            }
        ));
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn mismatched_batch_lengths_are_rejected() {
        let mut builder = MeshBuilder::new(PrimitiveTopology::Lines, 8);
        let _ = builder.append(&[[0.0; 3]; 2], &[0], &[UV; 2], &[N; 2]);
    }

    #[test]
    fn finished_primitives_keep_topology() {
        let mut builder = MeshBuilder::new(PrimitiveTopology::Lines, 8);
        builder
            .append(&[[0.0; 3]; 2], &[0, 1], &[UV; 2], &[N; 2])
            .unwrap();
        let primitives = builder.finish();
        assert_eq!(primitives[0].topology, PrimitiveTopology::Lines);
    }
}
