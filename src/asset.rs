//! Static hair asset data model.
//!
//! A [`HairAsset`] is externally supplied (the importer and its on-disk
//! serialization are out of scope) and immutable for the lifetime of a
//! session. Vertices are grouped implicitly into strands by `line_indices`.

use glam::{Vec3, Vec4};

use crate::error::StrandError;

/// Local-space bounding sphere supplied by the asset importer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center in asset space.
    pub center: Vec3,
    /// Sphere radius in asset space.
    pub radius: f32,
}

/// Immutable strand-hair asset: vertex positions, strand topology, and the
/// per-vertex / per-strand auxiliary streams the simulation consumes.
#[derive(Clone, Debug, Default)]
pub struct HairAsset {
    /// Asset-space vertex positions. The w component carries per-vertex
    /// data that piggybacks on z-scale during correction.
    pub vertices: Vec<Vec4>,
    /// Indices into `vertices`, consumed in pairs to define line segments.
    pub line_indices: Vec<u32>,
    /// Triangle-strip expansion topology, consumed in strides of 6 (one
    /// quad-expansion unit per hair segment). A trailing partial stride is
    /// tolerated and dropped during packing.
    pub triangle_indices: Vec<u32>,
    /// Per-vertex rest length of the segment rooted at each vertex.
    pub rest_lengths: Vec<f32>,
    /// Per-vertex tangents.
    pub tangents: Vec<Vec4>,
    /// Per-vertex global frame rotations (quaternions as vec4).
    pub global_rotations: Vec<Vec4>,
    /// Per-vertex local frame rotations (quaternions as vec4).
    pub local_rotations: Vec<Vec4>,
    /// Per-strand type tags.
    pub strand_type: Vec<i32>,
    /// Per-vertex reference vectors in the local frame.
    pub ref_vectors: Vec<Vec4>,
    /// Per-strand root offsets for follow hairs.
    pub follow_root_offset: Vec<Vec4>,
    /// Per-vertex thickness coefficients.
    pub thickness_coeffs: Vec<f32>,
    /// Per-strand texture coordinates.
    pub tex_coords: Vec<Vec4>,
    /// Local-space bounding sphere used once for rendering bounds.
    pub bounding_sphere: BoundingSphere,
}

impl HairAsset {
    /// Check the asset's structural invariants: every topology index in
    /// bounds of `vertices`, and per-vertex auxiliary streams
    /// length-matched to it.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Configuration`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<(), StrandError> {
        if self.vertices.is_empty() {
            return Err(StrandError::Configuration(
                "asset has no vertices".to_owned(),
            ));
        }
        let n = self.vertices.len() as u32;
        if let Some(&bad) =
            self.line_indices.iter().find(|&&i| i >= n)
        {
            return Err(StrandError::Configuration(format!(
                "line index {bad} out of bounds ({n} vertices)"
            )));
        }
        if let Some(&bad) =
            self.triangle_indices.iter().find(|&&i| i >= n)
        {
            return Err(StrandError::Configuration(format!(
                "triangle index {bad} out of bounds ({n} vertices)"
            )));
        }
        for (name, len) in [
            ("rest_lengths", self.rest_lengths.len()),
            ("tangents", self.tangents.len()),
            ("global_rotations", self.global_rotations.len()),
            ("local_rotations", self.local_rotations.len()),
            ("ref_vectors", self.ref_vectors.len()),
            ("thickness_coeffs", self.thickness_coeffs.len()),
        ] {
            if len != self.vertices.len() {
                return Err(StrandError::Configuration(format!(
                    "{name} has {len} entries for {n} vertices"
                )));
            }
        }
        Ok(())
    }

    /// Number of vertices in the asset.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_asset() -> HairAsset {
        HairAsset {
            vertices: vec![Vec4::ZERO; 4],
            line_indices: vec![0, 1, 1, 2, 2, 3],
            triangle_indices: vec![0, 1, 2, 2, 1, 3],
            rest_lengths: vec![1.0; 4],
            tangents: vec![Vec4::Y; 4],
            global_rotations: vec![Vec4::W; 4],
            local_rotations: vec![Vec4::W; 4],
            ref_vectors: vec![Vec4::X; 4],
            thickness_coeffs: vec![1.0; 4],
            ..HairAsset::default()
        }
    }

    #[test]
    fn minimal_asset_validates() {
        assert!(minimal_asset().validate().is_ok());
    }

    #[test]
    fn empty_asset_is_rejected() {
        let asset = HairAsset::default();
        assert!(matches!(
            asset.validate(),
            Err(StrandError::Configuration(_))
        ));
    }

    #[test]
    fn out_of_bounds_line_index_is_rejected() {
        let mut asset = minimal_asset();
        asset.line_indices.push(4);
        assert!(matches!(
            asset.validate(),
            Err(StrandError::Configuration(_))
        ));
    }

    #[test]
    fn out_of_bounds_triangle_index_is_rejected() {
        let mut asset = minimal_asset();
        asset.triangle_indices[0] = 99;
        assert!(matches!(
            asset.validate(),
            Err(StrandError::Configuration(_))
        ));
    }

    #[test]
    fn mismatched_per_vertex_stream_is_rejected() {
        let mut asset = minimal_asset();
        asset.rest_lengths.pop();
        assert!(matches!(
            asset.validate(),
            Err(StrandError::Configuration(_))
        ));
    }

    #[test]
    fn every_per_vertex_stream_is_length_checked() {
        let truncate: [fn(&mut HairAsset); 6] = [
            |a| a.rest_lengths.truncate(2),
            |a| a.tangents.truncate(2),
            |a| a.global_rotations.truncate(2),
            |a| a.local_rotations.truncate(2),
            |a| a.ref_vectors.truncate(1),
            |a| a.thickness_coeffs.truncate(2),
        ];
        for mutate in truncate {
            let mut asset = minimal_asset();
            mutate(&mut asset);
            assert!(matches!(
                asset.validate(),
                Err(StrandError::Configuration(_))
            ));
        }
    }
}
