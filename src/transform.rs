//! Host-supplied placement of a hair instance.

use glam::{Mat4, Vec3};

/// Local-to-world placement plus the host's lossy non-uniform world scale.
///
/// The scale travels separately from the matrix because scale correction
/// multiplies asset-space streams componentwise at upload time; the matrix
/// is only used when transforming debug geometry into world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HairTransform {
    /// Full local-to-world matrix.
    pub local_to_world: Mat4,
    /// Non-uniform world scale (the host transform's lossy scale).
    pub world_scale: Vec3,
}

impl HairTransform {
    /// Identity placement with unit scale.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            local_to_world: Mat4::IDENTITY,
            world_scale: Vec3::ONE,
        }
    }

    /// Transform a local-space point into world space.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(p)
    }
}

impl Default for HairTransform {
    fn default() -> Self {
        Self::identity()
    }
}
