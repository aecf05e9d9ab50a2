//! World-space rendering bounds and the debug wireframe overlay.

use glam::Vec3;

use crate::asset::BoundingSphere;
use crate::transform::HairTransform;

/// Corner pairs forming the 12 edges of a box: front face, back face, then
/// the four connectors.
const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (3, 7),
    (2, 6),
];

/// Axis-aligned world-space box used for culling, derived once from the
/// asset's local bounding sphere at activation. Not recomputed per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderingBounds {
    /// Box center, world scale applied.
    pub center: Vec3,
    /// Per-axis half extents.
    pub half_extents: Vec3,
}

impl RenderingBounds {
    /// Build bounds from the asset's local bounding sphere: center scaled
    /// componentwise, half-extents `radius` stretched by each scale axis.
    #[must_use]
    pub fn from_sphere(sphere: BoundingSphere, world_scale: Vec3) -> Self {
        Self {
            center: sphere.center * world_scale,
            half_extents: world_scale * sphere.radius,
        }
    }

    /// The 8 box corners. Ordering: front (−z) top-left, top-right,
    /// bottom-left, bottom-right, then the back (+z) four in the same
    /// pattern.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let c = self.center;
        let e = self.half_extents;
        [
            Vec3::new(c.x - e.x, c.y + e.y, c.z - e.z),
            Vec3::new(c.x + e.x, c.y + e.y, c.z - e.z),
            Vec3::new(c.x - e.x, c.y - e.y, c.z - e.z),
            Vec3::new(c.x + e.x, c.y - e.y, c.z - e.z),
            Vec3::new(c.x - e.x, c.y + e.y, c.z + e.z),
            Vec3::new(c.x + e.x, c.y + e.y, c.z + e.z),
            Vec3::new(c.x - e.x, c.y - e.y, c.z + e.z),
            Vec3::new(c.x + e.x, c.y - e.y, c.z + e.z),
        ]
    }

    /// The 12 box edges transformed into world space, ready for the host's
    /// debug line drawer.
    #[must_use]
    pub fn wireframe(&self, transform: &HairTransform) -> [[Vec3; 2]; 12] {
        let corners = self.corners().map(|c| transform.transform_point(c));
        EDGES.map(|(a, b)| [corners[a], corners[b]])
    }
}
