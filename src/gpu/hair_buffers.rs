//! Hair simulation buffer lifecycle: scale-corrected upload and symmetric
//! release.
//!
//! One GPU buffer per logical attribute stream. Scale-sensitive streams are
//! corrected for the host's non-uniform world scale before upload so the
//! simulation operates on world-space-consistent data; everything else is
//! uploaded verbatim. Release is strictly 1:1 with allocation and guarded
//! against double teardown.

use glam::{Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::asset::HairAsset;
use crate::error::StrandError;

/// Componentwise scale correction for vec4 streams. The w component
/// piggybacks on z-scale; the simulation kernels expect that convention.
fn scale_vec4_stream(src: &[Vec4], s: Vec3) -> Vec<Vec4> {
    src.iter()
        .map(|v| Vec4::new(v.x * s.x, v.y * s.y, v.z * s.z, v.w * s.z))
        .collect()
}

/// Scale correction for scalar streams along a single axis.
fn scale_scalar_stream(src: &[f32], axis: f32) -> Vec<f32> {
    src.iter().map(|v| v * axis).collect()
}

fn upload<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
    })
}

/// The per-instance GPU buffer set consumed by the simulation engine.
///
/// `positions`, `positions_prev`, and `initial_positions` are three
/// independent buffers populated from the same corrected vertex array —
/// they start identical and diverge only once simulation steps run. The
/// simulation reads and writes `positions`/`positions_prev` each step and
/// treats every other stream as a read-only per-frame constant.
pub struct HairBufferSet {
    positions: wgpu::Buffer,
    positions_prev: wgpu::Buffer,
    initial_positions: wgpu::Buffer,
    tangents: wgpu::Buffer,
    global_rotations: wgpu::Buffer,
    local_rotations: wgpu::Buffer,
    thickness_coeffs: wgpu::Buffer,
    rest_lengths: wgpu::Buffer,
    strand_type: wgpu::Buffer,
    ref_vectors: wgpu::Buffer,
    follow_root_offset: wgpu::Buffer,
    tex_coords: wgpu::Buffer,
    released: bool,
}

impl HairBufferSet {
    /// Allocate and populate every stream buffer from `asset`, applying
    /// scale correction for `world_scale`.
    ///
    /// Each upload is a single transfer; no CPU-side copies are retained
    /// past this call.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Configuration`] if the asset fails
    /// validation. No buffers are allocated in that case.
    pub fn new(
        device: &wgpu::Device,
        asset: &HairAsset,
        world_scale: Vec3,
    ) -> Result<Self, StrandError> {
        asset.validate()?;

        let vertices = scale_vec4_stream(&asset.vertices, world_scale);
        let ref_vectors = scale_vec4_stream(&asset.ref_vectors, world_scale);
        let follow_root_offset =
            scale_vec4_stream(&asset.follow_root_offset, world_scale);
        let rest_lengths =
            scale_scalar_stream(&asset.rest_lengths, world_scale.y);
        let thickness_coeffs =
            scale_scalar_stream(&asset.thickness_coeffs, world_scale.x);

        let set = Self {
            positions: upload(device, "Hair Vertex Positions", &vertices),
            positions_prev: upload(
                device,
                "Hair Vertex Positions Prev",
                &vertices,
            ),
            initial_positions: upload(
                device,
                "Initial Hair Positions",
                &vertices,
            ),
            tangents: upload(device, "Hair Vertex Tangents", &asset.tangents),
            global_rotations: upload(
                device,
                "Hair Global Rotations",
                &asset.global_rotations,
            ),
            local_rotations: upload(
                device,
                "Hair Local Rotations",
                &asset.local_rotations,
            ),
            thickness_coeffs: upload(
                device,
                "Hair Thickness Coeffs",
                &thickness_coeffs,
            ),
            rest_lengths: upload(device, "Hair Rest Lengths", &rest_lengths),
            strand_type: upload(device, "Hair Strand Type", &asset.strand_type),
            ref_vectors: upload(device, "Hair Ref Vectors", &ref_vectors),
            follow_root_offset: upload(
                device,
                "Follow Hair Root Offset",
                &follow_root_offset,
            ),
            tex_coords: upload(device, "Hair Tex Coords", &asset.tex_coords),
            released: false,
        };

        log::debug!(
            "uploaded hair buffer set: {} vertices, {} strands typed",
            asset.vertex_count(),
            asset.strand_type.len()
        );

        Ok(set)
    }

    /// Destroy every buffer this set allocated, exactly once.
    ///
    /// # Errors
    ///
    /// A second call is a contract violation and returns
    /// [`StrandError::ResourceReleased`] without touching any buffer.
    pub fn release(&mut self) -> Result<(), StrandError> {
        if self.released {
            log::warn!("hair buffer set released twice");
            return Err(StrandError::ResourceReleased("hair buffer set"));
        }

        self.positions.destroy();
        self.positions_prev.destroy();
        self.initial_positions.destroy();

        self.tangents.destroy();
        self.global_rotations.destroy();
        self.local_rotations.destroy();

        self.thickness_coeffs.destroy();
        self.rest_lengths.destroy();
        self.strand_type.destroy();
        self.ref_vectors.destroy();
        self.follow_root_offset.destroy();
        self.tex_coords.destroy();

        self.released = true;
        Ok(())
    }

    /// Whether [`release`](Self::release) has already run.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Current vertex positions (read-write for the simulation).
    #[must_use]
    pub fn positions(&self) -> &wgpu::Buffer {
        &self.positions
    }

    /// Previous-step vertex positions (read-write for the simulation).
    #[must_use]
    pub fn positions_prev(&self) -> &wgpu::Buffer {
        &self.positions_prev
    }

    /// Rest-pose position snapshot.
    #[must_use]
    pub fn initial_positions(&self) -> &wgpu::Buffer {
        &self.initial_positions
    }

    /// Per-vertex tangents.
    #[must_use]
    pub fn tangents(&self) -> &wgpu::Buffer {
        &self.tangents
    }

    /// Per-vertex global frame rotations.
    #[must_use]
    pub fn global_rotations(&self) -> &wgpu::Buffer {
        &self.global_rotations
    }

    /// Per-vertex local frame rotations.
    #[must_use]
    pub fn local_rotations(&self) -> &wgpu::Buffer {
        &self.local_rotations
    }

    /// Per-vertex thickness coefficients.
    #[must_use]
    pub fn thickness_coeffs(&self) -> &wgpu::Buffer {
        &self.thickness_coeffs
    }

    /// Per-vertex rest lengths.
    #[must_use]
    pub fn rest_lengths(&self) -> &wgpu::Buffer {
        &self.rest_lengths
    }

    /// Per-strand type tags.
    #[must_use]
    pub fn strand_type(&self) -> &wgpu::Buffer {
        &self.strand_type
    }

    /// Per-vertex reference vectors.
    #[must_use]
    pub fn ref_vectors(&self) -> &wgpu::Buffer {
        &self.ref_vectors
    }

    /// Per-strand follow-hair root offsets.
    #[must_use]
    pub fn follow_root_offset(&self) -> &wgpu::Buffer {
        &self.follow_root_offset
    }

    /// Per-strand texture coordinates.
    #[must_use]
    pub fn tex_coords(&self) -> &wgpu::Buffer {
        &self.tex_coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::render_context::RenderContext;

    fn test_asset() -> HairAsset {
        HairAsset {
            vertices: vec![
                Vec4::new(1.0, 2.0, 3.0, 4.0),
                Vec4::new(-1.0, 0.5, 2.0, 1.0),
            ],
            line_indices: vec![0, 1],
            triangle_indices: vec![0, 1, 0, 0, 1, 1],
            rest_lengths: vec![1.0, 2.0],
            tangents: vec![Vec4::Y; 2],
            global_rotations: vec![Vec4::W; 2],
            local_rotations: vec![Vec4::W; 2],
            strand_type: vec![0],
            ref_vectors: vec![Vec4::X; 2],
            follow_root_offset: vec![Vec4::ZERO; 1],
            thickness_coeffs: vec![0.5, 0.25],
            tex_coords: vec![Vec4::ZERO; 1],
            ..HairAsset::default()
        }
    }

    #[test]
    fn identity_scale_is_passthrough() {
        let src = vec![Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(5.0, 6.0, 7.0, 8.0)];
        assert_eq!(scale_vec4_stream(&src, Vec3::ONE), src);
        let scalars = vec![0.5, 1.5];
        assert_eq!(scale_scalar_stream(&scalars, 1.0), scalars);
    }

    #[test]
    fn non_uniform_scale_corrects_each_axis() {
        let src = vec![Vec4::new(1.0, 1.0, 1.0, 1.0)];
        let out = scale_vec4_stream(&src, Vec3::new(2.0, 3.0, 4.0));
        // w piggybacks on z-scale.
        assert_eq!(out[0], Vec4::new(2.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn scalar_streams_scale_along_one_axis() {
        assert_eq!(scale_scalar_stream(&[1.0, 2.0], 3.0), vec![3.0, 6.0]);
    }

    fn request_context() -> Option<RenderContext> {
        pollster::block_on(RenderContext::new()).ok()
    }

    #[test]
    fn release_is_symmetric_and_guarded() {
        let _ = env_logger::builder().is_test(true).try_init();
        // Skip when the machine has no usable GPU adapter.
        let Some(ctx) = request_context() else {
            return;
        };
        let mut set =
            match HairBufferSet::new(&ctx.device, &test_asset(), Vec3::ONE) {
                Ok(set) => set,
                Err(e) => panic!("buffer set creation failed: {e}"),
            };
        assert!(!set.is_released());
        assert!(set.release().is_ok());
        assert!(set.is_released());
        assert!(matches!(
            set.release(),
            Err(StrandError::ResourceReleased(_))
        ));
    }

    #[test]
    fn malformed_asset_allocates_nothing() {
        let Some(ctx) = request_context() else {
            return;
        };
        let mut asset = test_asset();
        asset.line_indices.push(7);
        assert!(matches!(
            HairBufferSet::new(&ctx.device, &asset, Vec3::ONE),
            Err(StrandError::Configuration(_))
        ));
    }
}
