//! Concrete hair renderer variants.
//!
//! [`HairRenderCore`] carries everything the variants share — the
//! triangle-indices GPU buffer, the packed primitive lists, the rendering
//! bounds, and the debug overlay — and the variants compose it rather than
//! inherit from it.

use wgpu::util::DeviceExt;

use super::bounds::RenderingBounds;
use super::mesh_builder::RenderPrimitive;
use super::{packing, HairRenderer};
use crate::asset::HairAsset;
use crate::error::StrandError;
use crate::gpu::render_context::RenderContext;
use crate::options::StrandOptions;
use crate::transform::HairTransform;

/// Shared activation/update/teardown behavior for renderer variants.
pub struct HairRenderCore {
    options: StrandOptions,
    transform: HairTransform,
    triangle_indices: Option<wgpu::Buffer>,
    triangle_meshes: Vec<RenderPrimitive>,
    line_meshes: Vec<RenderPrimitive>,
    bounds: Option<RenderingBounds>,
    debug_lines: Vec<[glam::Vec3; 2]>,
    released: bool,
}

impl HairRenderCore {
    /// Inert core; nothing is allocated until activation.
    #[must_use]
    pub fn new(options: StrandOptions) -> Self {
        Self {
            options,
            transform: HairTransform::identity(),
            triangle_indices: None,
            triangle_meshes: Vec::new(),
            line_meshes: Vec::new(),
            bounds: None,
            debug_lines: Vec::new(),
            released: false,
        }
    }

    fn activate(
        &mut self,
        ctx: &RenderContext,
        asset: &HairAsset,
        transform: &HairTransform,
    ) -> Result<(), StrandError> {
        let capacity = self.options.packing.max_vertices_per_primitive;

        self.triangle_meshes = packing::build_triangle_primitives(
            &asset.triangle_indices,
            capacity,
        )?;
        self.line_meshes =
            packing::build_line_primitives(&asset.line_indices, capacity)?;

        self.triangle_indices = Some(ctx.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Hair Triangle Indices"),
                contents: bytemuck::cast_slice(&asset.triangle_indices),
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_DST,
            },
        ));

        self.bounds = Some(RenderingBounds::from_sphere(
            asset.bounding_sphere,
            transform.world_scale,
        ));
        self.transform = *transform;
        self.released = false;

        log::debug!(
            "hair renderer activated: {} triangle primitives, {} line primitives",
            self.triangle_meshes.len(),
            self.line_meshes.len()
        );
        Ok(())
    }

    fn update(&mut self) {
        if self.options.debug.bounding_box {
            if let Some(bounds) = self.bounds {
                self.debug_lines =
                    bounds.wireframe(&self.transform).to_vec();
            }
        } else if !self.debug_lines.is_empty() {
            self.debug_lines.clear();
        }
    }

    fn teardown(&mut self) -> Result<(), StrandError> {
        if self.released {
            log::warn!("hair renderer torn down twice");
            return Err(StrandError::ResourceReleased("hair renderer"));
        }
        if let Some(buffer) = self.triangle_indices.take() {
            buffer.destroy();
        }
        self.triangle_meshes.clear();
        self.line_meshes.clear();
        self.debug_lines.clear();
        self.released = true;
        Ok(())
    }

    /// Packed triangle-topology primitives.
    #[must_use]
    pub fn triangle_meshes(&self) -> &[RenderPrimitive] {
        &self.triangle_meshes
    }

    /// Packed line-topology primitives.
    #[must_use]
    pub fn line_meshes(&self) -> &[RenderPrimitive] {
        &self.line_meshes
    }

    /// World-space rendering bounds, available after activation.
    #[must_use]
    pub fn bounds(&self) -> Option<RenderingBounds> {
        self.bounds
    }

    /// Triangle-indices GPU buffer, available after activation.
    #[must_use]
    pub fn triangle_indices(&self) -> Option<&wgpu::Buffer> {
        self.triangle_indices.as_ref()
    }

    /// World-space debug wireframe segments; empty unless the bounding-box
    /// debug flag is set.
    #[must_use]
    pub fn debug_lines(&self) -> &[[glam::Vec3; 2]] {
        &self.debug_lines
    }
}

/// The standard hair renderer: packed primitives plus bounds, no extra
/// pass state.
pub struct StandardHairRenderer {
    core: HairRenderCore,
}

impl StandardHairRenderer {
    /// Inert renderer with the given options.
    #[must_use]
    pub fn new(options: StrandOptions) -> Self {
        Self {
            core: HairRenderCore::new(options),
        }
    }

    /// Shared core accessor (primitives, bounds, debug overlay).
    #[must_use]
    pub fn core(&self) -> &HairRenderCore {
        &self.core
    }
}

impl HairRenderer for StandardHairRenderer {
    fn activate(
        &mut self,
        ctx: &RenderContext,
        asset: &HairAsset,
        transform: &HairTransform,
    ) -> Result<(), StrandError> {
        self.core.activate(ctx, asset, transform)
    }

    fn update(&mut self, _dt: f32) {
        self.core.update();
    }

    fn teardown(&mut self) -> Result<(), StrandError> {
        self.core.teardown()
    }
}

/// Shadow-pass material parameters. Shader authoring is out of scope;
/// these feed the host's shadow pipeline setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSettings {
    /// Depth bias applied during the shadow pass.
    pub depth_bias: f32,
    /// Strand opacity in the shadow map.
    pub opacity: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            depth_bias: 1e-3,
            opacity: 1.0,
        }
    }
}

/// Shadow-pass hair renderer: the same core geometry with shadow material
/// settings alongside.
pub struct ShadowHairRenderer {
    core: HairRenderCore,
    shadow: ShadowSettings,
}

impl ShadowHairRenderer {
    /// Inert renderer with the given options and shadow settings.
    #[must_use]
    pub fn new(options: StrandOptions, shadow: ShadowSettings) -> Self {
        Self {
            core: HairRenderCore::new(options),
            shadow,
        }
    }

    /// Shared core accessor (primitives, bounds, debug overlay).
    #[must_use]
    pub fn core(&self) -> &HairRenderCore {
        &self.core
    }

    /// Shadow material parameters for the host's shadow pipeline.
    #[must_use]
    pub fn shadow_settings(&self) -> ShadowSettings {
        self.shadow
    }
}

impl HairRenderer for ShadowHairRenderer {
    fn activate(
        &mut self,
        ctx: &RenderContext,
        asset: &HairAsset,
        transform: &HairTransform,
    ) -> Result<(), StrandError> {
        self.core.activate(ctx, asset, transform)
    }

    fn update(&mut self, _dt: f32) {
        self.core.update();
    }

    fn teardown(&mut self) -> Result<(), StrandError> {
        self.core.teardown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_teardown_names_the_renderer() {
        let mut core = HairRenderCore::new(StrandOptions::default());
        // Never activated: first teardown is a clean no-op.
        core.teardown().unwrap();
        assert!(matches!(
            core.teardown(),
            Err(StrandError::ResourceReleased("hair renderer"))
        ));
    }
}
