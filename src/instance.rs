//! Explicit per-instance ownership of hair GPU state.
//!
//! A [`HairInstance`] exclusively owns one buffer set and one renderer —
//! no ambient component lookup. The buffer set is populated before the
//! renderer activates, because both the simulation and the packer depend
//! on scale-corrected, buffer-resident asset data.

use crate::asset::HairAsset;
use crate::error::StrandError;
use crate::gpu::hair_buffers::HairBufferSet;
use crate::gpu::render_context::RenderContext;
use crate::options::StrandOptions;
use crate::renderer::hair::{
    ShadowHairRenderer, ShadowSettings, StandardHairRenderer,
};
use crate::renderer::HairRenderer;
use crate::transform::HairTransform;

/// One hair instance: asset, placement, buffer set, and renderer.
///
/// The asset is optional at construction; activating without one logs a
/// diagnostic and leaves the instance inert (visually absent hair, no
/// crash). All consumers must tolerate an absent buffer set.
pub struct HairInstance<R: HairRenderer> {
    asset: Option<HairAsset>,
    transform: HairTransform,
    buffers: Option<HairBufferSet>,
    renderer: R,
}

impl HairInstance<StandardHairRenderer> {
    /// Instance driving the standard renderer.
    #[must_use]
    pub fn standard(
        asset: Option<HairAsset>,
        transform: HairTransform,
        options: StrandOptions,
    ) -> Self {
        Self {
            asset,
            transform,
            buffers: None,
            renderer: StandardHairRenderer::new(options),
        }
    }
}

impl HairInstance<ShadowHairRenderer> {
    /// Instance driving the shadow-pass renderer.
    #[must_use]
    pub fn shadow(
        asset: Option<HairAsset>,
        transform: HairTransform,
        options: StrandOptions,
        shadow: ShadowSettings,
    ) -> Self {
        Self {
            asset,
            transform,
            buffers: None,
            renderer: ShadowHairRenderer::new(options, shadow),
        }
    }
}

impl<R: HairRenderer> HairInstance<R> {
    /// Populate the buffer set, then activate the renderer.
    ///
    /// A missing or malformed asset is logged and recovered locally: the
    /// instance stays inert and the call returns `Ok`.
    ///
    /// # Errors
    ///
    /// Packing capacity violations propagate; see
    /// [`StrandError::Capacity`].
    pub fn activate(
        &mut self,
        ctx: &RenderContext,
    ) -> Result<(), StrandError> {
        let Some(asset) = &self.asset else {
            log::error!("no hair asset assigned; instance stays inert");
            return Ok(());
        };

        match HairBufferSet::new(
            &ctx.device,
            asset,
            self.transform.world_scale,
        ) {
            Ok(buffers) => self.buffers = Some(buffers),
            Err(e @ StrandError::Configuration(_)) => {
                log::error!("hair asset rejected: {e}");
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        self.renderer.activate(ctx, asset, &self.transform)
    }

    /// Advance per-frame renderer state.
    pub fn update(&mut self, dt: f32) {
        self.renderer.update(dt);
    }

    /// Tear down renderer and buffer set, releasing every buffer exactly
    /// once. A never-activated (inert) instance tears down as a no-op.
    ///
    /// # Errors
    ///
    /// A second teardown returns [`StrandError::ResourceReleased`].
    pub fn teardown(&mut self) -> Result<(), StrandError> {
        self.renderer.teardown()?;
        if let Some(buffers) = self.buffers.as_mut() {
            buffers.release()?;
        }
        Ok(())
    }

    /// Whether activation produced a live buffer set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.buffers.as_ref().is_some_and(|b| !b.is_released())
    }

    /// The simulation-facing buffer set, if the instance is active.
    #[must_use]
    pub fn buffers(&self) -> Option<&HairBufferSet> {
        self.buffers.as_ref()
    }

    /// The renderer variant this instance drives.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Host placement of this instance.
    #[must_use]
    pub fn transform(&self) -> &HairTransform {
        &self.transform
    }
}
