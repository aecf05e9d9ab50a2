//! Renderable-geometry subsystems for strand hair.
//!
//! Contains the capacity-bounded mesh builder, the procedural packer that
//! turns strand index streams into index-encoded primitives, rendering
//! bounds, and the concrete renderer variants.

/// World-space rendering bounds and debug wireframe.
pub mod bounds;
/// Concrete hair renderer variants (standard, shadow pass).
pub mod hair;
/// Capacity-bounded accumulation of renderable primitives.
pub mod mesh_builder;
/// Procedural packing of strand index streams.
pub mod packing;

use crate::asset::HairAsset;
use crate::error::StrandError;
use crate::gpu::render_context::RenderContext;
use crate::transform::HairTransform;

/// Lifecycle capability implemented by every hair renderer variant.
///
/// Variants share behavior by composing [`hair::HairRenderCore`] rather
/// than subclassing; this trait is the seam the host drives them through.
pub trait HairRenderer {
    /// Build GPU-side index data and packed primitives for `asset` placed
    /// at `transform`. The instance's buffer set must be populated first.
    ///
    /// # Errors
    ///
    /// Propagates packing capacity violations; see
    /// [`StrandError::Capacity`].
    fn activate(
        &mut self,
        ctx: &RenderContext,
        asset: &HairAsset,
        transform: &HairTransform,
    ) -> Result<(), StrandError>;

    /// Advance per-frame state. Only the debug overlay refreshes here;
    /// packed geometry is built once at activation.
    fn update(&mut self, dt: f32);

    /// Release GPU resources, exactly once.
    ///
    /// # Errors
    ///
    /// A second call returns [`StrandError::ResourceReleased`].
    fn teardown(&mut self) -> Result<(), StrandError>;
}
