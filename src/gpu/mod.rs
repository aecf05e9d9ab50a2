//! GPU resource management.
//!
//! Provides wgpu device/queue initialization and the hair simulation
//! buffer set with its scale-corrected upload and symmetric release.

/// Hair simulation buffer lifecycle.
pub mod hair_buffers;
/// wgpu device and queue initialization.
pub mod render_context;
