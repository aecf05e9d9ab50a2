// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! GPU strand-hair rendering core built on wgpu.
//!
//! Strandfx owns the mapping from a static hair asset (vertex positions,
//! strand topology, per-strand attributes) onto GPU-resident buffers
//! consumed by a simulation/render pipeline, and procedurally builds the
//! renderable line/triangle geometry that visualizes those buffers.
//!
//! # Key entry points
//!
//! - [`instance::HairInstance`] - one hair instance's buffers + geometry,
//!   explicitly owned and driven through activate/update/teardown
//! - [`gpu::hair_buffers::HairBufferSet`] - scale-corrected GPU buffer
//!   lifecycle (allocation, upload, symmetric release)
//! - [`renderer::packing`] - capacity-bounded procedural mesh packing
//! - [`options::StrandOptions`] - runtime configuration (debug overlay,
//!   packing capacity)
//!
//! # Architecture
//!
//! Activation is host-synchronous: the buffer set is populated first
//! (simulation and packing both depend on scale-corrected, buffer-resident
//! asset data), then the renderer packs the strand index streams into
//! primitives that never exceed the host mesh format's vertex ceiling.
//! Packed vertices are index-encoded — the x coordinate carries an integer
//! the shader dereferences against the GPU buffers, not a spatial position.

pub mod asset;
pub mod error;
pub mod gpu;
pub mod instance;
pub mod options;
pub mod renderer;
pub mod transform;
