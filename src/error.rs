//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the strandfx crate.
#[derive(Debug)]
pub enum StrandError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Missing or malformed hair asset at activation. Recovered locally:
    /// the owning instance logs it and stays inert.
    Configuration(String),
    /// A packing batch exceeds the mesh builder's vertex ceiling. Fatal to
    /// the packer — it cannot make progress — and propagated to the caller.
    Capacity {
        /// Vertex count the batch requires.
        requested: usize,
        /// Ceiling the mesh builder was created with.
        capacity: usize,
    },
    /// Double release or use of a torn-down GPU resource. A programmer
    /// contract violation, guarded at the boundary rather than tolerated.
    ResourceReleased(&'static str),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Configuration(msg) => {
                write!(f, "hair configuration error: {msg}")
            }
            Self::Capacity {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "mesh capacity violation: batch of {requested} vertices \
                     exceeds primitive ceiling of {capacity}"
                )
            }
            Self::ResourceReleased(what) => {
                write!(f, "{what} released twice or used after teardown")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for StrandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for StrandError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for StrandError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
