//! Centralized runtime options with TOML preset support.
//!
//! All sub-structs use `#[serde(default)]` so partial TOML files (e.g. only
//! overriding `[debug]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StrandError;

/// Default vertex ceiling for a single packed primitive, imposed by the
/// host renderer's mesh format.
pub const DEFAULT_PRIMITIVE_CAPACITY: usize = 65_000;

/// Debug visualization toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DebugOptions {
    /// Draw the 12 edges of the rendering bounds box each frame.
    pub bounding_box: bool,
}

/// Procedural mesh packing parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackingOptions {
    /// Vertex ceiling per packed primitive. Must be at least the packing
    /// stride (6 for triangles, 2 for lines) or activation fails with a
    /// capacity error.
    pub max_vertices_per_primitive: usize,
}

impl Default for PackingOptions {
    fn default() -> Self {
        Self {
            max_vertices_per_primitive: DEFAULT_PRIMITIVE_CAPACITY,
        }
    }
}

/// Top-level options container.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct StrandOptions {
    /// Debug visualization options.
    pub debug: DebugOptions,
    /// Mesh packing options.
    pub packing: PackingOptions,
}

impl StrandOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Io`] or [`StrandError::OptionsParse`].
    pub fn load(path: &Path) -> Result<Self, StrandError> {
        let content = std::fs::read_to_string(path).map_err(StrandError::Io)?;
        toml::from_str(&content)
            .map_err(|e| StrandError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Io`] or [`StrandError::OptionsParse`].
    pub fn save(&self, path: &Path) -> Result<(), StrandError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StrandError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StrandError::Io)?;
        }
        std::fs::write(path, content).map_err(StrandError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = StrandOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: StrandOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_file_uses_defaults_elsewhere() {
        let parsed: StrandOptions =
            toml::from_str("[debug]\nbounding_box = true\n").unwrap();
        assert!(parsed.debug.bounding_box);
        assert_eq!(
            parsed.packing.max_vertices_per_primitive,
            DEFAULT_PRIMITIVE_CAPACITY
        );
    }
}
