//! Markdown pipeline options.
//!
//! Rendering itself is the generator's job; this only declares which
//! plugins the generator should register. Serialized as a plugin name list.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Plugin name the generator maps to its math renderer.
const MATH_PLUGIN: &str = "katex";

/// Markdown pipeline options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Whether math rendering is registered.
    pub math: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { math: true }
    }
}

impl MarkdownOptions {
    /// Plugin names to register, in registration order.
    #[must_use]
    pub fn plugins(&self) -> Vec<&'static str> {
        if self.math { vec![MATH_PLUGIN] } else { Vec::new() }
    }
}

impl Serialize for MarkdownOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("plugins", &self.plugins())?;
        map.end()
    }
}
