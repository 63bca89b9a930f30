//! Shader Registry
//!
//! An ordered, immutable-by-convention list of [`ShaderSpec`]s. Order has no
//! effect on how handles resolve (every lookup is by name) but fixes the
//! byte layout of both generated artifacts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shader_bindgen::registry::Registry;
//! use shader_bindgen::shader::{ShaderDescription, SimpleShaderDescription};
//!
//! let registry = Registry::new()
//!     .with(ShaderDescription::new("solid", "project.vert", "solid.frag")
//!         .with_attributes(["vertex"])
//!         .with_uniforms(["projection", "color"]))
//!     .with(SimpleShaderDescription::new("status", "status.frag"));
//! ```

mod builtin;

pub use builtin::builtin_registry;

use serde::{Deserialize, Serialize};

use crate::errors::{BindgenError, Result};
use crate::shader::ShaderSpec;
use crate::shader::validate::validate_specs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    shaders: Vec<ShaderSpec>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shader, builder style.
    #[must_use]
    pub fn with(mut self, spec: impl Into<ShaderSpec>) -> Self {
        self.shaders.push(spec.into());
        self
    }

    pub fn push(&mut self, spec: impl Into<ShaderSpec>) {
        self.shaders.push(spec.into());
    }

    /// Parses a registry from a JSON array of tagged specs.
    ///
    /// ```json
    /// [
    ///   { "kind": "general", "name": "solid", "vertex_source_path": "project.vert",
    ///     "fragment_source_path": "solid.frag", "attributes": ["vertex"] },
    ///   { "kind": "simple", "name": "status", "fragment_source_path": "status.frag" }
    /// ]
    /// ```
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShaderSpec> {
        self.shaders.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    /// Finds a shader by name (first match).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ShaderSpec> {
        self.shaders.iter().find(|spec| spec.name() == name)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[ShaderSpec] {
        &self.shaders
    }

    /// Checks the registry for inputs that would produce broken C.
    ///
    /// Every issue is logged and returned together in
    /// [`BindgenError::Validation`].
    pub fn validate(&self) -> Result<()> {
        let issues = validate_specs(&self.shaders);
        if issues.is_empty() {
            return Ok(());
        }

        for issue in &issues {
            log::warn!("Shader registry: {issue}");
        }
        Err(BindgenError::Validation(issues))
    }
}

impl FromIterator<ShaderSpec> for Registry {
    fn from_iter<I: IntoIterator<Item = ShaderSpec>>(iter: I) -> Self {
        Self {
            shaders: iter.into_iter().collect(),
        }
    }
}

impl Extend<ShaderSpec> for Registry {
    fn extend<I: IntoIterator<Item = ShaderSpec>>(&mut self, iter: I) {
        self.shaders.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ShaderSpec;
    type IntoIter = std::slice::Iter<'a, ShaderSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.shaders.iter()
    }
}
