//! Shader Descriptions
//!
//! Declarative records describing one GPU program and the named slots the
//! generated code resolves on it.

use serde::{Deserialize, Serialize};

/// Vertex stage shared by every simple shader.
pub const SIMPLE_VERTEX_SOURCE: &str = "project_pos.vert";

/// Attributes of the shared simple-shader shape.
pub const SIMPLE_ATTRIBUTES: &[&str] = &["vertex"];

/// Uniforms of the shared simple-shader shape.
pub const SIMPLE_UNIFORMS: &[&str] = &[
    "projection",
    "color",
    "dimensions",
    "dt",
    "paramf",
    "parami",
    "paramv",
];

/// A subroutine uniform and the routine variants it may select.
///
/// Kept as an ordered list entry rather than a map key so emission order
/// always follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubroutineGroup {
    pub name: String,
    pub variants: Vec<String>,
}

impl SubroutineGroup {
    pub fn new<I, S>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }
}

/// General shader: explicit attribute, uniform and subroutine lists.
///
/// # Example
///
/// ```rust,ignore
/// let trail = ShaderDescription::new("trail", "project_pos.vert", "trail.frag")
///     .with_attributes(["vertex"])
///     .with_uniforms(["projection", "c1", "c2"])
///     .with_subroutine("trail_func", ["trail_default", "trail_pulse"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderDescription {
    /// Container member name and namespacing prefix of every generated call.
    pub name: String,
    pub vertex_source_path: String,
    pub fragment_source_path: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub uniforms: Vec<String>,
    #[serde(default)]
    pub subroutines: Vec<SubroutineGroup>,
}

impl ShaderDescription {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        vertex_source_path: impl Into<String>,
        fragment_source_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            vertex_source_path: vertex_source_path.into(),
            fragment_source_path: fragment_source_path.into(),
            attributes: Vec::new(),
            uniforms: Vec::new(),
            subroutines: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_uniforms<I, S>(mut self, uniforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uniforms.extend(uniforms.into_iter().map(Into::into));
        self
    }

    /// Appends a subroutine group after any already declared.
    #[must_use]
    pub fn with_subroutine<I, S>(mut self, name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subroutines.push(SubroutineGroup::new(name, variants));
        self
    }
}

/// Shader conforming to the shared simple-shader shape.
///
/// Only the name and fragment stage vary; everything else comes from
/// [`SIMPLE_VERTEX_SOURCE`], [`SIMPLE_ATTRIBUTES`] and [`SIMPLE_UNIFORMS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleShaderDescription {
    pub name: String,
    pub fragment_source_path: String,
}

impl SimpleShaderDescription {
    #[must_use]
    pub fn new(name: impl Into<String>, fragment_source_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragment_source_path: fragment_source_path.into(),
        }
    }

    /// The equivalent general description with the shared shape filled in.
    #[must_use]
    pub fn to_description(&self) -> ShaderDescription {
        ShaderDescription::new(
            self.name.clone(),
            SIMPLE_VERTEX_SOURCE,
            self.fragment_source_path.clone(),
        )
        .with_attributes(SIMPLE_ATTRIBUTES.iter().copied())
        .with_uniforms(SIMPLE_UNIFORMS.iter().copied())
    }

    /// Fields of the shared simple-shader struct, in declaration order.
    pub fn shared_fields() -> impl Iterator<Item = &'static str> {
        std::iter::once("program")
            .chain(SIMPLE_ATTRIBUTES.iter().copied())
            .chain(SIMPLE_UNIFORMS.iter().copied())
    }
}
