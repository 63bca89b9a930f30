//! Generator Settings
//!
//! Every name that ends up in the generated C is configured here, grouped by
//! what it controls:
//!
//! | Section | Controls |
//! |---------|----------|
//! | [`GraphicsApi`]     | handle type and the GL calls emitted for each capability |
//! | [`ContainerLayout`] | the container struct, its global instance and entry points |
//! | [`OutputSettings`]  | file names, include guard and includes |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shader_bindgen::settings::GeneratorSettings;
//!
//! // Defaults reproduce the production `shaders.gen.h` / `shaders.gen.c` pair.
//! let settings = GeneratorSettings::default();
//!
//! // Validate the registry before generating.
//! let settings = GeneratorSettings {
//!     validate: true,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ---------------------------------------------------------------------------
// GraphicsApi
// ---------------------------------------------------------------------------

/// Names of the graphics-API capabilities the generated code calls.
///
/// The generator never performs these calls itself; it only emits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsApi {
    /// C type of every handle field.
    pub handle_type: String,
    /// `compile(vertex_path, fragment_path) -> program`
    pub compile: String,
    /// `get_attribute(program, name) -> handle`
    pub get_attribute: String,
    /// `get_uniform(program, name) -> handle`
    pub get_uniform: String,
    /// `has_capability(flag) -> bool`
    pub has_capability: String,
    /// Capability flag guarding subroutine resolution.
    pub subroutine_capability: String,
    /// `get_subroutine_uniform(program, stage, name) -> handle`
    pub get_subroutine_uniform: String,
    /// `get_subroutine_index(program, stage, name) -> handle`
    pub get_subroutine_index: String,
    /// Shader stage the subroutines live in.
    pub subroutine_stage: String,
    /// `delete(program)`
    pub delete_program: String,
}

impl Default for GraphicsApi {
    fn default() -> Self {
        Self {
            handle_type: "GLuint".into(),
            compile: "gl_program_vert_frag".into(),
            get_attribute: "glGetAttribLocation".into(),
            get_uniform: "glGetUniformLocation".into(),
            has_capability: "gl_has".into(),
            subroutine_capability: "OPENGL_SUBROUTINES".into(),
            get_subroutine_uniform: "glGetSubroutineUniformLocation".into(),
            get_subroutine_index: "glGetSubroutineIndex".into(),
            subroutine_stage: "GL_FRAGMENT_SHADER".into(),
            delete_program: "glDeleteProgram".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ContainerLayout
// ---------------------------------------------------------------------------

/// Naming of the process-wide container and its entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerLayout {
    pub container_type: String,
    pub instance: String,
    /// Shared struct type used by every simple shader.
    pub simple_shader_type: String,
    pub load_fn: String,
    pub unload_fn: String,
}

impl Default for ContainerLayout {
    fn default() -> Self {
        Self {
            container_type: "Shaders".into(),
            instance: "shaders".into(),
            simple_shader_type: "SimpleShader".into(),
            load_fn: "shaders_load".into(),
            unload_fn: "shaders_unload".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Interface artifact file name.
    pub header_file: String,
    /// Implementation artifact file name.
    pub source_file: String,
    pub include_guard: String,
    /// Header providing the GL types, included by the interface artifact.
    pub graphics_header: String,
    /// Extra headers included by the implementation artifact (after the
    /// generated header).
    pub source_includes: Vec<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            header_file: "shaders.gen.h".into(),
            source_file: "shaders.gen.c".into(),
            include_guard: "SHADERS_GEN_H".into(),
            graphics_header: "glad.h".into(),
            source_includes: vec!["opengl_shader.h".into()],
        }
    }
}

// ---------------------------------------------------------------------------
// GeneratorSettings
// ---------------------------------------------------------------------------

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Generator name written into the provenance line of both artifacts.
    pub provenance: String,
    pub api: GraphicsApi,
    pub layout: ContainerLayout,
    pub output: OutputSettings,
    /// Run [`crate::registry::Registry::validate`] before generating.
    ///
    /// Off by default: an unvalidated registry is rendered as-is.
    pub validate: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            provenance: env!("CARGO_PKG_NAME").into(),
            api: GraphicsApi::default(),
            layout: ContainerLayout::default(),
            output: OutputSettings::default(),
            validate: false,
        }
    }
}

impl GeneratorSettings {
    /// Parses settings from JSON. Missing keys keep their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
