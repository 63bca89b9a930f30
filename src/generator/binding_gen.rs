//! Shader Binding Generator
//!
//! Walks a [`Registry`] once and renders the two coupled artifacts:
//!
//! - **interface** (`shaders.gen.h`): the shared simple-shader struct, one
//!   container member per shader, the global instance and the two entry points
//! - **implementation** (`shaders.gen.c`): the global instance, the load routine
//!   (one binding fragment per shader, blank line between shaders) and the
//!   unload routine (one release per shader, then a full reset)
//!
//! Per-shader code is rendered in Rust by [`ShaderSpec`]; the templates only
//! lay the fragments out. Given the same registry and settings the output is
//! byte-identical between runs.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_128;

use super::template_manager::{IMPLEMENTATION_TEMPLATE, INTERFACE_TEMPLATE, get_env};
use crate::errors::Result;
use crate::registry::Registry;
use crate::settings::GeneratorSettings;
use crate::shader::SimpleShaderDescription;

/// The two generated texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Interface artifact (C header).
    pub interface: String,
    /// Implementation artifact (C source).
    pub implementation: String,
}

impl Artifacts {
    /// xxh3-128 over both artifacts.
    #[must_use]
    pub fn fingerprint(&self) -> u128 {
        let mut bytes = Vec::with_capacity(self.interface.len() + self.implementation.len() + 1);
        bytes.extend_from_slice(self.interface.as_bytes());
        // Separator keeps ("ab", "c") and ("a", "bc") apart.
        bytes.push(0);
        bytes.extend_from_slice(self.implementation.as_bytes());
        xxh3_128(&bytes)
    }
}

#[derive(Serialize)]
struct InterfaceContext<'a> {
    provenance: &'a str,
    include_guard: &'a str,
    graphics_header: &'a str,
    handle_type: &'a str,
    simple_shader_type: &'a str,
    simple_fields: Vec<&'static str>,
    container_type: &'a str,
    members: Vec<String>,
    instance: &'a str,
    load_fn: &'a str,
    unload_fn: &'a str,
}

#[derive(Serialize)]
struct ImplementationContext<'a> {
    provenance: &'a str,
    header_file: &'a str,
    source_includes: &'a [String],
    container_type: &'a str,
    instance: &'a str,
    load_fn: &'a str,
    unload_fn: &'a str,
    bindings: Vec<Vec<String>>,
    releases: Vec<String>,
}

pub struct ShaderBindingGenerator {
    settings: GeneratorSettings,
}

impl Default for ShaderBindingGenerator {
    fn default() -> Self {
        Self::new(GeneratorSettings::default())
    }
}

impl ShaderBindingGenerator {
    #[must_use]
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Renders both artifacts.
    ///
    /// Validates the registry first when [`GeneratorSettings::validate`] is set.
    pub fn generate(&self, registry: &Registry) -> Result<Artifacts> {
        if self.settings.validate {
            registry.validate()?;
        }

        let artifacts = Artifacts {
            interface: self.generate_interface(registry)?,
            implementation: self.generate_implementation(registry)?,
        };

        log::info!(
            "Generated shader bindings for {} shaders ({} + {} bytes, fingerprint {:032x})",
            registry.len(),
            artifacts.interface.len(),
            artifacts.implementation.len(),
            artifacts.fingerprint()
        );

        Ok(artifacts)
    }

    /// Renders the interface artifact only. Never validates.
    pub fn generate_interface(&self, registry: &Registry) -> Result<String> {
        let settings = &self.settings;

        let members = registry
            .iter()
            .flat_map(|spec| {
                log::debug!("Declaring shader '{}'", spec.name());
                spec.render_interface_fragment(settings)
            })
            .collect();

        let ctx = InterfaceContext {
            provenance: &settings.provenance,
            include_guard: &settings.output.include_guard,
            graphics_header: &settings.output.graphics_header,
            handle_type: &settings.api.handle_type,
            simple_shader_type: &settings.layout.simple_shader_type,
            simple_fields: SimpleShaderDescription::shared_fields().collect(),
            container_type: &settings.layout.container_type,
            members,
            instance: &settings.layout.instance,
            load_fn: &settings.layout.load_fn,
            unload_fn: &settings.layout.unload_fn,
        };

        let template = get_env().get_template(INTERFACE_TEMPLATE)?;
        Ok(template.render(&ctx)?)
    }

    /// Renders the implementation artifact only. Never validates.
    pub fn generate_implementation(&self, registry: &Registry) -> Result<String> {
        let settings = &self.settings;

        let bindings = registry
            .iter()
            .map(|spec| {
                let lines: Vec<String> = spec.render_binding_fragment(settings).collect();
                log::debug!("Binding shader '{}' ({} statements)", spec.name(), lines.len());
                lines
            })
            .collect();

        let releases = registry
            .iter()
            .map(|spec| spec.render_release_statement(settings))
            .collect();

        let ctx = ImplementationContext {
            provenance: &settings.provenance,
            header_file: &settings.output.header_file,
            source_includes: &settings.output.source_includes,
            container_type: &settings.layout.container_type,
            instance: &settings.layout.instance,
            load_fn: &settings.layout.load_fn,
            unload_fn: &settings.layout.unload_fn,
            bindings,
            releases,
        };

        let template = get_env().get_template(IMPLEMENTATION_TEMPLATE)?;
        Ok(template.render(&ctx)?)
    }
}
