//! Shader Specs and Fragment Rendering
//!
//! [`ShaderSpec`] is the registry entry type. Each spec renders two fragments:
//!
//! - the **interface fragment**: the container member declaring every handle
//!   field (`render_interface_fragment`)
//! - the **binding fragment**: the load-routine statements resolving those
//!   fields through the graphics API (`render_binding_fragment`)
//!
//! Both walk the fields in the same order (program, attributes, uniforms,
//! then each subroutine group as selector followed by variants), which is
//! what [`ShaderSpec::field_paths`] reports.

use std::iter;

use serde::{Deserialize, Serialize};

use super::description::{
    SIMPLE_ATTRIBUTES, SIMPLE_UNIFORMS, SIMPLE_VERTEX_SOURCE, ShaderDescription,
    SimpleShaderDescription, SubroutineGroup,
};
use crate::settings::{GeneratorSettings, GraphicsApi};

/// Lazily rendered lines of C, without line terminators.
pub type Lines<'a> = Box<dyn Iterator<Item = String> + 'a>;

const MEMBER_INDENT: &str = "   ";
const FIELD_INDENT: &str = "      ";
const NESTED_FIELD_INDENT: &str = "         ";

/// Field holding the compiled program of every shader struct.
pub const PROGRAM_FIELD: &str = "program";
/// Selector field of every subroutine struct.
pub const SELECTOR_FIELD: &str = "uniform";

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShaderSpec {
    General(ShaderDescription),
    Simple(SimpleShaderDescription),
}

impl From<ShaderDescription> for ShaderSpec {
    fn from(desc: ShaderDescription) -> Self {
        Self::General(desc)
    }
}

impl From<SimpleShaderDescription> for ShaderSpec {
    fn from(desc: SimpleShaderDescription) -> Self {
        Self::Simple(desc)
    }
}

impl ShaderSpec {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::General(desc) => &desc.name,
            Self::Simple(desc) => &desc.name,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    /// Borrowed view with the simple-shader shape filled in.
    pub(crate) fn view(&self) -> ShaderView<'_> {
        match self {
            Self::General(desc) => ShaderView {
                name: &desc.name,
                vertex_source_path: &desc.vertex_source_path,
                fragment_source_path: &desc.fragment_source_path,
                attributes: desc.attributes.iter().map(String::as_str).collect(),
                uniforms: desc.uniforms.iter().map(String::as_str).collect(),
                subroutines: &desc.subroutines,
            },
            Self::Simple(desc) => ShaderView {
                name: &desc.name,
                vertex_source_path: SIMPLE_VERTEX_SOURCE,
                fragment_source_path: &desc.fragment_source_path,
                attributes: SIMPLE_ATTRIBUTES.to_vec(),
                uniforms: SIMPLE_UNIFORMS.to_vec(),
                subroutines: Default::default(),
            },
        }
    }

    /// Declared handle fields as dotted paths, in declaration order.
    #[must_use]
    pub fn field_paths(&self) -> Vec<String> {
        let view = self.view();
        let mut paths = Vec::with_capacity(1 + view.attributes.len() + view.uniforms.len());
        paths.push(PROGRAM_FIELD.to_string());
        paths.extend(view.attributes.iter().map(ToString::to_string));
        paths.extend(view.uniforms.iter().map(ToString::to_string));
        for group in view.subroutines {
            paths.push(format!("{}.{SELECTOR_FIELD}", group.name));
            paths.extend(
                group
                    .variants
                    .iter()
                    .map(|variant| format!("{}.{variant}", group.name)),
            );
        }
        paths
    }

    /// Renders this shader's member of the container struct.
    ///
    /// General shaders declare an inline struct; simple shaders declare a
    /// single member of the shared simple-shader type.
    #[must_use]
    pub fn render_interface_fragment<'a>(&'a self, settings: &'a GeneratorSettings) -> Lines<'a> {
        match self {
            Self::General(desc) => Box::new(interface_lines(desc, &settings.api.handle_type)),
            Self::Simple(desc) => Box::new(iter::once(format!(
                "{MEMBER_INDENT}{} {};",
                settings.layout.simple_shader_type, desc.name
            ))),
        }
    }

    /// Renders the load-routine statements that compile this shader and
    /// resolve every declared field.
    ///
    /// Subroutine statements are wrapped in a single capability check and
    /// omitted entirely when the shader has no subroutine groups.
    #[must_use]
    pub fn render_binding_fragment<'a>(&'a self, settings: &'a GeneratorSettings) -> Lines<'a> {
        let ShaderView {
            name,
            vertex_source_path,
            fragment_source_path,
            attributes,
            uniforms,
            subroutines,
        } = self.view();

        let writer = BindingWriter {
            api: &settings.api,
            instance: &settings.layout.instance,
            shader: name,
        };

        let guarded = (!subroutines.is_empty())
            .then(move || writer.subroutine_block(subroutines))
            .into_iter()
            .flatten();

        Box::new(
            iter::once(writer.compile(vertex_source_path, fragment_source_path))
                .chain(attributes.into_iter().map(move |a| writer.attribute(a)))
                .chain(uniforms.into_iter().map(move |u| writer.uniform(u)))
                .chain(guarded),
        )
    }

    /// Renders the unload-routine statement releasing this shader's program.
    #[must_use]
    pub fn render_release_statement(&self, settings: &GeneratorSettings) -> String {
        format!(
            "{MEMBER_INDENT}{}({}.{}.{PROGRAM_FIELD});",
            settings.api.delete_program,
            settings.layout.instance,
            self.name()
        )
    }
}

pub(crate) struct ShaderView<'a> {
    pub name: &'a str,
    pub vertex_source_path: &'a str,
    pub fragment_source_path: &'a str,
    pub attributes: Vec<&'a str>,
    pub uniforms: Vec<&'a str>,
    pub subroutines: &'a [SubroutineGroup],
}

// ============================================================================
// Interface fragment
// ============================================================================

fn interface_lines<'a>(
    desc: &'a ShaderDescription,
    handle_type: &'a str,
) -> impl Iterator<Item = String> + 'a {
    let field = move |indent: &str, name: &str| format!("{indent}{handle_type} {name};");

    iter::once(format!("{MEMBER_INDENT}struct {{"))
        .chain(iter::once(field(FIELD_INDENT, PROGRAM_FIELD)))
        .chain(
            desc.attributes
                .iter()
                .chain(&desc.uniforms)
                .map(move |name| field(FIELD_INDENT, name.as_str())),
        )
        .chain(desc.subroutines.iter().flat_map(move |group| {
            iter::once(format!("{FIELD_INDENT}struct {{"))
                .chain(iter::once(field(NESTED_FIELD_INDENT, SELECTOR_FIELD)))
                .chain(
                    group
                        .variants
                        .iter()
                        .map(move |variant| field(NESTED_FIELD_INDENT, variant.as_str())),
                )
                .chain(iter::once(format!("{FIELD_INDENT}}} {};", group.name)))
        }))
        .chain(iter::once(format!("{MEMBER_INDENT}}} {};", desc.name)))
}

// ============================================================================
// Binding fragment
// ============================================================================

/// Formats the individual load statements of one shader.
#[derive(Clone, Copy)]
struct BindingWriter<'a> {
    api: &'a GraphicsApi,
    instance: &'a str,
    shader: &'a str,
}

impl<'a> BindingWriter<'a> {
    fn compile(self, vertex_source_path: &str, fragment_source_path: &str) -> String {
        format!(
            "{MEMBER_INDENT}{}.{}.{PROGRAM_FIELD} = {}(\"{vertex_source_path}\", \"{fragment_source_path}\");",
            self.instance, self.shader, self.api.compile
        )
    }

    fn attribute(self, attribute: &str) -> String {
        format!(
            "{MEMBER_INDENT}{instance}.{shader}.{attribute} = {}({instance}.{shader}.{PROGRAM_FIELD}, \"{attribute}\");",
            self.api.get_attribute,
            instance = self.instance,
            shader = self.shader,
        )
    }

    fn uniform(self, uniform: &str) -> String {
        format!(
            "{MEMBER_INDENT}{instance}.{shader}.{uniform} = {}({instance}.{shader}.{PROGRAM_FIELD}, \"{uniform}\");",
            self.api.get_uniform,
            instance = self.instance,
            shader = self.shader,
        )
    }

    fn selector(self, group: &str) -> String {
        format!(
            "{FIELD_INDENT}{instance}.{shader}.{group}.{SELECTOR_FIELD} = {}( {instance}.{shader}.{PROGRAM_FIELD}, {}, \"{group}\" );",
            self.api.get_subroutine_uniform,
            self.api.subroutine_stage,
            instance = self.instance,
            shader = self.shader,
        )
    }

    fn variant(self, group: &str, variant: &str) -> String {
        format!(
            "{FIELD_INDENT}{instance}.{shader}.{group}.{variant} = {}( {instance}.{shader}.{PROGRAM_FIELD}, {}, \"{variant}\" );",
            self.api.get_subroutine_index,
            self.api.subroutine_stage,
            instance = self.instance,
            shader = self.shader,
        )
    }

    fn subroutine_block(self, groups: &'a [SubroutineGroup]) -> impl Iterator<Item = String> + 'a {
        let open = format!(
            "{MEMBER_INDENT}if ({}( {} )) {{",
            self.api.has_capability, self.api.subroutine_capability
        );

        iter::once(open)
            .chain(groups.iter().flat_map(move |group| {
                iter::once(self.selector(&group.name)).chain(
                    group
                        .variants
                        .iter()
                        .map(move |variant| self.variant(&group.name, variant)),
                )
            }))
            .chain(iter::once(format!("{MEMBER_INDENT}}}")))
    }
}
