//! Registry Validation
//!
//! Detects the inputs that make the generator emit broken C: duplicate
//! shader names, colliding fields inside one struct, names that are not C
//! identifiers, and source paths that cannot sit inside a string literal.
//!
//! Names are never checked against the shader sources themselves; a name
//! with no counterpart in the GLSL still resolves to an invalid handle at
//! runtime.

use rustc_hash::FxHashSet;

use super::spec::{PROGRAM_FIELD, SELECTOR_FIELD, ShaderSpec};
use crate::errors::ValidationIssue;

/// C keywords that can never be used as field or member names.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Bool", "_Complex", "_Imaginary",
];

/// Returns `true` if `name` can be used as a C identifier.
#[must_use]
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !C_KEYWORDS.contains(&name)
}

fn is_c_string_safe(path: &str) -> bool {
    !path.is_empty() && !path.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}

/// Collects every issue of the given specs, in registry order.
pub(crate) fn validate_specs<'a>(specs: impl IntoIterator<Item = &'a ShaderSpec>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut shader_names = FxHashSet::default();
    let mut empty = true;

    for spec in specs {
        empty = false;
        if !shader_names.insert(spec.name()) {
            issues.push(ValidationIssue::DuplicateShader {
                name: spec.name().to_string(),
            });
        }
        validate_spec(spec, &mut issues);
    }

    if empty {
        issues.push(ValidationIssue::EmptyRegistry);
    }

    issues
}

fn validate_spec(spec: &ShaderSpec, issues: &mut Vec<ValidationIssue>) {
    let view = spec.view();
    let shader = view.name;

    let check_identifier = |name: &str, issues: &mut Vec<ValidationIssue>| {
        if !is_c_identifier(name) {
            issues.push(ValidationIssue::InvalidIdentifier {
                shader: shader.to_string(),
                name: name.to_string(),
            });
        }
    };

    check_identifier(shader, issues);

    for path in [view.vertex_source_path, view.fragment_source_path] {
        if !is_c_string_safe(path) {
            issues.push(ValidationIssue::InvalidSourcePath {
                shader: shader.to_string(),
                path: path.to_string(),
            });
        }
    }

    // Top-level struct: program, attributes, uniforms and subroutine groups share one namespace.
    let mut fields = FxHashSet::default();
    fields.insert(PROGRAM_FIELD);
    let top_level = view
        .attributes
        .iter()
        .copied()
        .chain(view.uniforms.iter().copied())
        .chain(view.subroutines.iter().map(|group| group.name.as_str()));

    for name in top_level {
        check_identifier(name, issues);
        if !fields.insert(name) {
            issues.push(ValidationIssue::FieldCollision {
                shader: shader.to_string(),
                field: name.to_string(),
            });
        }
    }

    for group in view.subroutines {
        let mut nested = FxHashSet::default();
        nested.insert(SELECTOR_FIELD);
        for variant in &group.variants {
            check_identifier(variant.as_str(), issues);
            if !nested.insert(variant.as_str()) {
                issues.push(ValidationIssue::FieldCollision {
                    shader: shader.to_string(),
                    field: format!("{}.{variant}", group.name),
                });
            }
        }
    }
}
