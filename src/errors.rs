//! Error Types
//!
//! This module defines the error types used throughout the generator.
//!
//! # Overview
//!
//! The main error type [`BindgenError`] covers every failure mode:
//! - Template loading and rendering errors
//! - Settings / registry JSON parsing errors
//! - Writing the generated artifacts to disk
//! - Registry validation (opt-in, see [`crate::shader::validate`])
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, BindgenError>`.
//!
//! ```rust,ignore
//! use shader_bindgen::errors::Result;
//!
//! fn generate() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the generator.
#[derive(Error, Debug)]
pub enum BindgenError {
    // ========================================================================
    // Template Errors
    // ========================================================================
    /// A template could not be loaded or rendered.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error (settings or registry).
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// A generated artifact could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    WriteFailed {
        /// Destination that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// The registry failed validation.
    #[error("Registry validation failed with {} issue(s): {}", .0.len(), join_issues(.0))]
    Validation(Vec<ValidationIssue>),
}

/// A single problem found by [`crate::registry::Registry::validate`].
///
/// None of these stop generation on their own; without validation they
/// produce C that fails to compile or silently drops a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The registry has no shaders, so the container struct would be empty.
    #[error("registry is empty")]
    EmptyRegistry,

    /// Two registry entries share a name (one container member would shadow another).
    #[error("duplicate shader name '{name}'")]
    DuplicateShader {
        /// The repeated shader name
        name: String,
    },

    /// A name that must become a C identifier is not one.
    #[error("'{name}' in shader '{shader}' is not a valid C identifier")]
    InvalidIdentifier {
        /// Shader the name belongs to
        shader: String,
        /// The offending name
        name: String,
    },

    /// Two fields of the same generated struct share a name.
    #[error("field '{field}' is declared more than once in shader '{shader}'")]
    FieldCollision {
        /// Shader the struct belongs to
        shader: String,
        /// Dotted path of the repeated field
        field: String,
    },

    /// A source path cannot be emitted as a C string literal.
    #[error("source path {path:?} of shader '{shader}' cannot be emitted as a C string literal")]
    InvalidSourcePath {
        /// Shader the path belongs to
        shader: String,
        /// The offending path
        path: String,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Alias for `Result<T, BindgenError>`.
pub type Result<T> = std::result::Result<T, BindgenError>;
