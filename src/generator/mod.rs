//! Artifact generation
//!
//! - binding_gen: renders the interface / implementation pair
//! - template_manager: minijinja environment and embedded templates

pub mod binding_gen;
pub mod template_manager;

pub use binding_gen::{Artifacts, ShaderBindingGenerator};
