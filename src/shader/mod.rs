//! Shader Model
//!
//! - description: declarative shader records
//! - spec: registry entries and fragment rendering
//! - validate: opt-in registry checks

pub mod description;
pub mod spec;
pub mod validate;

pub use description::{
    SIMPLE_ATTRIBUTES, SIMPLE_UNIFORMS, SIMPLE_VERTEX_SOURCE, ShaderDescription,
    SimpleShaderDescription, SubroutineGroup,
};
pub use spec::{Lines, ShaderSpec};
pub use validate::is_c_identifier;
