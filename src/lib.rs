//! # shader-bindgen
//!
//! Generates the C glue between the engine and its GLSL programs. A
//! [`Registry`] of shader descriptions is turned into:
//!
//! - `shaders.gen.h`: one strongly typed handle struct per shader, gathered in
//!   a single `Shaders` container, plus `shaders_load` / `shaders_unload`
//! - `shaders.gen.c`: the load routine that compiles every program and looks up
//!   every attribute, uniform and subroutine handle by name, and the unload
//!   routine that deletes every program and zeroes the container
//!
//! ```rust,ignore
//! use shader_bindgen::{Registry, ShaderBindingGenerator, ShaderDescription};
//!
//! let registry = Registry::new().with(
//!     ShaderDescription::new("solid", "project.vert", "solid.frag")
//!         .with_attributes(["vertex"])
//!         .with_uniforms(["projection", "color"]),
//! );
//! let artifacts = ShaderBindingGenerator::default().generate(&registry)?;
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod generator;
pub mod output;
pub mod registry;
pub mod settings;
pub mod shader;

pub use errors::{BindgenError, Result, ValidationIssue};
pub use generator::{Artifacts, ShaderBindingGenerator};
pub use output::{WriteReport, WriteStatus, write_artifacts};
pub use registry::{Registry, builtin_registry};
pub use settings::{ContainerLayout, GeneratorSettings, GraphicsApi, OutputSettings};
pub use shader::{ShaderDescription, ShaderSpec, SimpleShaderDescription, SubroutineGroup};
