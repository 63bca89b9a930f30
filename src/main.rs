//! Writes `shaders.gen.h` and `shaders.gen.c` for the built-in registry into
//! the current directory.

use std::path::Path;

use anyhow::Context;
use shader_bindgen::{GeneratorSettings, ShaderBindingGenerator, builtin_registry, write_artifacts};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = GeneratorSettings {
        validate: true,
        ..Default::default()
    };
    let generator = ShaderBindingGenerator::new(settings);

    let registry = builtin_registry();
    let artifacts = generator
        .generate(&registry)
        .context("Failed to generate shader bindings")?;

    let report = write_artifacts(Path::new("."), &generator.settings().output, &artifacts)?;
    log::info!(
        "{}: {:?}, {}: {:?}",
        report.interface_path.display(),
        report.interface,
        report.implementation_path.display(),
        report.implementation
    );

    Ok(())
}
