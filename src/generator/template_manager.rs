//! Artifact Template Manager
//!
//! Holds the minijinja environment used to assemble both artifacts. The
//! templates live in `src/generator/templates` and are embedded with
//! `rust-embed`; debug builds read them from disk first so edits show up
//! without a rebuild.
//!
//! Syntax matches the shader templates elsewhere in the engine:
//! `{$ ... $}` for blocks, `{{ ... }}` for expressions, with trim/lstrip
//! blocks so control lines leave no trace in the output.

use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, Error, ErrorKind, syntax::SyntaxConfig};
use rust_embed::RustEmbed;

/// Interface artifact template.
pub const INTERFACE_TEMPLATE: &str = "interface.h";
/// Implementation artifact template.
pub const IMPLEMENTATION_TEMPLATE: &str = "implementation.c";

pub static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(RustEmbed)]
#[folder = "src/generator/templates"]
struct TemplateAssets;

pub fn get_env() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();

        let syntax = SyntaxConfig::builder()
            .block_delimiters("{$", "$}")
            .variable_delimiters("{{", "}}")
            .build()
            .expect("Failed to configure template syntax");

        env.set_syntax(syntax);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
        // Output is C, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.set_loader(template_loader);

        env
    })
}

fn template_loader(name: &str) -> Result<Option<String>, Error> {
    #[cfg(debug_assertions)]
    {
        let path = std::path::Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/generator/templates"))
            .join(name);
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(source) => return Ok(Some(source)),
                Err(e) => {
                    return Err(Error::new(
                        ErrorKind::TemplateNotFound,
                        format!("Failed to read file: {e}"),
                    ));
                }
            }
        }
    }

    if let Some(file) = TemplateAssets::get(name)
        && let Ok(source) = std::str::from_utf8(file.data.as_ref())
    {
        return Ok(Some(source.to_string()));
    }

    Ok(None)
}
