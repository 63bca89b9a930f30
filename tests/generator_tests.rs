//! Generator Tests
//!
//! Tests for:
//! - Field correspondence between the interface and implementation artifacts
//! - Subroutine capability guard placement
//! - Simple-shader specialization
//! - Unload routine completeness
//! - Determinism and settings propagation
//! - Opt-in registry validation

use shader_bindgen::{
    BindgenError, GeneratorSettings, Registry, ShaderBindingGenerator, ShaderDescription,
    ShaderSpec, SimpleShaderDescription, builtin_registry,
};

const GUARD_OPEN: &str = "   if (gl_has( OPENGL_SUBROUTINES )) {";
const GUARD_CLOSE: &str = "   }";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lines strictly between `open` and the next `close`.
fn block<'a>(text: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != open)
        .skip(1)
        .take_while(|line| *line != close)
        .collect()
}

/// Last word of a declaration line, without the semicolon.
fn declared_name(line: &str) -> String {
    line.trim()
        .trim_end_matches(';')
        .rsplit(' ')
        .next()
        .unwrap()
        .to_string()
}

/// Parses the container struct back into (member, field paths) pairs.
fn interface_members(header: &str) -> Vec<(String, Vec<String>)> {
    let simple_fields: Vec<String> = block(header, "typedef struct SimpleShader_ {", "} SimpleShader;")
        .into_iter()
        .map(declared_name)
        .collect();

    let body = block(header, "typedef struct Shaders_ {", "} Shaders;");
    let mut members = Vec::new();
    let mut lines = body.into_iter();

    while let Some(line) = lines.next() {
        if let Some(rest) = line.strip_prefix("   SimpleShader ") {
            members.push((rest.trim_end_matches(';').to_string(), simple_fields.clone()));
            continue;
        }
        assert_eq!(line, "   struct {");

        let mut fields = Vec::new();
        let mut nested = Vec::new();
        let mut in_group = false;
        for line in lines.by_ref() {
            if line == "      struct {" {
                in_group = true;
            } else if in_group && line.starts_with("      } ") {
                let group = declared_name(line);
                fields.extend(nested.drain(..).map(|field| format!("{group}.{field}")));
                in_group = false;
            } else if line.starts_with("   } ") {
                members.push((declared_name(line), fields));
                break;
            } else if in_group {
                nested.push(declared_name(line));
            } else {
                fields.push(declared_name(line));
            }
        }
    }

    members
}

/// Splits the load routine into one block of lines per shader.
fn load_blocks(source: &str) -> Vec<Vec<&str>> {
    block(source, "void shaders_load (void) {", "}")
        .split(|line| line.is_empty())
        .map(<[&str]>::to_vec)
        .collect()
}

/// (shader, field path) assigned by a load statement.
fn assignment_target(line: &str) -> Option<(String, String)> {
    let lhs = line.trim().split(" = ").next()?;
    let (shader, path) = lhs.strip_prefix("shaders.")?.split_once('.')?;
    Some((shader.to_string(), path.to_string()))
}

// ============================================================================
// Field Correspondence
// ============================================================================

#[test]
fn builtin_interface_fields_match_field_paths() {
    init_logger();
    let registry = builtin_registry();
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let members = interface_members(&artifacts.interface);
    assert_eq!(members.len(), registry.len());

    for (spec, (member, fields)) in registry.iter().zip(&members) {
        assert_eq!(spec.name(), member);
        assert_eq!(&spec.field_paths(), fields, "interface fields of '{member}'");
    }
}

#[test]
fn builtin_load_statements_match_interface_fields() {
    let registry = builtin_registry();
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let members = interface_members(&artifacts.interface);
    let blocks = load_blocks(&artifacts.implementation);
    assert_eq!(blocks.len(), registry.len());

    for ((member, fields), block) in members.iter().zip(&blocks) {
        let targets: Vec<String> = block
            .iter()
            .filter_map(|line| assignment_target(line))
            .map(|(shader, path)| {
                assert_eq!(&shader, member);
                path
            })
            .collect();
        assert_eq!(&targets, fields, "load statements of '{member}'");
    }
}

// ============================================================================
// End-to-end examples
// ============================================================================

#[test]
fn solid_shader_end_to_end() {
    let registry = Registry::new().with(
        ShaderDescription::new("solid", "project.vert", "solid.frag")
            .with_attributes(["vertex"])
            .with_uniforms(["projection", "color"]),
    );
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let members = interface_members(&artifacts.interface);
    assert_eq!(
        members,
        [(
            "solid".to_string(),
            vec![
                "program".to_string(),
                "vertex".to_string(),
                "projection".to_string(),
                "color".to_string()
            ]
        )]
    );

    let blocks = load_blocks(&artifacts.implementation);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].len(), 4);
    assert!(blocks[0][0].contains("gl_program_vert_frag(\"project.vert\", \"solid.frag\")"));
    assert!(!artifacts.implementation.contains("gl_has"));
}

#[test]
fn subroutine_shader_end_to_end() {
    let registry = Registry::new().with(
        ShaderDescription::new("trail", "project_pos.vert", "trail.frag")
            .with_attributes(["vertex"])
            .with_uniforms(["projection"])
            .with_subroutine("trail_func", ["trail_default", "trail_pulse"]),
    );
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    assert!(artifacts.interface.contains(concat!(
        "      struct {\n",
        "         GLuint uniform;\n",
        "         GLuint trail_default;\n",
        "         GLuint trail_pulse;\n",
        "      } trail_func;\n",
    )));

    let guarded = block(&artifacts.implementation, GUARD_OPEN, GUARD_CLOSE);
    let targets: Vec<String> = guarded
        .iter()
        .filter_map(|line| assignment_target(line))
        .map(|(_, path)| path)
        .collect();
    assert_eq!(
        targets,
        [
            "trail_func.uniform",
            "trail_func.trail_default",
            "trail_func.trail_pulse"
        ]
    );
    assert_eq!(artifacts.implementation.matches(GUARD_OPEN).count(), 1);
}

// ============================================================================
// Subroutine guard
// ============================================================================

#[test]
fn only_subroutine_statements_are_guarded() {
    let registry = builtin_registry();
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    for (spec, block) in registry.iter().zip(load_blocks(&artifacts.implementation)) {
        let has_subroutines = spec.field_paths().iter().any(|path| path.contains('.'));
        let guards = block.iter().filter(|line| **line == GUARD_OPEN).count();
        assert_eq!(guards, usize::from(has_subroutines), "guard count of '{}'", spec.name());

        let mut inside = false;
        for line in &block {
            match *line {
                GUARD_OPEN => inside = true,
                GUARD_CLOSE => inside = false,
                _ => {
                    let (_, path) = assignment_target(line).unwrap();
                    assert_eq!(path.contains('.'), inside, "'{line}'");
                }
            }
        }
        assert!(!inside);
    }
}

// ============================================================================
// Simple shaders
// ============================================================================

#[test]
fn simple_shader_declares_one_shared_member() {
    let registry = Registry::new().with(SimpleShaderDescription::new("status", "status.frag"));
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let body = block(&artifacts.interface, "typedef struct Shaders_ {", "} Shaders;");
    assert_eq!(body, ["   SimpleShader status;"]);

    let shared = block(&artifacts.interface, "typedef struct SimpleShader_ {", "} SimpleShader;");
    assert_eq!(shared.len(), 9);
    assert_eq!(shared[0], "    GLuint program;");

    let blocks = load_blocks(&artifacts.implementation);
    assert_eq!(blocks[0].len(), 1 + 1 + 7);
    assert!(blocks[0][0].contains("\"project_pos.vert\", \"status.frag\""));
}

// ============================================================================
// Load / unload layout
// ============================================================================

#[test]
fn load_routine_separates_shaders_with_one_blank_line() {
    let registry = builtin_registry();
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let body = block(&artifacts.implementation, "void shaders_load (void) {", "}");
    let blank = body.iter().filter(|line| line.is_empty()).count();
    assert_eq!(blank, registry.len() - 1);
    assert!(!body.first().unwrap().is_empty());
    assert!(!body.last().unwrap().is_empty());
}

#[test]
fn unload_releases_every_program_then_resets() {
    let registry = builtin_registry();
    let artifacts = ShaderBindingGenerator::default().generate(&registry).unwrap();

    let body = block(&artifacts.implementation, "void shaders_unload (void) {", "}");
    assert_eq!(body.len(), registry.len() + 1);

    for (spec, line) in registry.iter().zip(&body) {
        assert_eq!(*line, format!("   glDeleteProgram(shaders.{}.program);", spec.name()));
    }
    assert_eq!(*body.last().unwrap(), "   memset(&shaders, 0, sizeof(shaders));");
    assert!(body.iter().all(|line| !line.contains("glGet") && !line.contains("gl_has")));
}

#[test]
fn empty_registry_renders_empty_routines() {
    let artifacts = ShaderBindingGenerator::default().generate(&Registry::new()).unwrap();

    assert!(artifacts.implementation.contains("void shaders_load (void) {\n}\n"));
    assert!(artifacts.implementation.contains(
        "void shaders_unload (void) {\n   memset(&shaders, 0, sizeof(shaders));\n}\n"
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn generation_is_deterministic() {
    let generator = ShaderBindingGenerator::default();
    let first = generator.generate(&builtin_registry()).unwrap();
    let second = generator.generate(&builtin_registry()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn json_round_trip_generates_identical_artifacts() {
    let registry = builtin_registry();
    let json = serde_json::to_string(&registry).unwrap();
    let reloaded = Registry::from_json(&json).unwrap();

    let generator = ShaderBindingGenerator::default();
    assert_eq!(
        generator.generate(&registry).unwrap(),
        generator.generate(&reloaded).unwrap()
    );
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn layout_settings_reach_both_artifacts() {
    let mut settings = GeneratorSettings::default();
    settings.provenance = "tools/shaders".into();
    settings.layout.instance = "gl_shaders".into();
    settings.layout.load_fn = "gl_shaders_load".into();
    settings.output.include_guard = "GL_SHADERS_H".into();
    settings.output.header_file = "gl_shaders.h".into();
    settings.output.source_includes = Vec::new();

    let registry = Registry::new().with(SimpleShaderDescription::new("circle", "circle.frag"));
    let artifacts = ShaderBindingGenerator::new(settings).generate(&registry).unwrap();

    assert!(artifacts.interface.starts_with("/* FILE GENERATED BY tools/shaders */\n"));
    assert!(artifacts.interface.contains("#ifndef GL_SHADERS_H\n#define GL_SHADERS_H\n"));
    assert!(artifacts.interface.contains("extern Shaders gl_shaders;\n"));
    assert!(artifacts.interface.contains("void gl_shaders_load (void);\n"));

    assert!(artifacts.implementation.contains("#include \"gl_shaders.h\"\n\nShaders gl_shaders;\n"));
    assert!(!artifacts.implementation.contains("opengl_shader.h"));
    assert!(artifacts.implementation.contains("void gl_shaders_load (void) {\n"));
    assert!(artifacts.implementation.contains("   gl_shaders.circle.program = "));
    assert!(artifacts.implementation.contains("glDeleteProgram(gl_shaders.circle.program);"));
}

// ============================================================================
// Validation
// ============================================================================

fn colliding_registry() -> Registry {
    Registry::new().with(ShaderSpec::from(
        ShaderDescription::new("stars", "stars.vert", "stars.frag")
            .with_attributes(["vertex", "color"])
            .with_uniforms(["projection", "color"]),
    ))
}

#[test]
fn unvalidated_generation_renders_collisions_as_is() {
    let artifacts = ShaderBindingGenerator::default()
        .generate(&colliding_registry())
        .unwrap();

    assert_eq!(artifacts.interface.matches("      GLuint color;\n").count(), 2);
}

#[test]
fn validated_generation_rejects_collisions() {
    let settings = GeneratorSettings {
        validate: true,
        ..Default::default()
    };
    let result = ShaderBindingGenerator::new(settings).generate(&colliding_registry());

    let Err(BindgenError::Validation(issues)) = result else {
        panic!("expected a validation error");
    };
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].to_string(),
        "field 'color' is declared more than once in shader 'stars'"
    );
}
