//! Production shader registry.

use super::Registry;
use crate::shader::{ShaderDescription, SimpleShaderDescription};

/// The registry the game ships with: general shaders first, then the simple
/// marker / overlay effects.
#[must_use]
pub fn builtin_registry() -> Registry {
    Registry::new()
        .with(
            ShaderDescription::new("circle_partial", "circle.vert", "circle_partial.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "color", "radius", "angle1", "angle2"]),
        )
        .with(
            ShaderDescription::new("solid", "project.vert", "solid.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "color"]),
        )
        .with(
            ShaderDescription::new("trail", "project_pos.vert", "trail.frag")
                .with_attributes(["vertex"])
                .with_uniforms([
                    "projection", "c1", "c2", "t1", "t2", "dt", "pos1", "pos2", "r", "nebu_col",
                ])
                .with_subroutine(
                    "trail_func",
                    [
                        "trail_default",
                        "trail_pulse",
                        "trail_wave",
                        "trail_flame",
                        "trail_nebula",
                        "trail_arc",
                        "trail_bubbles",
                    ],
                ),
        )
        .with(
            ShaderDescription::new("smooth", "smooth.vert", "smooth.frag")
                .with_attributes(["vertex", "vertex_color"])
                .with_uniforms(["projection"]),
        )
        .with(
            ShaderDescription::new("texture", "texture.vert", "texture.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "color", "tex_mat"]),
        )
        .with(
            ShaderDescription::new("texture_interpolate", "texture.vert", "texture_interpolate.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "color", "tex_mat", "sampler1", "sampler2", "inter"]),
        )
        .with(
            ShaderDescription::new("nebula", "nebula.vert", "nebula_overlay.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "hue", "brightness", "horizon", "eddy_scale", "time"]),
        )
        .with(
            ShaderDescription::new("nebula_background", "nebula.vert", "nebula_background.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "hue", "brightness", "eddy_scale", "time"]),
        )
        .with(
            ShaderDescription::new("nebula_map", "nebula_map.vert", "nebula_map.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "hue", "eddy_scale", "time", "globalpos", "alpha"]),
        )
        .with(
            ShaderDescription::new("stars", "stars.vert", "stars.frag")
                .with_attributes(["vertex", "brightness", "relspeed", "color"])
                .with_uniforms(["projection", "star_xy", "wh", "xy", "scale"]),
        )
        .with(
            ShaderDescription::new("font", "font.vert", "font.frag")
                .with_attributes(["vertex", "tex_coord"])
                .with_uniforms(["projection", "m", "color", "outline_color"]),
        )
        .with(
            ShaderDescription::new("beam", "project_pos.vert", "beam.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "color", "dt", "r", "dimensions"])
                .with_subroutine(
                    "beam_func",
                    [
                        "beam_default",
                        "beam_wave",
                        "beam_arc",
                        "beam_helix",
                        "beam_organic",
                        "beam_unstable",
                        "beam_fuzzy",
                    ],
                ),
        )
        .with(
            ShaderDescription::new("jump", "project_pos.vert", "jump.frag")
                .with_attributes(["vertex"])
                .with_uniforms(["projection", "progress", "direction", "dimensions"])
                .with_subroutine(
                    "jump_func",
                    [
                        "jump_default",
                        "jump_nebula",
                        "jump_organic",
                        "jump_circular",
                        "jump_wind",
                    ],
                ),
        )
        .with(
            ShaderDescription::new("material", "material.vert", "material.frag")
                .with_attributes(["vertex", "vertex_normal", "vertex_tex"])
                .with_uniforms([
                    "projection", "model", "map_Kd", "map_Ks", "map_Ke", "map_Bump", "Ns", "Ka",
                    "Kd", "Ks", "Ke", "Ni", "d", "bm",
                ]),
        )
        // Post-processing
        .with(
            ShaderDescription::new("colorblind", "postprocess.vert", "colorblind.frag")
                .with_attributes(["VertexPosition"])
                .with_uniforms(["ClipSpaceFromLocal", "MainTex"]),
        )
        .with(
            ShaderDescription::new("shake", "postprocess.vert", "shake.frag")
                .with_attributes(["VertexPosition"])
                .with_uniforms([
                    "ClipSpaceFromLocal",
                    "MainTex",
                    "shake_pos",
                    "shake_vel",
                    "shake_force",
                ]),
        )
        .with(
            ShaderDescription::new("gamma_correction", "postprocess.vert", "gamma_correction.frag")
                .with_attributes(["VertexPosition"])
                .with_uniforms(["ClipSpaceFromLocal", "MainTex", "gamma"]),
        )
        .with(SimpleShaderDescription::new("status", "status.frag"))
        .with(SimpleShaderDescription::new("factiondisk", "factiondisk.frag"))
        .with(SimpleShaderDescription::new("planetmarker", "planetmarker.frag"))
        .with(SimpleShaderDescription::new("jumpmarker", "jumpmarker.frag"))
        .with(SimpleShaderDescription::new("pilotmarker", "pilotmarker.frag"))
        .with(SimpleShaderDescription::new("playermarker", "playermarker.frag"))
        .with(SimpleShaderDescription::new("blinkmarker", "blinkmarker.frag"))
        .with(SimpleShaderDescription::new("sysmarker", "sysmarker.frag"))
        .with(SimpleShaderDescription::new("asteroidmarker", "asteroidmarker.frag"))
        .with(SimpleShaderDescription::new("targetship", "targetship.frag"))
        .with(SimpleShaderDescription::new("targetplanet", "targetplanet.frag"))
        .with(SimpleShaderDescription::new("sdfsolid", "sdfsolid.frag"))
        .with(SimpleShaderDescription::new("circle", "circle.frag"))
        .with(SimpleShaderDescription::new("crosshairs", "crosshairs.frag"))
        .with(SimpleShaderDescription::new("hilight", "hilight.frag"))
        .with(SimpleShaderDescription::new("hilight_pos", "hilight_pos.frag"))
        .with(SimpleShaderDescription::new("hilight_circle", "hilight_circle.frag"))
        .with(SimpleShaderDescription::new("progressbar", "progressbar.frag"))
}
