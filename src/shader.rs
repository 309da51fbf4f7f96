use std::fmt;

use crate::backend::Backend;
use crate::error::{logged, Error, Result};

/// Name of the position attribute in [`VERTEX_SHADER`].
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
/// Name of the transform uniform in [`VERTEX_SHADER`].
pub const MODEL_VIEW_UNIFORM: &str = "uModelViewMatrix";

pub const VERTEX_SHADER: &str = r#"#version 300 es
in vec4 aVertexPosition;
uniform mat4 uModelViewMatrix;
void main() {
    gl_Position = uModelViewMatrix * aVertexPosition;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
out vec4 fragColor;
void main() {
    fragColor = vec4(1.0, 1.0, 1.0, 1.0);
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Compiles one stage, logging the info log on failure.
pub fn compile_stage<B: Backend>(gl: &B, stage: ShaderStage, source: &str) -> Result<B::Shader> {
    gl.compile_shader(stage, source).map_err(|info_log| {
        logged(Error::ShaderCompile {
            stage,
            log: info_log,
        })
    })
}

/// Compiles both stages and links them into a program.
///
/// The vertex stage is compiled first; if it fails the fragment stage is
/// never touched.
pub fn build_program<B: Backend>(gl: &B, vertex: &str, fragment: &str) -> Result<B::Program> {
    let vs = compile_stage(gl, ShaderStage::Vertex, vertex)?;
    let fs = compile_stage(gl, ShaderStage::Fragment, fragment)?;

    let program = gl
        .link_program(&vs, &fs)
        .map_err(|info_log| logged(Error::ProgramLink { log: info_log }))?;
    log::debug!("shader program linked");
    Ok(program)
}

/// The demo's fixed program.
pub fn build_default_program<B: Backend>(gl: &B) -> Result<B::Program> {
    build_program(gl, VERTEX_SHADER, FRAGMENT_SHADER)
}
