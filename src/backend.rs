//! The subset of a GL-style context the demo talks to.
//!
//! WebGL2 implements it in the browser (`wasm::webgl`); tests implement it
//! with a recorder.

use std::fmt;

use crate::shader::ShaderStage;

/// Primitive assembly mode for a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    TriangleStrip,
    LineLoop,
}

impl Primitive {
    /// Filled quads are drawn as a strip, outlines as a loop.
    pub fn for_fill(filled: bool) -> Self {
        if filled {
            Primitive::TriangleStrip
        } else {
            Primitive::LineLoop
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::TriangleStrip => f.write_str("triangle strip"),
            Primitive::LineLoop => f.write_str("line loop"),
        }
    }
}

/// Rendering backend.
///
/// Compile and link report failure through the backend's info log, returned
/// as the `Err` string.
pub trait Backend {
    type Shader;
    type Program;
    type Buffer;
    type Uniform;

    /// Compiles one stage. On failure the shader object is deleted and the
    /// info log is returned.
    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<Self::Shader, String>;

    /// Attaches both stages and links them.
    fn link_program(
        &self,
        vertex: &Self::Shader,
        fragment: &Self::Shader,
    ) -> Result<Self::Program, String>;

    /// Allocates an array buffer and uploads `data` with static usage.
    /// `None` if the buffer could not be created.
    fn create_static_buffer(&self, data: &[f32]) -> Option<Self::Buffer>;

    /// Location of a vertex attribute, `None` if inactive.
    fn attribute_location(&self, program: &Self::Program, name: &str) -> Option<u32>;

    fn uniform_location(&self, program: &Self::Program, name: &str) -> Option<Self::Uniform>;

    fn use_program(&self, program: &Self::Program);

    /// Binds `buffer` and points `location` at it as tightly packed floats.
    fn enable_vertex_attribute(&self, buffer: &Self::Buffer, location: u32, components: i32);

    fn viewport(&self, width: i32, height: i32);

    fn clear_color(&self, rgba: [f32; 4]);

    fn clear(&self);

    fn upload_matrix(&self, uniform: &Self::Uniform, matrix: &[f32; 16]);

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32);
}
