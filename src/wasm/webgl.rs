use js_sys::Float32Array;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

use crate::backend::{Backend, Primitive};
use crate::shader::ShaderStage;

/// [`Backend`] over a WebGL2 context.
#[derive(Debug, Clone)]
pub struct WebGl2Backend {
    gl: GL,
}

impl WebGl2Backend {
    pub fn new(gl: GL) -> Self {
        Self { gl }
    }
}

fn stage_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    }
}

fn primitive_mode(primitive: Primitive) -> u32 {
    match primitive {
        Primitive::TriangleStrip => GL::TRIANGLE_STRIP,
        Primitive::LineLoop => GL::LINE_LOOP,
    }
}

impl Backend for WebGl2Backend {
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type Buffer = WebGlBuffer;
    type Uniform = WebGlUniformLocation;

    fn compile_shader(&self, stage: ShaderStage, source: &str) -> Result<WebGlShader, String> {
        let shader = self
            .gl
            .create_shader(stage_kind(stage))
            .ok_or_else(|| "unable to create shader object".to_string())?;
        self.gl.shader_source(&shader, source);
        self.gl.compile_shader(&shader);

        let compiled = self
            .gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if compiled {
            Ok(shader)
        } else {
            let info = self.gl.get_shader_info_log(&shader).unwrap_or_default();
            self.gl.delete_shader(Some(&shader));
            Err(info)
        }
    }

    fn link_program(
        &self,
        vertex: &WebGlShader,
        fragment: &WebGlShader,
    ) -> Result<WebGlProgram, String> {
        let program = self
            .gl
            .create_program()
            .ok_or_else(|| "unable to create program object".to_string())?;
        self.gl.attach_shader(&program, vertex);
        self.gl.attach_shader(&program, fragment);
        self.gl.link_program(&program);

        let linked = self
            .gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if linked {
            Ok(program)
        } else {
            Err(self.gl.get_program_info_log(&program).unwrap_or_default())
        }
    }

    fn create_static_buffer(&self, data: &[f32]) -> Option<WebGlBuffer> {
        let buffer = self.gl.create_buffer()?;
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        // Copies into JS memory, so the view cannot be invalidated by a
        // wasm heap resize.
        let array = Float32Array::from(data);
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        Some(buffer)
    }

    fn attribute_location(&self, program: &WebGlProgram, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(program, name)).ok()
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    fn use_program(&self, program: &WebGlProgram) {
        self.gl.use_program(Some(program));
    }

    fn enable_vertex_attribute(&self, buffer: &WebGlBuffer, location: u32, components: i32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl.enable_vertex_attrib_array(location);
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    }

    fn viewport(&self, width: i32, height: i32) {
        self.gl.viewport(0, 0, width, height);
    }

    fn clear_color(&self, [r, g, b, a]: [f32; 4]) {
        self.gl.clear_color(r, g, b, a);
    }

    fn clear(&self) {
        self.gl.clear(GL::COLOR_BUFFER_BIT);
    }

    fn upload_matrix(&self, uniform: &WebGlUniformLocation, matrix: &[f32; 16]) {
        self.gl
            .uniform_matrix4fv_with_f32_array(Some(uniform), false, matrix);
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.gl.draw_arrays(primitive_mode(primitive), first, count);
    }
}
