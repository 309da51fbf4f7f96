#![allow(dead_code)]

use std::cell::RefCell;

use spinquad_wasm::backend::{Backend, Primitive};
use spinquad_wasm::shader::ShaderStage;

/// Every backend call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Compile(ShaderStage),
    Link,
    CreateBuffer(Vec<f32>),
    UseProgram,
    EnableAttribute { location: u32, components: i32 },
    Viewport(i32, i32),
    ClearColor([f32; 4]),
    Clear,
    UploadMatrix([f32; 16]),
    Draw { primitive: Primitive, first: i32, count: i32 },
}

/// Backend that records calls instead of talking to a GPU.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<Call>>,
    pub fail_stage: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_buffer: bool,
    pub missing_uniform: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn draws(&self) -> Vec<Primitive> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Draw { primitive, .. } => Some(*primitive),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| pred(call)).count()
    }

    pub fn last_matrix(&self) -> Option<[f32; 16]> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::UploadMatrix(m) => Some(*m),
            _ => None,
        })
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[derive(Debug)]
pub struct FakeShader(pub ShaderStage);
#[derive(Debug)]
pub struct FakeProgram;
#[derive(Debug)]
pub struct FakeBuffer;
#[derive(Debug)]
pub struct FakeUniform;

impl Backend for RecordingBackend {
    type Shader = FakeShader;
    type Program = FakeProgram;
    type Buffer = FakeBuffer;
    type Uniform = FakeUniform;

    fn compile_shader(&self, stage: ShaderStage, _source: &str) -> Result<FakeShader, String> {
        self.record(Call::Compile(stage));
        if self.fail_stage == Some(stage) {
            Err(format!("ERROR: 0:1: '{stage}' : syntax error"))
        } else {
            Ok(FakeShader(stage))
        }
    }

    fn link_program(&self, _vertex: &FakeShader, _fragment: &FakeShader) -> Result<FakeProgram, String> {
        self.record(Call::Link);
        if self.fail_link {
            Err("link failed".to_string())
        } else {
            Ok(FakeProgram)
        }
    }

    fn create_static_buffer(&self, data: &[f32]) -> Option<FakeBuffer> {
        if self.fail_buffer {
            return None;
        }
        self.record(Call::CreateBuffer(data.to_vec()));
        Some(FakeBuffer)
    }

    fn attribute_location(&self, _program: &FakeProgram, _name: &str) -> Option<u32> {
        Some(0)
    }

    fn uniform_location(&self, _program: &FakeProgram, _name: &str) -> Option<FakeUniform> {
        (!self.missing_uniform).then_some(FakeUniform)
    }

    fn use_program(&self, _program: &FakeProgram) {
        self.record(Call::UseProgram);
    }

    fn enable_vertex_attribute(&self, _buffer: &FakeBuffer, location: u32, components: i32) {
        self.record(Call::EnableAttribute { location, components });
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear(&self) {
        self.record(Call::Clear);
    }

    fn upload_matrix(&self, _uniform: &FakeUniform, matrix: &[f32; 16]) {
        self.record(Call::UploadMatrix(*matrix));
    }

    fn draw_arrays(&self, primitive: Primitive, first: i32, count: i32) {
        self.record(Call::Draw { primitive, first, count });
    }
}
