use crate::backend::{Backend, Primitive};
use crate::config::DemoConfig;
use crate::error::{logged, Error, Result};
use crate::geometry::{COMPONENTS, QUAD_VERTICES, VERTEX_COUNT};
use crate::schedule::EventQueue;
use crate::shader::{self, MODEL_VIEW_UNIFORM, POSITION_ATTRIBUTE};
use crate::state::FrameState;
use crate::transform::Transform;

/// Lifecycle of the render loop. There is no terminal state; the loop runs
/// until the page goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Initialized,
    Running,
}

/// GPU objects created once during setup and kept for the whole session.
struct Resources<B: Backend> {
    #[allow(dead_code)]
    program: B::Program,
    #[allow(dead_code)]
    buffer: B::Buffer,
    uniform: B::Uniform,
}

/// Owns the frame state and transform and issues the per-tick commands.
pub struct Renderer<B: Backend> {
    gl: B,
    config: DemoConfig,
    queue: EventQueue,
    frame: FrameState,
    transform: Transform,
    resources: Option<Resources<B>>,
    state: LoopState,
    frames: u64,
}

impl<B: Backend> Renderer<B> {
    pub fn new(gl: B, config: DemoConfig, queue: EventQueue) -> Self {
        let transform = Transform::new(config.scale_mode);
        Self {
            gl,
            config,
            queue,
            frame: FrameState::default(),
            transform,
            resources: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Builds the program, uploads the quad and wires the attribute and
    /// uniform. Any failure leaves the renderer [`LoopState::Idle`].
    pub fn initialize(&mut self, width: u32, height: u32) -> Result<()> {
        let gl = &self.gl;
        let program = shader::build_default_program(gl)?;

        let buffer = gl
            .create_static_buffer(&QUAD_VERTICES)
            .ok_or_else(|| logged(Error::BufferAllocation))?;

        gl.viewport(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        );
        gl.clear_color(self.config.clear_color);
        gl.use_program(&program);

        let position = gl
            .attribute_location(&program, POSITION_ATTRIBUTE)
            .ok_or_else(|| logged(Error::AttributeNotFound(POSITION_ATTRIBUTE)))?;
        gl.enable_vertex_attribute(&buffer, position, COMPONENTS as i32);

        let uniform = gl
            .uniform_location(&program, MODEL_VIEW_UNIFORM)
            .ok_or_else(|| logged(Error::UniformNotFound(MODEL_VIEW_UNIFORM)))?;

        self.resources = Some(Resources {
            program,
            buffer,
            uniform,
        });
        self.state = LoopState::Initialized;
        log::info!("renderer initialized at {width}x{height}");
        Ok(())
    }

    /// Advances one frame and draws it.
    ///
    /// Returns `false` without touching the backend when setup has not
    /// completed.
    pub fn tick(&mut self) -> bool {
        let Some(resources) = &self.resources else {
            log::warn!("tick before initialization; skipping frame");
            return false;
        };

        for event in self.queue.drain() {
            self.frame.apply(event);
        }

        let radians = self.config.rotation_step * self.frame.direction.sign();
        self.transform
            .step(radians, self.config.scale_for(self.frame.filled));

        self.gl
            .upload_matrix(&resources.uniform, &self.transform.to_cols_array());
        self.gl.clear();
        self.gl.draw_arrays(
            Primitive::for_fill(self.frame.filled),
            0,
            VERTEX_COUNT as i32,
        );

        if self.state == LoopState::Initialized {
            log::debug!("render loop running");
        }
        self.state = LoopState::Running;
        self.frames += 1;
        true
    }

    pub fn backend(&self) -> &B {
        &self.gl
    }

    /// Producer handle for timers.
    pub fn queue(&self) -> EventQueue {
        self.queue.clone()
    }

    pub fn frame_state(&self) -> FrameState {
        self.frame
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    /// Ticks completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
