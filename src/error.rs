use wasm_bindgen::JsValue;

use crate::shader::ShaderStage;

/// Errors raised while bringing up the demo.
///
/// Every variant is also written to the log where it is detected, so the
/// browser console shows the diagnostic even when the caller discards it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to retrieve window.
    ///
    /// This error occurs when [`web_sys::window()`] returns `None`.
    #[error("Unable to retrieve window")]
    WindowUnavailable,

    /// Unable to retrieve document.
    #[error("Unable to retrieve document")]
    DocumentUnavailable,

    /// The element the canvas should be attached to does not exist.
    #[error("Unable to find container element #{0}")]
    ContainerNotFound(String),

    /// No rendering context could be obtained from the canvas.
    #[error("Unable to initialize WebGL. Your browser may not support it.")]
    ContextUnavailable,

    /// A single shader stage failed to compile.
    #[error("An error occurred compiling the {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    /// The compiled stages could not be linked into a program.
    #[error("Unable to initialize the shader program: {log}")]
    ProgramLink { log: String },

    /// The backend refused to allocate a vertex buffer.
    #[error("Unable to allocate vertex buffer")]
    BufferAllocation,

    /// The linked program has no active attribute with this name.
    #[error("Attribute `{0}` not found in program")]
    AttributeNotFound(&'static str),

    /// The linked program has no active uniform with this name.
    #[error("Uniform `{0}` not found in program")]
    UniformNotFound(&'static str),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JS value error.
    #[error("JS value error: {0:?}")]
    JsValue(JsValue),
}

/// Convert [`wasm_bindgen::JsValue`] to [`Error`].
impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::JsValue(value)
    }
}

/// Convert [`Error`] to [`wasm_bindgen::JsValue`] so the start function can
/// hand it back to the page.
impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        match error {
            Error::JsValue(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Logs `err` at error level and hands it back for propagation.
pub(crate) fn logged(err: Error) -> Error {
    log::error!("{err}");
    err
}
