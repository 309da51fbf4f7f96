#![cfg(target_arch = "wasm32")]

use log::LevelFilter;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use spinquad_wasm::logging::LoggingConfig;
use spinquad_wasm::shader::{self, ShaderStage};
use spinquad_wasm::wasm::{start, WebGl2Backend};
use spinquad_wasm::{DemoConfig, Error};

wasm_bindgen_test_configure!(run_in_browser);

fn add_container(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id(id);
    document
        .document_element()
        .unwrap()
        .append_child(&div)
        .unwrap();
}

fn context_of(canvas: &HtmlCanvasElement) -> WebGl2RenderingContext {
    canvas
        .get_context("webgl2")
        .unwrap()
        .expect("webgl2 context")
        .dyn_into::<WebGl2RenderingContext>()
        .unwrap()
}

fn webgl2_backend() -> WebGl2Backend {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    WebGl2Backend::new(context_of(&canvas))
}

#[wasm_bindgen_test]
fn start_attaches_canvas_to_container() {
    add_container("spin-test");
    let canvas = start(DemoConfig::new().container_id("spin-test").canvas_size((64, 32))).unwrap();

    assert_eq!((canvas.width(), canvas.height()), (64, 32));
    let parent = canvas.parent_element().expect("canvas attached");
    assert_eq!(parent.id(), "spin-test");
}

#[wasm_bindgen_test]
fn first_frame_is_drawn_before_start_returns() {
    add_container("first-frame");
    let canvas = start(DemoConfig::new().container_id("first-frame").canvas_size((64, 32))).unwrap();

    // Still inside the same task, so the drawing buffer has not been
    // presented and cleared yet.
    let gl = context_of(&canvas);
    let mut pixel = [0u8; 4];
    gl.read_pixels_with_opt_u8_array(
        32,
        16,
        1,
        1,
        WebGl2RenderingContext::RGBA,
        WebGl2RenderingContext::UNSIGNED_BYTE,
        Some(&mut pixel),
    )
    .unwrap();
    assert_eq!(pixel, [255, 255, 255, 255]);
}

#[wasm_bindgen_test]
fn start_applies_configured_log_level() {
    add_container("log-level");
    let logging = LoggingConfig {
        level: LevelFilter::Warn,
    };
    start(DemoConfig::new().container_id("log-level").logging(logging)).unwrap();
    assert_eq!(log::max_level(), LevelFilter::Warn);
}

#[wasm_bindgen_test]
fn missing_container_aborts_setup() {
    let err = start(DemoConfig::new().container_id("no-such-element")).unwrap_err();
    assert!(matches!(err, Error::ContainerNotFound(ref id) if id == "no-such-element"));
}

#[wasm_bindgen_test]
fn default_shaders_link() {
    let gl = webgl2_backend();
    assert!(shader::build_default_program(&gl).is_ok());
}

#[wasm_bindgen_test]
fn broken_fragment_source_yields_no_program() {
    let gl = webgl2_backend();
    let err = shader::build_program(&gl, shader::VERTEX_SHADER, "#version 300 es\nnot glsl").unwrap_err();
    assert!(matches!(
        err,
        Error::ShaderCompile {
            stage: ShaderStage::Fragment,
            ..
        }
    ));
}

#[wasm_bindgen_test]
fn mismatched_varying_fails_to_link() {
    const VERTEX: &str = r#"#version 300 es
in vec4 aVertexPosition;
out vec3 vTint;
void main() {
    vTint = vec3(1.0);
    gl_Position = aVertexPosition;
}
"#;
    const FRAGMENT: &str = r#"#version 300 es
precision mediump float;
in vec4 vTint;
out vec4 fragColor;
void main() {
    fragColor = vTint;
}
"#;
    let gl = webgl2_backend();
    let err = shader::build_program(&gl, VERTEX, FRAGMENT).unwrap_err();
    assert!(matches!(err, Error::ProgramLink { .. }));
}
