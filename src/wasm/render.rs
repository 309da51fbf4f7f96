use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, HtmlCanvasElement, WebGl2RenderingContext as GL, Window};

use super::timers;
use super::webgl::WebGl2Backend;
use crate::config::DemoConfig;
use crate::error::{logged, Error, Result};
use crate::logging;
use crate::renderer::Renderer;
use crate::schedule::{EventQueue, Schedule};

/// Size of a `<canvas>` with no explicit dimensions.
const DEFAULT_CANVAS_SIZE: (u32, u32) = (300, 150);

fn get_window() -> Result<Window> {
    window().ok_or_else(|| logged(Error::WindowUnavailable))
}

fn get_document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| logged(Error::DocumentUnavailable))
}

/// Creates a canvas inside `container`, sized explicitly or to the
/// container's client area.
fn create_canvas_in(
    document: &Document,
    container: &Element,
    size: Option<(u32, u32)>,
) -> Result<HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;
    let (width, height) = size.unwrap_or_else(|| {
        let w = container.client_width();
        let h = container.client_height();
        if w > 0 && h > 0 {
            (w as u32, h as u32)
        } else {
            DEFAULT_CANVAS_SIZE
        }
    });
    canvas.set_width(width);
    canvas.set_height(height);
    container.append_child(&canvas)?;
    Ok(canvas)
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) {
    if let Err(err) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {err:?}");
    }
}

/// Sets up the canvas, context, program and buffer, then starts the timers
/// and the animation-frame loop.
///
/// Nothing is scheduled unless every setup step succeeds. Returns the canvas
/// that was attached to the container.
pub fn start(config: DemoConfig) -> Result<HtmlCanvasElement> {
    logging::init_logging(config.logging.clone());
    config.validate().map_err(logged)?;

    let window = get_window()?;
    let document = get_document(&window)?;
    let container = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| logged(Error::ContainerNotFound(config.container_id.clone())))?;
    let canvas = create_canvas_in(&document, &container, config.canvas_size)?;

    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or_else(|| logged(Error::ContextUnavailable))?
        .dyn_into()
        .map_err(JsValue::from)?;

    let schedule = Schedule::from_config(&config);
    let queue = EventQueue::new();
    let mut renderer = Renderer::new(WebGl2Backend::new(gl), config, queue.clone());
    renderer.initialize(canvas.width(), canvas.height())?;

    timers::register(&window, &schedule, &queue)?;

    // First frame is drawn synchronously, later ones on animation frames.
    renderer.tick();

    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        renderer.tick();

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            request_animation_frame(&frame_window, next);
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_animation_frame(&window, first);
    }
    log::info!("animation started");
    Ok(canvas)
}
