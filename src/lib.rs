//! A white quad spinning on a WebGL2 canvas.
//!
//! Every ten seconds the spin direction flips; every twenty seconds the quad
//! switches between a filled strip and a half-size outline.

pub mod backend;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod renderer;
pub mod schedule;
pub mod shader;
pub mod state;
pub mod transform;

pub use config::{DemoConfig, ScaleMode};
pub use error::Error;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::DemoConfig;
    use crate::logging;

    mod render;
    mod timers;
    mod webgl;

    pub use render::start;
    pub use webgl::WebGl2Backend;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        logging::init_logging(logging::LoggingConfig::default());
    }

    /// Starts the demo inside the element with id `container_id`.
    #[wasm_bindgen]
    pub fn run(container_id: &str) -> Result<(), JsValue> {
        let config = DemoConfig::new().container_id(container_id);
        start(config)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
