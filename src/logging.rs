//! Logger initialization.
//!
//! Everything in the crate logs through the `log` facade. In the browser the
//! records go to the devtools console; on native targets `env_logger` is used.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level that reaches the sink. Native builds let `RUST_LOG`
    /// override it.
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global sink once and applies `config.level`.
///
/// The sink is installed on the first call only; the level is applied on
/// every call, so a later config can raise or lower verbosity. On native
/// targets a set `RUST_LOG` takes precedence over the level.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(install);
    if !env_filter_active() {
        log::set_max_level(config.level);
    }
    log::debug!("logging level {}", config.level);
}

#[cfg(target_arch = "wasm32")]
fn env_filter_active() -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
fn env_filter_active() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

#[cfg(target_arch = "wasm32")]
fn install() {
    static LOGGER: console::ConsoleLogger = console::ConsoleLogger;
    let _ = log::set_logger(&LOGGER);
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filter) => builder.parse_filters(&filter),
        // Verbosity is gated by `log::max_level`, set in `init_logging`.
        Err(_) => builder.filter_level(LevelFilter::Trace),
    };
    // Tests may have installed a logger already.
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    /// Forwards records to `console.*` by level.
    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
            match record.level() {
                Level::Error => console::error_1(&line),
                Level::Warn => console::warn_1(&line),
                Level::Info => console::info_1(&line),
                Level::Debug | Level::Trace => console::debug_1(&line),
            }
        }

        fn flush(&self) {}
    }
}
