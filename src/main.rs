//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on a local port (`SPINQUAD_PORT`, default 8000).

use std::io;
use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

use spinquad_wasm::logging::{init_logging, LoggingConfig};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("SPINQUAD_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid SPINQUAD_PORT={raw:?}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() -> io::Result<()> {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return Ok(());
    }
    init_logging(LoggingConfig::default());

    log::info!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => {
            log::error!("wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    let port = port();
    log::info!("Launching local server at http://127.0.0.1:{port} …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Keep process alive while the server runs.
    loop {
        if let Some(status) = server.try_wait()? {
            log::error!("http server exited with {status}");
            return Ok(());
        }
        thread::sleep(Duration::from_secs(1));
    }
}
