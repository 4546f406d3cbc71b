//! Platform abstraction layer
//!
//! Handles browser/native differences for logging setup. Windowing, input
//! polling and text rendering belong to the host frontend.

/// Install the logger for the current platform.
///
/// Native builds log through `env_logger` (`RUST_LOG` selects verbosity),
/// wasm builds forward to the browser console and hook panics there too.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // A host that already installed a logger keeps it
    if env_logger::try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }
}
