//! Command processor configuration.
//!
//! ## Loading Order
//!
//! 1. `SOG_CONFIG` environment variable (path to TOML file)
//! 2. `sog.toml` in the current working directory
//! 3. Built-in defaults (see [`defaults`])
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(Settings::load());
//!
//! // Anywhere in the codebase:
//! let interval = config::get().poll_interval();
//! ```

mod settings;
pub mod defaults;
pub mod validation;

pub use settings::*;

use std::sync::OnceLock;

/// Global settings, initialized once at startup.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Initialize the global settings.
///
/// A second call, or a call after `get()` has fallen back to defaults, is
/// logged and ignored.
pub fn init(settings: Settings) {
    if SETTINGS.set(settings).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// Get a reference to the global settings, falling back to the built-in
/// defaults when `init()` has not been called (library use, tests).
pub fn get() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}

