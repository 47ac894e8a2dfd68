use std::env;

use log::LevelFilter;

/// Environment variable that switches the default level to `Debug`.
pub const DEBUG_ENV_VAR: &str = "ANAGRIND_DEBUG";

/// Initialize logging for the anagrind CLI and tools.
///
/// # Behavior
/// - `Warn` by default, so a normal run writes nothing to stderr.
/// - `Debug` when `debug_enabled` is true.
/// - `RUST_LOG`, if set, overrides both.
/// - Records go to stderr without timestamps, module paths or targets, so the
///   match list on stdout stays clean.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from a test harness) is harmless; keep the first logger
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

/// `true` when [`DEBUG_ENV_VAR`] is present in the environment.
#[must_use]
pub fn debug_requested() -> bool {
    env::var_os(DEBUG_ENV_VAR).is_some()
}
