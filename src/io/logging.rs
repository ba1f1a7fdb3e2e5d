//! Diagnostic logging setup

use log::LevelFilter;

/// Initialize the `env_logger` backend for the `log` facade
///
/// `RUST_LOG` overrides the requested level when set. Calling this more than once
/// keeps the first logger.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
