use log::LevelFilter;
use std::env;

/// Initialize logging to stderr at `Info` level, or `Debug` if `debug` is set.
/// `RUST_LOG` overrides the level when it is set.
pub fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a logger may already be installed, e.g. by a test harness
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {:?} level", level);
    }
}
