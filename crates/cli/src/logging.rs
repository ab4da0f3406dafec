//! Logger setup for the CLI.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "gl_sketches_core=trace"). Without one, `RUST_LOG` is consulted, then
/// the level falls back to `info`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.format_timestamp(None).init();
        log::debug!("logging initialized");
    });
}
