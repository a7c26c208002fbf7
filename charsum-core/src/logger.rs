use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the env_logger backend once per process
///
/// Defaults to `info`, with `charsum_core` at `debug`. `RUST_LOG` overrides both.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("charsum_core", LevelFilter::Debug)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host binary.
        let _ = builder.try_init();
    });
}
