use std::sync::OnceLock;

use tracing_subscriber::layer::*;
use tracing_subscriber::util::*;

use crate::config::Config;

/// Installs a global `tracing` subscriber
///
/// The level defaults to `DEBUG` if `MAGICKWAND_DEBUG` is set and to `ERROR`
/// otherwise. `RUST_LOG` overrides it.
pub fn init() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let default_level = if Config::cached().debug {
            tracing_subscriber::filter::LevelFilter::DEBUG
        } else {
            tracing_subscriber::filter::LevelFilter::ERROR
        };

        let result = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(default_level.into())
                    .from_env_lossy(),
            )
            .with(tracing_subscriber::fmt::Layer::default().compact())
            .try_init();

        if result.is_ok() {
            tracing::debug!("Initialized logging");
        }
    });
}
