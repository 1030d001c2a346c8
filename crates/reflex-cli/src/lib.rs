#![deny(missing_docs)]
#![doc = "Subcommands, configuration and logging setup behind the `reflex` binary."]

pub mod commands;
pub mod config;

use tracing_subscriber::EnvFilter;

pub use config::CliConfig;

/// Installs a compact stderr subscriber. `RUST_LOG` overrides `level`.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
