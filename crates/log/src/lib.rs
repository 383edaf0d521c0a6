//! # trellis-log
//!
//! Logging setup for the `trellis` binary: a `tracing-subscriber` registry
//! with an `EnvFilter` and a pretty, compact, or JSON format layer writing to
//! stderr.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! // Reads TRELLIS_LOG / RUST_LOG and TRELLIS_LOG_FORMAT
//! trellis_log::init().expect("logger");
//! tracing::info!("ready");
//! ```

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initialize logging from environment variables.
///
/// # Errors
///
/// See [`LoggerBuilder::init`].
pub fn init() -> LogResult<()> {
    init_with(Config::from_env())
}

/// Initialize logging with an explicit configuration.
///
/// # Errors
///
/// See [`LoggerBuilder::init`].
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).init()
}
