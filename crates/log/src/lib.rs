//! Logging setup for Starhunter binaries.
//!
//! ```no_run
//! let _guard = starhunter_log::auto_init()?;
//! tracing::info!("ready");
//! # Ok::<(), starhunter_log::LogError>(())
//! ```
//!
//! Configuration comes from `STARHUNTER_LOG` (or `RUST_LOG`) for the
//! filter and `STARHUNTER_LOG_FORMAT` (`compact`, `pretty`, `json`) for the
//! output shape. Logs always go to stderr so stdout stays free for data.

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initialize logging from the environment.
pub fn auto_init() -> LogResult<LoggerGuard> {
    init_with(Config::from_env())
}

/// Initialize logging with an explicit configuration.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
