use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization.
///
/// Holds the configuration that was applied; hold it for the lifetime of
/// the process.
#[derive(Debug)]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Build the fmt layer for one output shape and install it with the filter.
macro_rules! install {
    ($filter:expr, $display:expr, $shape:ident) => {{
        let layer = fmt::layer()
            .$shape()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids);
        Registry::default().with($filter).with(layer).try_init()
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build the filter without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber
    ///
    /// Fails if the filter cannot be parsed or a subscriber is already set.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.filter()?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => install!(filter, display, pretty),
            Format::Compact => install!(filter, display, compact),
            Format::Json => install!(filter, display, json),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
