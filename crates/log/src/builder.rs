//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

/// Builds the format layer with the display options every format shares.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr) => {
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
    };
}

/// Installs `Registry + filter + fmt` as the global subscriber.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))
    };
}

/// Logger builder
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the filter directives
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse the filter without installing anything.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Filter`] if the directives are malformed.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })
    }

    /// Build and install the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn init(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = &self.config.display;

        match self.config.format {
            Format::Pretty => init_subscriber!(filter, create_fmt_layer!(pretty, display))?,
            Format::Compact => init_subscriber!(filter, create_fmt_layer!(compact, display))?,
            Format::Json => init_subscriber!(
                filter,
                create_fmt_layer!(json, display).with_current_span(true)
            )?,
        }

        tracing::debug!(level = %self.config.level, format = ?self.config.format, "logger initialized");
        Ok(())
    }
}
