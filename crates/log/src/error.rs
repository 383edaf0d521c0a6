//! Error handling for trellis-log

/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter directives could not be parsed
    #[error("invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// Unknown output format name
    #[error("unknown log format '{0}'")]
    Format(String),

    /// A global subscriber is already installed
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for logger setup
pub type LogResult<T> = Result<T, LogError>;
