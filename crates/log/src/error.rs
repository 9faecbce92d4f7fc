/// Errors raised while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// An unknown output format was requested.
    #[error("unknown log format '{0}'")]
    Format(String),

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    Init(String),
}

/// Result alias for logging operations.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = LogError::Filter {
            filter: "debug[".into(),
            reason: "syntax error".into(),
        };
        assert_eq!(err.to_string(), "invalid filter 'debug[': syntax error");
        assert_eq!(
            LogError::Format("xml".into()).to_string(),
            "unknown log format 'xml'"
        );
    }
}
