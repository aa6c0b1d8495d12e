//! Error types for Tally

use std::collections::HashMap;
use thiserror::Error;

/// Context information attached to errors to aid in debugging
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation that was being performed when the error occurred
    pub operation: String,
    /// Component or module where the error occurred
    pub component: String,
    /// Additional contextual data
    pub metadata: HashMap<String, String>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            component: component.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add metadata to the context
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Format context for logging
    pub fn format_for_log(&self) -> String {
        let mut parts = vec![
            format!("operation={}", self.operation),
            format!("component={}", self.component),
        ];

        if !self.metadata.is_empty() {
            let mut pairs: Vec<_> = self
                .metadata
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            parts.push(format!("metadata=[{}]", pairs.join(", ")));
        }

        parts.join(", ")
    }
}

/// Main error type for Tally operations
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Initialization error: {message}")]
    Initialization {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        context: Option<ErrorContext>,
    },

    #[error("Unrecognised input event: {input:?}")]
    InvalidInput { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TallyError {
    /// Create an initialization error
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::Initialization {
            message: msg.into(),
            context: None,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration {
            message: msg.into(),
            context: None,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(input: S) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    /// Attach context to errors that carry it. Other variants are returned unchanged.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        match self {
            Self::Initialization { message, .. } => Self::Initialization {
                message,
                context: Some(ctx),
            },
            Self::Configuration { message, .. } => Self::Configuration {
                message,
                context: Some(ctx),
            },
            other => other,
        }
    }

    /// Context attached to this error, if any
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Initialization { context, .. } | Self::Configuration { context, .. } => {
                context.as_ref()
            }
            _ => None,
        }
    }
}

/// Result type alias for Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

/// Alternative result type alias
pub type TallyResult<T> = Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::configuration("missing field");
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = TallyError::invalid_input("jump");
        assert_eq!(err.to_string(), "Unrecognised input event: \"jump\"");
    }

    #[test]
    fn test_with_context() {
        let ctx = ErrorContext::new("load", "config").with_metadata("path", "tally.ron");
        let err = TallyError::configuration("bad extension").with_context(ctx);

        let ctx = err.context().expect("context attached");
        assert_eq!(ctx.operation, "load");
        assert_eq!(
            ctx.format_for_log(),
            "operation=load, component=config, metadata=[path=tally.ron]"
        );
    }

    #[test]
    fn test_context_ignored_for_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = TallyError::from(io).with_context(ErrorContext::new("read", "config"));
        assert!(err.context().is_none());
    }
}
