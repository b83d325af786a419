use std::fmt;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum IntakeError {
    /// Invalid or missing configuration.
    Config(String),
    /// Error interacting with the remote GraphQL API.
    RemoteApi(String),
    /// A response payload could not be decoded.
    Decode(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<IntakeError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for IntakeError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IntakeError::RemoteApi(msg) => write!(f, "Remote API error: {}", msg),
            IntakeError::Decode(msg) => write!(f, "Decode error: {}", msg),
            IntakeError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for IntakeError {}

impl From<reqwest::Error> for IntakeError {
    /// Converts a `reqwest::Error` into an `IntakeError`.
    fn from(err: reqwest::Error) -> Self {
        IntakeError::RemoteApi(err.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    /// Converts a `serde_json::Error` into an `IntakeError`.
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Decode(err.to_string())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `IntakeError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Arguments
    ///
    /// * `context` - The context message to add.
    fn context(self, context: impl Into<String>) -> Result<T, IntakeError>;

    /// Add context lazily (only evaluated on error).
    ///
    /// # Arguments
    ///
    /// * `f` - A closure that produces the context message.
    #[allow(dead_code)]
    fn with_context<F>(self, f: F) -> Result<T, IntakeError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, IntakeError> {
    fn context(self, context: impl Into<String>) -> Result<T, IntakeError> {
        self.map_err(|e| IntakeError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, IntakeError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IntakeError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}

/// Extension for serde_json::Error to add context
impl<T> ResultExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<String>) -> Result<T, IntakeError> {
        self.map_err(|e| IntakeError::WithContext {
            source: Box::new(IntakeError::Decode(e.to_string())),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, IntakeError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IntakeError::WithContext {
            source: Box::new(IntakeError::Decode(e.to_string())),
            context: f(),
        })
    }
}
