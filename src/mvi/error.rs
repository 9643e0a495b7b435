//! Error types for the MVI pipeline.

use thiserror::Error;

/// Opaque failure payload carried by `Failure` results and by state.
///
/// Captures the display message of the failing error together with the
/// messages of its `source()` chain, so it stays `Clone + Eq` and can live
/// inside view state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MviError {
    message: String,
    causes: Vec<String>,
}

impl MviError {
    /// Create an error with a message and no causes.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
        }
    }

    /// Capture an error and its whole source chain.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: error.to_string(),
            causes,
        }
    }

    /// Append a cause to the chain.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the underlying causes, outermost first.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

/// Errors raised by the pipeline itself rather than by a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// An action reached the processor with no route for its kind.
    #[error("Unknown action kind: {kind}")]
    UnknownAction { kind: String },

    /// The pipeline task has stopped and no longer accepts intents.
    #[error("Pipeline is closed")]
    Closed,
}
