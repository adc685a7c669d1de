use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for worker operations
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Infrastructure errors for the outcome handler and its collaborators.
///
/// These propagate to the caller unchanged; unlike [`JobFailure`] they are
/// never absorbed into a [`ProcessOutcome`](crate::ProcessOutcome).
#[derive(Error, Debug, Clone)]
pub enum WorkerError {
    #[error("queue `{queue}` does not support `{operation}`")]
    Unsupported {
        queue: String,
        operation: &'static str,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("retry store error: {0}")]
    RetryStore(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Descriptor of a failed job execution.
///
/// Carries everything the diagnostic contract requires: the failure message,
/// an optional numeric code, the causal chain (preserved via
/// [`std::error::Error::source`]), and a trace captured at construction. All execution
/// failures are treated uniformly for retry decisions - there is no
/// retryable/permanent split; the retry budget alone decides.
#[derive(Debug, Clone)]
pub struct JobFailure {
    message: String,
    code: Option<i64>,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
    trace: String,
}

impl JobFailure {
    /// Create a failure with the given message, capturing the current trace.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            cause: None,
            trace: Backtrace::force_capture().to_string(),
        }
    }

    /// Create a failure from an underlying error, keeping it as the cause.
    pub fn from_error(err: impl StdError + Send + Sync + 'static) -> Self {
        let message = err.to_string();
        Self::new(message).caused_by(err)
    }

    /// Attach a numeric failure code
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the underlying cause, preserving its own chain
    pub fn caused_by(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Replace the captured trace with one supplied by the execution boundary
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    /// The failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The numeric failure code, if any
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The trace captured when the failure was constructed
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// The direct cause, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Render the full causal chain as a single diagnostic string.
    ///
    /// Format: `message (code N): cause: cause-of-cause: ...`
    pub fn render_chain(&self) -> String {
        let mut rendered = match self.code {
            Some(code) => format!("{} (code {})", self.message, code),
            None => self.message.clone(),
        };

        let mut source = self.source();
        while let Some(err) = source {
            rendered.push_str(": ");
            rendered.push_str(&err.to_string());
            source = err.source();
        }

        rendered
    }
}

impl fmt::Display for JobFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for JobFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|c| &**c as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn failure_preserves_message_code_and_cause() {
        let root = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let failure = JobFailure::new("smtp handshake failed")
            .with_code(421)
            .caused_by(root);

        assert_eq!(failure.message(), "smtp handshake failed");
        assert_eq!(failure.code(), Some(421));
        assert!(failure.cause().is_some());
        assert_eq!(
            failure.source().unwrap().to_string(),
            "connection refused"
        );
    }

    #[test]
    fn render_chain_walks_causes() {
        let root = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let failure = JobFailure::new("smtp handshake failed")
            .with_code(421)
            .caused_by(root);

        assert_eq!(
            failure.render_chain(),
            "smtp handshake failed (code 421): connection refused"
        );
    }

    #[test]
    fn trace_is_captured_by_default() {
        let failure = JobFailure::new("boom");
        assert!(!failure.trace().is_empty());
    }

    #[test]
    fn from_error_takes_message_and_cause() {
        let root = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
        let failure = JobFailure::from_error(root);

        assert_eq!(failure.message(), "read timed out");
        assert!(failure.cause().is_some());
    }
}
