use tracing::{error, warn};

use crate::JobFailure;

/// Destination for per-failure diagnostics.
///
/// This is the only observability contract the handler owes its
/// surroundings: every recoverable failure produces one warning-level entry
/// and every exhausted failure one error-level entry, each carrying the
/// failure message, the cause chain, and the captured trace. The sink
/// receives the [`JobFailure`] directly so the chain survives without
/// re-wrapping.
pub trait DiagnosticSink: Send + Sync {
    /// Record a recoverable failure (the job will be retried)
    fn warning(&self, message: &str, failure: &JobFailure);

    /// Record an exhausted failure (the job has been dropped)
    fn error(&self, message: &str, failure: &JobFailure);
}

/// Default sink emitting structured `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn warning(&self, message: &str, failure: &JobFailure) {
        warn!(
            exception = %failure.render_chain(),
            stack_trace = %failure.trace(),
            "{message}"
        );
    }

    fn error(&self, message: &str, failure: &JobFailure) {
        error!(
            exception = %failure.render_chain(),
            stack_trace = %failure.trace(),
            "{message}"
        );
    }
}
