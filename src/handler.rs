use std::sync::Arc;

use tracing::{debug, instrument};

use crate::{
    DiagnosticSink, Job, ProcessOutcome, Queue, RetryCounter, TracingSink, WorkerResult,
};

/// Drives one dequeued job to a terminal outcome.
///
/// Per attempt the state machine is:
///
/// ```text
/// START -> EXECUTING -> [success] -> DELETED  (Success)
/// EXECUTING -> [failure] -> CHECK_RETRY
/// CHECK_RETRY -> [retries remain]    -> BURIED  (FailureRecoverable)
/// CHECK_RETRY -> [retries exhausted] -> DELETED (Failure)
/// ```
///
/// There is no re-entrant state within one `process` call: retrying means
/// the queue redelivers the job later and `process` runs again as a fresh
/// attempt, with the [`RetryCounter`] carrying the accumulated history.
pub struct JobOutcomeHandler {
    retry_counter: Arc<dyn RetryCounter>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl JobOutcomeHandler {
    /// Create a handler with the default `tracing`-backed diagnostic sink
    pub fn new(retry_counter: Arc<dyn RetryCounter>) -> Self {
        Self {
            retry_counter,
            diagnostics: Arc::new(TracingSink::new()),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Execute `job` and dispatch exactly one queue mutation.
    ///
    /// Returns `NotHandled` without side effects when `queue` lacks the
    /// retry-aware capability set, so a composed chain of handlers can fall
    /// back to default processing. Execution failures are absorbed into the
    /// returned outcome; failures raised by `delete`/`bury` themselves
    /// propagate as `Err`.
    #[instrument(skip(self, job, queue), fields(job_id = %job.id(), queue = queue.name()))]
    pub async fn process(&self, job: &dyn Job, queue: &dyn Queue) -> WorkerResult<ProcessOutcome> {
        if !queue.capabilities().retry_aware() {
            debug!("queue is not retry-aware, deferring to default processing");
            return Ok(ProcessOutcome::NotHandled);
        }

        match job.execute().await {
            Ok(()) => {
                queue.delete(job).await?;
                self.retry_counter.reset(&job.id(), queue.name()).await;
                debug!("job completed");
                Ok(ProcessOutcome::Success)
            }
            Err(failure) => {
                let job_id = job.id();

                if self.retry_counter.can_retry(&job_id, queue.name()).await {
                    queue.bury(job).await?;
                    self.diagnostics.warning(failure.message(), &failure);
                    Ok(ProcessOutcome::FailureRecoverable)
                } else {
                    queue.delete(job).await?;
                    self.retry_counter.reset(&job_id, queue.name()).await;
                    self.diagnostics.error(failure.message(), &failure);
                    Ok(ProcessOutcome::Failure)
                }
            }
        }
    }
}
