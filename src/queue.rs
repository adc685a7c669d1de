use async_trait::async_trait;

use crate::{Job, QueueCapabilities, WorkerError, WorkerResult};

/// Named channel jobs are drawn from, and the mutation surface the outcome
/// handler dispatches against.
///
/// Transports advertise what they support through [`capabilities`]; the
/// handler only dispatches `delete`/`bury` against queues advertising the
/// full retry-aware set. The default method bodies reject both mutations so
/// consume-only transports can implement just `name` and `capabilities`.
///
/// Errors returned by `delete`/`bury` are transport-level and propagate to
/// the worker loop unchanged - the handler never absorbs them.
///
/// [`capabilities`]: Queue::capabilities
#[async_trait]
pub trait Queue: Send + Sync {
    /// Stable name of this queue, used as part of the retry-tracking key
    fn name(&self) -> &str;

    /// Feature set this transport supports
    fn capabilities(&self) -> QueueCapabilities {
        QueueCapabilities::minimal()
    }

    /// Permanently remove (acknowledge) a job
    async fn delete(&self, _job: &dyn Job) -> WorkerResult<()> {
        Err(WorkerError::Unsupported {
            queue: self.name().to_string(),
            operation: "delete",
        })
    }

    /// Return a job to the queue for a later retry attempt.
    ///
    /// How "later" works (dead-letter TTL, redelivery delay) is the
    /// transport's concern.
    async fn bury(&self, _job: &dyn Job) -> WorkerResult<()> {
        Err(WorkerError::Unsupported {
            queue: self.name().to_string(),
            operation: "bury",
        })
    }
}
