use async_trait::async_trait;

use crate::{JobFailure, JobId};

/// An opaque unit of work pulled from a queue.
///
/// The handler never inspects a job's payload; it only needs a stable
/// identity for retry tracking and the ability to run the work. `id()` must
/// be deterministic and survive bury/redeliver cycles so attempt counts
/// accumulate across redeliveries of the same logical job.
#[async_trait]
pub trait Job: Send + Sync {
    /// Stable identity of this job, used as the retry-tracking key together
    /// with the queue name.
    fn id(&self) -> JobId;

    /// Perform the unit of work.
    ///
    /// May block or take arbitrary time; the handler imposes no timeout.
    /// Timeout and cancellation, if needed, belong inside this boundary.
    async fn execute(&self) -> Result<(), JobFailure>;
}
