//! Bounded-retry job processing for message-queue workers.
//!
//! Given one dequeued job and its originating queue, [`JobOutcomeHandler`]
//! executes the job, decides success/failure, and applies a bounded-retry
//! policy before dispatching exactly one terminal queue action:
//!
//! - **delete** on success ([`ProcessOutcome::Success`])
//! - **bury** on a recoverable failure ([`ProcessOutcome::FailureRecoverable`])
//! - **delete** once the retry budget is exhausted ([`ProcessOutcome::Failure`])
//!
//! Attempt counts are tracked per `(job identity, queue name)` pair by a
//! [`RetryCounter`], so the same job body retried through a different queue
//! keeps an independent budget. Queues opt in through
//! [`QueueCapabilities`]; anything less than the full retry-aware set routes
//! to [`ProcessOutcome::NotHandled`] so a composed chain of handlers can try
//! the next one.
//!
//! The transport itself (connections, acknowledgment wire protocol,
//! redelivery timing) and the generic worker loop are collaborators behind
//! the [`Queue`] and [`Job`] traits, not part of this crate.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use retry_worker::prelude::*;
//! use retry_worker::{QueueCapabilities, WorkerResult};
//! use std::sync::Arc;
//!
//! struct Emails;
//!
//! #[async_trait]
//! impl Queue for Emails {
//!     fn name(&self) -> &str {
//!         "emails"
//!     }
//!
//!     fn capabilities(&self) -> QueueCapabilities {
//!         QueueCapabilities::retry_aware_set()
//!     }
//!
//!     async fn delete(&self, _job: &dyn Job) -> WorkerResult<()> {
//!         // ack against the transport
//!         Ok(())
//!     }
//!
//!     async fn bury(&self, _job: &dyn Job) -> WorkerResult<()> {
//!         // park for redelivery
//!         Ok(())
//!     }
//! }
//!
//! struct SendEmail;
//!
//! #[async_trait]
//! impl Job for SendEmail {
//!     fn id(&self) -> JobId {
//!         JobId::from("email-42")
//!     }
//!
//!     async fn execute(&self) -> Result<(), JobFailure> {
//!         Err(JobFailure::new("smtp connection refused").with_code(421))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> WorkerResult<()> {
//!     let counter = Arc::new(InMemoryRetryCounter::new(3));
//!     let handler = JobOutcomeHandler::new(counter);
//!
//!     // First three failures bury the job for redelivery, the fourth
//!     // deletes it for good.
//!     let outcome = handler.process(&SendEmail, &Emails).await?;
//!     assert_eq!(outcome, ProcessOutcome::FailureRecoverable);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handler;
pub mod job;
pub mod observability;
pub mod queue;
pub mod retry;
pub mod types;

pub use error::{JobFailure, WorkerError, WorkerResult};
pub use handler::JobOutcomeHandler;
pub use job::Job;
pub use observability::{DiagnosticSink, TracingSink};
pub use queue::Queue;
pub use retry::{InMemoryRetryCounter, RetryConfig, RetryCounter};
pub use types::{JobId, ProcessOutcome, QueueCapabilities};

/// Common imports for implementing jobs, queues, and workers
pub mod prelude {
    pub use crate::{
        InMemoryRetryCounter, Job, JobFailure, JobId, JobOutcomeHandler, ProcessOutcome, Queue,
        RetryCounter,
    };

    pub use async_trait::async_trait;
}
