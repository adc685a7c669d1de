use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal status of one job-processing attempt.
///
/// Every call to [`JobOutcomeHandler::process`](crate::JobOutcomeHandler::process)
/// resolves to exactly one of these. `NotHandled` is the routing signal for
/// queues without the retry-aware capability set and carries no queue side
/// effects; the other three each correspond to exactly one queue mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessOutcome {
    /// Execution completed; the job was deleted from the queue.
    Success,

    /// Execution failed with retry budget remaining; the job was buried for
    /// a later attempt.
    FailureRecoverable,

    /// Execution failed with the retry budget exhausted; the job was deleted.
    Failure,

    /// The supplied queue lacks the retry-aware capability set; nothing was
    /// executed or mutated. A composed handler chain should try the next
    /// handler.
    NotHandled,
}

impl ProcessOutcome {
    /// Whether the job completed successfully
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the job failed permanently (retry budget exhausted)
    pub fn is_terminal_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }

    /// Whether this handler actually processed the job
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::NotHandled)
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::FailureRecoverable => "failure_recoverable",
            Self::Failure => "failure",
            Self::NotHandled => "not_handled",
        };
        write!(f, "{}", s)
    }
}
