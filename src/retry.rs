use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::JobId;

/// Composite retry key: the same job identity retried through a different
/// queue name is tracked independently.
type AttemptKey = (JobId, String);

/// Configuration for retry counting
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Maximum number of retries per (job identity, queue name) pair.
    /// `0` means a failing job is never retried.
    pub max_retries: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3 }
    }
}

/// Attempt counting for failed jobs, keyed by `(job identity, queue name)`.
///
/// Implementations own the storage and eviction policy. The in-memory
/// counter below is the single-process default; multi-process workers should
/// substitute an implementation backed by an external atomic store so the
/// increment-and-compare cannot race across workers.
#[async_trait]
pub trait RetryCounter: Send + Sync {
    /// Spend one attempt for the key and report whether the retry budget
    /// still permits another.
    ///
    /// Each call during a failure path corresponds to one physical failed
    /// attempt. Invariant: once `max_retries` failures have been recorded
    /// for a key, every further call returns `false`.
    async fn can_retry(&self, job_id: &JobId, queue_name: &str) -> bool;

    /// Evict the record for a key. Called once the job is finally deleted,
    /// whether through success or exhaustion.
    async fn reset(&self, job_id: &JobId, queue_name: &str);
}

/// In-memory retry counter for single-process workers.
///
/// The count is incremented and compared under one lock acquisition, so
/// sequential bursts and concurrent tasks within the process cannot bypass
/// the ceiling.
pub struct InMemoryRetryCounter {
    config: RetryConfig,
    attempts: Mutex<HashMap<AttemptKey, u32>>,
}

impl InMemoryRetryCounter {
    /// Create a counter allowing `max_retries` retries per key
    pub fn new(max_retries: u32) -> Self {
        Self::with_config(RetryConfig { max_retries })
    }

    /// Create a counter with explicit configuration
    pub fn with_config(config: RetryConfig) -> Self {
        Self {
            config,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Number of failed attempts recorded for a key so far
    pub fn attempts(&self, job_id: &JobId, queue_name: &str) -> u32 {
        let attempts = self.attempts.lock();
        attempts
            .get(&(job_id.clone(), queue_name.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for InMemoryRetryCounter {
    fn default() -> Self {
        Self::with_config(RetryConfig::default())
    }
}

#[async_trait]
impl RetryCounter for InMemoryRetryCounter {
    async fn can_retry(&self, job_id: &JobId, queue_name: &str) -> bool {
        let mut attempts = self.attempts.lock();
        let count = attempts
            .entry((job_id.clone(), queue_name.to_string()))
            .or_insert(0);
        *count = count.saturating_add(1);
        *count <= self.config.max_retries
    }

    async fn reset(&self, job_id: &JobId, queue_name: &str) {
        let mut attempts = self.attempts.lock();
        attempts.remove(&(job_id.clone(), queue_name.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn budget_exhausts_after_max_retries() {
        let counter = InMemoryRetryCounter::new(2);
        let id = JobId::from("job-1");

        assert!(counter.can_retry(&id, "default").await);
        assert!(counter.can_retry(&id, "default").await);
        assert!(!counter.can_retry(&id, "default").await);
        assert!(!counter.can_retry(&id, "default").await);
    }

    #[tokio::test]
    async fn zero_budget_never_retries() {
        let counter = InMemoryRetryCounter::new(0);
        let id = JobId::from("job-1");

        assert!(!counter.can_retry(&id, "default").await);
    }

    #[tokio::test]
    async fn counts_are_independent_per_queue_name() {
        let counter = InMemoryRetryCounter::new(1);
        let id = JobId::from("job-1");

        assert!(counter.can_retry(&id, "orders").await);
        assert!(!counter.can_retry(&id, "orders").await);

        // Same identity on another queue starts with a fresh budget
        assert!(counter.can_retry(&id, "invoices").await);
    }

    #[tokio::test]
    async fn counts_are_independent_per_job_identity() {
        let counter = InMemoryRetryCounter::new(1);

        assert!(counter.can_retry(&JobId::from("a"), "default").await);
        assert!(counter.can_retry(&JobId::from("b"), "default").await);
    }

    #[tokio::test]
    async fn reset_evicts_the_record() {
        let counter = InMemoryRetryCounter::new(1);
        let id = JobId::from("job-1");

        assert!(counter.can_retry(&id, "default").await);
        assert!(!counter.can_retry(&id, "default").await);
        assert_eq!(counter.attempts(&id, "default"), 2);

        counter.reset(&id, "default").await;
        assert_eq!(counter.attempts(&id, "default"), 0);
        assert!(counter.can_retry(&id, "default").await);
    }

    #[tokio::test]
    async fn ceiling_holds_under_concurrent_bursts() {
        use std::sync::Arc;

        let counter = Arc::new(InMemoryRetryCounter::new(5));
        let id = JobId::from("job-1");

        let mut handles = Vec::new();
        for _ in 0..20 {
            let counter = counter.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move {
                counter.can_retry(&id, "default").await
            }));
        }

        let mut allowed = 0;
        for handle in handles {
            if handle.await.unwrap() {
                allowed += 1;
            }
        }

        assert_eq!(allowed, 5);
    }
}
