use serde::{Deserialize, Serialize};

/// Queue capabilities - explicit feature detection
///
/// The outcome handler only processes jobs from queues that advertise the
/// full retry-aware set (`delete` + `bury`); anything less routes to
/// [`ProcessOutcome::NotHandled`](crate::ProcessOutcome::NotHandled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueCapabilities {
    /// Support for permanently removing (acknowledging) a job
    pub delete: bool,

    /// Support for parking a job for a later retry attempt
    pub bury: bool,
}

impl Default for QueueCapabilities {
    fn default() -> Self {
        Self::minimal()
    }
}

impl QueueCapabilities {
    /// Minimal capabilities (plain consume-only queue)
    pub fn minimal() -> Self {
        Self {
            delete: false,
            bury: false,
        }
    }

    /// The capability set required by the retry-aware outcome handler
    pub fn retry_aware_set() -> Self {
        Self {
            delete: true,
            bury: true,
        }
    }

    /// Whether the queue supports the full retry-aware set
    pub fn retry_aware(&self) -> bool {
        self.delete && self.bury
    }

    /// Check if a specific feature is supported
    pub fn supports(&self, feature: &str) -> bool {
        match feature {
            "delete" => self.delete,
            "bury" => self.bury,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_aware_requires_both_operations() {
        assert!(QueueCapabilities::retry_aware_set().retry_aware());
        assert!(!QueueCapabilities::minimal().retry_aware());

        let delete_only = QueueCapabilities {
            delete: true,
            bury: false,
        };
        assert!(!delete_only.retry_aware());
    }

    #[test]
    fn supports_by_name() {
        let caps = QueueCapabilities::retry_aware_set();
        assert!(caps.supports("delete"));
        assert!(caps.supports("bury"));
        assert!(!caps.supports("priority"));
    }
}
