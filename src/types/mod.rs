pub mod capabilities;
pub mod ids;
pub mod outcome;

pub use capabilities::QueueCapabilities;
pub use ids::JobId;
pub use outcome::ProcessOutcome;
