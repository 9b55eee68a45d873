//! Shared value objects and error types used across the domain.

mod errors;
mod ids;
mod progress;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use progress::ProgressFraction;
pub use timestamp::Timestamp;
