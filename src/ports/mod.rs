//! Ports - Interfaces between the application core and the outside world.
//!
//! Adapters implement these traits; handlers depend on them through
//! `Arc<dyn ...>` so storage and submission backends stay swappable.

pub mod answer_store;
pub mod submission_gateway;

pub use answer_store::{AnswerStore, AnswerStoreError};
pub use submission_gateway::{SubmissionError, SubmissionGateway};
