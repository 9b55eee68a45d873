//! Submission adapters for the submission gateway port.

pub mod logging_gateway;

pub use logging_gateway::LoggingSubmissionGateway;
