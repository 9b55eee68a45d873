//! Adapters - Concrete implementations of the ports.

pub mod storage;
pub mod submission;
