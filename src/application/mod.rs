//! Application layer - command handlers orchestrating the domain and ports.

pub mod handlers;
