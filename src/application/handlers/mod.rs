//! Command handlers, grouped by aggregate.

pub mod wizard;
