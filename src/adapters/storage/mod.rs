//! Storage adapters for the answer store port.

pub mod file_answer_store;
pub mod in_memory_answer_store;

pub use file_answer_store::FileAnswerStore;
pub use in_memory_answer_store::InMemoryAnswerStore;
