//! Domain layer - pure engine logic with no I/O.

pub mod foundation;
pub mod questionnaire;
