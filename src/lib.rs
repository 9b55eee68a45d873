//! Nutri Intake - Adaptive Intake-Questionnaire Engine
//!
//! This crate implements the branching intake wizard used by a nutrition
//! practice: a linear-looking questionnaire whose sequence, numbering,
//! section labels, and completion rules all pivot on a dietary-style answer
//! given mid-survey.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
