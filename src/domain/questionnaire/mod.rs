//! Questionnaire engine - the adaptive intake wizard core.
//!
//! A single linear-looking wizard whose question sequence, numbering, section
//! labels, and completion rules branch on the dietary-style answer given
//! mid-survey. Structured as:
//!
//! - [`DietBranch`] / [`QuestionKind`] - the two small enums everything pivots on
//! - [`AnswerSheet`] - persisted answers keyed by [`AnswerKey`]
//! - [`QuestionCatalog`] - one base bank plus sparse per-branch overrides
//! - [`BranchResolver`] - all index arithmetic in one place
//! - [`SectionLabeler`] - display number to section name
//! - [`CompletionValidator`] - per-kind answerability policy
//! - [`IntakeWizard`] - the navigation state machine tying it together

mod answer;
mod branch;
mod catalog;
mod kind;
mod resolver;
mod sections;
mod validator;
mod view;
mod wizard;

pub use answer::{AnswerKey, AnswerSheet, AnswerValue, QuestionIndex};
pub use branch::DietBranch;
pub use catalog::QuestionCatalog;
pub use kind::QuestionKind;
pub use resolver::BranchResolver;
pub use sections::SectionLabeler;
pub use validator::CompletionValidator;
pub use view::{InputAffordance, QuestionView, WizardView};
pub use wizard::{IntakeWizard, WizardPosition};
