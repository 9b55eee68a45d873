//! DietBranch enum - the three mutually exclusive dietary tracks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The dietary track chosen mid-survey.
///
/// Omnivore is the default track; the two variant tracks override the wording
/// of some diet questions and insert one compound "excluded foods" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietBranch {
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietBranch {
    /// Returns all branches in canonical order.
    pub fn all() -> &'static [DietBranch; 3] {
        &[
            DietBranch::Omnivore,
            DietBranch::Vegetarian,
            DietBranch::Vegan,
        ]
    }

    /// Returns the two variant branches (those with an extra compound question).
    pub fn variants() -> &'static [DietBranch; 2] {
        &[DietBranch::Vegetarian, DietBranch::Vegan]
    }

    /// Returns true if this branch carries the extra compound question.
    pub fn is_variant(&self) -> bool {
        !matches!(self, DietBranch::Omnivore)
    }

    /// Returns the stable identifier used in compound answer keys.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            DietBranch::Omnivore => "omnivore",
            DietBranch::Vegetarian => "vegetarian",
            DietBranch::Vegan => "vegan",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DietBranch::Omnivore => "Omnivore",
            DietBranch::Vegetarian => "Lacto-ovo vegetarian",
            DietBranch::Vegan => "Vegan",
        }
    }
}

impl Default for DietBranch {
    fn default() -> Self {
        DietBranch::Omnivore
    }
}

impl fmt::Display for DietBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DietBranch {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omnivore" => Ok(DietBranch::Omnivore),
            "vegetarian" => Ok(DietBranch::Vegetarian),
            "vegan" => Ok(DietBranch::Vegan),
            other => Err(ValidationError::invalid_format(
                "diet_branch",
                format!("unknown branch '{}'", other),
            )),
        }
    }
}
