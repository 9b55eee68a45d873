//! SectionLabeler - maps a display question number to its section heading.
//!
//! A pure step function over 1-based display numbers. Only the base table is
//! maintained by hand; variant tracks derive their boundaries from the same
//! shift constant the resolver uses, so the labeling can never drift from the
//! content-bank remapping.

use super::resolver::{BASE_LEN, EXCLUDED_FOODS_SLOT, SLOT_SHIFT};
use super::DietBranch;

/// Section boundaries over base display numbers: `(first_number, heading)`.
static BASE_SECTIONS: [(usize, &str); 5] = [
    (1, "Identity"),
    (5, "Health History"),
    (10, "Dietary Habits"),
    (17, "Lifestyle"),
    (22, "Goals & Consent"),
];

/// Pure lookup from display number to section heading.
pub struct SectionLabeler;

impl SectionLabeler {
    /// Returns the section heading for a 1-based display number.
    ///
    /// Variant tracks insert one question inside "Dietary Habits", shifting
    /// every later boundary by the resolver's shift constant. Out-of-range
    /// numbers clamp to the nearest valid one.
    pub fn label_for(display_number: usize, branch: DietBranch) -> &'static str {
        let compound_number = EXCLUDED_FOODS_SLOT + 1;
        let effective = if branch.is_variant() && display_number > compound_number {
            display_number - SLOT_SHIFT
        } else {
            display_number
        };
        let effective = effective.clamp(1, BASE_LEN);

        BASE_SECTIONS
            .iter()
            .rev()
            .find(|(first, _)| *first <= effective)
            .map(|(_, heading)| *heading)
            .unwrap_or(BASE_SECTIONS[0].1)
    }

    /// Returns the heading for a 0-based display index.
    pub fn label_for_index(display_index: usize, branch: DietBranch) -> &'static str {
        Self::label_for(display_index + 1, branch)
    }

    /// Returns the base section table (for rendering a table of contents).
    pub fn base_sections() -> &'static [(usize, &'static str)] {
        &BASE_SECTIONS
    }
}
