//! QuestionCatalog - the content banks behind the wizard.
//!
//! One base bank covers the whole default track. The two variant tracks are
//! sparse override maps keyed by base logical slot, plus a per-branch list of
//! food categories for the compound "excluded foods" question. Lookup is pure
//! with the precedence: compound slot, then variant override, then base bank.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::resolver::{BranchResolver, BASE_LEN, EXCLUDED_FOODS_SLOT};
use super::{AnswerSheet, DietBranch};

/// The canonical question wording, one entry per logical slot.
static BASE_BANK: [&str; BASE_LEN] = [
    "What is your full name?",
    "What is your date of birth?",
    "How can we best reach you (phone or email)?",
    "Who referred you to the practice, if anyone?",
    "What prompted you to book a nutrition consultation?",
    "Do you have any diagnosed medical conditions we should know about?",
    "Are you currently taking any medication or supplements?",
    "Do you have any food allergies or intolerances?",
    "How has your weight changed over the last twelve months?",
    "Do you have any digestive complaints (bloating, reflux, irregular transit)?",
    "Which dietary style best describes the way you eat?",
    "Describe a typical day of meals, from waking to bedtime.",
    "How often do you eat meat or fish in a typical week?",
    "How many portions of dairy or eggs do you have per day?",
    "How often do you cook at home versus eat out or order in?",
    "What snacks and drinks do you reach for between meals?",
    "Which foods do you find hardest to give up?",
    "How many hours do you sleep on a typical night?",
    "Describe your physical activity in a typical week.",
    "How would you rate your day-to-day stress level, and why?",
    "How much water do you drink across a day?",
    "Do you drink alcohol, and if so how much per week?",
    "What would a successful outcome of this programme look like for you?",
    "I confirm the information provided is accurate and consent to it being \
     stored in my patient record.",
];

/// Vegetarian wording overrides, keyed by base logical slot.
static VEGETARIAN_OVERRIDES: Lazy<HashMap<usize, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            11,
            "Describe a typical day of vegetarian meals, from waking to bedtime.",
        ),
        (
            12,
            "How often do you rely on eggs or dairy as your main protein source?",
        ),
        (
            13,
            "Which plant proteins (legumes, tofu, seitan) appear in your week, and how often?",
        ),
    ])
});

/// Vegan wording overrides, keyed by base logical slot.
static VEGAN_OVERRIDES: Lazy<HashMap<usize, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            11,
            "Describe a typical day of vegan meals, from waking to bedtime.",
        ),
        (
            12,
            "Which plant proteins anchor your main meals in a typical week?",
        ),
        (13, "Do you supplement vitamin B12, and at what dose?"),
    ])
});

/// Food categories for the vegetarian excluded-foods cluster.
static VEGETARIAN_CATEGORIES: [&str; 4] = ["Red meat", "Poultry", "Fish", "Shellfish"];

/// Food categories for the vegan excluded-foods cluster.
static VEGAN_CATEGORIES: [&str; 6] = [
    "Red meat",
    "Poultry",
    "Fish & shellfish",
    "Eggs",
    "Dairy",
    "Honey",
];

/// Pure lookup over the question banks.
pub struct QuestionCatalog;

impl QuestionCatalog {
    /// Returns the wording for a base logical slot under a branch.
    ///
    /// Variant overrides take precedence over the base bank; the default
    /// branch always reads the base bank. Every in-range slot has wording by
    /// construction.
    pub fn prompt(logical_slot: usize, branch: DietBranch) -> &'static str {
        let overrides: Option<&HashMap<usize, &'static str>> = match branch {
            DietBranch::Omnivore => None,
            DietBranch::Vegetarian => Some(&VEGETARIAN_OVERRIDES),
            DietBranch::Vegan => Some(&VEGAN_OVERRIDES),
        };
        if let Some(text) = overrides.and_then(|map| map.get(&logical_slot)) {
            return text;
        }
        BASE_BANK[logical_slot.min(BASE_LEN - 1)]
    }

    /// Returns the excluded-foods categories for a branch.
    ///
    /// Empty for the default branch, which has no compound question.
    pub fn categories(branch: DietBranch) -> &'static [&'static str] {
        match branch {
            DietBranch::Omnivore => &[],
            DietBranch::Vegetarian => &VEGETARIAN_CATEGORIES,
            DietBranch::Vegan => &VEGAN_CATEGORIES,
        }
    }

    /// Returns the renderable markup for a display index under a branch.
    ///
    /// The compound slot synthesizes one sub-textarea per category, pre-filled
    /// from the sheet by compound answer key. Everything else resolves through
    /// [`BranchResolver::content_index`] into the banks.
    pub fn content_for(display_index: usize, branch: DietBranch, sheet: &AnswerSheet) -> String {
        if BranchResolver::is_compound_slot(display_index, branch) {
            return Self::compound_markup(branch, sheet);
        }
        let logical = BranchResolver::content_index(display_index, branch);
        format!("<p class=\"question\">{}</p>", Self::prompt(logical, branch))
    }

    fn compound_markup(branch: DietBranch, sheet: &AnswerSheet) -> String {
        let mut markup = String::from(
            "<fieldset class=\"excluded-foods\">\n  \
             <legend>Which of these do you exclude, and are there any exceptions?</legend>\n",
        );
        for (sub_index, category) in Self::categories(branch).iter().enumerate() {
            let value = sheet
                .sub_field_text(branch, EXCLUDED_FOODS_SLOT, sub_index)
                .unwrap_or("");
            markup.push_str(&format!(
                "  <label for=\"{prefix}_{slot}_{sub}\">{category}</label>\n  \
                 <textarea name=\"{prefix}_{slot}_{sub}\">{value}</textarea>\n",
                prefix = branch.key_prefix(),
                slot = EXCLUDED_FOODS_SLOT,
                sub = sub_index,
                category = category,
                value = value,
            ));
        }
        markup.push_str("</fieldset>");
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AnswerKey, AnswerValue};

    #[test]
    fn base_bank_covers_every_logical_slot() {
        for slot in 0..BASE_LEN {
            assert!(!QuestionCatalog::prompt(slot, DietBranch::Omnivore).is_empty());
        }
    }

    #[test]
    fn variant_overrides_take_precedence_over_base_wording() {
        assert!(QuestionCatalog::prompt(11, DietBranch::Vegan).contains("vegan meals"));
        assert!(QuestionCatalog::prompt(11, DietBranch::Vegetarian).contains("vegetarian meals"));
        assert!(QuestionCatalog::prompt(13, DietBranch::Vegan).contains("B12"));
    }

    #[test]
    fn non_overridden_slots_fall_back_to_base_wording() {
        for branch in DietBranch::all() {
            assert_eq!(
                QuestionCatalog::prompt(0, *branch),
                QuestionCatalog::prompt(0, DietBranch::Omnivore)
            );
            assert_eq!(
                QuestionCatalog::prompt(20, *branch),
                QuestionCatalog::prompt(20, DietBranch::Omnivore)
            );
        }
    }

    #[test]
    fn every_display_branch_pair_yields_content() {
        let sheet = AnswerSheet::new();
        for branch in DietBranch::all() {
            for display in 0..BranchResolver::total_questions(*branch) {
                let content = QuestionCatalog::content_for(display, *branch, &sheet);
                assert!(!content.is_empty(), "empty content at {} {:?}", display, branch);
            }
        }
    }

    #[test]
    fn compound_markup_has_one_textarea_per_category() {
        let sheet = AnswerSheet::new();
        for branch in DietBranch::variants() {
            let markup = QuestionCatalog::content_for(EXCLUDED_FOODS_SLOT, *branch, &sheet);
            let count = markup.matches("<textarea").count();
            assert_eq!(count, QuestionCatalog::categories(*branch).len());
        }
    }

    #[test]
    fn compound_markup_prefills_from_the_sheet() {
        let mut sheet = AnswerSheet::new();
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegan, EXCLUDED_FOODS_SLOT, 3),
            AnswerValue::Text("I still eat eggs from my own hens".into()),
        );
        let markup = QuestionCatalog::content_for(EXCLUDED_FOODS_SLOT, DietBranch::Vegan, &sheet);
        assert!(markup.contains("I still eat eggs from my own hens"));
        assert!(markup.contains("vegan_11_3"));
    }

    #[test]
    fn omnivore_track_has_no_categories() {
        assert!(QuestionCatalog::categories(DietBranch::Omnivore).is_empty());
        assert_eq!(QuestionCatalog::categories(DietBranch::Vegetarian).len(), 4);
        assert_eq!(QuestionCatalog::categories(DietBranch::Vegan).len(), 6);
    }

    #[test]
    fn compound_display_slot_renders_base_question_for_omnivore() {
        let sheet = AnswerSheet::new();
        let content =
            QuestionCatalog::content_for(EXCLUDED_FOODS_SLOT, DietBranch::Omnivore, &sheet);
        assert!(content.contains("typical day of meals"));
    }

    #[test]
    fn terminal_slot_renders_consent_wording_for_every_branch() {
        let sheet = AnswerSheet::new();
        for branch in DietBranch::all() {
            let last = BranchResolver::last_display_index(*branch);
            let content = QuestionCatalog::content_for(last, *branch, &sheet);
            assert!(content.contains("consent"), "branch {:?}", branch);
        }
    }
}
