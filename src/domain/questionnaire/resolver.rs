//! BranchResolver - centralized index arithmetic for the branching sequence.
//!
//! Every piece of branch-dependent slot math lives here: question totals,
//! the display-to-content remapping, structural kinds, and the clamping edge
//! policy. Consolidating this in one place keeps the labeling tables and the
//! content banks from drifting apart.
//!
//! # Sequence shape
//!
//! The base track has [`BASE_LEN`] slots. Both variant tracks insert one
//! compound "excluded foods" question at display slot
//! [`EXCLUDED_FOODS_SLOT`], directly after the branch question, shifting
//! every later display index by [`SLOT_SHIFT`] relative to the base bank.
//! The terminal slot is always the consent question, whatever the branch.

use super::{DietBranch, QuestionKind};

/// Number of questions in the base (omnivore) track.
pub const BASE_LEN: usize = 24;

/// Logical slot of the branch-choice question.
pub const BRANCH_SLOT: usize = 10;

/// Display slot the compound question occupies on variant tracks.
pub const EXCLUDED_FOODS_SLOT: usize = 11;

/// How far the variant tracks shift display indices past the insertion.
pub const SLOT_SHIFT: usize = 1;

/// Logical slot of the terminal consent question.
pub const CONSENT_SLOT: usize = BASE_LEN - 1;

/// Central location for branch-dependent sequence logic.
///
/// All methods are pure; requesting an index at or beyond the end of a track
/// clamps to the last valid index rather than erroring.
pub struct BranchResolver;

impl BranchResolver {
    /// Returns the total question count for a branch.
    ///
    /// Base length for the default track; one more for either variant track,
    /// which carries the compound question in an extra slot.
    pub fn total_questions(branch: DietBranch) -> usize {
        if branch.is_variant() {
            BASE_LEN + SLOT_SHIFT
        } else {
            BASE_LEN
        }
    }

    /// Returns the last valid display index for a branch.
    pub fn last_display_index(branch: DietBranch) -> usize {
        Self::total_questions(branch) - 1
    }

    /// Clamps a display index into the branch's valid range.
    pub fn clamp_display(display_index: usize, branch: DietBranch) -> usize {
        display_index.min(Self::last_display_index(branch))
    }

    /// Returns true if the display index is the compound slot on this branch.
    pub fn is_compound_slot(display_index: usize, branch: DietBranch) -> bool {
        branch.is_variant() && display_index == EXCLUDED_FOODS_SLOT
    }

    /// Maps a display index to its base-bank content slot.
    ///
    /// Identity for the default branch. Variant tracks map identity up to the
    /// compound slot and shift by [`SLOT_SHIFT`] beyond it, so the variant
    /// content past the insertion is keyed one slot ahead of the matching
    /// base topic. Total and monotonic non-decreasing over
    /// `[0, total_questions(branch))`; the terminal index resolves to the
    /// consent slot for every branch.
    ///
    /// The returned slot for the compound display index itself is never used
    /// for content lookup (the catalog synthesizes compound markup), but it
    /// stays in range to keep the mapping total.
    pub fn content_index(display_index: usize, branch: DietBranch) -> usize {
        let display = Self::clamp_display(display_index, branch);
        if !branch.is_variant() || display <= EXCLUDED_FOODS_SLOT {
            display.min(CONSENT_SLOT)
        } else {
            display - SLOT_SHIFT
        }
    }

    /// Returns the structural kind of the question at a display index.
    pub fn kind_at(display_index: usize, branch: DietBranch) -> QuestionKind {
        if Self::is_compound_slot(display_index, branch) {
            return QuestionKind::ExcludedFoods;
        }
        match Self::content_index(display_index, branch) {
            BRANCH_SLOT => QuestionKind::BranchChoice,
            CONSENT_SLOT => QuestionKind::Consent,
            _ => QuestionKind::FreeText,
        }
    }

    /// Returns true if the display index is the last question of the branch.
    pub fn is_last(display_index: usize, branch: DietBranch) -> bool {
        Self::clamp_display(display_index, branch) == Self::last_display_index(branch)
    }

    /// Returns true if the display index is the branch-choice question.
    ///
    /// The branch slot sits before the insertion point, so its display index
    /// is the same on every track.
    pub fn is_branch_slot(display_index: usize) -> bool {
        display_index == BRANCH_SLOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn total_is_base_length_for_omnivore() {
        assert_eq!(BranchResolver::total_questions(DietBranch::Omnivore), BASE_LEN);
    }

    #[test]
    fn total_is_base_length_plus_one_for_variants() {
        for branch in DietBranch::variants() {
            assert_eq!(BranchResolver::total_questions(*branch), BASE_LEN + 1);
        }
    }

    #[test]
    fn total_is_stable_under_repeated_calls() {
        for branch in DietBranch::all() {
            let first = BranchResolver::total_questions(*branch);
            for _ in 0..10 {
                assert_eq!(BranchResolver::total_questions(*branch), first);
            }
        }
    }

    #[test]
    fn content_index_is_identity_for_omnivore() {
        for display in 0..BASE_LEN {
            assert_eq!(
                BranchResolver::content_index(display, DietBranch::Omnivore),
                display
            );
        }
    }

    #[test]
    fn content_index_is_identity_before_the_insertion() {
        for branch in DietBranch::variants() {
            for display in 0..EXCLUDED_FOODS_SLOT {
                assert_eq!(BranchResolver::content_index(display, *branch), display);
            }
        }
    }

    #[test]
    fn content_index_shifts_after_the_insertion() {
        for branch in DietBranch::variants() {
            for display in (EXCLUDED_FOODS_SLOT + 1)..=BASE_LEN {
                assert_eq!(
                    BranchResolver::content_index(display, *branch),
                    display - SLOT_SHIFT
                );
            }
        }
    }

    #[test]
    fn terminal_index_resolves_to_consent_for_every_branch() {
        for branch in DietBranch::all() {
            let last = BranchResolver::last_display_index(*branch);
            assert_eq!(BranchResolver::content_index(last, *branch), CONSENT_SLOT);
        }
    }

    #[test]
    fn out_of_range_requests_clamp_to_last_index() {
        for branch in DietBranch::all() {
            let last = BranchResolver::last_display_index(*branch);
            assert_eq!(BranchResolver::clamp_display(usize::MAX, *branch), last);
            assert_eq!(
                BranchResolver::content_index(last + 50, *branch),
                CONSENT_SLOT
            );
        }
    }

    #[test]
    fn compound_slot_only_exists_on_variant_tracks() {
        assert!(!BranchResolver::is_compound_slot(
            EXCLUDED_FOODS_SLOT,
            DietBranch::Omnivore
        ));
        for branch in DietBranch::variants() {
            assert!(BranchResolver::is_compound_slot(EXCLUDED_FOODS_SLOT, *branch));
            assert!(!BranchResolver::is_compound_slot(EXCLUDED_FOODS_SLOT + 1, *branch));
        }
    }

    #[test]
    fn kind_at_identifies_structural_slots() {
        for branch in DietBranch::all() {
            assert_eq!(
                BranchResolver::kind_at(BRANCH_SLOT, *branch),
                QuestionKind::BranchChoice
            );
            assert_eq!(
                BranchResolver::kind_at(BranchResolver::last_display_index(*branch), *branch),
                QuestionKind::Consent
            );
            assert_eq!(BranchResolver::kind_at(0, *branch), QuestionKind::FreeText);
        }
        assert_eq!(
            BranchResolver::kind_at(EXCLUDED_FOODS_SLOT, DietBranch::Vegan),
            QuestionKind::ExcludedFoods
        );
        assert_eq!(
            BranchResolver::kind_at(EXCLUDED_FOODS_SLOT, DietBranch::Omnivore),
            QuestionKind::FreeText
        );
    }

    #[test]
    fn is_last_respects_branch_totals() {
        assert!(BranchResolver::is_last(23, DietBranch::Omnivore));
        assert!(!BranchResolver::is_last(23, DietBranch::Vegan));
        assert!(BranchResolver::is_last(24, DietBranch::Vegan));
    }

    proptest! {
        #[test]
        fn content_index_is_total_and_in_range(display in 0usize..200) {
            for branch in DietBranch::all() {
                let logical = BranchResolver::content_index(display, *branch);
                prop_assert!(logical < BASE_LEN);
            }
        }

        #[test]
        fn content_index_is_monotonic_non_decreasing(display in 0usize..100) {
            for branch in DietBranch::all() {
                let here = BranchResolver::content_index(display, *branch);
                let next = BranchResolver::content_index(display + 1, *branch);
                prop_assert!(next >= here);
            }
        }

        #[test]
        fn content_index_never_skips_more_than_one(display in 0usize..100) {
            for branch in DietBranch::all() {
                let here = BranchResolver::content_index(display, *branch);
                let next = BranchResolver::content_index(display + 1, *branch);
                prop_assert!(next - here <= 1);
            }
        }
    }
}
