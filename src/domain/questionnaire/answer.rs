//! Answer storage value objects: keys, values, and the persisted sheet.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::DietBranch;

/// Zero-based logical question slot in the canonical sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    /// Creates a new QuestionIndex.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the inner index.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<usize> for QuestionIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key identifying one stored answer.
///
/// Ordinary questions are keyed by their logical slot. Sub-fields of the
/// compound "excluded foods" question use the string form
/// `{branch}_{slot}_{sub_index}`, one key per food category per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    /// Ordinary question at a logical slot.
    Question(QuestionIndex),
    /// Sub-field of a compound question.
    SubField {
        branch: DietBranch,
        slot: usize,
        sub_index: usize,
    },
}

impl AnswerKey {
    /// Creates a key for an ordinary question slot.
    pub fn question(index: usize) -> Self {
        AnswerKey::Question(QuestionIndex::new(index))
    }

    /// Creates a key for a compound sub-field.
    pub fn sub_field(branch: DietBranch, slot: usize, sub_index: usize) -> Self {
        AnswerKey::SubField {
            branch,
            slot,
            sub_index,
        }
    }

    /// Returns true if this key addresses a compound sub-field.
    pub fn is_sub_field(&self) -> bool {
        matches!(self, AnswerKey::SubField { .. })
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKey::Question(index) => write!(f, "{}", index),
            AnswerKey::SubField {
                branch,
                slot,
                sub_index,
            } => write!(f, "{}_{}_{}", branch.key_prefix(), slot, sub_index),
        }
    }
}

impl FromStr for AnswerKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Ok(AnswerKey::question(index));
        }

        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 3 {
            return Err(ValidationError::invalid_format(
                "answer_key",
                format!("expected '<branch>_<slot>_<sub_index>', got '{}'", s),
            ));
        }

        let branch: DietBranch = parts[0].parse()?;
        let slot = parts[1].parse::<usize>().map_err(|_| {
            ValidationError::invalid_format("answer_key", format!("invalid slot '{}'", parts[1]))
        })?;
        let sub_index = parts[2].parse::<usize>().map_err(|_| {
            ValidationError::invalid_format(
                "answer_key",
                format!("invalid sub index '{}'", parts[2]),
            )
        })?;

        Ok(AnswerKey::sub_field(branch, slot, sub_index))
    }
}

// Keys serialize as their string form so the sheet persists as a flat JSON
// object, matching what the storage collaborator expects.
impl Serialize for AnswerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AnswerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One stored answer.
///
/// A question's value variant is fixed by its kind and never changes across
/// renders: free-text slots hold `Text`, the branch slot holds `Choice`, and
/// the terminal consent slot holds `Flag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free text, possibly empty.
    Text(String),
    /// The selected dietary branch.
    Choice(DietBranch),
    /// Boolean checkbox state.
    Flag(bool),
}

impl AnswerValue {
    /// Returns the text content, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the branch choice, if this is a choice answer.
    pub fn as_choice(&self) -> Option<DietBranch> {
        match self {
            AnswerValue::Choice(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the flag state, if this is a boolean answer.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AnswerValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// The full set of recorded answers for one session.
///
/// # Invariants
///
/// - Keys are unique (map semantics, last write wins)
/// - Persisted in full on every mutation by the application layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: HashMap<AnswerKey, AnswerValue>,
}

impl AnswerSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no answers are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stored value for a key.
    pub fn get(&self, key: &AnswerKey) -> Option<&AnswerValue> {
        self.entries.get(key)
    }

    /// Stores a value, replacing any previous value for the key.
    pub fn record(&mut self, key: AnswerKey, value: AnswerValue) {
        self.entries.insert(key, value);
    }

    /// Removes the value for a key, returning it if present.
    pub fn remove(&mut self, key: &AnswerKey) -> Option<AnswerValue> {
        self.entries.remove(key)
    }

    /// Returns the text stored at an ordinary slot.
    pub fn text_at(&self, slot: usize) -> Option<&str> {
        self.get(&AnswerKey::question(slot))
            .and_then(AnswerValue::as_text)
    }

    /// Returns the branch choice stored at an ordinary slot.
    pub fn choice_at(&self, slot: usize) -> Option<DietBranch> {
        self.get(&AnswerKey::question(slot))
            .and_then(AnswerValue::as_choice)
    }

    /// Returns the flag stored at an ordinary slot.
    pub fn flag_at(&self, slot: usize) -> Option<bool> {
        self.get(&AnswerKey::question(slot))
            .and_then(AnswerValue::as_flag)
    }

    /// Returns the text stored in a compound sub-field.
    pub fn sub_field_text(&self, branch: DietBranch, slot: usize, sub_index: usize) -> Option<&str> {
        self.get(&AnswerKey::sub_field(branch, slot, sub_index))
            .and_then(AnswerValue::as_text)
    }

    /// Removes every ordinary answer strictly after the given slot.
    ///
    /// Compound sub-field keys are untouched; use
    /// [`prune_all_sub_fields`](Self::prune_all_sub_fields) for those.
    pub fn prune_questions_after(&mut self, slot: usize) {
        self.entries
            .retain(|key, _| !matches!(key, AnswerKey::Question(index) if index.value() > slot));
    }

    /// Removes every compound sub-field answer, for all branches.
    pub fn prune_all_sub_fields(&mut self) {
        self.entries.retain(|key, _| !key.is_sub_field());
    }

    /// Iterates over all stored entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&AnswerKey, &AnswerValue)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_key_displays_as_plain_index() {
        assert_eq!(AnswerKey::question(7).to_string(), "7");
    }

    #[test]
    fn sub_field_key_displays_with_prefix_slot_and_index() {
        let key = AnswerKey::sub_field(DietBranch::Vegetarian, 11, 2);
        assert_eq!(key.to_string(), "vegetarian_11_2");
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for key in [
            AnswerKey::question(0),
            AnswerKey::question(23),
            AnswerKey::sub_field(DietBranch::Vegetarian, 11, 0),
            AnswerKey::sub_field(DietBranch::Vegan, 11, 4),
        ] {
            let parsed: AnswerKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn from_str_rejects_malformed_keys() {
        assert!("vegan_11".parse::<AnswerKey>().is_err());
        assert!("pescatarian_11_0".parse::<AnswerKey>().is_err());
        assert!("vegan_x_0".parse::<AnswerKey>().is_err());
        assert!("vegan_11_x".parse::<AnswerKey>().is_err());
    }

    #[test]
    fn sheet_records_and_reads_typed_values() {
        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(0), AnswerValue::Text("Jane".into()));
        sheet.record(
            AnswerKey::question(10),
            AnswerValue::Choice(DietBranch::Vegan),
        );
        sheet.record(AnswerKey::question(23), AnswerValue::Flag(true));

        assert_eq!(sheet.text_at(0), Some("Jane"));
        assert_eq!(sheet.choice_at(10), Some(DietBranch::Vegan));
        assert_eq!(sheet.flag_at(23), Some(true));
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn typed_accessors_ignore_mismatched_variants() {
        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(5), AnswerValue::Flag(true));
        assert_eq!(sheet.text_at(5), None);
        assert_eq!(sheet.choice_at(5), None);
    }

    #[test]
    fn record_overwrites_previous_value() {
        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(3), AnswerValue::Text("old".into()));
        sheet.record(AnswerKey::question(3), AnswerValue::Text("new".into()));
        assert_eq!(sheet.text_at(3), Some("new"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn prune_questions_after_keeps_slot_and_earlier() {
        let mut sheet = AnswerSheet::new();
        for slot in 0..15 {
            sheet.record(
                AnswerKey::question(slot),
                AnswerValue::Text(format!("a{}", slot)),
            );
        }
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegan, 11, 0),
            AnswerValue::Text("tofu".into()),
        );

        sheet.prune_questions_after(10);

        assert_eq!(sheet.text_at(10), Some("a10"));
        assert_eq!(sheet.text_at(11), None);
        assert_eq!(sheet.text_at(14), None);
        // Sub-fields survive this prune
        assert_eq!(sheet.sub_field_text(DietBranch::Vegan, 11, 0), Some("tofu"));
    }

    #[test]
    fn prune_all_sub_fields_removes_every_branch() {
        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(2), AnswerValue::Text("kept".into()));
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegetarian, 11, 1),
            AnswerValue::Text("x".into()),
        );
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegan, 11, 3),
            AnswerValue::Text("y".into()),
        );

        sheet.prune_all_sub_fields();

        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.text_at(2), Some("kept"));
    }

    #[test]
    fn sheet_round_trips_through_json_for_all_value_kinds() {
        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(0), AnswerValue::Text("Jane".into()));
        sheet.record(AnswerKey::question(4), AnswerValue::Text("".into()));
        sheet.record(
            AnswerKey::question(10),
            AnswerValue::Choice(DietBranch::Vegetarian),
        );
        sheet.record(AnswerKey::question(23), AnswerValue::Flag(false));
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegetarian, 11, 2),
            AnswerValue::Text("honey".into()),
        );

        let json = serde_json::to_string(&sheet).unwrap();
        let back: AnswerSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn sheet_serializes_as_flat_string_keyed_object() {
        let mut sheet = AnswerSheet::new();
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegan, 11, 0),
            AnswerValue::Text("seitan".into()),
        );
        let json: serde_json::Value = serde_json::to_value(&sheet).unwrap();
        assert!(json.get("vegan_11_0").is_some());
    }
}
