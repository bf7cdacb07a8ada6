//! Indexed record groups.
//!
//! Repeating form blocks (allergies, family members, surgeries, extra conditions) arrive as
//! flat keys of the form `{prefix}_{index}_{field}`, e.g. `allergy_3_reaction`. Browsers add
//! and remove blocks freely, so indices can be sparse and keys can arrive in any order.
//! [`RecordGroup`] recovers the records in ascending index order.

use std::collections::BTreeSet;

use crate::submission::Submission;

/// Describes one repeating block: its key prefix and the sibling fields of each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordGroup {
    prefix: &'static str,
    fields: &'static [&'static str],
}

/// One resolved record. Values are normalised; at least one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    index: u64,
    values: Vec<(&'static str, Option<String>)>,
}

impl GroupRecord {
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Normalised value of `field`, or `None` if absent or not part of the group.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| value.as_deref())
    }
}

impl RecordGroup {
    pub const fn new(prefix: &'static str, fields: &'static [&'static str]) -> Self {
        Self { prefix, fields }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Parses `key` as `{prefix}_{index}_{field}` for one of this group's fields.
    fn index_of(&self, key: &str) -> Option<u64> {
        let rest = key.strip_prefix(self.prefix)?.strip_prefix('_')?;
        let (digits, field) = rest.split_once('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !self.fields.contains(&field) {
            return None;
        }
        match digits.parse::<u64>() {
            Ok(index) => Some(index),
            Err(_) => {
                tracing::trace!(key, "ignoring record key with out-of-range index");
                None
            }
        }
    }

    /// Distinct record indices present in `submission`, ascending.
    pub fn indices(&self, submission: &Submission) -> Vec<u64> {
        submission
            .keys()
            .filter_map(|key| self.index_of(key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Resolves every record of this group, ascending by index.
    ///
    /// Every sibling field is looked up for each discovered index, whichever field revealed
    /// it. Records whose fields are all empty are dropped.
    pub fn collect(&self, submission: &Submission) -> Vec<GroupRecord> {
        self.indices(submission)
            .into_iter()
            .filter_map(|index| {
                let values: Vec<_> = self
                    .fields
                    .iter()
                    .map(|field| {
                        let key = format!("{}_{}_{}", self.prefix, index, field);
                        (*field, submission.text(&key))
                    })
                    .collect();

                values
                    .iter()
                    .any(|(_, value)| value.is_some())
                    .then_some(GroupRecord { index, values })
            })
            .collect()
    }
}

/// Collects the records of `prefix` with the given sibling `fields`.
pub fn collect_group(
    submission: &Submission,
    prefix: &'static str,
    fields: &'static [&'static str],
) -> Vec<GroupRecord> {
    RecordGroup::new(prefix, fields).collect(submission)
}
