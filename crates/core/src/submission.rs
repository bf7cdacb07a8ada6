//! Submission model and field access.
//!
//! A [`Submission`] is the decoded body of one intake form: a flat map from field name to a
//! loosely typed [`FieldValue`]. The map is never validated against a schema. Every accessor
//! here degrades to "absent" instead of failing, so a missing, blank, or oddly typed field
//! simply produces no output further down the pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{IntakeError, IntakeResult};

/// A single raw form value.
///
/// JSON bodies can carry anything, so decoding goes through `serde_json::Value` and coerces
/// numbers, nested lists, and objects into the three shapes the form actually produces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit `null`, or a key that was sent without a value.
    #[default]
    Null,
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Normalises the value to display text.
    ///
    /// - `Null` → `None`
    /// - text → trimmed, `None` when blank
    /// - list → non-blank entries joined with `", "`, `None` when nothing survives
    /// - boolean → `"true"` / `"false"`
    pub fn normalize(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(flag) => Some(flag.to_string()),
            FieldValue::Text(text) => non_blank(text).map(str::to_owned),
            FieldValue::List(items) => {
                let joined = items
                    .iter()
                    .filter_map(|item| non_blank(item))
                    .collect::<Vec<_>>()
                    .join(", ");
                if joined.is_empty() {
                    None
                } else {
                    Some(joined)
                }
            }
        }
    }

    /// True for the literal `"yes"` or boolean `true`.
    pub fn is_affirmative(&self) -> bool {
        match self {
            FieldValue::Bool(flag) => *flag,
            FieldValue::Text(text) => text.trim() == "yes",
            FieldValue::Null | FieldValue::List(_) => false,
        }
    }

    /// The value viewed as a list: list entries, or a single scalar, minus blank entries.
    pub fn entries(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items
                .iter()
                .filter_map(|item| non_blank(item))
                .map(str::to_owned)
                .collect(),
            other => other.normalize().into_iter().collect(),
        }
    }
}

fn non_blank(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn coerce_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(flag) => FieldValue::Bool(flag),
            serde_json::Value::String(text) => FieldValue::Text(text),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(coerce_to_text).collect())
            }
            number @ serde_json::Value::Number(_) => FieldValue::Text(number.to_string()),
            object @ serde_json::Value::Object(_) => FieldValue::Text(object.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(FieldValue::from)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Bool(flag)
    }
}

impl<T: Into<String>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// One intake form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    fields: HashMap<String, FieldValue>,
}

impl Submission {
    /// Creates an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a submission from a JSON object document.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidSubmission` if the text is not a JSON object.
    pub fn from_json_str(json: &str) -> IntakeResult<Self> {
        serde_json::from_str(json).map_err(IntakeError::InvalidSubmission)
    }

    /// Builds a submission from URL-encoded form pairs.
    ///
    /// A key sent more than once becomes a list in arrival order. A trailing `[]` on the key
    /// (the convention browsers use for multi-select checkboxes) is stripped.
    pub fn from_form_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: HashMap<String, FieldValue> = HashMap::new();
        for (key, value) in pairs {
            let key: String = key.into();
            let value: String = value.into();
            let key = key.strip_suffix("[]").map(str::to_owned).unwrap_or(key);

            let merged = match fields.remove(&key) {
                None => FieldValue::Text(value),
                Some(FieldValue::Text(first)) => FieldValue::List(vec![first, value]),
                Some(FieldValue::List(mut items)) => {
                    items.push(value);
                    FieldValue::List(items)
                }
                Some(FieldValue::Null | FieldValue::Bool(_)) => FieldValue::Text(value),
            };
            fields.insert(key, merged);
        }
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Raw value for `key`, if the key was sent at all.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Every key in the submission, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Normalised display text for `key`. See [`FieldValue::normalize`].
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(FieldValue::normalize)
    }

    /// Whether `key` holds `"yes"` or `true`.
    pub fn is_affirmative(&self, key: &str) -> bool {
        self.get(key).is_some_and(FieldValue::is_affirmative)
    }

    /// Non-blank entries for `key`, treating a scalar as a one-element list.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(FieldValue::entries).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Submission
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, FieldValue>> for Submission {
    fn from(fields: HashMap<String, FieldValue>) -> Self {
        Self { fields }
    }
}

/// Normalises a raw value to display text, or `None` when there is nothing to show.
pub fn normalize(value: Option<&FieldValue>) -> Option<String> {
    value.and_then(FieldValue::normalize)
}
