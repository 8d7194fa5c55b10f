//! Field value object

use serde::{Deserialize, Serialize};

/// Words a checkbox or radio may post that still mean "not selected"
const FALSY_WORDS: [&str; 3] = ["false", "off", "no"];

/// A value submitted for a single form field (Value Object)
///
/// Most inputs post a single string. Checkbox groups and multi-file uploads
/// post the same field name several times, which arrives as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Single text value, if this is not a list
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    /// All posted values, in order
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(s) => vec![s.as_str()],
            FieldValue::List(items) => items.iter().map(|s| s.as_str()).collect(),
        }
    }

    /// Whether nothing meaningful was entered (blank text or no non-blank item)
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Checkbox semantics: blank and "false"/"off"/"no" are not checked
    pub fn is_truthy(&self) -> bool {
        self.values().into_iter().any(is_truthy_str)
    }

    /// Whether any posted value equals `expected` (after trimming)
    pub fn contains(&self, expected: &str) -> bool {
        self.values().into_iter().any(|v| v.trim() == expected)
    }
}

fn is_truthy_str(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !FALSY_WORDS
            .iter()
            .any(|word| value.eq_ignore_ascii_case(word))
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}
