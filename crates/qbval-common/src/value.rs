use crate::state::EditorValue;
use serde::{Deserialize, Serialize};

/// Split a value into its parts.
///
/// Text is split on `separator` with each part trimmed; lists pass through;
/// a number is a single part. Booleans, empty text and missing values have no
/// parts. An empty separator leaves text whole.
pub fn to_array(value: Option<&EditorValue>, separator: &str) -> Vec<String> {
    match value {
        Some(EditorValue::List(items)) => items.clone(),
        Some(EditorValue::Text(s)) if s.is_empty() => Vec::new(),
        Some(EditorValue::Text(s)) if separator.is_empty() => vec![s.trim().to_string()],
        Some(EditorValue::Text(s)) => s.split(separator).map(|p| p.trim().to_string()).collect(),
        Some(EditorValue::Number(n)) => vec![n.to_string()],
        Some(EditorValue::Bool(_)) | None => Vec::new(),
    }
}

/// Two sides of a between-style value. A side is `None` when the value had no
/// part for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue {
    pub left: Option<String>,
    pub right: Option<String>,
}

impl RangeValue {
    pub fn from_value(value: Option<&EditorValue>, separator: &str) -> Self {
        let mut parts = to_array(value, separator).into_iter();
        Self {
            left: parts.next(),
            right: parts.next(),
        }
    }

    /// Serialize back to the single delimited form; missing sides become empty.
    pub fn join(&self, separator: &str) -> String {
        format!(
            "{}{}{}",
            self.left.as_deref().unwrap_or(""),
            separator,
            self.right.as_deref().unwrap_or("")
        )
    }
}
