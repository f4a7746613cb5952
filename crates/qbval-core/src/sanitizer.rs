//! Value sanitization
//!
//! A numeric single-value field can never hold a delimited value. When the
//! operator moves from a range/membership operator back to a single-value one,
//! the stale "lo,hi" value must be blanked. The check is edge-triggered: it
//! fires once per distinct `(operator, input type, value)` key, never on a
//! repeat evaluation of the same key.

use crate::config::EditorConfig;
use qbval_common::{EditorState, EditorValue};

/// True when the state holds a delimited value in a numeric single-value field.
pub fn needs_reset(state: &EditorState, config: &EditorConfig) -> bool {
    let separator = config.inputs.separator.as_str();
    !separator.is_empty()
        && state.input_type.as_deref() == Some(config.inputs.numeric_input_type.as_str())
        && !config.is_multi_value_operator(&state.operator)
        && matches!(&state.value, Some(EditorValue::Text(s)) if s.contains(separator))
}

/// The parts of a state the sanitization check depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeKey {
    operator: String,
    input_type: Option<String>,
    value: Option<EditorValue>,
}

impl SanitizeKey {
    pub fn of(state: &EditorState) -> Self {
        Self {
            operator: state.operator.clone(),
            input_type: state.input_type.clone(),
            value: state.value.clone(),
        }
    }
}

/// Remembers the last evaluated key for one editing slot.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    last: Option<SanitizeKey>,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `state` and report whether a reset must be issued for it.
    ///
    /// Returns false when the key is unchanged since the previous call.
    pub fn observe(&mut self, state: &EditorState, config: &EditorConfig) -> bool {
        let key = SanitizeKey::of(state);
        if self.last.as_ref() == Some(&key) {
            return false;
        }
        self.last = Some(key);
        needs_reset(state, config)
    }

    /// Forget the last key so the next evaluation is treated as a change.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
