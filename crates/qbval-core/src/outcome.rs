//! Rendering outcomes
//!
//! `RenderOutcome` is what the resolver hands to the rendering layer: exactly one
//! control shape per editing slot. Edits flow back through a [`ChangeHandler`],
//! a plain value describing how a raw control edit becomes the value the host
//! receives, so outcomes can be compared, logged and serialized.

use qbval_common::{EditorValue, RangeValue, RenderableEntry};
use serde::Serialize;

/// Attributes passed through to a control's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlAttrs {
    #[serde(rename = "testID", skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum RenderOutcome {
    /// No control at all.
    Suppressed,
    /// Two single selectors editing the sides of a between-style value.
    RangePair {
        attrs: ControlAttrs,
        left: SelectorSpec,
        right: SelectorSpec,
    },
    Selector(SelectorSpec),
    MultilineText {
        attrs: ControlAttrs,
        value: Option<EditorValue>,
        placeholder: String,
        on_change: ChangeHandler,
    },
    BooleanToggle {
        attrs: ControlAttrs,
        checked: bool,
        on_change: ChangeHandler,
    },
    RadioGroup {
        attrs: ControlAttrs,
        options: Vec<RadioOption>,
        selected: Option<String>,
        on_change: ChangeHandler,
    },
    PlainInput {
        attrs: ControlAttrs,
        html_input_type: String,
        value: Option<EditorValue>,
        placeholder: String,
        on_change: ChangeHandler,
    },
}

impl RenderOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderOutcome::Suppressed => "suppressed",
            RenderOutcome::RangePair { .. } => "range_pair",
            RenderOutcome::Selector(_) => "selector",
            RenderOutcome::MultilineText { .. } => "multiline_text",
            RenderOutcome::BooleanToggle { .. } => "boolean_toggle",
            RenderOutcome::RadioGroup { .. } => "radio_group",
            RenderOutcome::PlainInput { .. } => "plain_input",
        }
    }

    /// Root attributes; `None` for a suppressed slot.
    pub fn attrs(&self) -> Option<&ControlAttrs> {
        match self {
            RenderOutcome::Suppressed => None,
            RenderOutcome::Selector(spec) => Some(&spec.attrs),
            RenderOutcome::RangePair { attrs, .. }
            | RenderOutcome::MultilineText { attrs, .. }
            | RenderOutcome::BooleanToggle { attrs, .. }
            | RenderOutcome::RadioGroup { attrs, .. }
            | RenderOutcome::PlainInput { attrs, .. } => Some(attrs),
        }
    }
}

/// Props for the generic selector sub-control.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorSpec {
    pub attrs: ControlAttrs,
    pub options: Vec<RenderableEntry>,
    pub value: Option<EditorValue>,
    pub multiple: bool,
    pub on_change: ChangeHandler,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub name: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

/// A raw edit as emitted by a concrete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Text(String),
    Checked(bool),
    Selection(Vec<String>),
}

impl Edit {
    /// The edit as a single string; multi-selections are joined.
    fn into_text(self, separator: &str) -> String {
        match self {
            Edit::Text(s) => s,
            Edit::Checked(b) => b.to_string(),
            Edit::Selection(items) => items.join(separator),
        }
    }
}

/// How an edit on a control becomes the value reported to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeHandler {
    /// Forward the edit as-is.
    Direct,
    /// Forward the checked flag.
    Checked,
    /// Left side of a range edited; the right side is preserved.
    RangeLeft {
        #[serde(skip_serializing_if = "Option::is_none")]
        right: Option<String>,
        separator: String,
    },
    /// Right side of a range edited; the left side is preserved.
    RangeRight {
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<String>,
        separator: String,
    },
}

impl ChangeHandler {
    pub fn apply(&self, edit: Edit) -> EditorValue {
        match self {
            ChangeHandler::Direct => match edit {
                Edit::Text(s) => EditorValue::Text(s),
                Edit::Checked(b) => EditorValue::Bool(b),
                Edit::Selection(items) => EditorValue::List(items),
            },
            ChangeHandler::Checked => match edit {
                Edit::Checked(b) => EditorValue::Bool(b),
                Edit::Text(s) => EditorValue::Bool(!s.is_empty()),
                Edit::Selection(items) => EditorValue::Bool(!items.is_empty()),
            },
            ChangeHandler::RangeLeft { right, separator } => {
                let range = RangeValue {
                    left: Some(edit.into_text(separator)),
                    right: right.clone(),
                };
                EditorValue::Text(range.join(separator))
            }
            ChangeHandler::RangeRight { left, separator } => {
                let range = RangeValue {
                    left: left.clone(),
                    right: Some(edit.into_text(separator)),
                };
                EditorValue::Text(range.join(separator))
            }
        }
    }
}
