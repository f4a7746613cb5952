//! Control Resolution
//!
//! Maps an editing slot's state to exactly one [`RenderOutcome`]. Resolution is
//! pure and never fails; odd input (missing options, half-filled ranges,
//! unknown editor types) degrades to a plain input or empty choice lists.
//!
//! Priority, first match wins:
//! 1. null-style operators suppress the control
//! 2. between-style operators on a `select` field split into two selectors
//! 3. the declared editor type picks the control
//! 4. anything else is a plain input

use crate::config::EditorConfig;
use crate::outcome::{ChangeHandler, ControlAttrs, RadioOption, RenderOutcome, SelectorSpec};
use lazy_static::lazy_static;
use qbval_common::{
    flatten, EditorState, EditorValue, RangeValue, RenderableEntry, ValueEditorType,
};
use tracing::debug;

lazy_static! {
    static ref DEFAULT_CONFIG: EditorConfig = EditorConfig::default();
}

/// Resolve with the default operator sets, input types and class names.
pub fn resolve(state: &EditorState) -> RenderOutcome {
    resolve_with(state, &DEFAULT_CONFIG)
}

pub fn resolve_with(state: &EditorState, config: &EditorConfig) -> RenderOutcome {
    let outcome = resolve_inner(state, config);
    debug!(
        operator = %state.operator,
        declared_type = state.declared_type.as_ref().map(ValueEditorType::as_str),
        control = outcome.kind(),
        "resolved value editor"
    );
    outcome
}

fn resolve_inner(state: &EditorState, config: &EditorConfig) -> RenderOutcome {
    if config.is_null_operator(&state.operator) {
        return RenderOutcome::Suppressed;
    }

    let input_type = effective_input_type(state, config);
    let declared = state.declared_type.clone().unwrap_or_default();

    if config.is_between_operator(&state.operator) && declared == ValueEditorType::Select {
        return range_pair(state, config);
    }

    match declared {
        ValueEditorType::Select | ValueEditorType::MultiSelect => {
            RenderOutcome::Selector(SelectorSpec {
                attrs: root_attrs(state),
                options: flatten(state.options()),
                value: state.value.clone(),
                multiple: declared == ValueEditorType::MultiSelect,
                on_change: ChangeHandler::Direct,
            })
        }

        ValueEditorType::Textarea => RenderOutcome::MultilineText {
            attrs: root_attrs(state),
            value: state.value.clone(),
            placeholder: state.placeholder(),
            on_change: ChangeHandler::Direct,
        },

        ValueEditorType::Switch | ValueEditorType::Checkbox => RenderOutcome::BooleanToggle {
            attrs: root_attrs(state),
            checked: state.value.as_ref().is_some_and(EditorValue::is_truthy),
            on_change: ChangeHandler::Checked,
        },

        ValueEditorType::Radio => radio_group(state),

        ValueEditorType::Text | ValueEditorType::Other(_) => RenderOutcome::PlainInput {
            attrs: root_attrs(state),
            html_input_type: input_type,
            value: state.value.clone(),
            placeholder: state.placeholder(),
            on_change: ChangeHandler::Direct,
        },
    }
}

/// Multi-value operators always edit as text; a numeric input can't hold a
/// delimited list.
fn effective_input_type(state: &EditorState, config: &EditorConfig) -> String {
    if config.is_multi_value_operator(&state.operator) {
        return config.inputs.default_input_type.clone();
    }
    match state.input_type.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => config.inputs.default_input_type.clone(),
    }
}

fn root_attrs(state: &EditorState) -> ControlAttrs {
    ControlAttrs {
        test_id: state.test_id.clone(),
        class_name: state.class_name.clone(),
        title: state.title.clone(),
        disabled: state.disabled,
    }
}

fn range_pair(state: &EditorState, config: &EditorConfig) -> RenderOutcome {
    let separator = &config.inputs.separator;
    let range = RangeValue::from_value(state.value.as_ref(), separator);
    let options = flatten(state.options());

    let side = |class_name: &str, value: &Option<String>, on_change: ChangeHandler| SelectorSpec {
        attrs: ControlAttrs {
            test_id: None,
            class_name: Some(class_name.to_string()),
            title: None,
            disabled: state.disabled,
        },
        options: options.clone(),
        value: value.clone().map(EditorValue::Text),
        multiple: false,
        on_change,
    };

    let left = side(
        config.class_names.between_selector_1.as_str(),
        &range.left,
        ChangeHandler::RangeLeft {
            right: range.right.clone(),
            separator: separator.clone(),
        },
    );
    let right = side(
        config.class_names.between_selector_2.as_str(),
        &range.right,
        ChangeHandler::RangeRight {
            left: range.left.clone(),
            separator: separator.clone(),
        },
    );

    RenderOutcome::RangePair {
        attrs: root_attrs(state),
        left,
        right,
    }
}

fn radio_group(state: &EditorState) -> RenderOutcome {
    let current = state.value.as_ref().and_then(EditorValue::as_text);
    let options: Vec<RadioOption> = flatten(state.options())
        .into_iter()
        .filter_map(|entry| match entry {
            RenderableEntry::Item { name, label } => Some(RadioOption {
                checked: current == Some(name.as_str()),
                name,
                label,
                disabled: state.disabled,
            }),
            RenderableEntry::GroupHeader { .. } => None,
        })
        .collect();
    let selected = options.iter().find(|o| o.checked).map(|o| o.name.clone());

    RenderOutcome::RadioGroup {
        attrs: root_attrs(state),
        options,
        selected,
        on_change: ChangeHandler::Direct,
    }
}
