use crate::outcome::{ControlAttrs, RenderOutcome, SelectorSpec};
use qbval_common::{EditorValue, RenderableEntry};

/// Render an outcome as a compact, human-readable block.
///
/// e.g. `[value-editor] selector multiple value="a,b" {disabled}` followed by
/// one line per choice.
pub fn format_outcome(outcome: &RenderOutcome) -> String {
    match outcome {
        RenderOutcome::Suppressed => "suppressed\n".to_string(),
        RenderOutcome::RangePair { attrs, left, right } => {
            let mut output = format!("{}range_pair{}\n", prefix(attrs), flags(attrs));
            output.push_str(&indent(&format_selector(left)));
            output.push_str(&indent(&format_selector(right)));
            output
        }
        RenderOutcome::Selector(spec) => format_selector(spec),
        RenderOutcome::MultilineText {
            attrs,
            value,
            placeholder,
            ..
        } => format!(
            "{}textarea{}{}{}\n",
            prefix(attrs),
            value_suffix(value.as_ref()),
            placeholder_suffix(placeholder),
            flags(attrs)
        ),
        RenderOutcome::BooleanToggle { attrs, checked, .. } => {
            let state = if *checked { " = checked" } else { "" };
            format!("{}toggle{}{}\n", prefix(attrs), state, flags(attrs))
        }
        RenderOutcome::RadioGroup { attrs, options, .. } => {
            let mut output = format!("{}radio{}\n", prefix(attrs), flags(attrs));
            for opt in options {
                let mark = if opt.checked { "(*)" } else { "( )" };
                output.push_str(&format!("  {} {} {:?}\n", mark, opt.name, opt.label));
            }
            output
        }
        RenderOutcome::PlainInput {
            attrs,
            html_input_type,
            value,
            placeholder,
            ..
        } => format!(
            "{}input/{}{}{}{}\n",
            prefix(attrs),
            html_input_type,
            value_suffix(value.as_ref()),
            placeholder_suffix(placeholder),
            flags(attrs)
        ),
    }
}

/// Render a flattened option list, one row per entry.
pub fn format_entries(entries: &[RenderableEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        match entry {
            RenderableEntry::GroupHeader { label } => output.push_str(&format!("# {}\n", label)),
            RenderableEntry::Item { name, label } => {
                output.push_str(&format!("- {} {:?}\n", name, label))
            }
        }
    }
    output
}

fn format_selector(spec: &SelectorSpec) -> String {
    let kind = if spec.multiple {
        "selector multiple"
    } else {
        "selector"
    };
    let class = spec
        .attrs
        .class_name
        .as_ref()
        .map(|c| format!(" .{}", c))
        .unwrap_or_default();
    let mut output = format!(
        "{}{}{}{}{}\n",
        prefix(&spec.attrs),
        kind,
        class,
        value_suffix(spec.value.as_ref()),
        flags(&spec.attrs)
    );
    output.push_str(&indent(&format_entries(&spec.options)));
    output
}

fn prefix(attrs: &ControlAttrs) -> String {
    attrs
        .test_id
        .as_ref()
        .map(|id| format!("[{}] ", id))
        .unwrap_or_default()
}

fn flags(attrs: &ControlAttrs) -> &'static str {
    if attrs.disabled {
        " {disabled}"
    } else {
        ""
    }
}

fn value_suffix(value: Option<&EditorValue>) -> String {
    match value {
        Some(v) => format!(" value={:?}", v.to_string()),
        None => String::new(),
    }
}

fn placeholder_suffix(placeholder: &str) -> String {
    if placeholder.is_empty() {
        String::new()
    } else {
        format!(" placeholder={:?}", placeholder)
    }
}

fn indent(block: &str) -> String {
    block.lines().map(|l| format!("  {}\n", l)).collect()
}
