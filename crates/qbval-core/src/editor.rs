use crate::config::EditorConfig;
use crate::outcome::{ChangeHandler, Edit, RenderOutcome};
use crate::resolver::resolve_with;
use crate::sanitizer::Sanitizer;
use qbval_common::{EditorState, EditorValue};
use tracing::info;

/// Result of evaluating one editing slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Outcome for the state as given. If `reset` is set this still shows the
    /// stale value; the host sees the corrected one on its next evaluation.
    pub outcome: RenderOutcome,
    pub reset: bool,
}

/// A single value-editing slot.
///
/// Owns the host's change callback and the sanitization memory for the slot.
/// The host calls [`ValueEditor::evaluate`] after every state change and routes
/// control edits through [`ValueEditor::handle_edit`].
pub struct ValueEditor<F>
where
    F: FnMut(EditorValue),
{
    config: EditorConfig,
    sanitizer: Sanitizer,
    on_change: F,
}

impl<F> ValueEditor<F>
where
    F: FnMut(EditorValue),
{
    pub fn new(on_change: F) -> Self {
        Self::with_config(EditorConfig::default(), on_change)
    }

    pub fn with_config(config: EditorConfig, on_change: F) -> Self {
        Self {
            config,
            sanitizer: Sanitizer::new(),
            on_change,
        }
    }

    /// Resolve the control for `state`, then run the sanitization check.
    ///
    /// The check runs for every state, suppressed ones included, and issues at
    /// most one reset per distinct `(operator, input type, value)`.
    pub fn evaluate(&mut self, state: &EditorState) -> Evaluation {
        let outcome = resolve_with(state, &self.config);
        let reset = self.sanitizer.observe(state, &self.config);
        if reset {
            info!(
                operator = %state.operator,
                "clearing delimited value in numeric field"
            );
            (self.on_change)(EditorValue::Text(String::new()));
        }
        Evaluation { outcome, reset }
    }

    /// Apply a control edit and report the resulting value to the host.
    pub fn handle_edit(&mut self, handler: &ChangeHandler, edit: Edit) -> EditorValue {
        let value = handler.apply(edit);
        (self.on_change)(value.clone());
        value
    }
}
