use clap::ValueEnum;
use qbval_common::{EditorState, EditorValue, OptionEntry, flatten};
use qbval_core::formatter::{format_entries, format_outcome};
use qbval_core::{EditorConfig, RenderOutcome, ValueEditor, resolve_with};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn resolve_state(
    state: &EditorState,
    config: &EditorConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let outcome = resolve_with(state, config);
    match format {
        OutputFormat::Text => Ok(format_outcome(&outcome)),
        OutputFormat::Json => serde_json::to_string_pretty(&outcome),
    }
}

pub fn flatten_options(
    options: &[OptionEntry],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let entries = flatten(options);
    match format {
        OutputFormat::Text => Ok(format_entries(&entries)),
        OutputFormat::Json => serde_json::to_string_pretty(&entries),
    }
}

#[derive(Serialize)]
struct ReplayStep<'a> {
    step: usize,
    outcome: &'a RenderOutcome,
    reset: bool,
}

/// Feed states through one editing slot the way a host would.
///
/// When a state triggers a reset, the host's commit is simulated by
/// re-evaluating the same state with the reported value, so the output shows
/// the stale outcome followed by the corrected one.
pub fn replay(
    states: &[EditorState],
    config: EditorConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let pending: Rc<RefCell<Vec<EditorValue>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    let mut editor = ValueEditor::with_config(config, move |v| sink.borrow_mut().push(v));

    let mut output = String::new();
    let mut step = 0;
    for state in states {
        let mut current = state.clone();
        loop {
            step += 1;
            let eval = editor.evaluate(&current);
            output.push_str(&render_step(step, &eval.outcome, eval.reset, format)?);

            let Some(value) = pending.borrow_mut().pop() else {
                break;
            };
            debug!(step, value = %value, "committing reset value");
            current.value = Some(value);
        }
    }
    Ok(output)
}

fn render_step(
    step: usize,
    outcome: &RenderOutcome,
    reset: bool,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut text = format!("# step {}\n{}", step, format_outcome(outcome));
            if reset {
                text.push_str("! value reset to \"\"\n");
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(&ReplayStep {
                step,
                outcome,
                reset,
            })?;
            Ok(format!("{}\n", line))
        }
    }
}
