use crate::config::EditorConfig;
use crate::resolver::resolve_with;
use crate::sanitizer::Sanitizer;
use qbval_common::{flatten, EditorState, OptionEntry};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One editing slot exposed to JavaScript hosts.
#[wasm_bindgen]
pub struct QbValueEditor {
    config: EditorConfig,
    sanitizer: Sanitizer,
}

#[derive(Serialize)]
struct EvaluationJson<'a> {
    outcome: &'a crate::outcome::RenderOutcome,
    reset: bool,
}

#[wasm_bindgen]
impl QbValueEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            config: EditorConfig::default(),
            sanitizer: Sanitizer::new(),
        }
    }

    /// Replace the configuration from a JSON document.
    ///
    /// The sanitization memory is cleared, so the next `evaluate` re-checks
    /// its state under the new rules.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config: EditorConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.config = config;
        self.sanitizer.reset();
        Ok(())
    }

    /// Resolve a state without touching the slot's sanitization memory.
    pub fn resolve(&self, state_json: &str) -> Result<String, JsValue> {
        let state = parse_state(state_json)?;
        to_json(&resolve_with(&state, &self.config))
    }

    /// Resolve and sanitize; `reset: true` means the host must set the value to "".
    pub fn evaluate(&mut self, state_json: &str) -> Result<String, JsValue> {
        let state = parse_state(state_json)?;
        let outcome = resolve_with(&state, &self.config);
        let reset = self.sanitizer.observe(&state, &self.config);
        to_json(&EvaluationJson {
            outcome: &outcome,
            reset,
        })
    }

    pub fn flatten(options_json: &str) -> Result<String, JsValue> {
        let options: Vec<OptionEntry> = serde_json::from_str(options_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse options: {}", e)))?;
        to_json(&flatten(&options))
    }

    #[wasm_bindgen(js_name = getVersion)]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

impl Default for QbValueEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_state(state_json: &str) -> Result<EditorState, JsValue> {
    serde_json::from_str(state_json)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse state: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}
