use super::loader::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub operators: OperatorConfig,
    #[serde(default)]
    pub inputs: InputConfig,
    #[serde(default)]
    pub class_names: ClassNameConfig,
}

impl EditorConfig {
    pub fn is_null_operator(&self, operator: &str) -> bool {
        contains(&self.operators.null_operators, operator)
    }

    /// Operators whose value is multi-part (range and membership).
    pub fn is_multi_value_operator(&self, operator: &str) -> bool {
        contains(&self.operators.multi_value_operators, operator)
    }

    pub fn is_between_operator(&self, operator: &str) -> bool {
        contains(&self.operators.between_operators, operator)
    }

    /// Reject settings the resolver can't work with. An empty separator
    /// would match every value and split text into single characters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        Ok(())
    }
}

fn contains(list: &[String], operator: &str) -> bool {
    list.iter().any(|op| op == operator)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorConfig {
    #[serde(default = "default_null_operators")]
    pub null_operators: Vec<String>,
    #[serde(default = "default_multi_value_operators")]
    pub multi_value_operators: Vec<String>,
    #[serde(default = "default_between_operators")]
    pub between_operators: Vec<String>,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            null_operators: default_null_operators(),
            multi_value_operators: default_multi_value_operators(),
            between_operators: default_between_operators(),
        }
    }
}

fn default_null_operators() -> Vec<String> {
    vec!["null".to_string(), "notNull".to_string()]
}

fn default_multi_value_operators() -> Vec<String> {
    vec![
        "between".to_string(),
        "notBetween".to_string(),
        "in".to_string(),
        "notIn".to_string(),
    ]
}

fn default_between_operators() -> Vec<String> {
    vec!["between".to_string(), "notBetween".to_string()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_type")]
    pub default_input_type: String,
    #[serde(default = "default_numeric_input_type")]
    pub numeric_input_type: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_input_type: default_input_type(),
            numeric_input_type: default_numeric_input_type(),
            separator: default_separator(),
        }
    }
}

fn default_input_type() -> String {
    "text".to_string()
}

fn default_numeric_input_type() -> String {
    "number".to_string()
}

fn default_separator() -> String {
    ",".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassNameConfig {
    #[serde(default = "default_between_selector_1")]
    pub between_selector_1: String,
    #[serde(default = "default_between_selector_2")]
    pub between_selector_2: String,
}

impl Default for ClassNameConfig {
    fn default() -> Self {
        Self {
            between_selector_1: default_between_selector_1(),
            between_selector_2: default_between_selector_2(),
        }
    }
}

fn default_between_selector_1() -> String {
    "rule-value-between-selector-1".to_string()
}

fn default_between_selector_2() -> String {
    "rule-value-between-selector-2".to_string()
}
