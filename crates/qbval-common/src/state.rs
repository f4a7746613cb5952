use crate::options::OptionEntry;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Snapshot of a single value-editing slot, rebuilt by the host on every render.
///
/// Field names follow the host's JSON shape (`type`, `inputType`, `values`, `testID`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub operator: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<ValueEditorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<EditorValue>,
    #[serde(rename = "values", default, skip_serializing_if = "Option::is_none")]
    pub value_options: Option<Vec<OptionEntry>>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_data: Option<FieldData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(rename = "testID", default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl EditorState {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, declared_type: ValueEditorType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<EditorValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<OptionEntry>) -> Self {
        self.value_options = Some(options);
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field_data = Some(FieldData {
            placeholder: Some(placeholder.into()),
        });
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Placeholder text from the field metadata, or empty.
    pub fn placeholder(&self) -> String {
        self.field_data
            .as_ref()
            .and_then(|f| f.placeholder.clone())
            .unwrap_or_default()
    }

    /// Declared options, or an empty slice when the field declares none.
    pub fn options(&self) -> &[OptionEntry] {
        self.value_options.as_deref().unwrap_or(&[])
    }
}

/// Field metadata the editor reads from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Current value of an editing slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditorValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Array-like value. Scalar items are kept as text, so `[1, 9]` reads
    /// as `["1", "9"]`.
    #[serde(deserialize_with = "deserialize_list")]
    List(Vec<String>),
}

/// One item of an array value as the host may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListItem {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Null(()),
    Other(IgnoredAny),
}

impl From<ListItem> for String {
    fn from(item: ListItem) -> Self {
        match item {
            ListItem::Bool(b) => b.to_string(),
            ListItem::Int(n) => n.to_string(),
            ListItem::Float(n) => n.to_string(),
            ListItem::Text(s) => s,
            ListItem::Null(()) | ListItem::Other(_) => String::new(),
        }
    }
}

fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<ListItem>::deserialize(deserializer)?;
    Ok(items.into_iter().map(String::from).collect())
}

impl EditorValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EditorValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Loose truthiness: non-empty text, `true`, non-zero numbers and any list.
    pub fn is_truthy(&self) -> bool {
        match self {
            EditorValue::Bool(b) => *b,
            EditorValue::Number(n) => *n != 0.0 && !n.is_nan(),
            EditorValue::Text(s) => !s.is_empty(),
            EditorValue::List(_) => true,
        }
    }
}

impl fmt::Display for EditorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorValue::Bool(b) => write!(f, "{}", b),
            EditorValue::Number(n) => write!(f, "{}", n),
            EditorValue::Text(s) => write!(f, "{}", s),
            EditorValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for EditorValue {
    fn from(s: &str) -> Self {
        EditorValue::Text(s.to_string())
    }
}

impl From<String> for EditorValue {
    fn from(s: String) -> Self {
        EditorValue::Text(s)
    }
}

impl From<bool> for EditorValue {
    fn from(b: bool) -> Self {
        EditorValue::Bool(b)
    }
}

impl From<f64> for EditorValue {
    fn from(n: f64) -> Self {
        EditorValue::Number(n)
    }
}

impl From<i64> for EditorValue {
    fn from(n: i64) -> Self {
        EditorValue::Number(n as f64)
    }
}

impl From<Vec<String>> for EditorValue {
    fn from(items: Vec<String>) -> Self {
        EditorValue::List(items)
    }
}

/// Abstract editing kind requested for a field.
///
/// Unknown names are kept as `Other` and render as a plain input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValueEditorType {
    #[default]
    Text,
    Select,
    MultiSelect,
    Textarea,
    Checkbox,
    Switch,
    Radio,
    Other(String),
}

impl ValueEditorType {
    pub fn as_str(&self) -> &str {
        match self {
            ValueEditorType::Text => "text",
            ValueEditorType::Select => "select",
            ValueEditorType::MultiSelect => "multiselect",
            ValueEditorType::Textarea => "textarea",
            ValueEditorType::Checkbox => "checkbox",
            ValueEditorType::Switch => "switch",
            ValueEditorType::Radio => "radio",
            ValueEditorType::Other(name) => name,
        }
    }
}

impl From<&str> for ValueEditorType {
    fn from(s: &str) -> Self {
        match s {
            "text" => ValueEditorType::Text,
            "select" => ValueEditorType::Select,
            "multiselect" => ValueEditorType::MultiSelect,
            "textarea" => ValueEditorType::Textarea,
            "checkbox" => ValueEditorType::Checkbox,
            "switch" => ValueEditorType::Switch,
            "radio" => ValueEditorType::Radio,
            other => ValueEditorType::Other(other.to_string()),
        }
    }
}

impl From<String> for ValueEditorType {
    fn from(s: String) -> Self {
        ValueEditorType::from(s.as_str())
    }
}

impl From<ValueEditorType> for String {
    fn from(t: ValueEditorType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ValueEditorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_shape() {
        let json = r#"{
            "operator": "between",
            "type": "select",
            "inputType": "number",
            "value": "a,b",
            "values": [{"name": "a", "label": "A"}],
            "fieldData": {"placeholder": "Pick one"},
            "testID": "value-editor",
            "disabled": true
        }"#;
        let state: EditorState = serde_json::from_str(json).unwrap();
        assert_eq!(state.operator, "between");
        assert_eq!(state.declared_type, Some(ValueEditorType::Select));
        assert_eq!(state.input_type.as_deref(), Some("number"));
        assert_eq!(state.value, Some(EditorValue::Text("a,b".into())));
        assert_eq!(state.options().len(), 1);
        assert_eq!(state.placeholder(), "Pick one");
        assert_eq!(state.test_id.as_deref(), Some("value-editor"));
        assert!(state.disabled);
    }

    #[test]
    fn test_deserialize_minimal_state() {
        let state: EditorState = serde_json::from_str(r#"{"operator": "="}"#).unwrap();
        assert_eq!(state.declared_type, None);
        assert_eq!(state.value, None);
        assert!(state.options().is_empty());
        assert_eq!(state.placeholder(), "");
        assert!(!state.disabled);
    }

    #[test]
    fn test_value_shapes() {
        let values: Vec<EditorValue> =
            serde_json::from_str(r#"[true, 0, 2.5, "x", ["a", "b"]]"#).unwrap();
        assert_eq!(values[0], EditorValue::Bool(true));
        assert_eq!(values[1], EditorValue::Number(0.0));
        assert_eq!(values[2], EditorValue::Number(2.5));
        assert_eq!(values[3], EditorValue::Text("x".into()));
        assert_eq!(
            values[4],
            EditorValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_list_items_are_stringified() {
        let value: EditorValue =
            serde_json::from_str(r#"[1, 9.5, true, null, "x", {"a": 1}]"#).unwrap();
        assert_eq!(
            value,
            EditorValue::List(vec![
                "1".into(),
                "9.5".into(),
                "true".into(),
                String::new(),
                "x".into(),
                String::new(),
            ])
        );

        let state: EditorState =
            serde_json::from_str(r#"{"operator": "between", "type": "select", "value": [1, 9]}"#)
                .unwrap();
        assert_eq!(state.value, Some(EditorValue::List(vec!["1".into(), "9".into()])));
    }

    #[test]
    fn test_truthiness() {
        assert!(!EditorValue::Number(0.0).is_truthy());
        assert!(!EditorValue::Number(f64::NAN).is_truthy());
        assert!(EditorValue::Number(-1.0).is_truthy());
        assert!(EditorValue::Text("1".into()).is_truthy());
        assert!(EditorValue::Text("false".into()).is_truthy());
        assert!(!EditorValue::Text(String::new()).is_truthy());
        assert!(!EditorValue::Bool(false).is_truthy());
        assert!(EditorValue::List(vec![]).is_truthy());
    }

    #[test]
    fn test_unknown_editor_type_is_preserved() {
        let t: ValueEditorType = serde_json::from_str(r#""date""#).unwrap();
        assert_eq!(t, ValueEditorType::Other("date".into()));
        assert_eq!(serde_json::to_string(&t).unwrap(), r#""date""#);
        let t: ValueEditorType = serde_json::from_str(r#""multiselect""#).unwrap();
        assert_eq!(t, ValueEditorType::MultiSelect);
    }
}
