use qbval_common::{EditorState, OptionEntry};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::io::AsyncReadExt;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a whole file, or stdin when `path` is `-`.
pub async fn read_source(path: &str) -> Result<String, InputError> {
    if path == "-" {
        let mut content = String::new();
        tokio::io::stdin().read_to_string(&mut content).await?;
        return Ok(content);
    }
    Ok(tokio::fs::read_to_string(path).await?)
}

fn parse_document<T: DeserializeOwned>(content: &str) -> Result<T, InputError> {
    serde_json::from_str(content).map_err(|source| InputError::Json {
        line: source.line(),
        source,
    })
}

pub fn parse_state(content: &str) -> Result<EditorState, InputError> {
    parse_document(content)
}

pub fn parse_options(content: &str) -> Result<Vec<OptionEntry>, InputError> {
    parse_document(content)
}

/// Parse one state per non-empty line; lines starting with `#` are comments.
pub fn parse_state_lines(content: &str) -> Result<Vec<EditorState>, InputError> {
    let mut states = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let state = serde_json::from_str(trimmed).map_err(|source| InputError::Json {
            line: idx + 1,
            source,
        })?;
        states.push(state);
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_lines_skips_comments_and_blanks() {
        let content = r#"
# first the range
{"operator": "between", "inputType": "number", "value": "1,2"}

{"operator": "=", "inputType": "number", "value": "1,2"}
"#;
        let states = parse_state_lines(content).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].operator, "between");
        assert_eq!(states[1].operator, "=");
    }

    #[test]
    fn test_parse_state_lines_reports_line_number() {
        let content = "{\"operator\": \"=\"}\n{not json}\n";
        match parse_state_lines(content) {
            Err(InputError::Json { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected json error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_options_rejects_non_array() {
        assert!(parse_options(r#"{"name": "x"}"#).is_err());
    }

    #[tokio::test]
    async fn test_read_source_missing_file() {
        let result = read_source("/nonexistent/states.jsonl").await;
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
