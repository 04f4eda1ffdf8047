// input.rs - turning raw text into values, and batches back into text
use crate::config::{InputFormat, OutputFormat};
use crate::error::BatchwiseError;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the whole input, from `path` if given, otherwise from stdin
pub fn read_source(path: Option<&Path>) -> Result<String, BatchwiseError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| BatchwiseError::InputUnreadable {
            source_name: path.display().to_string(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| BatchwiseError::InputUnreadable {
                    source_name: "stdin".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}

/// Parse raw input text into the values to batch
///
/// - `Lines`: every non-blank line becomes a string value (trailing
///   whitespace trimmed)
/// - `Json`: the text must be one JSON array
pub fn parse_values(text: &str, format: InputFormat) -> Result<Vec<Value>, BatchwiseError> {
    match format {
        InputFormat::Lines => Ok(text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| Value::String(line.to_string()))
            .collect()),
        InputFormat::Json => {
            let parsed: Value = serde_json::from_str(text)
                .map_err(|e| BatchwiseError::InvalidInput(format!("not valid JSON: {}", e)))?;
            match parsed {
                Value::Array(values) => Ok(values),
                other => Err(BatchwiseError::InvalidInput(format!(
                    "expected a JSON array, got {}",
                    kind_of(&other)
                ))),
            }
        }
    }
}

/// Render batches for output
pub fn render_batches(batches: &[Vec<Value>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => batches
            .iter()
            .map(|batch| {
                batch
                    .iter()
                    .map(text_of)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => Value::Array(
            batches
                .iter()
                .map(|batch| Value::Array(batch.clone()))
                .collect(),
        )
        .to_string(),
    }
}

// Strings with whitespace are JSON-quoted so they stay one token per value.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) if !s.is_empty() && !s.contains(char::is_whitespace) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
