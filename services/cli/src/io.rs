use audience_builder::config::OutputFormat;
use audience_builder::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Reads a JSON document from `path`, or from stdin when no path is given.
pub(crate) fn read_json(path: Option<&Path>) -> Result<Value, AppError> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_json(&raw)
}

/// Blank input is treated as JSON `null` so callers get defaults.
pub(crate) fn parse_json(raw: &str) -> Result<Value, AppError> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn render_json<T: Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<String, AppError> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(rendered)
}

pub(crate) fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), AppError> {
    println!("{}", render_json(value, format)?);
    Ok(())
}
