//! JSON input parsing

use crate::{FieldName, FieldValues, Result, TemplateError};
use layout::LayoutConfig;

/// Parse form fields from a JSON string
pub fn parse_fields(json: &str) -> Result<FieldValues> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))?;
    fields_from_value(&value)
}

/// Parse a layout configuration from a JSON string
pub fn parse_layout_config(json: &str) -> Result<LayoutConfig> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Collect known fields from a JSON object
pub fn fields_from_value(value: &serde_json::Value) -> Result<FieldValues> {
    let object = value.as_object().ok_or_else(|| {
        TemplateError::ParseError(format!(
            "expected a JSON object of form fields, got {}",
            json_type(value)
        ))
    })?;

    let mut fields = FieldValues::new();
    for (key, value) in object {
        let Ok(name) = key.parse::<FieldName>() else {
            log::debug!("ignoring unknown form field {key:?}");
            continue;
        };
        match value_to_string(value) {
            Some(text) => {
                fields.set(name, text);
            }
            None if !value.is_null() => {
                log::warn!("ignoring non-scalar value for form field {key:?}");
            }
            None => {}
        }
    }

    Ok(fields)
}

/// Convert a scalar JSON value to its form string
///
/// Numbers print the way a browser would (`500000`, `1.5`), booleans as
/// `true`/`false`. `null`, arrays and objects have no form string.
pub fn value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(number_to_string(n)),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        }
    }
}

fn number_to_string(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            // Integral floats print without a fraction
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
