use crate::models::symbology::Symbology;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single read produced by the scan source.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEvent {
    /// Decoded payload. `None` when the reader produced nothing usable.
    pub code: Option<String>,
    pub kind: Option<Symbology>,
    pub timestamp: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(code: impl Into<String>, kind: Option<Symbology>, timestamp: DateTime<Utc>) -> Self {
        Self {
            code: Some(code.into()),
            kind,
            timestamp,
        }
    }

    /// Decode one line from the scan source.
    ///
    /// - blank line → `None`
    /// - JSON object → structured event (`{type, data}` or `{barcodes: [...]}`)
    /// - anything else → plain code typed by a keyboard-wedge reader
    pub fn from_line(line: &str, timestamp: DateTime<Utc>) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.starts_with('{')
            && let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed)
        {
            return Some(Self::from_json(&value, timestamp));
        }

        Some(Self::new(trimmed, None, timestamp))
    }

    /// Build an event from a JSON payload.
    ///
    /// The top-level `data` wins; otherwise the first entry of `barcodes`
    /// is used (`rawValue` before `data`, `type` before `format`, falling
    /// back to the top-level `type`).
    pub fn from_json(value: &Value, timestamp: DateTime<Utc>) -> Self {
        let mut code = payload_string(value.get("data"));
        let mut kind = payload_string(value.get("type"));

        if code.is_none()
            && let Some(first) = value
                .get("barcodes")
                .and_then(Value::as_array)
                .and_then(|list| list.first())
        {
            code = payload_string(first.get("rawValue")).or_else(|| payload_string(first.get("data")));
            kind = payload_string(first.get("type"))
                .or_else(|| payload_string(first.get("format")))
                .or(kind);
        }

        Self {
            code,
            kind: kind.as_deref().and_then(Symbology::from_name),
            timestamp,
        }
    }

    /// Payload if present and non-empty.
    pub fn payload(&self) -> Option<&str> {
        self.code.as_deref().filter(|c| !c.is_empty())
    }
}

/// Strings are taken as-is, numbers and `true` are stringified. Falsy
/// values (`""`, `0`, `false`, `null`) and containers count as absent.
fn payload_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
