use serde::{Serialize, Serializer};
use serde_json::Value;

/// Body of `POST /api/scan`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustRequest {
    pub barcode: String,
    #[serde(serialize_with = "serialize_delta")]
    pub delta: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Acknowledgement returned by `POST /api/scan`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustResponse {
    pub ok: bool,
    pub product_id: Option<String>,
    /// Stock level after the adjustment, as reported by the server.
    pub qty: Option<f64>,
}

impl AdjustResponse {
    /// Read the acknowledgement leniently: missing or mistyped fields are
    /// treated as absent, a missing `ok` counts as a failed update.
    pub fn from_value(value: &Value) -> Self {
        let product_id = match value.get("productId") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        Self {
            ok: value.get("ok").and_then(Value::as_bool).unwrap_or(false),
            product_id,
            qty: value.get("qty").and_then(Value::as_f64),
        }
    }
}

/// Whole deltas go out as JSON integers, fractional ones as floats.
fn serialize_delta<S: Serializer>(delta: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if delta.fract() == 0.0 && delta.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*delta as i64)
    } else {
        serializer.serialize_f64(*delta)
    }
}
