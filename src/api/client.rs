use crate::api::ApiError;
use crate::core::endpoint::EndpointStore;
use crate::models::adjustment::{AdjustRequest, AdjustResponse};
use crate::models::product::Product;
use serde_json::Value;
use std::time::Duration;

/// Upper bound for a whole request, connect to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for one inventory backend.
///
/// Endpoint URLs are read from the [`EndpointStore`] on every call, so a
/// base URL change applies to the next request without rebuilding the client.
#[derive(Debug, Clone)]
pub struct InventoryApi {
    client: reqwest::Client,
    endpoints: EndpointStore,
}

impl InventoryApi {
    /// Every request is abandoned after `timeout`; a stalled backend then
    /// reads as unhealthy (or a network error on writes).
    pub fn new(endpoints: EndpointStore, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &EndpointStore {
        &self.endpoints
    }

    /// `true` when the backend answers the health endpoint with a 2xx.
    /// Network failures and error statuses both map to `false`.
    pub async fn health(&self) -> bool {
        let url = self.endpoints.health_url();
        match self.client.get(&url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                tracing::debug!(%url, status = response.status().as_u16(), ok, "health check");
                ok
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "health check failed");
                false
            }
        }
    }

    /// Fetch the catalog and return the entry whose `barcode` matches exactly.
    ///
    /// The backend has no per-barcode lookup, so the whole product list is
    /// downloaded on every call. Any failure yields `None`.
    pub async fn lookup_product(&self, barcode: &str) -> Option<Product> {
        let url = self.endpoints.products_url();
        let items = match self.fetch_catalog(&url).await {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                tracing::debug!(%url, kind = json_kind(&other), "product list is not an array");
                return None;
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "product lookup failed");
                return None;
            }
        };

        let found = items
            .into_iter()
            .find(|item| item.get("barcode").and_then(Value::as_str) == Some(barcode))?;

        match serde_json::from_value::<Product>(found) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::debug!(%barcode, error = %e, "product record has unexpected shape");
                None
            }
        }
    }

    /// Send a signed quantity change for `barcode`.
    pub async fn adjust_quantity(
        &self,
        barcode: &str,
        delta: f64,
        note: Option<&str>,
    ) -> Result<AdjustResponse, ApiError> {
        let url = self.endpoints.scan_url();
        let body = AdjustRequest {
            barcode: barcode.to_string(),
            delta,
            note: note.map(str::to_string),
        };

        tracing::info!(%url, %barcode, delta, "sending quantity adjustment");

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // A body that is not JSON is treated as an empty object.
        let data = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::Object(Default::default()));

        if !status.is_success() {
            let message = server_message(&data).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::warn!(%url, status = status.as_u16(), %message, "adjustment rejected");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let ack = AdjustResponse::from_value(&data);
        tracing::debug!(ok = ack.ok, qty = ?ack.qty, product_id = ?ack.product_id, "adjustment acknowledged");
        Ok(ack)
    }

    async fn fetch_catalog(&self, url: &str) -> Result<Value, reqwest::Error> {
        self.client.get(url).send().await?.json::<Value>().await
    }
}

/// Server-provided error text: the body itself when it is a JSON string,
/// otherwise a non-empty string `error` field.
fn server_message(data: &Value) -> Option<String> {
    match data {
        Value::String(s) => Some(s.clone()),
        other => other
            .get("error")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
