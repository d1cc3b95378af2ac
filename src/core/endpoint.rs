//! Runtime-editable backend base URL.
//!
//! Every endpoint is derived from the current base on each call, so a change
//! made through [`EndpointStore::set_base_url`] is picked up by the very next
//! request issued through any clone of the store.

use parking_lot::RwLock;
use std::sync::Arc;

/// Used when neither the build environment nor the config file provides a URL.
pub const FALLBACK_BACKEND_URL: &str = "http://192.168.1.6:5000";

/// Base URL baked in at build time (`INVSCAN_BACKEND_URL`), if any.
pub fn build_time_default() -> &'static str {
    option_env!("INVSCAN_BACKEND_URL").unwrap_or(FALLBACK_BACKEND_URL)
}

/// Trim whitespace and strip one trailing slash.
/// Returns `None` when nothing is left after trimming.
pub fn normalize_base_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
    Some(normalized.to_string())
}

#[derive(Debug, Clone)]
pub struct EndpointStore {
    base: Arc<RwLock<String>>,
}

impl EndpointStore {
    /// Seed the store. The seed goes through the same normalization as a
    /// runtime change; an empty seed falls back to the build-time default.
    pub fn new(initial: &str) -> Self {
        let base = normalize_base_url(initial)
            .or_else(|| normalize_base_url(build_time_default()))
            .unwrap_or_else(|| FALLBACK_BACKEND_URL.to_string());

        Self {
            base: Arc::new(RwLock::new(base)),
        }
    }

    pub fn base_url(&self) -> String {
        self.base.read().clone()
    }

    /// Replace the base URL. Empty input is ignored and `false` is returned.
    pub fn set_base_url(&self, url: &str) -> bool {
        match normalize_base_url(url) {
            Some(normalized) => {
                tracing::debug!(base_url = %normalized, "backend URL changed");
                *self.base.write() = normalized;
                true
            }
            None => {
                tracing::debug!(input = %url, "ignoring empty backend URL");
                false
            }
        }
    }

    pub fn health_url(&self) -> String {
        self.endpoint("/api/health")
    }

    pub fn products_url(&self) -> String {
        self.endpoint("/api/products")
    }

    pub fn scan_url(&self) -> String {
        self.endpoint("/api/scan")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.read(), path)
    }
}

impl Default for EndpointStore {
    fn default() -> Self {
        Self::new(build_time_default())
    }
}
