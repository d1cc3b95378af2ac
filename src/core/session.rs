//! Scan session state: everything the scanner screen keeps between actions.
//!
//! The session owns the debouncer, so scan events must be fed from a single
//! consumer. Writes and health checks are awaited in place. The product
//! lookup for a newly scanned code is handed out as a detached future
//! ([`ScanSession::take_lookup`]) so it never delays the next scan.

use crate::api::InventoryApi;
use crate::core::debounce::{AcceptedScan, ScanDebouncer};
use crate::models::scan_event::ScanEvent;
use crate::models::symbology::Symbology;

pub const MSG_SCAN_FIRST: &str = "Scan a code first";
pub const MSG_POSITIVE_AMOUNT: &str = "Enter a positive amount";
pub const MSG_UPDATING: &str = "Updating…";
pub const MSG_UPDATE_FAILED: &str = "Update failed";
pub const MSG_NETWORK_ERROR: &str = "Network error";

/// Side effects the session asks the surrounding surface to perform.
pub trait Feedback {
    /// Short haptic pulse on an accepted scan.
    fn pulse(&self);
    /// Popup-style notification, used only for successful writes.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Remove,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Add => 1.0,
            Direction::Remove => -1.0,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Direction::Add => "Added",
            Direction::Remove => "Removed",
        }
    }
}

/// Result of [`ScanSession::apply`]. The status text is set in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum AdjustOutcome {
    /// Rejected locally, no request was sent.
    Invalid,
    /// The server acknowledged the change.
    Applied { qty: Option<f64> },
    /// The server answered but did not confirm the change.
    NotApplied,
    /// The request failed; the status carries the message.
    Failed,
}

impl AdjustOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AdjustOutcome::Applied { .. })
    }
}

/// Product name fetched for `code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub code: String,
    pub name: String,
}

/// A product lookup detached from the session, ready to be spawned.
#[derive(Debug, Clone)]
pub struct PendingLookup {
    api: InventoryApi,
    code: String,
}

impl PendingLookup {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub async fn run(self) -> LookupResult {
        let name = self
            .api
            .lookup_product(&self.code)
            .await
            .map(|p| p.display_name().to_string())
            .unwrap_or_default();
        LookupResult {
            code: self.code,
            name,
        }
    }
}

pub struct ScanSession<F: Feedback> {
    api: InventoryApi,
    feedback: F,
    debouncer: ScanDebouncer,
    code: Option<String>,
    last_kind: Option<Symbology>,
    product_name: String,
    amount: String,
    qty_after: Option<f64>,
    status: String,
    health: Option<bool>,
    pending_lookup: Option<String>,
}

impl<F: Feedback> ScanSession<F> {
    pub fn new(api: InventoryApi, feedback: F, default_amount: &str) -> Self {
        Self {
            api,
            feedback,
            debouncer: ScanDebouncer::new(),
            code: None,
            last_kind: None,
            product_name: String::new(),
            amount: default_amount.to_string(),
            qty_after: None,
            status: String::new(),
            health: None,
            pending_lookup: None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn last_kind(&self) -> Option<&Symbology> {
        self.last_kind.as_ref()
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.trim().to_string();
    }

    pub fn qty_after(&self) -> Option<f64> {
        self.qty_after
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn health(&self) -> Option<bool> {
        self.health
    }

    pub fn base_url(&self) -> String {
        self.api.endpoints().base_url()
    }

    /// Feed one scan event. Returns the accepted scan, if any.
    ///
    /// On acceptance the current code changes, the status becomes
    /// `Scanned: <code>` and the feedback pulses. When the code differs from
    /// the previous one its product name is cleared and a lookup is queued
    /// for [`ScanSession::take_lookup`].
    pub fn on_scan(&mut self, event: &ScanEvent) -> Option<AcceptedScan> {
        let accepted = self.debouncer.offer(event)?;

        tracing::info!(code = %accepted.code, kind = ?accepted.kind, "scan accepted");
        if self.code.as_deref() != Some(accepted.code.as_str()) {
            self.code = Some(accepted.code.clone());
            self.product_name.clear();
            self.pending_lookup = Some(accepted.code.clone());
        }
        self.last_kind = accepted.kind.clone();
        self.status = format!("Scanned: {}", accepted.code);
        self.feedback.pulse();

        Some(accepted)
    }

    /// Take the queued product lookup, if any. It owns a clone of the
    /// client; hand its result back through [`ScanSession::finish_lookup`].
    pub fn take_lookup(&mut self) -> Option<PendingLookup> {
        let code = self.pending_lookup.take()?;
        Some(PendingLookup {
            api: self.api.clone(),
            code,
        })
    }

    /// Store a lookup result. Results for a code that is no longer current
    /// are dropped. Returns whether the name was stored.
    pub fn finish_lookup(&mut self, result: LookupResult) -> bool {
        if self.code.as_deref() != Some(result.code.as_str()) {
            tracing::debug!(code = %result.code, "discarding stale product lookup");
            return false;
        }
        self.product_name = result.name;
        true
    }

    /// Run the queued lookup in place.
    pub async fn resolve_product(&mut self) {
        if let Some(lookup) = self.take_lookup() {
            let result = lookup.run().await;
            self.finish_lookup(result);
        }
    }

    /// Set the current code directly, bypassing the debouncer (single-shot use).
    pub async fn select_code(&mut self, code: &str) {
        let code = code.trim();
        self.product_name.clear();
        if code.is_empty() {
            self.code = None;
            self.pending_lookup = None;
            return;
        }
        self.code = Some(code.to_string());
        self.pending_lookup = Some(code.to_string());
        self.resolve_product().await;
    }

    /// Apply the current amount to the current code, signed by `direction`.
    pub async fn apply(&mut self, direction: Direction, note: Option<&str>) -> AdjustOutcome {
        let Some(code) = self.code.clone() else {
            self.status = MSG_SCAN_FIRST.to_string();
            return AdjustOutcome::Invalid;
        };

        let Some(amount) = parse_amount(&self.amount) else {
            self.status = MSG_POSITIVE_AMOUNT.to_string();
            return AdjustOutcome::Invalid;
        };

        self.status = MSG_UPDATING.to_string();

        match self
            .api
            .adjust_quantity(&code, direction.sign() * amount, note)
            .await
        {
            Ok(ack) if ack.ok => {
                let message = format!("{} {}", direction.verb(), amount);
                self.qty_after = ack.qty;
                self.feedback.notify(&format!("Success: {}", message));
                self.status = message;
                AdjustOutcome::Applied { qty: ack.qty }
            }
            Ok(_) => {
                self.status = MSG_UPDATE_FAILED.to_string();
                AdjustOutcome::NotApplied
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(%code, error = %message, "quantity adjustment failed");
                self.status = if message.is_empty() {
                    MSG_NETWORK_ERROR.to_string()
                } else {
                    message
                };
                AdjustOutcome::Failed
            }
        }
    }

    /// Run the health check and remember the result.
    pub async fn refresh_health(&mut self) -> bool {
        let ok = self.api.health().await;
        self.health = Some(ok);
        ok
    }

    /// Change the backend URL, then re-check health against the new base.
    /// Returns whether the URL was accepted.
    pub async fn save_server_url(&mut self, url: &str) -> bool {
        let accepted = self.api.endpoints().set_base_url(url);
        self.refresh_health().await;
        accepted
    }
}

/// A finite number strictly greater than zero.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}
