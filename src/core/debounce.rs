//! Scan debounce policy.
//!
//! A reader may report the same label on several consecutive frames, or a
//! burst of different labels faster than anyone can react. The policy turns
//! that raw stream into accepted scans:
//!
//! 1. while locked, every event is dropped;
//! 2. the last accepted code is dropped again until `duplicate_window` has
//!    passed since it was accepted;
//! 3. anything else is accepted and locks the policy for `cooldown`.
//!
//! Both windows are measured on the event timestamps, so the lock is released
//! lazily by the first event that arrives at or after its deadline.

use crate::models::scan_event::ScanEvent;
use crate::models::symbology::Symbology;
use chrono::{DateTime, Duration, Utc};

/// Same code re-read inside this window is ignored.
pub const DUPLICATE_WINDOW_MS: i64 = 2000;
/// Nothing is accepted inside this window after an acceptance.
pub const COOLDOWN_MS: i64 = 1200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Idle,
    Locked { until: DateTime<Utc> },
}

/// A scan that passed the policy.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedScan {
    pub code: String,
    pub kind: Option<Symbology>,
    pub accepted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
struct LastAccepted {
    code: String,
    at: DateTime<Utc>,
}

/// Why an event was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Locked,
    Duplicate,
}

#[derive(Debug, Clone)]
pub struct ScanDebouncer {
    duplicate_window: Duration,
    cooldown: Duration,
    state: LockState,
    last: Option<LastAccepted>,
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanDebouncer {
    pub fn new() -> Self {
        Self::with_windows(
            Duration::milliseconds(DUPLICATE_WINDOW_MS),
            Duration::milliseconds(COOLDOWN_MS),
        )
    }

    pub fn with_windows(duplicate_window: Duration, cooldown: Duration) -> Self {
        Self {
            duplicate_window,
            cooldown,
            state: LockState::Idle,
            last: None,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn last_code(&self) -> Option<&str> {
        self.last.as_ref().map(|l| l.code.as_str())
    }

    /// Offer an event; returns the accepted scan or the reason it was dropped.
    pub fn evaluate(&mut self, event: &ScanEvent) -> Result<AcceptedScan, Rejection> {
        let Some(code) = event.payload() else {
            return Err(Rejection::Empty);
        };
        let now = event.timestamp;

        if let LockState::Locked { until } = self.state {
            if now < until {
                return Err(Rejection::Locked);
            }
            self.state = LockState::Idle;
        }

        if let Some(last) = &self.last
            && last.code == code
            && now - last.at < self.duplicate_window
        {
            return Err(Rejection::Duplicate);
        }

        self.state = LockState::Locked {
            until: now + self.cooldown,
        };
        self.last = Some(LastAccepted {
            code: code.to_string(),
            at: now,
        });

        Ok(AcceptedScan {
            code: code.to_string(),
            kind: event.kind.clone(),
            accepted_at: now,
        })
    }

    /// Like [`evaluate`](Self::evaluate), discarding the rejection reason.
    pub fn offer(&mut self, event: &ScanEvent) -> Option<AcceptedScan> {
        match self.evaluate(event) {
            Ok(accepted) => Some(accepted),
            Err(reason) => {
                tracing::trace!(?reason, code = ?event.code, "scan dropped");
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = LockState::Idle;
        self.last = None;
    }
}
