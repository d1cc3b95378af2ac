//! Interactive scan loop.
//!
//! Lines are read on a dedicated thread and stamped when they arrive, so the
//! debounce windows are measured on arrival time no matter how long the loop
//! spends on a request. Lines starting with `:` drive the session, every
//! other line is decoded as a scan event and offered to the debouncer.

use crate::core::session::{AdjustOutcome, Direction, Feedback, LookupResult, ScanSession};
use crate::errors::AppResult;
use crate::models::scan_event::ScanEvent;
use crate::models::symbology::Symbology;
use crate::ui::messages::{detail, error, info, server_badge, warning};
use chrono::{DateTime, Utc};
use std::io::{self, BufRead};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// One line from the scan source and the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl InputLine {
    pub fn new(text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            received_at,
        }
    }
}

/// Read `reader` line by line on its own thread.
///
/// The thread stops at EOF, after a read error (which is forwarded), or once
/// the receiver is gone.
pub fn spawn_line_reader<R>(reader: R) -> UnboundedReceiver<io::Result<InputLine>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            let item = line.map(|text| InputLine::new(text, Utc::now()));
            if tx.send(item).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionInput {
    /// Raw scan payload (plain code or JSON event).
    Scan(String),
    /// `:+[N]` / `:-[N]`, `:add [N]` / `:remove [N]`
    Apply {
        direction: Direction,
        amount: Option<String>,
    },
    /// `:amount N`
    Amount(String),
    /// `:server URL`
    Server(String),
    /// `:health`
    Health,
    /// `:help`
    Help,
    /// `:quit`, `:q`
    Quit,
    /// Blank line or unknown `:` command.
    Ignored(String),
}

impl SessionInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SessionInput::Ignored(String::new());
        }

        // Labels may start with `+` or `-`, so only `:` introduces a command.
        let Some(command) = trimmed.strip_prefix(':') else {
            return SessionInput::Scan(trimmed.to_string());
        };
        let command = command.trim_start();

        if let Some(rest) = command.strip_prefix('+') {
            return SessionInput::apply(Direction::Add, rest);
        }
        if let Some(rest) = command.strip_prefix('-') {
            return SessionInput::apply(Direction::Remove, rest);
        }

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "add" => SessionInput::apply(Direction::Add, arg),
            "remove" | "rm" => SessionInput::apply(Direction::Remove, arg),
            "amount" => SessionInput::Amount(arg.to_string()),
            "server" => SessionInput::Server(arg.to_string()),
            "health" => SessionInput::Health,
            "help" | "h" => SessionInput::Help,
            "quit" | "q" | "exit" => SessionInput::Quit,
            _ => SessionInput::Ignored(trimmed.to_string()),
        }
    }

    fn apply(direction: Direction, rest: &str) -> Self {
        let rest = rest.trim();
        SessionInput::Apply {
            direction,
            amount: (!rest.is_empty()).then(|| rest.to_string()),
        }
    }
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub accepted: usize,
    pub applied: usize,
}

pub struct ScanLogic;

impl ScanLogic {
    /// Drive `session` from `input` until EOF or `:quit`.
    ///
    /// Product lookups run as separate tasks; their results are applied
    /// between lines and ignored once the code has changed again.
    pub async fn run<F: Feedback>(
        session: &mut ScanSession<F>,
        mut input: UnboundedReceiver<io::Result<InputLine>>,
    ) -> AppResult<ScanSummary> {
        let mut summary = ScanSummary::default();
        let (lookup_tx, mut lookups) = mpsc::unbounded_channel::<LookupResult>();

        loop {
            let next = tokio::select! {
                biased;
                Some(result) = lookups.recv() => {
                    if session.finish_lookup(result) && !session.product_name().is_empty() {
                        detail("Item:", session.product_name());
                    }
                    continue;
                }
                next = input.recv() => next,
            };
            let Some(line) = next else {
                break;
            };
            let line = line?;
            summary.lines += 1;

            match SessionInput::parse(&line.text) {
                SessionInput::Scan(raw) => {
                    let Some(event) = ScanEvent::from_line(&raw, line.received_at) else {
                        continue;
                    };
                    if let Some(accepted) = session.on_scan(&event) {
                        summary.accepted += 1;
                        info(session.status());
                        if let Some(kind) = &accepted.kind {
                            detail("Type:", kind);
                        }
                        if let Some(lookup) = session.take_lookup() {
                            tracing::debug!(code = lookup.code(), "product lookup started");
                            let tx = lookup_tx.clone();
                            tokio::spawn(async move {
                                let _ = tx.send(lookup.run().await);
                            });
                        }
                    }
                }
                SessionInput::Apply { direction, amount } => {
                    if let Some(a) = amount {
                        session.set_amount(&a);
                    }
                    // Success is announced by the session feedback.
                    match session.apply(direction, None).await {
                        AdjustOutcome::Applied { qty } => {
                            summary.applied += 1;
                            if let Some(q) = qty {
                                detail("Qty after:", q);
                            }
                        }
                        AdjustOutcome::Invalid => warning(session.status()),
                        AdjustOutcome::NotApplied | AdjustOutcome::Failed => {
                            error(session.status())
                        }
                    }
                }
                SessionInput::Amount(a) => {
                    session.set_amount(&a);
                    info(format!("Amount: {}", session.amount()));
                }
                SessionInput::Server(url) => {
                    if !session.save_server_url(&url).await {
                        warning("Server URL not changed: empty input");
                    }
                    server_badge(session.health().unwrap_or(false), &session.base_url());
                }
                SessionInput::Health => {
                    let ok = session.refresh_health().await;
                    server_badge(ok, &session.base_url());
                }
                SessionInput::Help => print_help(),
                SessionInput::Quit => break,
                SessionInput::Ignored(text) => {
                    if !text.is_empty() {
                        warning(format!("Unknown command: {}", text));
                    }
                }
            }
        }

        tracing::info!(
            lines = summary.lines,
            accepted = summary.accepted,
            applied = summary.applied,
            "scan session ended"
        );
        Ok(summary)
    }
}

fn print_help() {
    println!("  <code>           scan a code (plain text or JSON event)");
    println!("  :+[N] / :-[N]    add / remove N (default: current amount)");
    println!("  :add / :remove   same as :+ / :-");
    println!("  :amount N        set the amount");
    println!("  :server URL      change the backend URL");
    println!("  :health          check the backend");
    println!("  :quit            leave the session");
    let supported = Symbology::SUPPORTED;
    let types: Vec<&str> = supported.iter().map(Symbology::as_str).collect();
    println!("  types: {}", types.join(", "));
}
