use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[90m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const BG_GREEN: &str = "\x1b[42m";
const BG_RED: &str = "\x1b[41m";
const FG_WHITE: &str = "\x1b[97m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}\n{}", FG_BLUE, BOLD, msg, RESET);
}

/// Secondary detail line (product name, symbology, URL).
pub fn detail<T: fmt::Display>(label: &str, value: T) {
    println!("  {}{:<10}{} {}", DIM, label, RESET, value);
}

/// `Server: OK` / `Server: OFF` badge followed by the base URL.
pub fn server_badge(healthy: bool, base_url: &str) {
    let (bg, text) = if healthy {
        (BG_GREEN, "Server: OK")
    } else {
        (BG_RED, "Server: OFF")
    };
    println!("{}{}{} {} {}", bg, FG_WHITE, text, RESET, base_url);
}
