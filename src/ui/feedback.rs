use crate::core::session::Feedback;
use crate::ui::messages::success;
use std::io::{self, Write};

/// Terminal stand-in for the device haptics and toast notifications.
/// The pulse is the terminal bell, written to stderr so piped output stays clean.
pub struct TerminalFeedback {
    bell: bool,
}

impl TerminalFeedback {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Feedback for TerminalFeedback {
    fn pulse(&self) {
        if self.bell {
            let mut err = io::stderr();
            let _ = err.write_all(b"\x07");
            let _ = err.flush();
        }
    }

    fn notify(&self, message: &str) {
        success(message);
    }
}
