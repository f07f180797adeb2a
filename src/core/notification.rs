//! One-shot message slot shown above the current screen.
//!
//! The slot holds at most one message and is overwritten, never queued.
//! `update()` clears it at the start of every keystroke.

use crate::core::error::WizardError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Error(String),
    Success(String),
}

impl Notification {
    pub fn error(err: &WizardError) -> Self {
        Notification::Error(err.to_string())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Notification::Success(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Notification::Error(text) | Notification::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}
