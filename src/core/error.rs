use std::fmt;

/// Everything that can go wrong while an operator drives the wizard.
///
/// None of these are fatal. Each one surfaces as a single error
/// notification and leaves the session's buffers untouched so the
/// operator can correct the input and try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// A required field was submitted empty.
    EmptyField,
    /// A field exceeded its maximum length.
    TooLong,
    /// A field did not match its expected format.
    BadFormat,
    /// The password gate rejected the typed password.
    WrongPassword,
    /// A deferred action (deploy, airdrop, upload, total) failed.
    ExternalActionFailed(String),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::EmptyField => write!(f, "field must not be empty"),
            WizardError::TooLong => write!(f, "input is too long"),
            WizardError::BadFormat => write!(f, "not a valid http(s) URL"),
            WizardError::WrongPassword => write!(f, "wrong password"),
            WizardError::ExternalActionFailed(reason) => {
                write!(f, "action failed: {reason}")
            }
        }
    }
}

impl std::error::Error for WizardError {}
