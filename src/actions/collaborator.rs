use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::action::{AirdropReceipt, AirdropRequest};
use crate::core::error::WizardError;

/// Errors a collaborator can report back to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The operation was refused (bad input, insufficient rights, ...).
    Rejected(String),
    /// The backend could not be reached.
    Unavailable(String),
    /// The operation did not finish within the configured timeout.
    TimedOut(Duration),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Rejected(msg) => write!(f, "rejected: {msg}"),
            ActionError::Unavailable(msg) => write!(f, "unavailable: {msg}"),
            ActionError::TimedOut(after) => write!(f, "timed out after {after:?}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<ActionError> for WizardError {
    fn from(err: ActionError) -> Self {
        WizardError::ExternalActionFailed(err.to_string())
    }
}

/// The deploy/airdrop/upload/total backend.
///
/// Implementations may take as long as they need; the dispatcher runs each
/// call on its own task and applies the configured timeout.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Returns the name of the collaborator, for logs.
    fn name(&self) -> &str;

    /// Starts a contract deployment. The text is shown as a success message.
    async fn deploy(&self) -> Result<String, ActionError>;

    async fn airdrop(&self, request: &AirdropRequest) -> Result<AirdropReceipt, ActionError>;

    /// Uploads the record of a finished airdrop.
    async fn upload(&self, receipt: &AirdropReceipt) -> Result<String, ActionError>;

    /// Number of NFTs minted so far.
    async fn total_supply(&self) -> Result<u64, ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_into_wizard_error() {
        let err: WizardError = ActionError::TimedOut(Duration::from_secs(30)).into();
        assert_eq!(
            err,
            WizardError::ExternalActionFailed("timed out after 30s".into())
        );
    }

    #[test]
    fn test_sub_second_timeout_keeps_precision() {
        let err = ActionError::TimedOut(Duration::from_millis(250));
        assert_eq!(err.to_string(), "timed out after 250ms");
    }
}
