//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::actions::{ActionError, Collaborator};
use crate::core::action::{AirdropReceipt, AirdropRequest, Effect, Event, Key, update};
use crate::core::auth::Secret;
use crate::core::state::{Page, Session};

/// A collaborator that refuses everything.
pub struct FailingCollaborator;

#[async_trait]
impl Collaborator for FailingCollaborator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn deploy(&self) -> Result<String, ActionError> {
        Err(ActionError::Rejected("deploy refused".into()))
    }

    async fn airdrop(&self, _request: &AirdropRequest) -> Result<AirdropReceipt, ActionError> {
        Err(ActionError::Unavailable("node offline".into()))
    }

    async fn upload(&self, _receipt: &AirdropReceipt) -> Result<String, ActionError> {
        Err(ActionError::Rejected("upload refused".into()))
    }

    async fn total_supply(&self) -> Result<u64, ActionError> {
        Err(ActionError::Unavailable("node offline".into()))
    }
}

/// Creates a fresh session at the password gate with the default secret.
pub fn test_session() -> Session {
    Session::new(Secret::default())
}

/// Creates a session that has already passed the gate.
pub fn authed_session() -> Session {
    let mut session = test_session();
    session.authenticated = true;
    session.page = Page::MainMenu;
    session
}

pub fn press(session: &mut Session, key: Key) -> Effect {
    update(session, Event::KeyPress(key))
}

/// Sends every character of `text` as its own keystroke.
pub fn type_str(session: &mut Session, text: &str) {
    for c in text.chars() {
        press(session, Key::Char(c));
    }
}
