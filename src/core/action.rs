//! # Events
//!
//! Everything that can happen to the wizard becomes an `Event`.
//! Operator presses Enter? That's `Event::KeyPress(Key::Enter)`.
//! An airdrop finishes? That's `Event::FollowUp(FollowUp::AirdropRequested(..))`.
//!
//! The `update()` function takes the current session and an event, mutates
//! the session, and returns an `Effect` telling the caller what to do next.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! Session + Event  →  update()  →  Session' + Effect
//! ```
//!
//! Deferred work (deploy, airdrop, upload, total) is requested through
//! `Effect::Dispatch`. Its result comes back later as a `FollowUp` event
//! through the same `update()`.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::WizardError;
use crate::core::notification::Notification;
use crate::core::state::{AirdropMode, DEPLOY_MENU, MAIN_MENU, Page, Session};
use crate::core::validate::{admits_nft_id_char, admits_url_char, validate_nft_id, validate_url};

/// The fixed key vocabulary the wizard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Backspace,
    Enter,
    Esc,
    Quit,
}

/// An airdrop the operator has filled in and confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropRequest {
    pub request_id: Uuid,
    pub nft_id: String,
    pub url: String,
}

impl AirdropRequest {
    pub fn new(nft_id: String, url: String) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            nft_id,
            url,
        }
    }
}

/// Proof that an airdrop went through, shown on the upload page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirdropReceipt {
    pub request_id: Uuid,
    pub nft_id: String,
    pub url: String,
    pub completed_at: DateTime<Utc>,
}

impl AirdropReceipt {
    pub fn for_request(request: &AirdropRequest, completed_at: DateTime<Utc>) -> Self {
        Self {
            request_id: request.request_id,
            nft_id: request.nft_id.clone(),
            url: request.url.clone(),
            completed_at,
        }
    }
}

/// Result of a previously dispatched `DeferredAction`.
#[derive(Debug, Clone, PartialEq)]
pub enum FollowUp {
    AirdropRequested(AirdropReceipt),
    ErrorOccurred(WizardError),
    Succeeded(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    KeyPress(Key),
    FollowUp(FollowUp),
}

/// External work requested by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    BeginDeploy,
    Airdrop(AirdropRequest),
    Upload(AirdropReceipt),
    QueryTotal,
}

/// What the event loop should do after `update()` returns.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Dispatch(DeferredAction),
}

pub fn update(session: &mut Session, event: Event) -> Effect {
    match event {
        Event::KeyPress(key) => {
            // A notification lives for exactly one keystroke.
            session.notification = None;
            handle_key(session, key)
        }
        Event::FollowUp(follow_up) => handle_follow_up(session, follow_up),
    }
}

fn handle_key(session: &mut Session, key: Key) -> Effect {
    match key {
        Key::Quit => {
            info!("Quit requested from {}", session.page.title());
            return Effect::Quit;
        }
        Key::Esc => {
            handle_escape(session);
            return Effect::None;
        }
        _ => {}
    }

    match session.page {
        Page::PasswordGate => password_gate(session, key),
        Page::MainMenu => main_menu(session, key),
        Page::DeployMenu => deploy_menu(session, key),
        Page::AirdropForm { mode } => airdrop_form(session, mode, key),
        Page::UploadConfirm(_) => {
            if key == Key::Enter {
                go_to(session, Page::MainMenu);
            }
            Effect::None
        }
        Page::DeployContractForm | Page::CheckTotal => Effect::None,
    }
}

fn handle_escape(session: &mut Session) {
    match session.page {
        Page::MainMenu => {}
        Page::AirdropForm {
            mode: AirdropMode::Url,
        } => {
            session.draft.url.clear();
            go_to(
                session,
                Page::AirdropForm {
                    mode: AirdropMode::NftId,
                },
            );
        }
        Page::UploadConfirm(_) => go_to(
            session,
            Page::AirdropForm {
                mode: AirdropMode::Url,
            },
        ),
        _ => {
            // The typed password never outlives the gate.
            if session.page == Page::PasswordGate {
                session.password.clear();
            }
            go_to(session, Page::MainMenu);
            session.draft.nft_id.clear();
        }
    }
}

fn handle_follow_up(session: &mut Session, follow_up: FollowUp) -> Effect {
    match follow_up {
        FollowUp::AirdropRequested(receipt) => {
            info!(
                "Airdrop {} of NFT #{} completed",
                receipt.request_id, receipt.nft_id
            );
            go_to(session, Page::UploadConfirm(receipt.clone()));
            Effect::Dispatch(DeferredAction::Upload(receipt))
        }
        FollowUp::ErrorOccurred(err) => {
            session.notification = Some(Notification::error(&err));
            Effect::None
        }
        FollowUp::Succeeded(text) => {
            session.notification = Some(Notification::success(text));
            Effect::None
        }
    }
}

fn password_gate(session: &mut Session, key: Key) -> Effect {
    match key {
        Key::Char(c) => session.password.push(c),
        Key::Backspace => {
            session.password.pop();
        }
        Key::Enter => {
            if session.secret.matches(&session.password) {
                info!("Password accepted");
                session.authenticated = true;
                session.password.clear();
                go_to(session, Page::MainMenu);
                session.notification = Some(Notification::success("Access granted"));
            } else {
                warn!("Password rejected");
                session.notification = Some(Notification::error(&WizardError::WrongPassword));
            }
        }
        _ => {}
    }
    Effect::None
}

fn main_menu(session: &mut Session, key: Key) -> Effect {
    match key {
        Key::Up | Key::Down => {
            session.menu_cursor = move_cursor(session.menu_cursor, key, MAIN_MENU.len());
            Effect::None
        }
        Key::Enter => match session.menu_cursor {
            0 => {
                go_to(session, Page::DeployMenu);
                Effect::None
            }
            1 => {
                session.draft.nft_id.clear();
                go_to(
                    session,
                    Page::AirdropForm {
                        mode: AirdropMode::NftId,
                    },
                );
                Effect::None
            }
            2 => {
                go_to(session, Page::CheckTotal);
                Effect::Dispatch(DeferredAction::QueryTotal)
            }
            3 => {
                info!("Session locked");
                session.authenticated = false;
                session.password.clear();
                go_to(session, Page::PasswordGate);
                Effect::None
            }
            _ => Effect::None,
        },
        _ => Effect::None,
    }
}

fn deploy_menu(session: &mut Session, key: Key) -> Effect {
    match key {
        Key::Up | Key::Down => {
            session.deploy_cursor = move_cursor(session.deploy_cursor, key, DEPLOY_MENU.len());
            Effect::None
        }
        Key::Enter if session.deploy_cursor == 0 => {
            go_to(session, Page::DeployContractForm);
            Effect::Dispatch(DeferredAction::BeginDeploy)
        }
        _ => Effect::None,
    }
}

fn airdrop_form(session: &mut Session, mode: AirdropMode, key: Key) -> Effect {
    let draft = &mut session.draft;
    match (mode, key) {
        (AirdropMode::NftId, Key::Char(c)) => {
            if admits_nft_id_char(c) {
                draft.nft_id.push(c);
            }
        }
        (AirdropMode::Url, Key::Char(c)) => {
            if admits_url_char(c) {
                draft.url.push(c);
            }
        }
        (AirdropMode::NftId, Key::Backspace) => {
            draft.nft_id.pop();
        }
        (AirdropMode::Url, Key::Backspace) => {
            draft.url.pop();
        }
        (AirdropMode::NftId, Key::Enter) => match validate_nft_id(&draft.nft_id) {
            Ok(()) => go_to(
                session,
                Page::AirdropForm {
                    mode: AirdropMode::Url,
                },
            ),
            Err(err) => session.notification = Some(Notification::error(&err)),
        },
        (AirdropMode::Url, Key::Enter) => match validate_url(&draft.url) {
            Ok(()) => {
                let request = AirdropRequest::new(draft.nft_id.clone(), draft.url.clone());
                info!(
                    "Requesting airdrop {} of NFT #{}",
                    request.request_id, request.nft_id
                );
                return Effect::Dispatch(DeferredAction::Airdrop(request));
            }
            Err(err) => session.notification = Some(Notification::error(&err)),
        },
        _ => {}
    }
    Effect::None
}

/// Moves a menu cursor one step, clamped to `[0, len - 1]`.
fn move_cursor(cursor: usize, key: Key, len: usize) -> usize {
    match key {
        Key::Up => cursor.saturating_sub(1),
        Key::Down => (cursor + 1).min(len.saturating_sub(1)),
        _ => cursor,
    }
}

fn go_to(session: &mut Session, page: Page) {
    debug!("Page: {} -> {}", session.page.title(), page.title());
    session.page = page;
}
