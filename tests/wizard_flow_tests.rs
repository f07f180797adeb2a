use std::sync::{Arc, mpsc};
use std::time::Duration;

use nftctl::actions::{Collaborator, DryRunCollaborator, spawn_action};
use nftctl::core::action::{DeferredAction, Effect, Event, FollowUp, Key, update};
use nftctl::core::auth::Secret;
use nftctl::core::error::WizardError;
use nftctl::core::notification::Notification;
use nftctl::core::presenter::render;
use nftctl::core::state::{AirdropMode, Page, Session};

// ============================================================================
// Helper Functions
// ============================================================================

fn press(session: &mut Session, key: Key) -> Effect {
    update(session, Event::KeyPress(key))
}

fn type_str(session: &mut Session, text: &str) {
    for c in text.chars() {
        press(session, Key::Char(c));
    }
}

/// Runs a dispatched action to completion and feeds its follow-up back in,
/// the way the event loop does.
async fn complete(
    session: &mut Session,
    action: DeferredAction,
    collaborator: Arc<dyn Collaborator>,
) -> Effect {
    let (tx, rx) = mpsc::channel();
    spawn_action(action, collaborator, Duration::from_secs(5), tx)
        .await
        .expect("action task panicked");
    let event = rx.try_recv().expect("exactly one follow-up");
    assert!(rx.try_recv().is_err(), "more than one follow-up");
    update(session, event)
}

fn unlock(session: &mut Session, password: &str) {
    type_str(session, password);
    press(session, Key::Enter);
    assert_eq!(session.page, Page::MainMenu);
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_login_airdrop_upload_and_total() {
    let collaborator: Arc<dyn Collaborator> =
        Arc::new(DryRunCollaborator::new(Duration::ZERO, false));
    let mut session = Session::new(Secret::new("open sesame"));

    // Wrong password first
    type_str(&mut session, "open");
    press(&mut session, Key::Enter);
    assert_eq!(session.page, Page::PasswordGate);
    assert!(render(&session).starts_with("[error] wrong password"));

    // Retype after clearing the failed attempt
    for _ in 0.."open".len() {
        press(&mut session, Key::Backspace);
    }
    unlock(&mut session, "open sesame");
    assert!(session.authenticated);

    // Into the airdrop form
    press(&mut session, Key::Down);
    press(&mut session, Key::Enter);
    assert_eq!(session.airdrop_mode(), Some(AirdropMode::NftId));

    type_str(&mut session, "4x2");
    press(&mut session, Key::Enter);
    assert_eq!(session.airdrop_mode(), Some(AirdropMode::Url));
    assert_eq!(session.draft.nft_id, "42");

    type_str(&mut session, "http://g.com");
    let action = match press(&mut session, Key::Enter) {
        Effect::Dispatch(action @ DeferredAction::Airdrop(_)) => action,
        other => panic!("expected airdrop dispatch, got {other:?}"),
    };

    // Operator keeps typing while the airdrop is in flight
    press(&mut session, Key::Backspace);
    assert_eq!(session.draft.url, "http://g.co");

    let upload = complete(&mut session, action, collaborator.clone()).await;
    assert!(matches!(session.page, Page::UploadConfirm(ref r) if r.nft_id == "42"));

    let Effect::Dispatch(upload) = upload else {
        panic!("reaching the upload page should start the upload");
    };
    complete(&mut session, upload, collaborator.clone()).await;
    assert_eq!(
        session.notification,
        Some(Notification::success("Uploaded record of NFT #42"))
    );

    // Back to the menu and check the total
    press(&mut session, Key::Enter);
    assert_eq!(session.page, Page::MainMenu);
    assert!(session.notification.is_none());

    press(&mut session, Key::Down);
    let Effect::Dispatch(query) = press(&mut session, Key::Enter) else {
        panic!("check total should query the collaborator");
    };
    assert_eq!(session.page, Page::CheckTotal);
    complete(&mut session, query, collaborator).await;
    assert_eq!(session.notification, Some(Notification::success("Total NFTs: 1")));
    assert!(render(&session).starts_with("[ok] Total NFTs: 1"));
}

#[tokio::test]
async fn test_failed_airdrop_keeps_form() {
    let collaborator: Arc<dyn Collaborator> =
        Arc::new(DryRunCollaborator::new(Duration::ZERO, true));
    let mut session = Session::new(Secret::default());
    unlock(&mut session, "123456");

    press(&mut session, Key::Down);
    press(&mut session, Key::Enter);
    type_str(&mut session, "7");
    press(&mut session, Key::Enter);
    type_str(&mut session, "https://meta.example/7");
    let Effect::Dispatch(action) = press(&mut session, Key::Enter) else {
        panic!("expected dispatch");
    };

    let effect = complete(&mut session, action, collaborator).await;
    assert_eq!(effect, Effect::None);
    assert_eq!(session.airdrop_mode(), Some(AirdropMode::Url));
    assert_eq!(session.draft.url, "https://meta.example/7");
    assert!(matches!(
        session.notification,
        Some(Notification::Error(ref text)) if text.starts_with("action failed")
    ));

    // Next keystroke clears it
    press(&mut session, Key::Backspace);
    assert!(session.notification.is_none());
}

#[tokio::test]
async fn test_follow_up_after_navigating_away() {
    let collaborator: Arc<dyn Collaborator> =
        Arc::new(DryRunCollaborator::new(Duration::from_millis(20), false));
    let mut session = Session::new(Secret::default());
    unlock(&mut session, "123456");

    press(&mut session, Key::Down);
    press(&mut session, Key::Enter);
    type_str(&mut session, "9");
    press(&mut session, Key::Enter);
    type_str(&mut session, "http://x.y");
    let Effect::Dispatch(action) = press(&mut session, Key::Enter) else {
        panic!("expected dispatch");
    };

    // Leave the form before the result arrives
    press(&mut session, Key::Esc);
    press(&mut session, Key::Esc);
    assert_eq!(session.page, Page::MainMenu);

    complete(&mut session, action, collaborator).await;
    assert!(matches!(session.page, Page::UploadConfirm(ref r) if r.nft_id == "9"));

    // Esc from the upload page lands in URL mode with the draft as it is now
    press(&mut session, Key::Esc);
    assert_eq!(session.airdrop_mode(), Some(AirdropMode::Url));
    assert!(session.draft.nft_id.is_empty());
}

#[test]
fn test_deploy_dispatch_and_error_follow_up() {
    let mut session = Session::new(Secret::default());
    unlock(&mut session, "123456");

    press(&mut session, Key::Enter);
    assert_eq!(session.page, Page::DeployMenu);
    assert_eq!(
        press(&mut session, Key::Enter),
        Effect::Dispatch(DeferredAction::BeginDeploy)
    );
    assert_eq!(session.page, Page::DeployContractForm);

    update(
        &mut session,
        Event::FollowUp(FollowUp::ErrorOccurred(WizardError::ExternalActionFailed(
            "gas too low".into(),
        ))),
    );
    assert_eq!(session.page, Page::DeployContractForm);
    assert!(render(&session).starts_with("[error] action failed: gas too low"));
}

#[test]
fn test_lock_and_leave_gate_with_esc() {
    let mut session = Session::new(Secret::default());
    unlock(&mut session, "123456");

    for _ in 0..3 {
        press(&mut session, Key::Down);
    }
    press(&mut session, Key::Enter);
    assert_eq!(session.page, Page::PasswordGate);
    assert!(!session.authenticated);

    type_str(&mut session, "12");
    press(&mut session, Key::Esc);
    assert_eq!(session.page, Page::MainMenu);
    assert!(!session.authenticated);
    assert!(session.password.is_empty());

    // Lock is still selected, so Enter goes straight back to the gate
    assert_eq!(session.menu_cursor, 3);
    press(&mut session, Key::Enter);
    assert_eq!(session.page, Page::PasswordGate);
    unlock(&mut session, "123456");
    assert!(session.authenticated);
}
