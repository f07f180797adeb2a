//! Runs a `DeferredAction` on the tokio runtime and posts its result back to
//! the event loop as exactly one `Event::FollowUp`.
//!
//! The event loop owns the receiving end of a `std::sync::mpsc` channel and
//! drains it between keystrokes, so follow-ups are processed one at a time
//! like any other event, always after the keystroke that caused them.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::actions::{ActionError, Collaborator};
use crate::core::action::{DeferredAction, Event, FollowUp};

pub fn spawn_action(
    action: DeferredAction,
    collaborator: Arc<dyn Collaborator>,
    timeout: Duration,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    info!("Dispatching {} to {}", describe(&action), collaborator.name());
    tokio::spawn(async move {
        let label = describe(&action);
        let follow_up = match tokio::time::timeout(timeout, run(collaborator.as_ref(), action)).await {
            Ok(follow_up) => follow_up,
            Err(_) => {
                warn!("{} timed out after {:?}", label, timeout);
                FollowUp::ErrorOccurred(ActionError::TimedOut(timeout).into())
            }
        };
        debug!("{} finished: {:?}", label, follow_up);
        if tx.send(Event::FollowUp(follow_up)).is_err() {
            warn!("Failed to send {} result: receiver dropped", label);
        }
    })
}

async fn run(collaborator: &dyn Collaborator, action: DeferredAction) -> FollowUp {
    let result = match action {
        DeferredAction::BeginDeploy => collaborator.deploy().await.map(FollowUp::Succeeded),
        DeferredAction::Airdrop(request) => collaborator
            .airdrop(&request)
            .await
            .map(FollowUp::AirdropRequested),
        DeferredAction::Upload(receipt) => {
            collaborator.upload(&receipt).await.map(FollowUp::Succeeded)
        }
        DeferredAction::QueryTotal => collaborator
            .total_supply()
            .await
            .map(|total| FollowUp::Succeeded(format!("Total NFTs: {total}"))),
    };
    result.unwrap_or_else(|err| {
        warn!("{} failed: {}", collaborator.name(), err);
        FollowUp::ErrorOccurred(err.into())
    })
}

fn describe(action: &DeferredAction) -> &'static str {
    match action {
        DeferredAction::BeginDeploy => "deploy",
        DeferredAction::Airdrop(_) => "airdrop",
        DeferredAction::Upload(_) => "upload",
        DeferredAction::QueryTotal => "total supply query",
    }
}
