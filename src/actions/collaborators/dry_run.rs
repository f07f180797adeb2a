//! Dry-run collaborator.
//!
//! Stands in for the real contract/ledger backend: every call waits for the
//! configured latency, logs what it would have done, and succeeds (or fails,
//! when configured to). Airdrops are counted in memory so the total-supply
//! query reflects what happened in this run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};

use crate::actions::{ActionError, Collaborator};
use crate::core::action::{AirdropReceipt, AirdropRequest};

pub struct DryRunCollaborator {
    latency: Duration,
    fail: bool,
    airdropped: AtomicU64,
}

impl DryRunCollaborator {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self {
            latency,
            fail,
            airdropped: AtomicU64::new(0),
        }
    }

    async fn simulate(&self, what: &str) -> Result<(), ActionError> {
        tokio::time::sleep(self.latency).await;
        if self.fail {
            warn!("dry-run: {what} failing as configured");
            return Err(ActionError::Unavailable("dry-run backend set to fail".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl Collaborator for DryRunCollaborator {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn deploy(&self) -> Result<String, ActionError> {
        self.simulate("deploy").await?;
        info!("dry-run: contract deployment started");
        Ok("Contract deployment started".to_string())
    }

    async fn airdrop(&self, request: &AirdropRequest) -> Result<AirdropReceipt, ActionError> {
        self.simulate("airdrop").await?;
        self.airdropped.fetch_add(1, Ordering::SeqCst);
        info!(
            "dry-run: airdropped NFT #{} ({}) for request {}",
            request.nft_id, request.url, request.request_id
        );
        Ok(AirdropReceipt::for_request(request, Utc::now()))
    }

    async fn upload(&self, receipt: &AirdropReceipt) -> Result<String, ActionError> {
        self.simulate("upload").await?;
        info!("dry-run: uploaded record for request {}", receipt.request_id);
        Ok(format!("Uploaded record of NFT #{}", receipt.nft_id))
    }

    async fn total_supply(&self) -> Result<u64, ActionError> {
        self.simulate("total supply").await?;
        Ok(self.airdropped.load(Ordering::SeqCst))
    }
}
