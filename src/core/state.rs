//! # Session State
//!
//! The single mutable state of the wizard. One `Session` exists per process;
//! there is no persistence, so every run starts at the password gate.
//!
//! ```text
//! Session
//! ├── page: Page                    // active screen (tagged)
//! ├── authenticated: bool           // gate passed
//! ├── menu_cursor: usize            // index into MAIN_MENU
//! ├── deploy_cursor: usize          // index into DEPLOY_MENU
//! ├── password: String              // typed at the gate
//! ├── draft: AirdropDraft           // NFT ID + URL buffers
//! ├── notification: Option<..>      // one-shot banner
//! └── secret: Secret                // what the gate compares against
//! ```
//!
//! State changes only happen through `update(session, event)` in action.rs.

use crate::core::action::AirdropReceipt;
use crate::core::auth::Secret;
use crate::core::notification::Notification;

pub const MAIN_MENU: [&str; 4] = ["Deploy Contract", "AirDrop NFT", "Check Total NFT", "Lock"];
pub const DEPLOY_MENU: [&str; 3] = ["Mint New NFT", "Batch Mint", "Set Base URI"];

/// Which airdrop field is currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AirdropMode {
    #[default]
    NftId,
    Url,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    PasswordGate,
    MainMenu,
    DeployMenu,
    DeployContractForm,
    AirdropForm { mode: AirdropMode },
    UploadConfirm(AirdropReceipt),
    CheckTotal,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::PasswordGate => "Password",
            Page::MainMenu => "Main Menu",
            Page::DeployMenu => "Deploy Contract",
            Page::DeployContractForm => "Mint NFT",
            Page::AirdropForm { .. } => "AirDrop NFT",
            Page::UploadConfirm(_) => "Upload",
            Page::CheckTotal => "Total NFT",
        }
    }
}

/// Text typed into the airdrop form.
///
/// Kept on the session rather than inside `Page::AirdropForm` because both
/// buffers outlive the page: they are shown again when stepping back from
/// `UploadConfirm`, and the URL survives re-entry from the main menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirdropDraft {
    pub nft_id: String,
    pub url: String,
}

#[derive(Debug)]
pub struct Session {
    pub page: Page,
    pub authenticated: bool,
    pub menu_cursor: usize,
    pub deploy_cursor: usize,
    pub password: String,
    pub draft: AirdropDraft,
    pub notification: Option<Notification>,
    pub secret: Secret,
}

impl Session {
    pub fn new(secret: Secret) -> Self {
        Self {
            page: Page::PasswordGate,
            authenticated: false,
            menu_cursor: 0,
            deploy_cursor: 0,
            password: String::new(),
            draft: AirdropDraft::default(),
            notification: None,
            secret,
        }
    }

    /// Current airdrop input mode, if the airdrop form is showing.
    pub fn airdrop_mode(&self) -> Option<AirdropMode> {
        match self.page {
            Page::AirdropForm { mode } => Some(mode),
            _ => None,
        }
    }
}
