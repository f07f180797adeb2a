//! # Presenter
//!
//! Turns a `Session` into the text shown on screen. Everything here is a pure
//! function of the session: no validation, no mutation, and the same session
//! always renders the same text.
//!
//! The TUI uses [`screen`] so it can style the banner and place the terminal
//! cursor; [`render`] flattens the same thing into one string.

use unicode_width::UnicodeWidthStr;

use crate::core::action::AirdropReceipt;
use crate::core::notification::Notification;
use crate::core::state::{AirdropMode, DEPLOY_MENU, MAIN_MENU, Page, Session};

const QUIT_HINT: &str = "Ctrl+C to quit";
const BACK_TO_MENU_HINT: &str = "Esc back to main menu";

/// A rendered page, split into the parts the TUI styles separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub banner: Option<Notification>,
    pub lines: Vec<String>,
    /// Row and display column where the terminal cursor belongs, if the page
    /// has an input field.
    pub cursor: Option<(usize, usize)>,
}

pub fn render(session: &Session) -> String {
    let body = screen(session).lines.join("\n");
    match banner(session) {
        Some(banner) => format!("{banner}\n\n{body}"),
        None => body,
    }
}

pub fn banner(session: &Session) -> Option<String> {
    session.notification.as_ref().map(|n| match n {
        Notification::Error(text) => format!("[error] {text}"),
        Notification::Success(text) => format!("[ok] {text}"),
    })
}

pub fn screen(session: &Session) -> Screen {
    let mut lines = Vec::new();
    let mut cursor = None;

    match &session.page {
        Page::PasswordGate => {
            lines.push("Enter password:".to_string());
            lines.push(String::new());
            let masked = "*".repeat(session.password.chars().count());
            cursor = Some(input_line(&mut lines, &masked));
            lines.push(String::new());
            lines.push("Enter to confirm".to_string());
            lines.push(QUIT_HINT.to_string());
        }
        Page::MainMenu => {
            lines.push("Choose an action:".to_string());
            lines.push(String::new());
            menu_lines(&mut lines, &MAIN_MENU, session.menu_cursor);
            lines.push(String::new());
            lines.push("Main menu.".to_string());
            lines.push(QUIT_HINT.to_string());
        }
        Page::DeployMenu => {
            heading(&mut lines, "Deploy Contract");
            menu_lines(&mut lines, &DEPLOY_MENU, session.deploy_cursor);
            lines.push(String::new());
            lines.push(BACK_TO_MENU_HINT.to_string());
            lines.push(QUIT_HINT.to_string());
        }
        Page::DeployContractForm => {
            heading(&mut lines, "Mint NFT");
            lines.push("Contract deployment started. Progress is reported above.".to_string());
            lines.push(String::new());
            lines.push(BACK_TO_MENU_HINT.to_string());
            lines.push(QUIT_HINT.to_string());
        }
        Page::AirdropForm { mode } => {
            heading(&mut lines, "AirDrop NFT");
            lines.push(String::new());
            match mode {
                AirdropMode::NftId => {
                    lines.push("Enter the NFT ID to airdrop:".to_string());
                    cursor = Some(input_line(&mut lines, &session.draft.nft_id));
                    lines.push(String::new());
                    lines.push("Enter to continue".to_string());
                    lines.push(BACK_TO_MENU_HINT.to_string());
                }
                AirdropMode::Url => {
                    lines.push(format!("NFT ID: {}", session.draft.nft_id));
                    lines.push(String::new());
                    lines.push("Enter the Graph URL:".to_string());
                    cursor = Some(input_line(&mut lines, &session.draft.url));
                    lines.push(String::new());
                    lines.push("Enter to confirm airdrop".to_string());
                    lines.push("Esc to re-enter the NFT ID".to_string());
                }
            }
            lines.push(QUIT_HINT.to_string());
        }
        Page::UploadConfirm(receipt) => {
            heading(&mut lines, "Upload");
            receipt_lines(&mut lines, receipt);
            lines.push(String::new());
            lines.push("Uploading the airdrop record. The result is reported above.".to_string());
            lines.push(String::new());
            lines.push("Enter back to main menu".to_string());
            lines.push("Esc back to the previous page".to_string());
            lines.push(QUIT_HINT.to_string());
        }
        Page::CheckTotal => {
            heading(&mut lines, "Total NFT");
            lines.push("Querying the total supply. The result is reported above.".to_string());
            lines.push(String::new());
            lines.push(BACK_TO_MENU_HINT.to_string());
            lines.push(QUIT_HINT.to_string());
        }
    }

    Screen {
        banner: session.notification.clone(),
        lines,
        cursor,
    }
}

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.width()));
}

fn menu_lines(lines: &mut Vec<String>, options: &[&str], selected: usize) {
    for (i, option) in options.iter().enumerate() {
        let marker = if i == selected { ">" } else { " " };
        lines.push(format!("{marker} {option}"));
    }
}

/// Pushes a `> value` prompt line and returns where the cursor goes.
fn input_line(lines: &mut Vec<String>, value: &str) -> (usize, usize) {
    let prompt = format!("> {value}");
    let column = prompt.width();
    let row = lines.len();
    if value.is_empty() {
        lines.push(format!("{prompt}_"));
    } else {
        lines.push(prompt);
    }
    (row, column)
}

fn receipt_lines(lines: &mut Vec<String>, receipt: &AirdropReceipt) {
    lines.push(format!(
        "Airdrop of NFT #{} completed at {}",
        receipt.nft_id,
        receipt.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("Metadata: {}", receipt.url));
    lines.push(format!("Request: {}", receipt.request_id));
}
