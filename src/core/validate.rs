//! # Validation
//!
//! Two kinds of checks guard the airdrop form:
//!
//! - **Admission filters** run on every keystroke and decide whether a single
//!   character may be appended to a buffer at all.
//! - **Submission checks** run on Enter and look at the whole field.
//!
//! Digit-only composition of the NFT ID is enforced by the admission filter,
//! so `validate_nft_id` only checks length.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::error::WizardError;

pub const MAX_NFT_ID_LEN: usize = 10;
pub const MAX_URL_LEN: usize = 255;

const URL_SAFE_CLASS: &str = r"[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]";

static URL_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{URL_SAFE_CLASS}$")).expect("valid URL character regex")
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^https?://{URL_SAFE_CLASS}+$")).expect("valid URL regex")
});

/// Checks a submitted NFT ID.
pub fn validate_nft_id(s: &str) -> Result<(), WizardError> {
    if s.is_empty() {
        return Err(WizardError::EmptyField);
    }
    if s.len() > MAX_NFT_ID_LEN {
        return Err(WizardError::TooLong);
    }
    Ok(())
}

/// Checks a submitted metadata URL.
pub fn validate_url(s: &str) -> Result<(), WizardError> {
    if s.is_empty() {
        return Err(WizardError::EmptyField);
    }
    if s.len() > MAX_URL_LEN {
        return Err(WizardError::TooLong);
    }
    if !URL_RE.is_match(s) {
        return Err(WizardError::BadFormat);
    }
    Ok(())
}

pub fn admits_nft_id_char(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn admits_url_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    URL_CHAR_RE.is_match(c.encode_utf8(&mut buf))
}
