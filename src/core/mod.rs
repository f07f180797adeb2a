//! # Core Wizard Logic
//!
//! This module contains the page-navigation state machine behind nftctl.
//! It knows nothing about any specific UI technology or about how the
//! external deploy/airdrop/upload operations are carried out.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Event (input)        │
//!                    │  • update() (reducer)   │
//!                    │  • render() (presenter) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  Actions   │
//!           │  Adapter   │              │ (deferred  │
//!           │ (ratatui)  │              │   tasks)   │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct and the `Page` enum
//! - [`action`]: The `Event` enum and the `update()` reducer
//! - [`validate`]: Field validation and keystroke admission filters
//! - [`notification`]: The one-shot error/success slot
//! - [`presenter`]: Text rendering of a `Session`

pub mod action;
pub mod auth;
pub mod config;
pub mod error;
pub mod notification;
pub mod presenter;
pub mod state;
pub mod validate;
