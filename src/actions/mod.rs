//! # Deferred Actions
//!
//! The external operations the wizard delegates to: deploying a contract,
//! airdropping an NFT, uploading the airdrop record and querying the total
//! supply. The state machine only asks for them (`Effect::Dispatch`); this
//! module runs them off the event loop and reports back with a `FollowUp`.

pub mod collaborator;
pub mod collaborators;
pub mod dispatch;

pub use collaborator::{ActionError, Collaborator};
pub use collaborators::DryRunCollaborator;
pub use dispatch::spawn_action;
