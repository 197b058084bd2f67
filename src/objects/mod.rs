//! Wire request and response types for the TumaPesa API.
//!
//! Everything here mirrors the backend's JSON contract verbatim; no derived
//! fields are computed client-side (balances shown in UIs are presentation
//! only, the backend ledger is authoritative).

pub mod admin;
pub mod auth;
pub mod beneficiary;
pub mod notification;
pub mod transaction;
pub mod wallet;

use serde::{Deserialize, Serialize};

/// Generic acknowledgement envelope returned by mutation endpoints that do
/// not echo a resource back (password change, deletes, mark-read, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}
