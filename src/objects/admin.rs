//! Admin back-office request and response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::auth::UserRole;
use super::wallet::Wallet;

/// Request body for editing a user from the admin panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

/// Direction of a manual balance adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustAction {
    Credit,
    Debit,
}

impl std::fmt::Display for AdjustAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustAction::Credit => write!(f, "credit"),
            AdjustAction::Debit => write!(f, "debit"),
        }
    }
}

/// Request body for `POST /admin/wallets/{id}/adjust`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustWalletRequest {
    pub action: AdjustAction,
    pub amount: Decimal,
}

/// Envelope returned by `GET /admin/wallets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletsResponse {
    #[serde(default)]
    pub success: bool,
    pub wallets: Vec<Wallet>,
}

/// Aggregate counters shown on the admin overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_wallets: u64,
    pub total_transactions: u64,
    /// Sum of settled transaction amounts, in display currency.
    pub total_volume: Decimal,
}

/// Envelope returned by `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    pub stats: AdminStats,
}
