//! Wallet, deposit, and payment-status types.
//!
//! Mobile-money deposits settle asynchronously on the provider side; the
//! deposit endpoint returns a provider reference which the client then polls
//! via the payment-status endpoint (see [`crate::poller`]).

use compact_str::CompactString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A backend-held balance record, mirrored read-only into the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub balance: Decimal,
    pub currency: CompactString,
}

/// Envelope returned by `GET /wallet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletResponse {
    #[serde(default)]
    pub success: bool,
    pub wallet: Wallet,
}

/// Request body for initiating a mobile-money deposit.
///
/// `phone` must already be in the normalized `254XXXXXXXXX` form produced by
/// [`crate::validate::validate_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: Decimal,
    pub phone: CompactString,
    pub currency: CompactString,
}

/// Response returned after a deposit is initiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositResponse {
    #[serde(default)]
    pub success: bool,
    /// Provider-issued reference identifying the in-flight payment.
    pub reference: CompactString,
    /// Provider checkout page, when the flow requires user confirmation.
    pub payment_url: Option<String>,
    pub message: Option<String>,
}

/// Server-side state of an asynchronously-settled payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Envelope returned by `GET /wallet/payment-status/{reference}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    #[serde(default)]
    pub success: bool,
    pub reference: Option<CompactString>,
    pub status: PaymentStatus,
}

/// Non-mobile funding channel for `POST /wallet/add-funds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingMethod {
    Card,
    Bank,
    Mobile,
}

impl std::fmt::Display for FundingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FundingMethod::Card => write!(f, "card"),
            FundingMethod::Bank => write!(f, "bank"),
            FundingMethod::Mobile => write!(f, "mobile"),
        }
    }
}

/// Request body for a synchronously-settled top-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFundsRequest {
    pub amount: Decimal,
    pub note: String,
    pub method: FundingMethod,
}

/// Response returned by `POST /wallet/add-funds`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFundsResponse {
    #[serde(default)]
    pub success: bool,
    pub wallet: Option<Wallet>,
    pub message: Option<String>,
}
