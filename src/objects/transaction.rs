//! Transaction request and response types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for sending money to another wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMoneyRequest {
    /// Recipient wallet id.
    pub wallet_id: Uuid,
    pub amount: Decimal,
    pub note: String,
}

/// A settled or in-flight ledger entry, mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub sender_id: Option<Uuid>,
    pub receiver_id: Option<Uuid>,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub note: Option<String>,
    /// Unix timestamp of settlement initiation.
    pub created_at: i64,
}

/// Ledger entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Transfer,
    AddFunds,
    Deposit,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Transfer => write!(f, "transfer"),
            TransactionKind::AddFunds => write!(f, "add_funds"),
            TransactionKind::Deposit => write!(f, "deposit"),
        }
    }
}

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Direction filter for transaction listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    #[default]
    All,
    Sent,
    Received,
}

impl std::fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionFilter::All => write!(f, "all"),
            TransactionFilter::Sent => write!(f, "sent"),
            TransactionFilter::Received => write!(f, "received"),
        }
    }
}

/// Request body for mailing a transaction receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailReceiptRequest {
    pub email: String,
}

/// Response returned by `POST /transactions/send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMoneyResponse {
    #[serde(default)]
    pub success: bool,
    pub transaction: Option<Transaction>,
    pub message: Option<String>,
}

/// Envelope returned by transaction-list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    #[serde(default)]
    pub success: bool,
    pub transactions: Vec<Transaction>,
}

/// Envelope returned by `GET /transactions/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(default)]
    pub success: bool,
    pub transaction: Transaction,
}
