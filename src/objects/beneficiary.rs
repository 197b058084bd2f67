//! Beneficiary request and response types.
//!
//! A beneficiary is a saved recipient a user can send money to without
//! re-entering wallet details.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved recipient record, mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: Uuid,
    pub name: String,
    /// The recipient's wallet id, used as the send-money target.
    pub wallet_id: Uuid,
    pub phone: Option<CompactString>,
    pub email: Option<String>,
    pub created_at: Option<i64>,
}

/// Request body for saving a new beneficiary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBeneficiaryRequest {
    pub name: String,
    pub wallet_id: Uuid,
    pub phone: Option<CompactString>,
    pub email: Option<String>,
}

/// Request body for editing a saved beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBeneficiaryRequest {
    pub name: Option<String>,
    pub phone: Option<CompactString>,
    pub email: Option<String>,
}

/// Envelope returned by `GET /beneficiaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeneficiariesResponse {
    #[serde(default)]
    pub success: bool,
    pub beneficiaries: Vec<Beneficiary>,
}

/// Envelope returned by single-beneficiary endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeneficiaryResponse {
    #[serde(default)]
    pub success: bool,
    pub beneficiary: Beneficiary,
}
