//! Receipt client.
//!
//! Receipt documents are binary; the download is handed back as opaque
//! bytes for the embedder's save-file mechanism, never parsed as JSON.

use bytes::Bytes;
use uuid::Uuid;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::MessageResponse;
use crate::objects::transaction::EmailReceiptRequest;

/// Typed client for the receipt endpoints.
#[derive(Debug, Clone)]
pub struct ReceiptClient {
    gateway: Gateway,
}

impl ReceiptClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /receipts/transaction/{id}` – download the receipt document
    /// for a transaction.
    pub async fn download(&self, transaction_id: Uuid) -> Result<Bytes, ClientError> {
        let path = format!("/receipts/transaction/{transaction_id}");
        self.gateway.get_bytes(&path, Auth::Bearer).await
    }

    /// `POST /receipts/transaction/{id}/email` – have the backend mail the
    /// receipt to an address.
    pub async fn email(
        &self,
        transaction_id: Uuid,
        email: &str,
    ) -> Result<MessageResponse, ClientError> {
        let path = format!("/receipts/transaction/{transaction_id}/email");
        let request = EmailReceiptRequest {
            email: email.to_string(),
        };
        self.gateway.post(&path, &request, Auth::Bearer).await
    }
}
