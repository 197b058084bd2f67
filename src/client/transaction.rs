//! Transaction client.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::transaction::{
    SendMoneyRequest, SendMoneyResponse, Transaction, TransactionFilter, TransactionResponse,
    TransactionsResponse,
};
use crate::validate::validate_amount;

/// Default page size for transaction listings.
pub const DEFAULT_LIST_LIMIT: u32 = 50;

/// Typed client for the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    gateway: Gateway,
}

impl TransactionClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `POST /transactions/send` – send money to another wallet.
    ///
    /// The amount is pre-validated locally; no request is sent on
    /// rejection. Concurrent sends are not sequenced by this layer, so the
    /// backend is the only guard against double submission.
    pub async fn send_money(
        &self,
        wallet_id: Uuid,
        amount: Decimal,
        note: &str,
    ) -> Result<SendMoneyResponse, ClientError> {
        validate_amount(amount)?;
        let request = SendMoneyRequest {
            wallet_id,
            amount,
            note: note.to_string(),
        };
        self.gateway
            .post("/transactions/send", &request, Auth::Bearer)
            .await
    }

    /// `GET /transactions?type=&limit=` – list the caller's transactions.
    pub async fn list(
        &self,
        filter: TransactionFilter,
        limit: u32,
    ) -> Result<Vec<Transaction>, ClientError> {
        let path = format!("/transactions?type={filter}&limit={limit}");
        let response: TransactionsResponse = self.gateway.get(&path, Auth::Bearer).await?;
        Ok(response.transactions)
    }

    /// `GET /transactions/{id}` – one transaction.
    pub async fn get(&self, id: Uuid) -> Result<Transaction, ClientError> {
        let path = format!("/transactions/{id}");
        let response: TransactionResponse = self.gateway.get(&path, Auth::Bearer).await?;
        Ok(response.transaction)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use url::Url;

    use super::*;
    use crate::session::MemorySessionStore;
    use crate::testing::MockTransport;

    fn client(transport: Arc<MockTransport>) -> TransactionClient {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        let gateway = Gateway::new(base, Arc::new(MemorySessionStore::new()))
            .with_transport(transport);
        TransactionClient::new(gateway)
    }

    #[tokio::test]
    async fn send_money_rejects_invalid_amount_before_any_request() {
        let transport = MockTransport::new();
        let transactions = client(transport.clone());

        let err = transactions
            .send_money(Uuid::new_v4(), Decimal::ZERO, "rent")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn list_builds_the_filter_query() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({ "success": true, "transactions": [] }));
        let transactions = client(transport.clone());

        let listed = transactions
            .list(TransactionFilter::Sent, 10)
            .await
            .unwrap();
        assert!(listed.is_empty());
        assert_eq!(
            transport.requests()[0].url.as_str(),
            "http://localhost:5000/api/transactions?type=sent&limit=10"
        );
    }
}
