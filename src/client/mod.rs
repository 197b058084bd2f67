//! Typed HTTP clients for all TumaPesa API resources.
//!
//! Each client is a thin composition of the shared [`Gateway`]: one method
//! per backend operation, no business logic, no caching beyond the session
//! store. Errors always propagate to the caller; rendering them is the
//! embedder's concern.
//!
//! [`Gateway`]: crate::gateway::Gateway

mod admin;
mod auth;
mod beneficiary;
mod notification;
mod receipt;
mod transaction;
mod user;
mod wallet;

pub use admin::AdminClient;
pub use auth::AuthClient;
pub use beneficiary::BeneficiaryClient;
pub use notification::NotificationClient;
pub use receipt::ReceiptClient;
pub use transaction::TransactionClient;
pub use user::UserClient;
pub use wallet::WalletClient;

use reqwest::StatusCode;

use crate::session::SessionStoreError;
use crate::transport::TransportError;
use crate::validate::ValidationError;

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure after the retry budget was exhausted.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server returned a non-2xx status code.
    ///
    /// `message` is the backend's `error`/`message` display string when one
    /// was present, and `body` the raw JSON payload (or `null` for
    /// non-JSON responses).
    #[error("api error: status {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        body: serde_json::Value,
    },

    /// Response body could not be deserialized.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// A 2xx response did not carry the JSON body a typed call expects.
    #[error("malformed response: expected a JSON body")]
    NotJson,

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The session could not be persisted after login/register.
    #[error("session store error: {0}")]
    Session(#[from] SessionStoreError),

    /// Input failed client-side pre-validation; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// HTTP status of the failing response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is the 401 the gateway answered with session eviction.
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use url::Url;
    use uuid::Uuid;

    use super::*;
    use crate::gateway::Gateway;
    use crate::objects::auth::LoginRequest;
    use crate::session::{MemorySessionStore, SessionStore};
    use crate::testing::MockTransport;

    fn wallet_body(user_id: Uuid) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "user_id": user_id,
            "balance": "250.00",
            "currency": "USD"
        })
    }

    #[tokio::test]
    async fn login_wallet_logout_header_flow() {
        let transport = MockTransport::new();
        let user_id = Uuid::new_v4();
        transport.push_json(
            200,
            json!({
                "success": true,
                "access_token": "tok-e2e",
                "user": {
                    "id": user_id,
                    "name": "Asha Mwangi",
                    "email": "asha@example.com",
                    "role": "user",
                    "phone": "254712345678",
                    "created_at": 1_754_000_000
                },
                "wallet": wallet_body(user_id)
            }),
        );
        transport.push_json(200, json!({ "success": true, "wallet": wallet_body(user_id) }));
        transport.push_json(200, json!({ "success": true, "wallet": wallet_body(user_id) }));

        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let gateway = Gateway::new(
            Url::parse("http://localhost:5000/api").unwrap(),
            session.clone(),
        )
        .with_transport(transport.clone());
        let auth = AuthClient::new(gateway.clone());
        let wallets = WalletClient::new(gateway.clone());

        let response = auth
            .login(&LoginRequest {
                email: "asha@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert!(!response.access_token.is_empty());
        assert_eq!(session.token().as_deref(), Some("tok-e2e"));

        wallets.wallet().await.unwrap();

        let requests = transport.requests();
        // Login itself is public; the wallet call carries the fresh token.
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(requests[1].header("Authorization"), Some("Bearer tok-e2e"));

        auth.logout();
        assert_eq!(session.load(), None);

        wallets.wallet().await.unwrap();
        assert_eq!(transport.requests()[2].header("Authorization"), None);
    }

    #[tokio::test]
    async fn failed_login_leaves_no_session_behind() {
        let transport = MockTransport::new();
        transport.push_json(401, json!({ "error": "Invalid credentials" }));

        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let gateway = Gateway::new(
            Url::parse("http://localhost:5000/api").unwrap(),
            session.clone(),
        )
        .with_transport(transport.clone());

        let err = AuthClient::new(gateway)
            .login(&LoginRequest {
                email: "asha@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(session.load(), None);
    }
}
