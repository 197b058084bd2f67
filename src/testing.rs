//! Scripted test doubles shared by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use bytes::Bytes;
use compact_str::CompactString;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::objects::auth::{User, UserRole};
use crate::objects::wallet::Wallet;
use crate::session::Session;
use crate::transport::{RawResponse, RequestParts, Transport, TransportError};

/// A transport that replays scripted responses and records every request.
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<RequestParts>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_raw(status, Some("application/json"), body.to_string().as_bytes());
    }

    pub fn push_raw(&self, status: u16, content_type: Option<&str>, body: &[u8]) {
        let response = RawResponse {
            status: StatusCode::from_u16(status).expect("valid status code"),
            content_type: content_type.map(str::to_owned),
            body: Bytes::copy_from_slice(body),
        };
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    pub fn push_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(TransportError::new(message)));
    }

    /// Number of attempts the gateway actually made.
    pub fn attempts(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn requests(&self) -> Vec<RequestParts> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: RequestParts) -> Result<RawResponse, TransportError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .expect("mock transport exhausted: no scripted response left")
    }
}

/// A ready-made session for store and header tests.
pub(crate) fn sample_session(token: &str) -> Session {
    Session {
        access_token: token.to_string(),
        user: User {
            id: Uuid::new_v4(),
            name: "Asha Mwangi".to_string(),
            email: "asha@example.com".to_string(),
            role: UserRole::User,
            phone: Some(CompactString::from("254712345678")),
            created_at: Some(1_754_000_000),
        },
        wallet: Some(Wallet {
            id: Uuid::new_v4(),
            user_id: None,
            balance: Decimal::new(10_050, 2),
            currency: CompactString::from("KES"),
        }),
    }
}
