//! The shared request gateway.
//!
//! Every domain client goes through [`Gateway`]: it joins the endpoint path
//! onto the configured base URL, assembles headers, applies the bounded
//! retry policy, normalizes heterogeneous responses into typed results, and
//! evicts the stored session on authorization failures. Centralizing this
//! here keeps the per-resource clients free of transport concerns.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::client::ClientError;
use crate::session::SessionStore;
use crate::transport::{HttpTransport, RawResponse, RequestParts, Transport};

/// Environment variable selecting the backend host.
pub const BASE_URL_ENV: &str = "TUMAPESA_API_URL";

/// Fallback base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Whether a request carries the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Attach `Authorization: Bearer <token>` when a token is stored.
    Bearer,
    /// Never attach credentials (login, register).
    Public,
}

/// Bounded-retry settings for transient failures.
///
/// Network-level failures and ≥500 responses are retried up to
/// `max_retries` additional times with a fixed pause between attempts; 4xx
/// responses are caller errors and are never retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff: Duration::from_secs(1),
        }
    }
}

type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Shared HTTP entry point for all domain clients.
///
/// Cheap to clone; clones share the transport, the session store, and the
/// session-expired hook.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    base_url: Url,
    session: Arc<dyn SessionStore>,
    retry: RetryPolicy,
    expired_hook: Option<SessionExpiredHook>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url.as_str())
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Create a gateway over the default `reqwest` transport.
    pub fn new(base_url: Url, session: Arc<dyn SessionStore>) -> Self {
        Self {
            transport: Arc::new(HttpTransport::new()),
            base_url,
            session,
            retry: RetryPolicy::default(),
            expired_hook: None,
        }
    }

    /// Create a gateway from the [`BASE_URL_ENV`] environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env(session: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw)?;
        Ok(Self::new(base_url, session))
    }

    /// Replace the default transport (e.g. with a custom `reqwest` client).
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Override the default retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Install a hook fired after an authorization failure has cleared the
    /// session. The embedder's cue to navigate back to its sign-in entry
    /// point.
    pub fn with_session_expired_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.expired_hook = Some(Arc::new(hook));
        self
    }

    /// The session store this gateway reads tokens from.
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- Typed request helpers ----------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T, ClientError> {
        let response = self.send(Method::GET, path, None, auth).await?;
        decode(response)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let body = Bytes::from(serde_json::to_vec(body)?);
        let response = self.send(Method::POST, path, Some(body), auth).await?;
        decode(response)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let body = Bytes::from(serde_json::to_vec(body)?);
        let response = self.send(Method::PUT, path, Some(body), auth).await?;
        decode(response)
    }

    /// `PUT` without a body (mark-read style state flips).
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let response = self.send(Method::PUT, path, None, auth).await?;
        decode(response)
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let response = self.send(Method::DELETE, path, None, auth).await?;
        decode(response)
    }

    /// Fetch an opaque binary body (receipt documents). Errors are
    /// normalized exactly like the typed calls; a 2xx body is handed back
    /// unparsed.
    pub async fn get_bytes(&self, path: &str, auth: Auth) -> Result<Bytes, ClientError> {
        let response = self.send(Method::GET, path, None, auth).await?;
        Ok(response.body)
    }

    // -- Core ---------------------------------------------------------------

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        // The base URL carries a path prefix (`…/api`), so the endpoint is
        // appended textually rather than RFC-joined.
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&joined)?)
    }

    fn build_request(&self, method: Method, url: Url, body: Option<Bytes>, auth: Auth) -> RequestParts {
        let mut headers: Vec<(&'static str, String)> =
            vec![("Content-Type", "application/json".to_string())];
        if auth == Auth::Bearer {
            // Re-read the store on every attempt: a token cleared mid-call
            // is never attached again.
            if let Some(token) = self.session.token() {
                headers.push(("Authorization", format!("Bearer {token}")));
            }
        }
        RequestParts {
            method,
            url,
            headers,
            body,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        auth: Auth,
    ) -> Result<RawResponse, ClientError> {
        let url = self.endpoint(path)?;
        let mut attempt: u32 = 0;

        let response = loop {
            let request = self.build_request(method.clone(), url.clone(), body.clone(), auth);
            match self.transport.execute(request).await {
                Ok(response)
                    if response.status.is_server_error() && attempt < self.retry.max_retries =>
                {
                    attempt += 1;
                    debug!(
                        %url,
                        status = %response.status,
                        attempt,
                        remaining = self.retry.max_retries - attempt + 1,
                        "server error, retrying"
                    );
                    tokio::time::sleep(self.retry.backoff).await;
                }
                Ok(response) => break response,
                Err(err) if attempt < self.retry.max_retries => {
                    attempt += 1;
                    warn!(%url, error = %err, attempt, "network failure, retrying");
                    tokio::time::sleep(self.retry.backoff).await;
                }
                Err(err) => return Err(ClientError::Transport(err)),
            }
        };

        if response.status.is_success() {
            return Ok(response);
        }
        Err(self.normalize_failure(response))
    }

    /// Turn a non-2xx response into an [`ClientError::Api`], extracting the
    /// backend's display message when the body is JSON. Runs only on the
    /// final attempt, so the 401 eviction below happens exactly once per
    /// logical call.
    fn normalize_failure(&self, response: RawResponse) -> ClientError {
        let (message, body) = if response.is_json() {
            match serde_json::from_slice::<Value>(&response.body) {
                Ok(value) => {
                    let message = value
                        .get("error")
                        .and_then(Value::as_str)
                        .or_else(|| value.get("message").and_then(Value::as_str))
                        .unwrap_or("Request failed")
                        .to_string();
                    (message, value)
                }
                Err(_) => ("Request failed".to_string(), Value::Null),
            }
        } else {
            ("Network response was not ok".to_string(), Value::Null)
        };

        if response.status == StatusCode::UNAUTHORIZED {
            self.evict_session();
        }

        ClientError::Api {
            status: response.status,
            message,
            body,
        }
    }

    fn evict_session(&self) {
        debug!("authorization failure, clearing stored session");
        self.session.clear();
        if let Some(hook) = &self.expired_hook {
            hook();
        }
    }
}

/// Parse a 2xx response as typed JSON. Parse failures are malformed
/// responses, never retried.
fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<T, ClientError> {
    if !response.is_json() {
        return Err(ClientError::NotJson);
    }
    serde_json::from_slice(&response.body).map_err(ClientError::Json)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use serde_json::json;

    use super::*;
    use crate::session::{MemorySessionStore, SessionStore};
    use crate::testing::{MockTransport, sample_session};

    fn gateway(transport: Arc<MockTransport>, session: Arc<dyn SessionStore>) -> Gateway {
        let base = Url::parse("http://localhost:5000/api").unwrap();
        Gateway::new(base, session).with_transport(transport)
    }

    #[tokio::test(start_paused = true)]
    async fn server_errors_get_exactly_three_attempts() {
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.push_json(503, json!({ "error": "upstream down" }));
        }
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert_eq!(transport.attempts(), 3);
        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[tokio::test(start_paused = true)]
    async fn client_errors_are_not_retried() {
        let transport = MockTransport::new();
        transport.push_json(400, json!({ "error": "Amount must be greater than 0" }));
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert_eq!(transport.attempts(), 1);
        match err {
            ClientError::Api { status, message, body } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Amount must be greater than 0");
                assert_eq!(body["error"], "Amount must be greater than 0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn network_failures_are_retried_then_succeed() {
        let transport = MockTransport::new();
        transport.push_error("connection reset");
        transport.push_error("connection reset");
        transport.push_json(200, json!({ "ok": true }));
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let value: Value = gw.get("/wallet", Auth::Bearer).await.unwrap();
        assert_eq!(transport.attempts(), 3);
        assert_eq!(value["ok"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn network_failures_exhaust_the_budget() {
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.push_error("connection refused");
        }
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert_eq!(transport.attempts(), 3);
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn unauthorized_clears_session_and_fires_hook() {
        let transport = MockTransport::new();
        transport.push_json(401, json!({ "error": "Token has expired" }));

        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        session.save(&sample_session("tok-evict")).unwrap();

        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let gw = gateway(transport.clone(), session.clone())
            .with_session_expired_hook(move || flag.store(true, Ordering::SeqCst));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(session.load(), None);
        assert!(fired.load(Ordering::SeqCst));
        assert_eq!(transport.attempts(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_json_on_success_is_not_retried() {
        let transport = MockTransport::new();
        transport.push_raw(200, Some("application/json"), b"{not json");
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert_eq!(transport.attempts(), 1);
        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn non_json_success_is_malformed_for_typed_calls() {
        let transport = MockTransport::new();
        transport.push_raw(200, Some("text/html"), b"<html></html>");
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        assert!(matches!(err, ClientError::NotJson));
    }

    #[tokio::test(start_paused = true)]
    async fn non_json_failure_gets_a_generic_message() {
        let transport = MockTransport::new();
        transport.push_raw(502, Some("text/html"), b"Bad Gateway");
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()))
            .with_retry_policy(RetryPolicy {
                max_retries: 0,
                backoff: Duration::from_secs(1),
            });

        let err = gw.get::<Value>("/wallet", Auth::Bearer).await.unwrap_err();
        match err {
            ClientError::Api { status, message, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(message, "Network response was not ok");
                assert_eq!(body, Value::Null);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn bearer_token_is_attached_when_stored() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({}));

        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        session.save(&sample_session("tok-abc")).unwrap();
        let gw = gateway(transport.clone(), session);

        let _: Value = gw.get("/wallet", Auth::Bearer).await.unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), Some("Bearer tok-abc"));
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert_eq!(
            requests[0].url.as_str(),
            "http://localhost:5000/api/wallet"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn public_calls_and_empty_stores_omit_the_header() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({}));
        transport.push_json(200, json!({}));

        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        session.save(&sample_session("tok-abc")).unwrap();
        let gw = gateway(transport.clone(), session.clone());

        let _: Value = gw.get("/auth/login", Auth::Public).await.unwrap();
        session.clear();
        let _: Value = gw.get("/wallet", Auth::Bearer).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].header("Authorization"), None);
        assert_eq!(requests[1].header("Authorization"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn get_bytes_returns_the_raw_body() {
        let transport = MockTransport::new();
        transport.push_raw(200, Some("application/pdf"), b"%PDF-1.7 receipt");
        let gw = gateway(transport.clone(), Arc::new(MemorySessionStore::new()));

        let bytes = gw
            .get_bytes("/receipts/transaction/abc", Auth::Bearer)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.7 receipt");
    }

    #[tokio::test(start_paused = true)]
    async fn trailing_slash_in_base_url_does_not_double_up() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({}));
        let base = Url::parse("http://localhost:5000/api/").unwrap();
        let gw = Gateway::new(base, Arc::new(MemorySessionStore::new()))
            .with_transport(transport.clone());

        let _: Value = gw.get("/wallet", Auth::Bearer).await.unwrap();
        assert_eq!(
            transport.requests()[0].url.as_str(),
            "http://localhost:5000/api/wallet"
        );
    }
}
