//! Authentication client.
//!
//! Register and login are the only unauthenticated endpoints. On success
//! both persist the returned session to the store, which is what makes
//! every later [`Auth::Bearer`] call carry the token.

use tracing::{debug, warn};

use super::{ClientError, WalletClient};
use crate::gateway::{Auth, Gateway};
use crate::objects::auth::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest, User};
use crate::session::Session;

/// Typed client for the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: Gateway,
}

impl AuthClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `POST /auth/register` – create an account and start a session.
    ///
    /// The returned session is persisted; if persistence fails the call
    /// errors and no session is considered active.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .gateway
            .post("/auth/register", request, Auth::Public)
            .await?;
        self.persist(&response)?;
        Ok(response)
    }

    /// `POST /auth/login` – authenticate and start a session.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let response: AuthResponse = self
            .gateway
            .post("/auth/login", request, Auth::Public)
            .await?;
        self.persist(&response)?;
        Ok(response)
    }

    /// `GET /auth/me` – the user the stored token belongs to.
    pub async fn me(&self) -> Result<User, ClientError> {
        let response: CurrentUserResponse = self.gateway.get("/auth/me", Auth::Bearer).await?;
        Ok(response.user)
    }

    /// Drop the stored session. Client-side only (the backend keeps no
    /// session state for bearer tokens); idempotent.
    pub fn logout(&self) {
        self.gateway.session_store().clear();
    }

    /// Restore a previously-persisted session at startup: verify the
    /// stored token against `/auth/me` and refresh the wallet mirror.
    ///
    /// Any failure clears the store and yields `None`, matching the
    /// stale-token handling of the rest of the SDK.
    pub async fn restore(&self) -> Option<Session> {
        let stored = self.gateway.session_store().load()?;

        let verified = async {
            let user = self.me().await?;
            let wallet = WalletClient::new(self.gateway.clone()).wallet().await?;
            Ok::<_, ClientError>((user, wallet))
        }
        .await;

        match verified {
            Ok((user, wallet)) => {
                let session = Session {
                    access_token: stored.access_token,
                    user,
                    wallet: Some(wallet),
                };
                if let Err(err) = self.gateway.session_store().save(&session) {
                    warn!(error = %err, "failed to persist refreshed session");
                    self.gateway.session_store().clear();
                    return None;
                }
                Some(session)
            }
            Err(err) => {
                debug!(error = %err, "stored session failed verification, clearing");
                self.gateway.session_store().clear();
                None
            }
        }
    }

    fn persist(&self, response: &AuthResponse) -> Result<(), ClientError> {
        let session = Session {
            access_token: response.access_token.clone(),
            user: response.user.clone(),
            wallet: response.wallet.clone(),
        };
        self.gateway.session_store().save(&session)?;
        Ok(())
    }
}
