//! Client SDK for the TumaPesa money-transfer API.
//!
//! All business logic (ledger, settlement, authentication, mobile-money
//! provider integration) lives in the backend; this crate is the typed
//! HTTP boundary the frontends build on:
//!
//! - [`gateway::Gateway`] – shared request wrapper: base-URL joining,
//!   bearer header, bounded retries, response normalization, session
//!   eviction on authorization failures.
//! - [`client`] – one thin typed client per resource (auth, user, wallet,
//!   transactions, beneficiaries, admin, notifications, receipts).
//! - [`session`] – pluggable persistence for the bearer token and the
//!   cached user/wallet mirrors.
//! - [`poller`] – fixed-interval status polling for asynchronously-settled
//!   mobile-money deposits.
//! - [`validate`] – pre-dispatch amount/phone checks (a UX optimization,
//!   the backend re-validates everything).
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tumapesa_sdk::objects::auth::LoginRequest;
//! use tumapesa_sdk::{AuthClient, Gateway, FileSessionStore, WalletClient};
//!
//! # async fn run() -> Result<(), tumapesa_sdk::ClientError> {
//! let store = Arc::new(FileSessionStore::new("/tmp/tumapesa"));
//! let gateway = Gateway::from_env(store)?;
//!
//! let auth = AuthClient::new(gateway.clone());
//! auth.login(&LoginRequest {
//!     email: "asha@example.com".into(),
//!     password: "secret".into(),
//! })
//! .await?;
//!
//! let wallet = WalletClient::new(gateway).wallet().await?;
//! println!("balance: {}", wallet.balance);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod currency;
pub mod gateway;
pub mod objects;
pub mod poller;
pub mod session;
pub mod transport;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{
    AdminClient, AuthClient, BeneficiaryClient, ClientError, NotificationClient, ReceiptClient,
    TransactionClient, UserClient, WalletClient,
};
pub use gateway::{Auth, Gateway, RetryPolicy};
pub use poller::{DepositPoller, PaymentIntent, PollState};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
