//! Wallet client.
//!
//! Deposits via mobile money settle asynchronously: `deposit` returns a
//! provider reference, and [`poller`](WalletClient::poller) drives the
//! follow-up status checks.

use compact_str::CompactString;
use rust_decimal::Decimal;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::wallet::{
    AddFundsRequest, AddFundsResponse, DepositRequest, DepositResponse, FundingMethod,
    PaymentStatusResponse, Wallet, WalletResponse,
};
use crate::poller::DepositPoller;
use crate::validate::{validate_amount, validate_phone};

/// Typed client for the wallet endpoints.
#[derive(Debug, Clone)]
pub struct WalletClient {
    gateway: Gateway,
}

impl WalletClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /wallet` – the caller's wallet.
    pub async fn wallet(&self) -> Result<Wallet, ClientError> {
        let response: WalletResponse = self.gateway.get("/wallet", Auth::Bearer).await?;
        Ok(response.wallet)
    }

    /// `POST /wallet/deposit` – initiate a mobile-money deposit.
    ///
    /// The amount and phone are pre-validated locally (no request is sent
    /// on rejection) and the phone is normalized to `254XXXXXXXXX` before
    /// dispatch.
    pub async fn deposit(
        &self,
        amount: Decimal,
        phone: &str,
        currency: &str,
    ) -> Result<DepositResponse, ClientError> {
        validate_amount(amount)?;
        let phone = validate_phone(phone)?;
        let request = DepositRequest {
            amount,
            phone,
            currency: CompactString::from(currency),
        };
        self.gateway
            .post("/wallet/deposit", &request, Auth::Bearer)
            .await
    }

    /// `GET /wallet/payment-status/{reference}` – one status probe for an
    /// in-flight deposit.
    pub async fn payment_status(
        &self,
        reference: &str,
    ) -> Result<PaymentStatusResponse, ClientError> {
        let path = format!(
            "/wallet/payment-status/{}",
            urlencoding::encode(reference)
        );
        self.gateway.get(&path, Auth::Bearer).await
    }

    /// `POST /wallet/add-funds` – synchronously-settled top-up via a
    /// non-mobile channel.
    pub async fn add_funds(
        &self,
        amount: Decimal,
        note: &str,
        method: FundingMethod,
    ) -> Result<AddFundsResponse, ClientError> {
        validate_amount(amount)?;
        let request = AddFundsRequest {
            amount,
            note: note.to_string(),
            method,
        };
        self.gateway
            .post("/wallet/add-funds", &request, Auth::Bearer)
            .await
    }

    /// A poller over this client, for watching a deposit reference to a
    /// terminal state.
    pub fn poller(&self) -> DepositPoller<WalletClient> {
        DepositPoller::new(self.clone())
    }
}
