//! Admin back-office client.
//!
//! All endpoints require an admin-role bearer token; the backend enforces
//! the role, this client only attaches the credential.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::MessageResponse;
use crate::objects::admin::{
    AdjustAction, AdjustWalletRequest, AdminStats, AdminUpdateUserRequest, StatsResponse,
    WalletsResponse,
};
use crate::objects::auth::{CurrentUserResponse, User, UsersResponse};
use crate::objects::transaction::{Transaction, TransactionsResponse};
use crate::objects::wallet::{Wallet, WalletResponse};

/// Typed client for the admin endpoints.
#[derive(Debug, Clone)]
pub struct AdminClient {
    gateway: Gateway,
}

impl AdminClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /admin/users` – all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let response: UsersResponse = self.gateway.get("/admin/users", Auth::Bearer).await?;
        Ok(response.users)
    }

    /// `GET /admin/users/{id}` – one user.
    pub async fn get_user(&self, id: Uuid) -> Result<User, ClientError> {
        let path = format!("/admin/users/{id}");
        let response: CurrentUserResponse = self.gateway.get(&path, Auth::Bearer).await?;
        Ok(response.user)
    }

    /// `PUT /admin/users/{id}` – edit a user.
    pub async fn update_user(
        &self,
        id: Uuid,
        request: &AdminUpdateUserRequest,
    ) -> Result<User, ClientError> {
        let path = format!("/admin/users/{id}");
        let response: CurrentUserResponse =
            self.gateway.put(&path, request, Auth::Bearer).await?;
        Ok(response.user)
    }

    /// `DELETE /admin/users/{id}` – remove a user.
    pub async fn delete_user(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let path = format!("/admin/users/{id}");
        self.gateway.delete(&path, Auth::Bearer).await
    }

    /// `GET /admin/wallets` – all wallets.
    pub async fn list_wallets(&self) -> Result<Vec<Wallet>, ClientError> {
        let response: WalletsResponse = self.gateway.get("/admin/wallets", Auth::Bearer).await?;
        Ok(response.wallets)
    }

    /// `POST /admin/wallets/{id}/adjust` – manually credit or debit a
    /// wallet. No client-side ceiling applies; this is an operator tool.
    pub async fn adjust_wallet(
        &self,
        id: Uuid,
        action: AdjustAction,
        amount: Decimal,
    ) -> Result<Wallet, ClientError> {
        let path = format!("/admin/wallets/{id}/adjust");
        let request = AdjustWalletRequest { action, amount };
        let response: WalletResponse = self.gateway.post(&path, &request, Auth::Bearer).await?;
        Ok(response.wallet)
    }

    /// `GET /admin/transactions` – all transactions across users.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        let response: TransactionsResponse =
            self.gateway.get("/admin/transactions", Auth::Bearer).await?;
        Ok(response.transactions)
    }

    /// `GET /admin/stats` – aggregate counters for the overview screen.
    pub async fn stats(&self) -> Result<AdminStats, ClientError> {
        let response: StatsResponse = self.gateway.get("/admin/stats", Auth::Bearer).await?;
        Ok(response.stats)
    }
}
