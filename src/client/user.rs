//! User profile client.

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::MessageResponse;
use crate::objects::auth::{
    ChangePasswordRequest, CurrentUserResponse, UpdateProfileRequest, User, UsersResponse,
};

/// Typed client for the user-profile endpoints.
#[derive(Debug, Clone)]
pub struct UserClient {
    gateway: Gateway,
}

impl UserClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /users/profile` – the caller's profile.
    pub async fn profile(&self) -> Result<User, ClientError> {
        let response: CurrentUserResponse = self.gateway.get("/users/profile", Auth::Bearer).await?;
        Ok(response.user)
    }

    /// `PUT /users/profile` – update the caller's profile.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ClientError> {
        let response: CurrentUserResponse = self
            .gateway
            .put("/users/profile", request, Auth::Bearer)
            .await?;
        Ok(response.user)
    }

    /// `POST /users/change-password` – rotate the caller's password.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.gateway
            .post("/users/change-password", request, Auth::Bearer)
            .await
    }

    /// `GET /users` – list visible users (for recipient search).
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let response: UsersResponse = self.gateway.get("/users", Auth::Bearer).await?;
        Ok(response.users)
    }
}
