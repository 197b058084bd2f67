//! Notification client.

use uuid::Uuid;

use super::ClientError;
use crate::gateway::{Auth, Gateway};
use crate::objects::MessageResponse;
use crate::objects::notification::{Notification, NotificationsResponse, UnreadCountResponse};

/// Typed client for the in-app notification endpoints.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    gateway: Gateway,
}

impl NotificationClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /notifications[?unread_only=true]` – the caller's
    /// notifications, optionally restricted to unread ones.
    pub async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, ClientError> {
        let path = if unread_only {
            "/notifications?unread_only=true"
        } else {
            "/notifications"
        };
        let response: NotificationsResponse = self.gateway.get(path, Auth::Bearer).await?;
        Ok(response.notifications)
    }

    /// `GET /notifications/unread-count` – badge counter.
    pub async fn unread_count(&self) -> Result<u64, ClientError> {
        let response: UnreadCountResponse = self
            .gateway
            .get("/notifications/unread-count", Auth::Bearer)
            .await?;
        Ok(response.unread_count)
    }

    /// `PUT /notifications/{id}/read` – mark one notification read.
    pub async fn mark_read(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let path = format!("/notifications/{id}/read");
        self.gateway.put_empty(&path, Auth::Bearer).await
    }

    /// `PUT /notifications/mark-all-read` – mark everything read.
    pub async fn mark_all_read(&self) -> Result<MessageResponse, ClientError> {
        self.gateway
            .put_empty("/notifications/mark-all-read", Auth::Bearer)
            .await
    }

    /// `DELETE /notifications/{id}` – remove one notification.
    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        let path = format!("/notifications/{id}");
        self.gateway.delete(&path, Auth::Bearer).await
    }

    /// `DELETE /notifications/clear` – remove everything.
    pub async fn clear_all(&self) -> Result<MessageResponse, ClientError> {
        self.gateway.delete("/notifications/clear", Auth::Bearer).await
    }
}
