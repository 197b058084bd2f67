//! Notification request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An in-app notification, mirrored from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: Option<String>,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    /// Unix timestamp of delivery.
    pub created_at: i64,
}

/// Envelope returned by `GET /notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub success: bool,
    pub notifications: Vec<Notification>,
}

/// Envelope returned by `GET /notifications/unread-count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCountResponse {
    #[serde(default)]
    pub success: bool,
    pub unread_count: u64,
}
