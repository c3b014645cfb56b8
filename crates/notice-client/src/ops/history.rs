use async_trait::async_trait;

use super::tagged;
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ListNotificationHistoriesResponse, NotificationHistory};

/// Read-only access to delivered notifications
#[async_trait]
pub trait HistoryApi: Send + Sync {
    /// List delivered notifications
    async fn list(&self) -> Result<ListNotificationHistoriesResponse>;

    /// Read one delivered notification by request ID
    async fn read(&self, request_id: &str) -> Result<NotificationHistory>;
}

/// [`HistoryApi`] backed by an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct HistoryOp {
    client: ApiClient,
}

impl HistoryOp {
    /// Create the operation set
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HistoryApi for HistoryOp {
    async fn list(&self) -> Result<ListNotificationHistoriesResponse> {
        tagged("History.List", self.client.list_notification_histories().await)
    }

    async fn read(&self, request_id: &str) -> Result<NotificationHistory> {
        tagged("History.Read", self.client.get_notification_history(request_id).await)
            .map(|res| res.notification_history)
    }
}
