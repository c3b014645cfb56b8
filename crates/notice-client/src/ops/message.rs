use async_trait::async_trait;

use super::tagged;
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{SendNotificationMessageRequest, SendNotificationMessageResponse};

/// Posting messages to notification groups
#[async_trait]
pub trait SendNotificationMessageApi: Send + Sync {
    /// Post a message to the group `id`
    async fn send(&self, id: &str, request: &SendNotificationMessageRequest) -> Result<SendNotificationMessageResponse>;
}

/// [`SendNotificationMessageApi`] backed by an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct SendNotificationMessageOp {
    client: ApiClient,
}

impl SendNotificationMessageOp {
    /// Create the operation set
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SendNotificationMessageApi for SendNotificationMessageOp {
    async fn send(&self, id: &str, request: &SendNotificationMessageRequest) -> Result<SendNotificationMessageResponse> {
        tagged(
            "SendNotificationMessageAPI.Send",
            self.client.send_notification_message(id, request).await,
        )
    }
}
