use async_trait::async_trait;

use super::{ItemMeta, tagged};
use crate::client::ApiClient;
use crate::context::ProviderClass;
use crate::error::Result;
use crate::types::{
    CommonServiceItem, DestinationSettings, ListCommonServiceItemsResponse, NotificationStatus,
    PostCommonServiceItemRequest, Provider, PutCommonServiceItemRequest, Settings,
};

/// Operations on notification destinations
#[async_trait]
pub trait DestinationApi: Send + Sync {
    /// List all destinations
    async fn list(&self) -> Result<ListCommonServiceItemsResponse>;

    /// Create a destination
    async fn create(&self, meta: ItemMeta, settings: DestinationSettings) -> Result<CommonServiceItem>;

    /// Read a destination
    async fn read(&self, id: &str) -> Result<CommonServiceItem>;

    /// Update a destination, keeping its settings when `settings` is `None`
    async fn update(&self, id: &str, meta: ItemMeta, settings: Option<DestinationSettings>) -> Result<CommonServiceItem>;

    /// Delete a destination
    async fn delete(&self, id: &str) -> Result<()>;

    /// Read the delivery status of a destination
    async fn status(&self, id: &str) -> Result<NotificationStatus>;
}

/// [`DestinationApi`] backed by an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct DestinationOp {
    client: ApiClient,
}

impl DestinationOp {
    /// Create the operation set
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DestinationApi for DestinationOp {
    async fn list(&self) -> Result<ListCommonServiceItemsResponse> {
        tagged(
            "Destination.List",
            self.client.list_common_service_items(ProviderClass::Destination).await,
        )
    }

    async fn create(&self, meta: ItemMeta, settings: DestinationSettings) -> Result<CommonServiceItem> {
        let request = PostCommonServiceItemRequest {
            common_service_item: meta.into_new(
                Provider::of(ProviderClass::Destination),
                None,
                Settings::Destination(settings),
            ),
        };

        tagged(
            "Destination.Create",
            self.client.create_common_service_item(&request).await,
        )
        .map(|res| res.common_service_item)
    }

    async fn read(&self, id: &str) -> Result<CommonServiceItem> {
        tagged("Destination.Read", self.client.get_common_service_item(id).await).map(|res| res.common_service_item)
    }

    async fn update(&self, id: &str, meta: ItemMeta, settings: Option<DestinationSettings>) -> Result<CommonServiceItem> {
        let request = PutCommonServiceItemRequest {
            common_service_item: meta.into_update(settings.map(Settings::Destination)),
        };

        tagged(
            "Destination.Update",
            self.client.update_common_service_item(id, &request).await,
        )
        .map(|res| res.common_service_item)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tagged("Destination.Delete", self.client.delete_common_service_item(id).await)
    }

    async fn status(&self, id: &str) -> Result<NotificationStatus> {
        tagged(
            "Destination.GetStatus",
            self.client.get_common_service_item_status(id).await,
        )
        .map(|res| res.notification_status)
    }
}
