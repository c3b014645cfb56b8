use async_trait::async_trait;

use super::{ItemMeta, tagged};
use crate::client::ApiClient;
use crate::context::ProviderClass;
use crate::error::Result;
use crate::types::{
    CommonServiceItem, GroupSettings, ListCommonServiceItemsResponse, PostCommonServiceItemRequest, Provider,
    PutCommonServiceItemRequest, SendNotificationMessageRequest, SendNotificationMessageResponse, Settings,
};

const GROUP_SERVICE_CLASS: &str = "cloud/saknoticegroup/2";
const PROVIDER_SERVICE_CLASS: &str = "cloud/saknotice";

/// Operations on notification groups
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// List all groups
    async fn list(&self) -> Result<ListCommonServiceItemsResponse>;

    /// Create a group
    async fn create(&self, meta: ItemMeta, settings: GroupSettings) -> Result<CommonServiceItem>;

    /// Read a group
    async fn read(&self, id: &str) -> Result<CommonServiceItem>;

    /// Update a group, keeping its settings when `settings` is `None`
    async fn update(&self, id: &str, meta: ItemMeta, settings: Option<GroupSettings>) -> Result<CommonServiceItem>;

    /// Delete a group
    async fn delete(&self, id: &str) -> Result<()>;

    /// Post a message to every destination of the group
    async fn send_message(
        &self,
        id: &str,
        request: &SendNotificationMessageRequest,
    ) -> Result<SendNotificationMessageResponse>;
}

/// [`GroupApi`] backed by an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct GroupOp {
    client: ApiClient,
}

impl GroupOp {
    /// Create the operation set
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GroupApi for GroupOp {
    async fn list(&self) -> Result<ListCommonServiceItemsResponse> {
        tagged(
            "Group.List",
            self.client.list_common_service_items(ProviderClass::Group).await,
        )
    }

    async fn create(&self, meta: ItemMeta, settings: GroupSettings) -> Result<CommonServiceItem> {
        let provider = Provider {
            service_class: Some(PROVIDER_SERVICE_CLASS.to_owned()),
            ..Provider::of(ProviderClass::Group)
        };
        let request = PostCommonServiceItemRequest {
            common_service_item: meta.into_new(
                provider,
                Some(GROUP_SERVICE_CLASS.to_owned()),
                Settings::Group(settings),
            ),
        };

        tagged("Group.Create", self.client.create_common_service_item(&request).await)
            .map(|res| res.common_service_item)
    }

    async fn read(&self, id: &str) -> Result<CommonServiceItem> {
        tagged("Group.Read", self.client.get_common_service_item(id).await).map(|res| res.common_service_item)
    }

    async fn update(&self, id: &str, meta: ItemMeta, settings: Option<GroupSettings>) -> Result<CommonServiceItem> {
        let request = PutCommonServiceItemRequest {
            common_service_item: meta.into_update(settings.map(Settings::Group)),
        };

        tagged("Group.Update", self.client.update_common_service_item(id, &request).await)
            .map(|res| res.common_service_item)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tagged("Group.Delete", self.client.delete_common_service_item(id).await)
    }

    async fn send_message(
        &self,
        id: &str,
        request: &SendNotificationMessageRequest,
    ) -> Result<SendNotificationMessageResponse> {
        tagged(
            "Group.SendMessage",
            self.client.send_notification_message(id, request).await,
        )
    }
}
