use async_trait::async_trait;

use super::tagged;
use crate::client::ApiClient;
use crate::context::ProviderClass;
use crate::error::Result;
use crate::types::{
    CommonServiceItem, ListCommonServiceItemsResponse, ListSourcesResponse, PostCommonServiceItemRequest,
    PutCommonServiceItemRequest, ReorderRoutingRequest, ReorderRoutingResponse,
};

/// Operations on routing rules
///
/// Routings take full request bodies since their settings reference other
/// resources (sources and groups) the caller already holds.
#[async_trait]
pub trait RoutingApi: Send + Sync {
    /// List all routings
    async fn list(&self) -> Result<ListCommonServiceItemsResponse>;

    /// Create a routing, forcing the routing provider class
    async fn create(&self, request: PostCommonServiceItemRequest) -> Result<CommonServiceItem>;

    /// Read a routing
    async fn read(&self, id: &str) -> Result<CommonServiceItem>;

    /// Update a routing
    async fn update(&self, id: &str, request: &PutCommonServiceItemRequest) -> Result<CommonServiceItem>;

    /// Delete a routing
    async fn delete(&self, id: &str) -> Result<()>;

    /// Change routing priority ranks
    async fn reorder(&self, request: &ReorderRoutingRequest) -> Result<ReorderRoutingResponse>;

    /// List message sources
    async fn list_sources(&self) -> Result<ListSourcesResponse>;
}

/// [`RoutingApi`] backed by an [`ApiClient`]
#[derive(Debug, Clone)]
pub struct RoutingOp {
    client: ApiClient,
}

impl RoutingOp {
    /// Create the operation set
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoutingApi for RoutingOp {
    async fn list(&self) -> Result<ListCommonServiceItemsResponse> {
        tagged(
            "Routing.List",
            self.client.list_common_service_items(ProviderClass::Routing).await,
        )
    }

    async fn create(&self, mut request: PostCommonServiceItemRequest) -> Result<CommonServiceItem> {
        request.common_service_item.provider.class = ProviderClass::Routing;

        tagged("Routing.Create", self.client.create_common_service_item(&request).await)
            .map(|res| res.common_service_item)
    }

    async fn read(&self, id: &str) -> Result<CommonServiceItem> {
        tagged("Routing.Read", self.client.get_common_service_item(id).await).map(|res| res.common_service_item)
    }

    async fn update(&self, id: &str, request: &PutCommonServiceItemRequest) -> Result<CommonServiceItem> {
        tagged("Routing.Update", self.client.update_common_service_item(id, request).await)
            .map(|res| res.common_service_item)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tagged("Routing.Delete", self.client.delete_common_service_item(id).await)
    }

    async fn reorder(&self, request: &ReorderRoutingRequest) -> Result<ReorderRoutingResponse> {
        tagged("Routing.Reorder", self.client.reorder_routing(request).await)
    }

    async fn list_sources(&self) -> Result<ListSourcesResponse> {
        tagged("Routing.ListSource", self.client.list_sources().await)
    }
}
