use std::fmt;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::{Service, ServiceExt};
use url::Url;

use crate::context::{self, ProviderClass};
use crate::error::{ApiError, TransportError};
use crate::layers::COMMON_SERVICE_ITEM_PATH;
use crate::transport::{self, ReqwestTransport, Transport, TransportOptions};
use crate::types::{
    CommonServiceItemResponse, ListCommonServiceItemsResponse, ListNotificationHistoriesResponse,
    ListSourcesResponse, NotificationHistoryResponse, NotificationStatusResponse, PostCommonServiceItemRequest,
    PutCommonServiceItemRequest, ReorderRoutingRequest, ReorderRoutingResponse, SendNotificationMessageRequest,
    SendNotificationMessageResponse,
};

/// Default API root for the `is1a` zone
pub const DEFAULT_API_ROOT_URL: &str = "https://secure.sakura.ad.jp/cloud/zone/is1a/api/cloud/1.0/";

const APPLICATION_JSON: &str = "application/json";

/// Typed client for the common service item API
///
/// Every call goes through the transport stack, so list calls carry the
/// provider class filter and item responses have their icons normalized.
#[derive(Clone)]
pub struct ApiClient {
    root_url: Url,
    transport: Transport,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("root_url", &self.root_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client that talks to `root_url` over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be built
    pub fn new(root_url: &str, options: &TransportOptions) -> Result<Self, ApiError> {
        let root_url = parse_root_url(root_url)?;
        let inner = ReqwestTransport::from_options(options)?;

        Ok(Self::with_transport(root_url, inner))
    }

    /// Create a client on top of a custom inner service
    ///
    /// The filter and icon layers are added around `inner`.
    pub fn with_transport<S>(root_url: Url, inner: S) -> Self
    where
        S: Service<Request<Bytes>, Response = Response<Bytes>, Error = TransportError>
            + Clone
            + Send
            + Sync
            + 'static,
        S::Future: Send + 'static,
    {
        Self {
            root_url: with_trailing_slash(root_url),
            transport: transport::layered(inner),
        }
    }

    /// API root all endpoint paths are resolved against
    pub const fn root_url(&self) -> &Url {
        &self.root_url
    }

    /// Send a raw request through the transport stack
    ///
    /// # Errors
    ///
    /// Returns an error if any stage of the stack fails
    pub async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
        self.transport.clone().oneshot(request).await
    }

    // -- Common service items --

    /// List items of one provider class
    ///
    /// GET `/commonserviceitem`
    pub async fn list_common_service_items(
        &self,
        class: ProviderClass,
    ) -> Result<ListCommonServiceItemsResponse, ApiError> {
        let request = context::attach(self.request(Method::GET, COMMON_SERVICE_ITEM_PATH, None::<&()>)?, class);
        self.send(request).await
    }

    /// Create an item
    ///
    /// POST `/commonserviceitem`
    pub async fn create_common_service_item(
        &self,
        body: &PostCommonServiceItemRequest,
    ) -> Result<CommonServiceItemResponse, ApiError> {
        let request = self.request(Method::POST, COMMON_SERVICE_ITEM_PATH, Some(body))?;
        self.send(request).await
    }

    /// Read one item
    ///
    /// GET `/commonserviceitem/:id`
    pub async fn get_common_service_item(&self, id: &str) -> Result<CommonServiceItemResponse, ApiError> {
        let request = self.request(Method::GET, &item_path(id), None::<&()>)?;
        self.send(request).await
    }

    /// Update one item
    ///
    /// PUT `/commonserviceitem/:id`
    pub async fn update_common_service_item(
        &self,
        id: &str,
        body: &PutCommonServiceItemRequest,
    ) -> Result<CommonServiceItemResponse, ApiError> {
        let request = self.request(Method::PUT, &item_path(id), Some(body))?;
        self.send(request).await
    }

    /// Delete one item
    ///
    /// DELETE `/commonserviceitem/:id`
    pub async fn delete_common_service_item(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &item_path(id), None::<&()>)?;
        self.dispatch(request).await.map(drop)
    }

    /// Read the delivery status of a destination
    ///
    /// GET `/commonserviceitem/:id/saknotice/status`
    pub async fn get_common_service_item_status(&self, id: &str) -> Result<NotificationStatusResponse, ApiError> {
        let path = format!("{}/saknotice/status", item_path(id));
        let request = self.request(Method::GET, &path, None::<&()>)?;
        self.send(request).await
    }

    // -- Messages --

    /// Post a message to a group
    ///
    /// POST `/commonserviceitem/:id/saknotice/message`
    pub async fn send_notification_message(
        &self,
        id: &str,
        body: &SendNotificationMessageRequest,
    ) -> Result<SendNotificationMessageResponse, ApiError> {
        let path = format!("{}/saknotice/message", item_path(id));
        let request = self.request(Method::POST, &path, Some(body))?;
        self.send(request).await
    }

    // -- Routing --

    /// Change the priority ranks of routings
    ///
    /// PUT `/commonserviceitem/saknoticerouting/reorder`
    pub async fn reorder_routing(&self, body: &ReorderRoutingRequest) -> Result<ReorderRoutingResponse, ApiError> {
        let path = format!("{COMMON_SERVICE_ITEM_PATH}/{}/reorder", ProviderClass::Routing);
        let request = self.request(Method::PUT, &path, Some(body))?;
        self.send(request).await
    }

    /// List message sources routings can match on
    ///
    /// GET `/commonserviceitem/saknotice/sources`
    pub async fn list_sources(&self) -> Result<ListSourcesResponse, ApiError> {
        let path = format!("{COMMON_SERVICE_ITEM_PATH}/saknotice/sources");
        let request = self.request(Method::GET, &path, None::<&()>)?;
        self.send(request).await
    }

    // -- History --

    /// List delivered notifications
    ///
    /// GET `/commonserviceitem/saknotice/history`
    pub async fn list_notification_histories(&self) -> Result<ListNotificationHistoriesResponse, ApiError> {
        let path = format!("{COMMON_SERVICE_ITEM_PATH}/saknotice/history");
        let request = self.request(Method::GET, &path, None::<&()>)?;
        self.send(request).await
    }

    /// Read one delivered notification
    ///
    /// GET `/commonserviceitem/saknotice/history/:requestId`
    pub async fn get_notification_history(&self, request_id: &str) -> Result<NotificationHistoryResponse, ApiError> {
        let path = format!("{COMMON_SERVICE_ITEM_PATH}/saknotice/history/{request_id}");
        let request = self.request(Method::GET, &path, None::<&()>)?;
        self.send(request).await
    }

    // -- Helpers --

    /// Build a request for `path` relative to the API root
    fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request<Bytes>, ApiError> {
        let url = self
            .root_url
            .join(path)
            .map_err(|e| ApiError::Request(format!("invalid URL: {e}")))?;

        let mut builder = Request::builder()
            .method(method)
            .uri(url.as_str())
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let body = match body {
            Some(body) => {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
                Bytes::from(serde_json::to_vec(body).map_err(TransportError::Encode)?)
            }
            None => Bytes::new(),
        };

        builder.body(body).map_err(|e| ApiError::Request(e.to_string()))
    }

    /// Send a request and decode the JSON response body
    async fn send<T: DeserializeOwned>(&self, request: Request<Bytes>) -> Result<T, ApiError> {
        let body = self.dispatch(request).await?;
        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }

    /// Send a request and return the body of a successful response
    async fn dispatch(&self, request: Request<Bytes>) -> Result<Bytes, ApiError> {
        let response = self.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.into_body());
        }

        let message = parse_error_body(response.body());
        tracing::debug!(status = status.as_u16(), %message, "API returned an error status");

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

fn parse_root_url(root_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(root_url).map_err(|e| ApiError::Request(format!("invalid API root URL: {e}")))?;
    Ok(with_trailing_slash(url))
}

/// Ensure relative joins append to the root instead of replacing its last segment
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn item_path(id: &str) -> String {
    format!("{COMMON_SERVICE_ITEM_PATH}/{id}")
}

/// Extract a human-readable message from an error response body
fn parse_error_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);

    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["error_msg", "message"]
                .into_iter()
                .find_map(|key| json[key].as_str().map(str::to_owned))
        })
        .unwrap_or_else(|| text.into_owned())
}
