use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use http::{HeaderValue, Request, Response, Uri};
use serde_json::{Map, Value};
use tower::{Layer, Service};

use super::COMMON_SERVICE_ITEM_PATH;
use crate::error::TransportError;

const ITEM_KEY: &str = "CommonServiceItem";
const ITEM_LIST_KEY: &str = "CommonServiceItems";
const ICON_KEY: &str = "Icon";

fn references_common_service_item(uri: &Uri) -> bool {
    uri.to_string().contains(COMMON_SERVICE_ITEM_PATH)
}

fn replace_null_icon(item: &mut Map<String, Value>) {
    if let Some(icon) = item.get_mut(ICON_KEY)
        && icon.is_null()
    {
        *icon = Value::Object(Map::new());
    }
}

/// Replace `null` icons with empty objects in a decoded envelope
///
/// Handles the list shape (`CommonServiceItems`) first and falls back to the
/// single item shape (`CommonServiceItem`). Icons that are already objects
/// are left alone.
pub fn normalize_icons(document: &mut Map<String, Value>) {
    if let Some(Value::Array(items)) = document.get_mut(ITEM_LIST_KEY) {
        for item in items.iter_mut().filter_map(Value::as_object_mut) {
            replace_null_icon(item);
        }
        return;
    }

    if let Some(Value::Object(item)) = document.get_mut(ITEM_KEY) {
        replace_null_icon(item);
    }
}

/// Rewrite a buffered response body so no item exposes a `null` icon
///
/// Bodies that are not a JSON object are returned byte for byte.
///
/// # Errors
///
/// Returns an error if the normalized document cannot be re-encoded
pub fn normalize_response(response: Response<Bytes>) -> Result<Response<Bytes>, TransportError> {
    let (mut parts, body) = response.into_parts();

    let mut document = match serde_json::from_slice::<Map<String, Value>>(&body) {
        Ok(document) => document,
        Err(e) => {
            tracing::trace!(error = %e, "response body is not a JSON object, passing through");
            return Ok(Response::from_parts(parts, body));
        }
    };

    normalize_icons(&mut document);

    let body = Bytes::from(serde_json::to_vec(&document)?);
    parts.headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

    Ok(Response::from_parts(parts, body))
}

/// Tower layer that normalizes `null` icons in common service item responses
#[derive(Debug, Clone, Copy, Default)]
pub struct IconNormalizeLayer;

impl<S> Layer<S> for IconNormalizeLayer {
    type Service = IconNormalizeService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        IconNormalizeService { inner }
    }
}

/// Service that rewrites response bodies coming back from the transport
#[derive(Debug, Clone)]
pub struct IconNormalizeService<S> {
    inner: S,
}

impl<S, ReqBody> Service<Request<ReqBody>> for IconNormalizeService<S>
where
    S: Service<Request<ReqBody>, Response = Response<Bytes>, Error = TransportError>,
    S::Future: Send + 'static,
{
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let applies = references_common_service_item(req.uri());
        let fut = self.inner.call(req);

        Box::pin(async move {
            let response = fut.await?;
            if applies {
                normalize_response(response)
            } else {
                Ok(response)
            }
        })
    }
}
