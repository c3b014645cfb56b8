use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use http::{Method, Request, Response, Uri};
use serde::Serialize;
use tower::{Layer, Service};
use url::Url;

use super::COMMON_SERVICE_ITEM_PATH;
use crate::context::{self, ProviderClass};
use crate::error::TransportError;

const PROVIDER_CLASS_KEY: &str = "Provider.Class";

/// JSON filter sent as the raw query string of list requests
///
/// Serializes to `{"Filter":{"Provider.Class":"<class>"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterQuery {
    #[serde(rename = "Filter")]
    filter: BTreeMap<&'static str, ProviderClass>,
}

impl FilterQuery {
    /// Build a filter selecting one provider class
    pub fn new(class: ProviderClass) -> Self {
        Self {
            filter: BTreeMap::from([(PROVIDER_CLASS_KEY, class)]),
        }
    }

    /// Encode the filter as a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Whether the request targets the shared collection listing
fn is_list_request<B>(req: &Request<B>) -> bool {
    if req.method() != Method::GET {
        return false;
    }

    let path = req.uri().path();
    let path = path.strip_suffix('/').unwrap_or(path);
    path.rsplit('/').next() == Some(COMMON_SERVICE_ITEM_PATH)
}

/// Replace the query string of `uri` with `query`
///
/// Characters that may not appear in a URI are percent-encoded, everything
/// else is kept verbatim. The server receives `"` as `%22`, so the JSON is
/// exact once the query is percent-decoded.
fn replace_query(uri: &Uri, query: &str) -> Result<Uri, TransportError> {
    let mut url = Url::parse(&uri.to_string()).map_err(|e| TransportError::InvalidUri(e.to_string()))?;
    url.set_query(Some(query));

    Uri::try_from(url.as_str()).map_err(|e| TransportError::InvalidUri(e.to_string()))
}

/// Rewrite a list request so it carries the provider class filter
///
/// Non-list requests are returned unchanged.
///
/// # Errors
///
/// Returns [`TransportError::MissingProviderClass`] when a list request has
/// no class attached
pub fn inject_filter<B>(mut req: Request<B>) -> Result<Request<B>, TransportError> {
    if !is_list_request(&req) {
        return Ok(req);
    }

    let class = context::read(&req)?;
    let query = FilterQuery::new(class).to_json()?;
    *req.uri_mut() = replace_query(req.uri(), &query)?;

    tracing::debug!(provider_class = %class, uri = %req.uri(), "injected provider class filter");

    Ok(req)
}

/// Tower layer that injects the provider class filter into list requests
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterQueryLayer;

impl<S> Layer<S> for FilterQueryLayer {
    type Service = FilterQueryService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FilterQueryService { inner }
    }
}

/// Service that rewrites list requests before they reach the transport
#[derive(Debug, Clone)]
pub struct FilterQueryService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for FilterQueryService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>, Error = TransportError>,
    S::Future: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        match inject_filter(req) {
            Ok(req) => Box::pin(self.inner.call(req)),
            Err(e) => Box::pin(std::future::ready(Err(e))),
        }
    }
}
