//! HTTP transport stack
//!
//! Requests flow through the layers in order before reaching
//! [`ReqwestTransport`], which executes them and buffers the response body.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Request, Response};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use tower::util::BoxCloneSyncService;
use tower::{Service, ServiceBuilder};

use crate::error::TransportError;
use crate::layers::{FilterQueryLayer, IconNormalizeLayer};

/// Boxed transport stack used by [`ApiClient`](crate::ApiClient)
pub type Transport = BoxCloneSyncService<Request<Bytes>, Response<Bytes>, TransportError>;

/// Default `User-Agent` sent with every request
pub fn default_user_agent() -> String {
    format!(
        "simple-notification-rs/{} ({}/{}; +https://github.com/sacloud/simple-notification-api-go)",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}

/// Credentials for HTTP basic authentication
#[derive(Clone)]
pub struct Credentials {
    /// Access token (basic auth username)
    pub access_token: SecretString,
    /// Access token secret (basic auth password)
    pub access_token_secret: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

/// Settings for building the underlying `reqwest` client
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Credentials sent as basic auth, if any
    pub credentials: Option<Credentials>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Timeout applied to each request
    pub timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            credentials: None,
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(30),
        }
    }
}

fn basic_auth(credentials: &Credentials) -> Result<HeaderValue, TransportError> {
    let encoded = STANDARD.encode(format!(
        "{}:{}",
        credentials.access_token.expose_secret(),
        credentials.access_token_secret.expose_secret()
    ));

    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| TransportError::InvalidHeader(format!("invalid credentials: {e}")))?;
    value.set_sensitive(true);

    Ok(value)
}

/// Core transport that executes requests with `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing `reqwest` client
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Build a `reqwest` client from options
    ///
    /// # Errors
    ///
    /// Returns an error if a header value is invalid or the client cannot be built
    pub fn from_options(options: &TransportOptions) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&options.user_agent)
                .map_err(|e| TransportError::InvalidHeader(format!("invalid user agent: {e}")))?,
        );
        if let Some(credentials) = &options.credentials {
            headers.insert(AUTHORIZATION, basic_auth(credentials)?);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self::new(http))
    }
}

impl Service<Request<Bytes>> for ReqwestTransport {
    type Response = Response<Bytes>;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Bytes>) -> Self::Future {
        let http = self.http.clone();

        Box::pin(async move {
            let request = reqwest::Request::try_from(req)?;
            let method = request.method().clone();
            let url = request.url().clone();

            let response = http.execute(request).await?;
            let status = response.status();
            let version = response.version();
            let headers = response.headers().clone();
            let body = response.bytes().await?;

            tracing::debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "request completed");

            let mut buffered = Response::new(body);
            *buffered.status_mut() = status;
            *buffered.version_mut() = version;
            *buffered.headers_mut() = headers;

            Ok(buffered)
        })
    }
}

/// Wrap `inner` with the request and response rewriting layers
///
/// The filter is injected on the way out and icons are normalized on the
/// way back, around whatever service performs the actual call.
pub fn layered<S>(inner: S) -> Transport
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = TransportError> + Clone + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    let stack = ServiceBuilder::new()
        .layer(IconNormalizeLayer)
        .layer(FilterQueryLayer)
        .service(inner);

    BoxCloneSyncService::new(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            access_token: SecretString::from("token".to_owned()),
            access_token_secret: SecretString::from("secret".to_owned()),
        }
    }

    #[test]
    fn basic_auth_header_is_sensitive() {
        let value = basic_auth(&credentials()).unwrap();

        // base64("token:secret")
        assert_eq!(value.to_str().unwrap(), "Basic dG9rZW46c2VjcmV0");
        assert!(value.is_sensitive());
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("token"));
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        assert!(default_user_agent().starts_with("simple-notification-rs/"));
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let options = TransportOptions {
            user_agent: "bad\nagent".to_owned(),
            ..TransportOptions::default()
        };
        assert!(ReqwestTransport::from_options(&options).is_err());
    }
}
