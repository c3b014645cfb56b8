//! Mock Simple Notification API for integration tests
//!
//! Wraps a [`MockServer`] and hands out clients pointed at it.

use notice_client::{ApiClient, Credentials, TransportOptions};
use percent_encoding::percent_decode_str;
use secrecy::SecretString;
use wiremock::{Match, MockServer, Request};

/// Path prefix the mock API is served under
pub const API_PREFIX: &str = "/cloud/zone/is1a/api/cloud/1.0";

/// Collection path all common service item calls share
pub const COLLECTION_PATH: &str = "/cloud/zone/is1a/api/cloud/1.0/commonserviceitem";

/// Basic auth header sent for `token:secret`
pub const EXPECTED_AUTHORIZATION: &str = "Basic dG9rZW46c2VjcmV0";

/// A running mock API
pub struct MockApi {
    server: MockServer,
}

impl MockApi {
    /// Start a mock API on a random port
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Underlying mock server, for mounting expectations
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// API root URL of the mock
    pub fn root_url(&self) -> String {
        format!("{}{API_PREFIX}/", self.server.uri())
    }

    /// Client with test credentials pointed at the mock
    pub fn client(&self) -> ApiClient {
        let options = TransportOptions {
            credentials: Some(Credentials {
                access_token: SecretString::from("token".to_owned()),
                access_token_secret: SecretString::from("secret".to_owned()),
            }),
            ..TransportOptions::default()
        };

        ApiClient::new(&self.root_url(), &options).expect("valid client")
    }

    /// Requests the mock has seen so far
    pub async fn received(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Matches requests whose decoded raw query string equals a JSON filter exactly
pub struct FilterQuery(pub String);

impl FilterQuery {
    /// Filter on one provider class
    pub fn class(class: &str) -> Self {
        Self(format!(r#"{{"Filter":{{"Provider.Class":"{class}"}}}}"#))
    }
}

impl Match for FilterQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_some_and(|query| decoded(query) == self.0)
    }
}

/// Matches requests without any query string
pub struct NoQuery;

impl Match for NoQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

/// Percent-decode a raw query string
pub fn decoded(query: &str) -> String {
    percent_decode_str(query).decode_utf8_lossy().into_owned()
}
