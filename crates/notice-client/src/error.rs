/// Client-specific result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised inside the transport stack
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A filtered list request was dispatched without a provider class
    #[error("Provider.Class not found in request context for {path}")]
    MissingProviderClass {
        /// Path of the rejected request
        path: String,
    },

    /// The request URI could not be rewritten
    #[error("invalid request URI: {0}")]
    InvalidUri(String),

    /// A configured header value is not valid
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Failed to re-encode a JSON body
    #[error("failed to encode body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors returned by [`ApiClient`](crate::ApiClient) calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure inside the transport stack
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Request could not be built
    #[error("invalid request: {0}")]
    Request(String),
}

/// Errors returned by the resource operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API answered with an error status
    #[error("{method}: API error with status {status}: {source}")]
    Api {
        /// Operation that failed, e.g. `Destination.List`
        method: &'static str,
        /// HTTP status code
        status: u16,
        /// Underlying client error
        #[source]
        source: ApiError,
    },

    /// Any other failure while performing the operation
    #[error("{method}: {source}")]
    Client {
        /// Operation that failed, e.g. `Destination.List`
        method: &'static str,
        /// Underlying client error
        #[source]
        source: ApiError,
    },
}

impl Error {
    /// Wrap a client error, keeping the status code of API failures
    pub fn from_api(method: &'static str, source: ApiError) -> Self {
        match source {
            ApiError::Status { status, .. } => Self::Api {
                method,
                status,
                source,
            },
            source => Self::Client { method, source },
        }
    }

    /// Name of the operation that failed
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Api { method, .. } | Self::Client { method, .. } => *method,
        }
    }

    /// HTTP status code, when the API answered with an error status
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Client { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_become_api_errors() {
        let err = Error::from_api(
            "Destination.Read",
            ApiError::Status {
                status: 404,
                message: "not found".to_owned(),
            },
        );

        assert!(matches!(err, Error::Api { status: 404, .. }));
        assert_eq!(err.method(), "Destination.Read");
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "Destination.Read: API error with status 404: API error (404): not found"
        );
    }

    #[test]
    fn other_errors_become_client_errors() {
        let err = Error::from_api(
            "Group.List",
            ApiError::Transport(TransportError::MissingProviderClass {
                path: "/commonserviceitem".to_owned(),
            }),
        );

        assert!(matches!(err, Error::Client { .. }));
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Group.List: Provider.Class not found"));
    }
}
