//! Provider class discriminator carried on outgoing requests
//!
//! Destinations, groups and routings share one collection endpoint. The
//! class is attached to the request extensions so the filter stage can turn
//! it into a query before dispatch.

use std::fmt;
use std::str::FromStr;

use http::Request;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Sub-resource kind stored under the shared `commonserviceitem` collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderClass {
    /// Notification destination (email, webhook, chat)
    #[serde(rename = "saknoticedestination")]
    Destination,
    /// Notification group fanning out to destinations
    #[serde(rename = "saknoticegroup")]
    Group,
    /// Routing rule from a source to a group
    #[serde(rename = "saknoticerouting")]
    Routing,
}

impl ProviderClass {
    /// All known classes
    pub const ALL: [Self; 3] = [Self::Destination, Self::Group, Self::Routing];

    /// Wire value of the class
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "saknoticedestination",
            Self::Group => "saknoticegroup",
            Self::Routing => "saknoticerouting",
        }
    }
}

impl fmt::Display for ProviderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| format!("unknown provider class: {s}"))
    }
}

/// Attach a provider class to a request, replacing any previous one
pub fn attach<B>(mut request: Request<B>, class: ProviderClass) -> Request<B> {
    request.extensions_mut().insert(class);
    request
}

/// Read the provider class attached to a request
///
/// # Errors
///
/// Returns [`TransportError::MissingProviderClass`] when nothing was attached
pub fn read<B>(request: &Request<B>) -> Result<ProviderClass, TransportError> {
    request
        .extensions()
        .get::<ProviderClass>()
        .copied()
        .ok_or_else(|| TransportError::MissingProviderClass {
            path: request.uri().path().to_owned(),
        })
}
