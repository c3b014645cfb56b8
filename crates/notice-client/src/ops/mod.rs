//! Resource operations for destinations, groups, routings and histories
//!
//! Each operation wraps one [`ApiClient`](crate::ApiClient) call and tags
//! failures with its name, e.g. `Destination.List`.

mod destination;
mod group;
mod history;
mod message;
mod routing;

pub use destination::{DestinationApi, DestinationOp};
pub use group::{GroupApi, GroupOp};
pub use history::{HistoryApi, HistoryOp};
pub use message::{SendNotificationMessageApi, SendNotificationMessageOp};
pub use routing::{RoutingApi, RoutingOp};

use crate::error::{ApiError, Error, Result};
use crate::types::{CommonServiceItemUpdate, Icon, NewCommonServiceItem, Provider, Settings};

/// Descriptive fields shared by create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMeta {
    /// Resource name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Tags
    pub tags: Vec<String>,
    /// Icon, `None` sends none
    pub icon: Option<Icon>,
}

impl ItemMeta {
    /// Meta with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn into_new(self, provider: Provider, service_class: Option<String>, settings: Settings) -> NewCommonServiceItem {
        NewCommonServiceItem {
            name: self.name,
            description: self.description,
            tags: self.tags,
            icon: self.icon,
            service_class,
            provider,
            settings,
        }
    }

    fn into_update(self, settings: Option<Settings>) -> CommonServiceItemUpdate {
        CommonServiceItemUpdate {
            name: self.name,
            description: self.description,
            tags: self.tags,
            icon: self.icon,
            settings,
        }
    }
}

/// Tag a client error with the operation name
fn tagged<T>(method: &'static str, result: std::result::Result<T, ApiError>) -> Result<T> {
    result.map_err(|e| {
        tracing::debug!(method, error = %e, "operation failed");
        Error::from_api(method, e)
    })
}
