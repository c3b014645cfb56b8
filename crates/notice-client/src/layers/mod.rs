//! Tower layers wrapped around the HTTP transport
//!
//! - [`FilterQueryLayer`] - Injects the provider class filter into list requests
//! - [`IconNormalizeLayer`] - Replaces `null` icons with empty objects in responses

mod filter;
mod icon;

pub use filter::{FilterQuery, FilterQueryLayer, FilterQueryService, inject_filter};
pub use icon::{IconNormalizeLayer, IconNormalizeService, normalize_icons, normalize_response};

/// Path segment of the shared resource collection
pub const COMMON_SERVICE_ITEM_PATH: &str = "commonserviceitem";
