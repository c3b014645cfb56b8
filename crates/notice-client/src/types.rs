use serde::{Deserialize, Serialize};

use crate::context::ProviderClass;

// -- Common service item --

/// Icon attached to a resource
///
/// The API reports "no icon" as `null`, which the transport rewrites to `{}`
/// so this type always decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon identifier
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Icon image URL
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Provider block of a common service item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Provider {
    /// Provider identifier
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Sub-resource kind
    pub class: ProviderClass,
    /// Provider display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider service class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
}

impl Provider {
    /// Provider block carrying only a class
    pub const fn of(class: ProviderClass) -> Self {
        Self {
            id: None,
            class,
            name: None,
            service_class: None,
        }
    }
}

/// Destination delivery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    /// Email address
    Email,
    /// Generic webhook URL
    Webhook,
    /// Slack incoming webhook
    Slack,
    /// Discord webhook
    Discord,
}

/// Settings of a notification destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DestinationSettings {
    /// Delivery channel
    #[serde(rename = "Type")]
    pub kind: DestinationType,
    /// Address or URL for the channel
    pub value: String,
    /// Whether the destination is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Settings of a notification group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupSettings {
    /// Destination IDs notified by this group
    pub destinations: Vec<String>,
    /// Whether the group is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Label matcher of a routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchLabel {
    /// Label name
    pub name: String,
    /// Expected label value
    pub value: String,
}

/// Settings of a routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingSettings {
    /// Labels a message must carry to match
    #[serde(default)]
    pub match_labels: Vec<MatchLabel>,
    /// Source the rule applies to
    #[serde(rename = "SourceID")]
    pub source_id: String,
    /// Group that receives matched messages
    #[serde(rename = "TargetGroupID")]
    pub target_group_id: String,
    /// Evaluation order, assigned by the service and changed with reorder
    pub priority_rank: u32,
}

/// Settings of any common service item kind
///
/// The wire format carries no tag, variants are told apart by their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Settings {
    /// Routing settings
    Routing(RoutingSettings),
    /// Group settings
    Group(GroupSettings),
    /// Destination settings
    Destination(DestinationSettings),
}

/// Generic resource envelope for destinations, groups and routings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonServiceItem {
    /// Resource identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Resource name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Icon, empty when none is set
    #[serde(default)]
    pub icon: Icon,
    /// Kind-specific settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    /// Provider block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Service class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    /// Availability state (e.g. `available`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
}

impl CommonServiceItem {
    /// Provider class of the item, if the provider block is present
    pub fn provider_class(&self) -> Option<ProviderClass> {
        self.provider.as_ref().map(|p| p.class)
    }
}

/// List of common service items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCommonServiceItemsResponse {
    /// Offset of the first item
    #[serde(default)]
    pub from: u32,
    /// Number of items returned
    #[serde(default)]
    pub count: u32,
    /// Total number of matching items
    #[serde(default)]
    pub total: u32,
    /// Items
    #[serde(default)]
    pub common_service_items: Vec<CommonServiceItem>,
}

/// Single common service item envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonServiceItemResponse {
    /// Item
    pub common_service_item: CommonServiceItem,
}

// -- Create / update --

/// Body of a create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewCommonServiceItem {
    /// Resource name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Icon, `None` sends no icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Service class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_class: Option<String>,
    /// Provider block, the operations set its class
    pub provider: Provider,
    /// Kind-specific settings
    pub settings: Settings,
}

/// Request of `POST /commonserviceitem`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostCommonServiceItemRequest {
    /// Item to create
    pub common_service_item: NewCommonServiceItem,
}

/// Body of an update call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonServiceItemUpdate {
    /// Resource name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Icon, `None` leaves it unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Settings, `None` leaves them unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

/// Request of `PUT /commonserviceitem/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutCommonServiceItemRequest {
    /// Fields to update
    pub common_service_item: CommonServiceItemUpdate,
}

// -- Status --

/// Delivery status of a destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationStatus {
    /// Status label (e.g. `verified`)
    #[serde(default)]
    pub status: String,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Response of the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationStatusResponse {
    /// Status of the destination
    pub notification_status: NotificationStatus,
}

// -- Messages --

/// Message posted to a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendNotificationMessageRequest {
    /// Message text
    pub message: String,
}

/// Result of posting a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendNotificationMessageResponse {
    /// Whether the message was accepted
    #[serde(alias = "is_ok")]
    pub is_ok: bool,
}

// -- Routing --

/// New position of one routing rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingOrder {
    /// Routing identifier
    #[serde(rename = "RoutingID")]
    pub routing_id: String,
    /// New priority rank
    pub priority_rank: u32,
}

/// Request of the routing reorder endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReorderRoutingRequest {
    /// New ordering
    pub orders: Vec<RoutingOrder>,
}

/// Response of the routing reorder endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReorderRoutingResponse {
    /// Whether the new order was accepted
    #[serde(default = "default_true", alias = "is_ok")]
    pub is_ok: bool,
}

fn default_true() -> bool {
    true
}

/// Message source that routings can match on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Source {
    /// Source identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// Source name
    #[serde(default)]
    pub name: String,
    /// Source description
    #[serde(default)]
    pub description: String,
}

/// Response of the sources endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListSourcesResponse {
    /// Known sources
    #[serde(default)]
    pub sources: Vec<Source>,
}

// -- History --

/// One delivered notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationHistory {
    /// Request identifier
    #[serde(rename = "RequestID")]
    pub request_id: String,
    /// Delivered message
    #[serde(default)]
    pub message: String,
    /// Source that emitted the message
    #[serde(rename = "SourceID", default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Delivery state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Response of the history list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListNotificationHistoriesResponse {
    /// Histories, newest first
    #[serde(default)]
    pub notification_histories: Vec<NotificationHistory>,
}

/// Response of the history read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationHistoryResponse {
    /// History entry
    pub notification_history: NotificationHistory,
}
