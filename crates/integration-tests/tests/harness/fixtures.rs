//! Canned API payloads

use serde_json::{Value, json};

/// A destination item as the API returns it, with a `null` icon
pub fn destination(id: &str) -> Value {
    json!({
        "ID": id,
        "Name": "ops-mail",
        "Description": "",
        "Tags": [],
        "Icon": null,
        "Settings": { "Type": "email", "Value": "ops@example.com" },
        "Provider": { "Class": "saknoticedestination" },
        "Availability": "available",
        "CreatedAt": "2025-01-01T00:00:00+09:00",
        "ModifiedAt": "2025-01-01T00:00:00+09:00"
    })
}

/// A group item with an icon set
pub fn group(id: &str, destinations: &[&str]) -> Value {
    json!({
        "ID": id,
        "Name": "on-call",
        "Description": "paged on incidents",
        "Tags": ["prod"],
        "Icon": { "ID": "112900000001", "URL": "https://example.com/icon.png" },
        "Settings": { "Destinations": destinations },
        "Provider": { "Class": "saknoticegroup", "ServiceClass": "cloud/saknotice" },
        "ServiceClass": "cloud/saknoticegroup/2"
    })
}

/// A routing item with a `null` icon
pub fn routing(id: &str, source_id: &str, group_id: &str, rank: u32) -> Value {
    json!({
        "ID": id,
        "Name": "alerts",
        "Icon": null,
        "Settings": {
            "MatchLabels": [{ "Name": "severity", "Value": "critical" }],
            "SourceID": source_id,
            "TargetGroupID": group_id,
            "PriorityRank": rank
        },
        "Provider": { "Class": "saknoticerouting" }
    })
}

/// List envelope around `items`
pub fn list(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({
        "From": 0,
        "Count": count,
        "Total": count,
        "CommonServiceItems": items
    })
}

/// Single item envelope around `item`
pub fn single(item: Value) -> Value {
    json!({ "CommonServiceItem": item })
}

/// Error body in the API's format
pub fn api_error(status: &str, code: &str, message: &str) -> Value {
    json!({
        "is_fatal": true,
        "serial": "0123456789abcdef",
        "status": status,
        "error_code": code,
        "error_msg": message
    })
}
