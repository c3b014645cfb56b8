mod harness;

use harness::api::{COLLECTION_PATH, EXPECTED_AUTHORIZATION, FilterQuery, MockApi, NoQuery};
use harness::fixtures;
use notice_client::{
    DestinationApi, DestinationOp, DestinationSettings, DestinationType, Error, Icon, ItemMeta, ProviderClass,
    Settings,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_sends_destination_filter_and_normalizes_icons() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION_PATH))
        .and(FilterQuery::class("saknoticedestination"))
        .and(header("authorization", EXPECTED_AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::list(vec![
            fixtures::destination("113000000001"),
            fixtures::destination("113000000002"),
        ])))
        .expect(1)
        .mount(api.server())
        .await;

    let destinations = DestinationOp::new(api.client()).list().await.unwrap();

    assert_eq!(destinations.total, 2);
    assert_eq!(destinations.common_service_items.len(), 2);
    for item in &destinations.common_service_items {
        assert_eq!(item.icon, Icon::default());
        assert_eq!(item.provider_class(), Some(ProviderClass::Destination));
    }
}

#[tokio::test]
async fn create_posts_destination_provider_and_settings() {
    let api = MockApi::start().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION_PATH))
        .and(NoQuery)
        .and(body_partial_json(json!({
            "CommonServiceItem": {
                "Name": "ops-mail",
                "Provider": { "Class": "saknoticedestination" },
                "Settings": { "Type": "email", "Value": "ops@example.com" }
            }
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(fixtures::single(fixtures::destination("113000000001"))),
        )
        .expect(1)
        .mount(api.server())
        .await;

    let settings = DestinationSettings {
        kind: DestinationType::Email,
        value: "ops@example.com".to_owned(),
        disabled: None,
    };
    let created = DestinationOp::new(api.client())
        .create(ItemMeta::named("ops-mail"), settings.clone())
        .await
        .unwrap();

    assert_eq!(created.id, "113000000001");
    assert_eq!(created.settings, Some(Settings::Destination(settings)));
}

#[tokio::test]
async fn read_decodes_item_with_null_icon() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/113000000001")))
        .and(NoQuery)
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::single(fixtures::destination("113000000001"))),
        )
        .mount(api.server())
        .await;

    let item = DestinationOp::new(api.client()).read("113000000001").await.unwrap();

    assert_eq!(item.name, "ops-mail");
    assert_eq!(item.icon, Icon::default());
    assert_eq!(item.availability.as_deref(), Some("available"));
}

#[tokio::test]
async fn update_without_settings_sends_meta_only() {
    let api = MockApi::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{COLLECTION_PATH}/113000000001")))
        .and(body_partial_json(json!({
            "CommonServiceItem": { "Name": "renamed", "Tags": ["prod"] }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::single(fixtures::destination("113000000001"))),
        )
        .expect(1)
        .mount(api.server())
        .await;

    let meta = ItemMeta {
        tags: vec!["prod".to_owned()],
        ..ItemMeta::named("renamed")
    };
    DestinationOp::new(api.client())
        .update("113000000001", meta, None)
        .await
        .unwrap();

    let requests = api.received().await;
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["CommonServiceItem"].get("Settings").is_none());
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let api = MockApi::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION_PATH}/113000000001")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(api.server())
        .await;

    DestinationOp::new(api.client()).delete("113000000001").await.unwrap();
}

#[tokio::test]
async fn status_reads_notification_status() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/113000000001/saknotice/status")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "NotificationStatus": { "Status": "ok", "UpdatedAt": "2025-01-02T00:00:00+09:00" }
        })))
        .mount(api.server())
        .await;

    let status = DestinationOp::new(api.client()).status("113000000001").await.unwrap();

    assert_eq!(status.status, "ok");
    assert_eq!(status.updated_at.as_deref(), Some("2025-01-02T00:00:00+09:00"));
}

#[tokio::test]
async fn not_found_is_reported_as_api_error() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(fixtures::api_error(
            "404 Not Found",
            "not_found",
            "resource not found",
        )))
        .mount(api.server())
        .await;

    let err = DestinationOp::new(api.client()).read("404").await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert_eq!(err.method(), "Destination.Read");
    assert!(err.to_string().contains("resource not found"));
}

#[tokio::test]
async fn undecodable_body_is_reported_as_client_error() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/113000000001")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(api.server())
        .await;

    let err = DestinationOp::new(api.client()).read("113000000001").await.unwrap_err();

    assert!(matches!(err, Error::Client { method: "Destination.Read", .. }));
    assert_eq!(err.status(), None);
}
