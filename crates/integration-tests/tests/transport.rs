//! Behavior of the transport stack seen through raw requests

mod harness;

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use harness::api::{COLLECTION_PATH, FilterQuery, MockApi, decoded};
use http::header::CONTENT_LENGTH;
use http::{Method, Request, Response};
use notice_client::context;
use notice_client::{ApiClient, ProviderClass, TransportError};
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, ResponseTemplate};

fn get(url: &str) -> Request<Bytes> {
    Request::builder()
        .method(Method::GET)
        .uri(url)
        .body(Bytes::new())
        .unwrap()
}

#[tokio::test]
async fn list_without_provider_class_sends_nothing() {
    let api = MockApi::start().await;
    let client = api.client();

    let url = format!("{}commonserviceitem", api.root_url());
    let err = client.execute(get(&url)).await.unwrap_err();

    assert!(matches!(err, TransportError::MissingProviderClass { .. }));
    assert!(api.received().await.is_empty());
}

#[tokio::test]
async fn filter_replaces_existing_query_on_trailing_slash_path() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/")))
        .and(FilterQuery::class("saknoticegroup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(api.server())
        .await;

    let url = format!("{}commonserviceitem/?Count=10&From=0", api.root_url());
    let request = context::attach(get(&url), ProviderClass::Group);
    let response = api.client().execute(request).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn null_icon_is_rewritten_and_length_fixed() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"CommonServiceItem":{"ID":"1","Icon":null}}"#, "application/json"),
        )
        .mount(api.server())
        .await;

    let url = format!("{}commonserviceitem/1", api.root_url());
    let response = api.client().execute(get(&url)).await.unwrap();

    let length = response.headers()[CONTENT_LENGTH].to_str().unwrap().to_owned();
    let body = response.into_body();
    assert_eq!(&body[..], br#"{"CommonServiceItem":{"ID":"1","Icon":{}}}"#);
    assert_eq!(length, body.len().to_string());
}

#[tokio::test]
async fn malformed_item_body_passes_through() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION_PATH}/1")))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(api.server())
        .await;

    let url = format!("{}commonserviceitem/1", api.root_url());
    let response = api.client().execute(get(&url)).await.unwrap();

    assert_eq!(response.status(), 502);
    assert_eq!(&response.into_body()[..], b"bad gateway");
}

#[tokio::test]
async fn requests_carry_default_user_agent() {
    let api = MockApi::start().await;

    Mock::given(method("GET"))
        .and(header_regex("user-agent", r"^simple-notification-rs/\S+ \("))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Sources":[]}"#))
        .expect(1)
        .mount(api.server())
        .await;

    let sources = api.client().list_sources().await.unwrap();
    assert!(sources.sources.is_empty());
}

#[tokio::test]
async fn custom_transport_sees_rewritten_requests() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let inner = tower::service_fn(move |req: Request<Bytes>| {
        let recorder = Arc::clone(&recorder);
        async move {
            recorder
                .lock()
                .unwrap()
                .push(req.uri().query().map(decoded).unwrap_or_default());

            let body = Bytes::from_static(
                br#"{"From":0,"Count":1,"Total":1,"CommonServiceItems":[{"ID":"1","Name":"n","Icon":null}]}"#,
            );
            Ok::<_, TransportError>(Response::new(body))
        }
    });

    let client = ApiClient::with_transport("https://api.example.com/cloud/1.0".parse().unwrap(), inner);
    let items = client
        .list_common_service_items(ProviderClass::Destination)
        .await
        .unwrap();

    assert_eq!(items.common_service_items[0].icon, notice_client::Icon::default());
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        [r#"{"Filter":{"Provider.Class":"saknoticedestination"}}"#]
    );
}
