//! Blocking client tests.
//!
//! These run without an ambient async runtime; the blocking client must not
//! be driven from inside one. Where a mock HTTP server is needed it runs on a
//! separate multi-threaded runtime.

use channel3_sdk::test_support::RecordingTransport;
use channel3_sdk::types::{Gender, ListBrandsParams, SearchFilters, SearchRequest};
use channel3_sdk::{BlockingClient, Channel3Config, Channel3Error, Client};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config() -> Channel3Config {
    Channel3Config::new()
        .with_api_base("https://api.example.com/v0")
        .with_api_key("test_key")
}

#[test]
fn empty_ids_fail_without_calling_transport() {
    let recorder = RecordingTransport::json(&serde_json::json!({}));
    let client = BlockingClient::with_config(config())
        .unwrap()
        .with_transport(recorder.clone());

    for id in ["", "   "] {
        assert!(matches!(
            client.get_product(id),
            Err(Channel3Error::Validation(_))
        ));
        assert!(matches!(
            client.get_brand(id),
            Err(Channel3Error::Validation(_))
        ));
    }

    assert_eq!(recorder.call_count(), 0);
}

#[test]
fn async_empty_ids_fail_without_calling_transport() {
    let recorder = RecordingTransport::json(&serde_json::json!({}));
    let client = Client::with_config(config())
        .unwrap()
        .with_transport(recorder.clone());

    let product = futures::executor::block_on(client.get_product(""));
    let brand = futures::executor::block_on(client.get_brand(" \t"));

    match product {
        Err(Channel3Error::Validation(obj)) => assert_eq!(obj.detail, "product_id cannot be empty"),
        other => panic!("Expected Validation error, got {other:?}"),
    }
    match brand {
        Err(Channel3Error::Validation(obj)) => assert_eq!(obj.detail, "brand_id cannot be empty"),
        other => panic!("Expected Validation error, got {other:?}"),
    }
    assert_eq!(recorder.call_count(), 0);
}

#[test]
fn sync_and_async_clients_send_identical_requests() {
    let sync_recorder = RecordingTransport::json(&serde_json::json!([]));
    let async_recorder = RecordingTransport::json(&serde_json::json!([]));

    let sync_client = BlockingClient::with_config(config())
        .unwrap()
        .with_transport(sync_recorder.clone());
    let async_client = Client::with_config(config())
        .unwrap()
        .with_transport(async_recorder.clone());

    let search = SearchRequest::new("red dress")
        .with_filters(
            SearchFilters::new()
                .with_gender(Gender::Female)
                .with_colors(["red"])
                .with_max_price(150.0),
        )
        .with_page(1)
        .with_size(20);
    let list = ListBrandsParams::new().with_query("nike").with_size(5);

    // Responses are canned as `[]`, so only the requests matter here
    let _ = sync_client.search(search.clone());
    let _ = sync_client.get_product("prod_123");
    let _ = sync_client.list_brands(list.clone());
    let _ = sync_client.get_brand("brand_123");

    futures::executor::block_on(async {
        let _ = async_client.search(search).await;
        let _ = async_client.get_product("prod_123").await;
        let _ = async_client.list_brands(list).await;
        let _ = async_client.get_brand("brand_123").await;
    });

    let sync_requests = sync_recorder.requests();
    let async_requests = async_recorder.requests();

    assert_eq!(sync_requests.len(), 4);
    assert_eq!(sync_requests, async_requests);
    for (s, a) in sync_requests.iter().zip(&async_requests) {
        assert_eq!(s.body, a.body, "body bytes differ for {}", s.path);
    }
}

#[test]
fn blocking_client_decodes_recorded_response() {
    let recorder = RecordingTransport::json(&serde_json::json!({
        "id": "brand_123",
        "name": "Test Brand"
    }));
    let client = BlockingClient::with_config(config())
        .unwrap()
        .with_transport(recorder.clone());

    let first = client.get_brand("brand_123").unwrap();
    let second = client.get_brand("brand_123").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.name, "Test Brand");
    assert_eq!(recorder.requests()[0].path, "/brands/brand_123");
}

#[test]
fn blocking_client_maps_not_found() {
    let recorder = RecordingTransport::new(404, r#"{"detail":"Product not found"}"#);
    let client = BlockingClient::with_config(config())
        .unwrap()
        .with_transport(recorder);

    match client.get_product("nonexistent") {
        Err(Channel3Error::NotFound { resource_id, error }) => {
            assert_eq!(resource_id.as_deref(), Some("nonexistent"));
            assert_eq!(error.detail, "Product not found");
        }
        other => panic!("Expected NotFound error, got {other:?}"),
    }
}

#[test]
fn blocking_client_over_http() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(header("x-api-key", "test_key"))
            .and(body_json(serde_json::json!({"query": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "prod_123", "score": 0.95, "title": "Test Product"}
            ])))
            .expect(1)
            .mount(&server),
    );

    let config = Channel3Config::new()
        .with_api_base(server.uri())
        .with_api_key("test_key");
    let client = BlockingClient::with_config(config).unwrap();
    let products = client.search(SearchRequest::new("test")).unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, "prod_123");
    assert!(products[0].offers.is_empty());

    drop(client);
    rt.block_on(server.verify());
}
