use std::sync::Arc;

use prime_properties::config::ContentStoreConfig;
use prime_properties::content::{ContentClient, ContentError, CosmicGateway, GatewayError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OBJECTS_PATH: &str = "/v3/buckets/demo/objects";

async fn client_for(server: &MockServer) -> ContentClient {
    let gateway = CosmicGateway::new(&ContentStoreConfig {
        api_base: server.uri(),
        bucket_slug: "demo".to_string(),
        read_key: "test-key".to_string(),
    });
    ContentClient::new(Arc::new(gateway))
}

#[tokio::test]
async fn list_queries_send_credentials_props_and_depth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("read_key", "test-key"))
        .and(query_param("props", "id,slug,title,metadata"))
        .and(query_param("depth", "1"))
        .and(query_param("query", r#"{"type":"properties"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "objects": [{
                "id": "prop-1",
                "slug": "downtown-condo",
                "title": "Downtown Condo",
                "metadata": {
                    "address": "77 Center Ave",
                    "price": 300_000,
                    "bedrooms": 2,
                    "bathrooms": 2,
                    "square_footage": 1100,
                    "property_type": { "key": "condo", "value": "Condo" },
                    "status": { "key": "for-sale", "value": "For Sale" }
                }
            }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let properties = client.properties().await.expect("list fetch succeeds");
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].slug, "downtown-condo");
}

#[tokio::test]
async fn store_not_found_yields_an_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let agents = client.agents().await.expect("absence is not a failure");
    assert!(agents.is_empty());
}

#[tokio::test]
async fn store_not_found_yields_none_for_a_single_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let property = client
        .property_by_slug("nonexistent")
        .await
        .expect("absence is not a failure");
    assert!(property.is_none());
}

#[tokio::test]
async fn list_failures_are_labeled_per_entity_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .testimonials()
        .await
        .expect_err("server failure surfaces");
    assert!(matches!(err, ContentError::Fetch { .. }));
    assert_eq!(err.to_string(), "failed to fetch testimonials");
}

#[tokio::test]
async fn single_lookup_failures_propagate_the_store_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .neighborhood_by_slug("riverside")
        .await
        .expect_err("server failure surfaces");
    assert!(matches!(
        err,
        ContentError::Store(GatewayError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn single_lookup_decodes_the_object_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .and(query_param("depth", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": {
                "id": "agent-1",
                "slug": "jordan-lee",
                "title": "Jordan Lee",
                "metadata": {
                    "full_name": "Jordan Lee",
                    "email": "jordan@example.com",
                    "phone": "555-0100"
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let agent = client
        .agent_by_slug("jordan-lee")
        .await
        .expect("lookup succeeds")
        .expect("agent present");
    assert_eq!(agent.metadata.phone, "555-0100");
}
