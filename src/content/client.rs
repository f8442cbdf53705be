use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::gateway::{ContentGateway, EntityKind, GatewayError, ObjectQuery};
use super::models::{Agent, Neighborhood, Property, Service, Testimonial};

/// Failure surfaced by the content access layer.
///
/// List queries report a generic, entity-named `Fetch` failure; single-entity
/// queries propagate the underlying gateway error unchanged via `Store`.
/// Absence never appears here: lists normalize it to an empty vec and
/// single-entity queries to `None`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to fetch {}", kind.label())]
    Fetch {
        kind: EntityKind,
        #[source]
        source: GatewayError,
    },
    #[error(transparent)]
    Store(#[from] GatewayError),
}

/// Typed read-only facade over the content store.
#[derive(Clone)]
pub struct ContentClient {
    gateway: Arc<dyn ContentGateway>,
}

impl ContentClient {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    /// All listings, with agent and neighborhood embedded at depth 1.
    pub async fn properties(&self) -> Result<Vec<Property>, ContentError> {
        self.list(ObjectQuery::list(EntityKind::Properties).depth(1))
            .await
    }

    pub async fn property_by_slug(&self, slug: &str) -> Result<Option<Property>, ContentError> {
        self.single(ObjectQuery::by_slug(EntityKind::Properties, slug).depth(1))
            .await
    }

    /// Listings represented by one agent, filtered server-side.
    pub async fn properties_by_agent(&self, agent_id: &str) -> Result<Vec<Property>, ContentError> {
        self.list(
            ObjectQuery::list(EntityKind::Properties)
                .metafield("metadata.agent", agent_id)
                .depth(1),
        )
        .await
    }

    /// Listings located in one neighborhood, filtered server-side.
    pub async fn properties_by_neighborhood(
        &self,
        neighborhood_id: &str,
    ) -> Result<Vec<Property>, ContentError> {
        self.list(
            ObjectQuery::list(EntityKind::Properties)
                .metafield("metadata.neighborhood", neighborhood_id)
                .depth(1),
        )
        .await
    }

    pub async fn agents(&self) -> Result<Vec<Agent>, ContentError> {
        self.list(ObjectQuery::list(EntityKind::Agents)).await
    }

    pub async fn agent_by_slug(&self, slug: &str) -> Result<Option<Agent>, ContentError> {
        self.single(ObjectQuery::by_slug(EntityKind::Agents, slug))
            .await
    }

    pub async fn neighborhoods(&self) -> Result<Vec<Neighborhood>, ContentError> {
        self.list(ObjectQuery::list(EntityKind::Neighborhoods)).await
    }

    pub async fn neighborhood_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Neighborhood>, ContentError> {
        self.single(ObjectQuery::by_slug(EntityKind::Neighborhoods, slug))
            .await
    }

    pub async fn services(&self) -> Result<Vec<Service>, ContentError> {
        self.list(ObjectQuery::list(EntityKind::Services)).await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        self.list(ObjectQuery::list(EntityKind::Testimonials)).await
    }

    /// List contract: absence is an empty page, every other failure is a
    /// generic entity-named fetch error.
    async fn list<T: DeserializeOwned>(&self, query: ObjectQuery) -> Result<Vec<T>, ContentError> {
        let kind = query.kind();
        match self.gateway.find(&query).await {
            Ok(objects) => decode_all(kind, objects).map_err(|source| ContentError::Fetch {
                kind,
                source,
            }),
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            Err(source) => Err(ContentError::Fetch { kind, source }),
        }
    }

    /// Single-entity contract: absence is `None`, every other failure
    /// propagates unchanged so the caller can route it to an error boundary.
    async fn single<T: DeserializeOwned>(
        &self,
        query: ObjectQuery,
    ) -> Result<Option<T>, ContentError> {
        let kind = query.kind();
        match self.gateway.find_one(&query).await {
            Ok(object) => decode(kind, object).map(Some).map_err(ContentError::Store),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(ContentError::Store(err)),
        }
    }
}

fn decode<T: DeserializeOwned>(kind: EntityKind, object: Value) -> Result<T, GatewayError> {
    serde_json::from_value(object).map_err(|source| GatewayError::Decode { kind, source })
}

fn decode_all<T: DeserializeOwned>(
    kind: EntityKind,
    objects: Vec<Value>,
) -> Result<Vec<T>, GatewayError> {
    objects
        .into_iter()
        .map(|object| decode(kind, object))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Scripted gateway that replays one canned outcome per call and records
    /// the queries it saw.
    #[derive(Default)]
    struct ScriptedGateway {
        outcome: Outcome,
        queries: Mutex<Vec<(EntityKind, u8, Value)>>,
    }

    #[derive(Default)]
    enum Outcome {
        #[default]
        NotFound,
        Objects(Vec<Value>),
        Object(Value),
        Status(u16),
    }

    impl ScriptedGateway {
        fn with(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                queries: Mutex::new(Vec::new()),
            })
        }

        fn record(&self, query: &ObjectQuery) {
            self.queries.lock().expect("query log poisoned").push((
                query.kind(),
                query.depth_level(),
                query.selector(),
            ));
        }
    }

    #[async_trait]
    impl ContentGateway for ScriptedGateway {
        async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, GatewayError> {
            self.record(query);
            match &self.outcome {
                Outcome::Objects(objects) => Ok(objects.clone()),
                Outcome::Object(_) | Outcome::NotFound => {
                    Err(GatewayError::NotFound { kind: query.kind() })
                }
                Outcome::Status(status) => Err(GatewayError::Status {
                    kind: query.kind(),
                    status: *status,
                }),
            }
        }

        async fn find_one(&self, query: &ObjectQuery) -> Result<Value, GatewayError> {
            self.record(query);
            match &self.outcome {
                Outcome::Object(object) => Ok(object.clone()),
                Outcome::Objects(_) | Outcome::NotFound => {
                    Err(GatewayError::NotFound { kind: query.kind() })
                }
                Outcome::Status(status) => Err(GatewayError::Status {
                    kind: query.kind(),
                    status: *status,
                }),
            }
        }
    }

    fn sample_agent() -> Value {
        json!({
            "id": "agent-1",
            "slug": "jordan-lee",
            "title": "Jordan Lee",
            "metadata": {
                "full_name": "Jordan Lee",
                "email": "jordan@example.com",
                "phone": "555-0100"
            }
        })
    }

    #[tokio::test]
    async fn missing_agent_list_is_empty_not_an_error() {
        let gateway = ScriptedGateway::with(Outcome::NotFound);
        let client = ContentClient::new(gateway);
        let agents = client.agents().await.expect("absence is not a failure");
        assert!(agents.is_empty());
    }

    #[tokio::test]
    async fn missing_property_slug_is_none() {
        let gateway = ScriptedGateway::with(Outcome::NotFound);
        let client = ContentClient::new(gateway);
        let property = client
            .property_by_slug("nonexistent")
            .await
            .expect("absence is not a failure");
        assert!(property.is_none());
    }

    #[tokio::test]
    async fn failing_property_list_is_a_labeled_fetch_error() {
        let gateway = ScriptedGateway::with(Outcome::Status(500));
        let client = ContentClient::new(gateway);
        let err = client.properties().await.expect_err("failure surfaces");
        match err {
            ContentError::Fetch { kind, .. } => assert_eq!(kind, EntityKind::Properties),
            other => panic!("expected labeled fetch error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "failed to fetch properties");
    }

    #[tokio::test]
    async fn failing_single_lookup_propagates_the_store_error() {
        let gateway = ScriptedGateway::with(Outcome::Status(503));
        let client = ContentClient::new(gateway);
        let err = client
            .agent_by_slug("jordan-lee")
            .await
            .expect_err("failure surfaces");
        match err {
            ContentError::Store(GatewayError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected propagated store error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn property_queries_request_embedded_relationships() {
        let gateway = ScriptedGateway::with(Outcome::Objects(Vec::new()));
        let client = ContentClient::new(gateway.clone());

        client.properties().await.expect("list succeeds");
        client
            .properties_by_agent("agent-1")
            .await
            .expect("list succeeds");
        client.services().await.expect("list succeeds");

        let queries = gateway.queries.lock().expect("query log poisoned").clone();
        assert_eq!(queries[0].1, 1, "properties embed agent/neighborhood");
        assert_eq!(
            queries[1].2,
            json!({ "type": "properties", "metadata.agent": "agent-1" })
        );
        assert_eq!(queries[1].1, 1);
        assert_eq!(queries[2].1, 0, "services stay at ids-only depth");
    }

    #[tokio::test]
    async fn found_agent_decodes_into_the_typed_model() {
        let gateway = ScriptedGateway::with(Outcome::Object(sample_agent()));
        let client = ContentClient::new(gateway);
        let agent = client
            .agent_by_slug("jordan-lee")
            .await
            .expect("lookup succeeds")
            .expect("agent present");
        assert_eq!(agent.metadata.email, "jordan@example.com");
    }

    #[tokio::test]
    async fn malformed_list_payload_is_a_labeled_fetch_error() {
        let gateway = ScriptedGateway::with(Outcome::Objects(vec![json!({ "id": "agent-1" })]));
        let client = ContentClient::new(gateway);
        let err = client.agents().await.expect_err("decode failure surfaces");
        assert!(matches!(
            err,
            ContentError::Fetch {
                kind: EntityKind::Agents,
                source: GatewayError::Decode { .. }
            }
        ));
    }
}
