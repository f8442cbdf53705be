use crate::config::ContentStoreConfig;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// The five object types published by the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Properties,
    Agents,
    Neighborhoods,
    Services,
    Testimonials,
}

impl EntityKind {
    /// Type slug used in the store's query selector.
    pub const fn type_slug(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Agents => "agents",
            Self::Neighborhoods => "neighborhoods",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Properties => "properties",
            Self::Agents => "agents",
            Self::Neighborhoods => "neighborhoods",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
        }
    }
}

/// A read against the store: one object kind, an optional equality filter,
/// and how many levels of referenced objects to embed inline.
#[derive(Debug, Clone)]
pub struct ObjectQuery {
    kind: EntityKind,
    slug: Option<String>,
    metafield: Option<(&'static str, String)>,
    depth: u8,
}

impl ObjectQuery {
    pub fn list(kind: EntityKind) -> Self {
        Self {
            kind,
            slug: None,
            metafield: None,
            depth: 0,
        }
    }

    pub fn by_slug(kind: EntityKind, slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::list(kind)
        }
    }

    /// Server-side equality filter on a metadata field, e.g.
    /// `metafield("metadata.agent", agent_id)`.
    pub fn metafield(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.metafield = Some((field, value.into()));
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn depth_level(&self) -> u8 {
        self.depth
    }

    /// JSON selector in the store's query language.
    pub fn selector(&self) -> Value {
        let mut selector = json!({ "type": self.kind.type_slug() });
        if let Some(slug) = &self.slug {
            selector["slug"] = json!(slug);
        }
        if let Some((field, value)) = &self.metafield {
            selector[*field] = json!(value);
        }
        selector
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("content store has no matching {}", kind.label())]
    NotFound { kind: EntityKind },
    #[error("content store request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content store returned status {status} for {}", kind.label())]
    Status { kind: EntityKind, status: u16 },
    #[error("failed to decode {} payload: {source}", kind.label())]
    Decode {
        kind: EntityKind,
        #[source]
        source: serde_json::Error,
    },
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read seam over the external content store, so page handlers and the
/// content client can be exercised against in-memory or mock stores.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, GatewayError>;
    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, GatewayError>;
}

/// Only identity, slug, title, and metadata are ever requested; timestamps
/// and publish state stay behind in the store.
const REQUESTED_PROPS: &str = "id,slug,title,metadata";

/// HTTP implementation of [`ContentGateway`] against a Cosmic-style
/// bucket objects endpoint.
pub struct CosmicGateway {
    http: reqwest::Client,
    objects_url: String,
    read_key: String,
}

impl CosmicGateway {
    pub fn new(config: &ContentStoreConfig) -> Self {
        let objects_url = format!(
            "{}/v3/buckets/{}/objects",
            config.api_base.trim_end_matches('/'),
            config.bucket_slug
        );
        Self {
            http: reqwest::Client::new(),
            objects_url,
            read_key: config.read_key.clone(),
        }
    }

    async fn request(&self, query: &ObjectQuery) -> Result<reqwest::Response, GatewayError> {
        let depth = query.depth_level().to_string();
        let selector = query.selector().to_string();
        let response = self
            .http
            .get(&self.objects_url)
            .query(&[
                ("read_key", self.read_key.as_str()),
                ("props", REQUESTED_PROPS),
                ("depth", depth.as_str()),
                ("query", selector.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { kind: query.kind() });
        }
        if !status.is_success() {
            return Err(GatewayError::Status {
                kind: query.kind(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    objects: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SingleEnvelope {
    object: Value,
}

#[async_trait]
impl ContentGateway for CosmicGateway {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, GatewayError> {
        let response = self.request(query).await?;
        let envelope: ListEnvelope = response.json().await?;
        Ok(envelope.objects)
    }

    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, GatewayError> {
        let response = self.request(query).await?;
        let envelope: SingleEnvelope = response.json().await?;
        Ok(envelope.object)
    }
}
