use async_trait::async_trait;
use prime_properties::content::{ContentClient, ContentGateway, GatewayError, ObjectQuery};
use serde_json::{json, Value};
use std::sync::Arc;

/// In-memory stand-in for the content store. It answers selector queries the
/// way the hosted store does: equality on type/slug/metafield, and a
/// not-found condition when nothing matches.
pub struct InMemoryStore {
    objects: Vec<Value>,
}

impl InMemoryStore {
    pub fn seeded() -> Self {
        Self {
            objects: seed_objects(),
        }
    }

    pub fn client() -> ContentClient {
        ContentClient::new(Arc::new(Self::seeded()))
    }

    fn matching(&self, selector: &Value) -> Vec<Value> {
        self.objects
            .iter()
            .filter(|object| selector_matches(selector, object))
            .cloned()
            .collect()
    }
}

fn selector_matches(selector: &Value, object: &Value) -> bool {
    let Some(criteria) = selector.as_object() else {
        return false;
    };

    criteria.iter().all(|(key, expected)| match key.as_str() {
        "type" => object["type"] == *expected,
        "slug" => object["slug"] == *expected,
        field => {
            // Metafield equality, e.g. "metadata.agent" against either a
            // bare id or an embedded object.
            let mut cursor = object;
            for segment in field.split('.') {
                cursor = &cursor[segment];
            }
            cursor == expected || cursor["id"] == *expected
        }
    })
}

#[async_trait]
impl ContentGateway for InMemoryStore {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, GatewayError> {
        let matched = self.matching(&query.selector());
        if matched.is_empty() {
            return Err(GatewayError::NotFound { kind: query.kind() });
        }
        Ok(matched)
    }

    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, GatewayError> {
        self.matching(&query.selector())
            .into_iter()
            .next()
            .ok_or(GatewayError::NotFound { kind: query.kind() })
    }
}

fn agent_object() -> Value {
    json!({
        "type": "agents",
        "id": "agent-1",
        "slug": "jordan-lee",
        "title": "Jordan Lee",
        "metadata": {
            "full_name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": "555-0100",
            "bio": "Twelve years helping families find the right home.",
            "years_of_experience": 12
        }
    })
}

fn neighborhood_object() -> Value {
    json!({
        "type": "neighborhoods",
        "id": "hood-1",
        "slug": "riverside",
        "title": "Riverside",
        "metadata": {
            "neighborhood_name": "Riverside",
            "description": "Tree-lined streets along the river.",
            "average_price_range": "$400K - $700K",
            "neighborhood_photos": [
                { "url": "https://cdn.example/riverside.jpg", "imgix_url": "https://imgix.example/riverside.jpg" }
            ]
        }
    })
}

fn seed_objects() -> Vec<Value> {
    vec![
        json!({
            "type": "properties",
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
                "status": { "key": "for-sale", "value": "For Sale" },
                "property_images": [
                    { "url": "https://cdn.example/condo.jpg", "imgix_url": "https://imgix.example/condo.jpg" }
                ]
            }
        }),
        json!({
            "type": "properties",
            "id": "prop-2",
            "slug": "suburban-house",
            "title": "Suburban House",
            "metadata": {
                "address": "9 Elm Ct",
                "price": 500_000,
                "bedrooms": 4,
                "bathrooms": 3,
                "square_footage": 2600,
                "property_type": { "key": "house", "value": "House" },
                "status": { "key": "for-sale", "value": "For Sale" },
                "agent": agent_object(),
                "neighborhood": neighborhood_object()
            }
        }),
        agent_object(),
        neighborhood_object(),
        json!({
            "type": "services",
            "id": "svc-1",
            "slug": "home-buying",
            "title": "Home Buying",
            "metadata": {
                "service_name": "Home Buying",
                "description": "Guidance from first showing to closing.",
                "featured": true
            }
        }),
        json!({
            "type": "services",
            "id": "svc-2",
            "slug": "relocation",
            "title": "Relocation",
            "metadata": {
                "service_name": "Relocation",
                "featured": false
            }
        }),
        json!({
            "type": "testimonials",
            "id": "testimonial-1",
            "slug": "sarah-m",
            "title": "Sarah M.",
            "metadata": {
                "client_name": "Sarah M.",
                "rating": { "key": "5", "value": "5 Stars" },
                "review": "Found our dream home in two weeks.",
                "property_type_purchased": "House"
            }
        }),
    ]
}
