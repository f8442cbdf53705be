use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::content::ContentClient;
use crate::error::AppError;
use crate::filter::{PropertyFilter, RawFilterInput};
use crate::views::{
    AgentCardView, AgentDetailView, AgentPageView, AgentsPageView, HomePageView,
    NeighborhoodCardView, NeighborhoodDetailView, NeighborhoodPageView, NeighborhoodsPageView,
    NotFoundView, PageMeta, PropertiesPageView, PropertyCardView, PropertyDetailView,
    PropertyPageView, ServiceCardView, TestimonialCardView,
};

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

/// Site routes plus the operational trio (`/health`, `/ready`, `/metrics`).
pub fn site_router(content: ContentClient) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/properties", get(properties_page))
        .route("/properties/:slug", get(property_page))
        .route("/agents", get(agents_page))
        .route("/agents/:slug", get(agent_page))
        .route("/neighborhoods", get(neighborhoods_page))
        .route("/neighborhoods/:slug", get(neighborhood_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(fallback_page)
        .layer(Extension(content))
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Landing page: three independent reads joined concurrently.
pub(crate) async fn home_page(
    Extension(content): Extension<ContentClient>,
) -> Result<Json<HomePageView>, AppError> {
    let (properties, services, testimonials) = tokio::try_join!(
        content.properties(),
        content.services(),
        content.testimonials(),
    )?;

    let featured_properties = properties
        .iter()
        .take(3)
        .map(PropertyCardView::from_property)
        .collect();
    let featured_services = services
        .iter()
        .filter(|service| service.is_featured())
        .map(ServiceCardView::from_service)
        .collect();
    let testimonials = testimonials
        .iter()
        .map(TestimonialCardView::from_testimonial)
        .collect();

    Ok(Json(HomePageView {
        meta: PageMeta::new(
            "Prime Properties Real Estate",
            "Discover exceptional properties with Prime Properties Real Estate.",
        ),
        featured_properties,
        featured_services,
        testimonials,
    }))
}

/// Listing catalog, filtered in memory by the request's criteria.
pub(crate) async fn properties_page(
    Extension(content): Extension<ContentClient>,
    Query(raw): Query<RawFilterInput>,
) -> Result<Json<PropertiesPageView>, AppError> {
    let properties = content.properties().await?;

    let filter = PropertyFilter::with_criteria(raw.criteria());
    let matched = filter.apply(&properties);

    Ok(Json(PropertiesPageView {
        meta: PageMeta::new(
            "Properties | Prime Properties Real Estate",
            "Browse our complete catalog of listings.",
        ),
        criteria: *filter.criteria(),
        total: properties.len(),
        showing: matched.len(),
        properties: matched
            .into_iter()
            .map(PropertyCardView::from_property)
            .collect(),
    }))
}

pub(crate) async fn property_page(
    Extension(content): Extension<ContentClient>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(property) = content.property_by_slug(&slug).await? else {
        return Ok(not_found_response("Property"));
    };

    let view = PropertyPageView {
        meta: PropertyDetailView::meta(&property),
        property: PropertyDetailView::from_property(&property),
    };
    Ok(Json(view).into_response())
}

pub(crate) async fn agents_page(
    Extension(content): Extension<ContentClient>,
) -> Result<Json<AgentsPageView>, AppError> {
    let agents = content.agents().await?;
    Ok(Json(AgentsPageView {
        meta: PageMeta::new(
            "Our Agents | Prime Properties Real Estate",
            "Meet the team behind Prime Properties.",
        ),
        agents: agents.iter().map(AgentCardView::from_agent).collect(),
    }))
}

/// Agent detail: the listings query depends on the agent's id, so the two
/// fetches are strictly sequential.
pub(crate) async fn agent_page(
    Extension(content): Extension<ContentClient>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(agent) = content.agent_by_slug(&slug).await? else {
        return Ok(not_found_response("Agent"));
    };

    let listings = content.properties_by_agent(&agent.id).await?;

    let view = AgentPageView {
        meta: AgentDetailView::meta(&agent),
        agent: AgentDetailView::from_agent(&agent),
        listings: listings
            .iter()
            .map(PropertyCardView::from_property)
            .collect(),
    };
    Ok(Json(view).into_response())
}

pub(crate) async fn neighborhoods_page(
    Extension(content): Extension<ContentClient>,
) -> Result<Json<NeighborhoodsPageView>, AppError> {
    let neighborhoods = content.neighborhoods().await?;
    Ok(Json(NeighborhoodsPageView {
        meta: PageMeta::new(
            "Neighborhoods | Prime Properties Real Estate",
            "Explore the neighborhoods we serve.",
        ),
        neighborhoods: neighborhoods
            .iter()
            .map(NeighborhoodCardView::from_neighborhood)
            .collect(),
    }))
}

pub(crate) async fn neighborhood_page(
    Extension(content): Extension<ContentClient>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(neighborhood) = content.neighborhood_by_slug(&slug).await? else {
        return Ok(not_found_response("Neighborhood"));
    };

    let listings = content.properties_by_neighborhood(&neighborhood.id).await?;

    let view = NeighborhoodPageView {
        meta: NeighborhoodDetailView::meta(&neighborhood),
        neighborhood: NeighborhoodDetailView::from_neighborhood(&neighborhood),
        listings: listings
            .iter()
            .map(PropertyCardView::from_property)
            .collect(),
    };
    Ok(Json(view).into_response())
}

async fn fallback_page() -> Response {
    not_found_response("Page")
}

fn not_found_response(kind_label: &str) -> Response {
    let view = NotFoundView {
        meta: PageMeta::not_found(kind_label),
    };
    (StatusCode::NOT_FOUND, Json(view)).into_response()
}
