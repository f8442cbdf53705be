use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::content::{ContentClient, CosmicGateway};
use crate::error::AppError;
use crate::routes::{site_router, AppState};
use crate::telemetry;

/// Host/port overrides supplied on the command line.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub async fn run(overrides: ServeOverrides) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let gateway = Arc::new(CosmicGateway::new(&config.content));
    let content = ContentClient::new(gateway);

    let app = site_router(content)
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "marketing site backend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
