// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::chart_renderer::{ChartRenderer, PageRegions};
use crate::application::toggle_controller::ToggleController;
use crate::domain::metrics::AnalyticsData;
use crate::domain::slot::AvailabilitySlot;
use crate::infrastructure::analytics_source::load_analytics;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csrf::{CookieCsrfProvider, CookieJar};
use crate::infrastructure::http_toggle_gateway::HttpToggleGateway;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    let analytics = match &config.analytics.data_path {
        Some(path) => load_analytics(path)?,
        None => {
            tracing::warn!("No analytics data configured, charts will be empty");
            AnalyticsData::default()
        }
    };

    // Toggle wiring (infrastructure layer)
    let cookies = CookieJar::new(config.toggle.cookie.clone());
    let gateway = Arc::new(HttpToggleGateway::new(config.toggle.toggle_url(), cookies.clone()));
    let csrf = Arc::new(CookieCsrfProvider::new(cookies, config.toggle.csrf_cookie_name.clone()));

    let slots = config
        .slots
        .iter()
        .map(|seed| AvailabilitySlot::new(seed.id.clone(), seed.available));
    let controller = ToggleController::new(gateway, csrf, slots);

    // Chart wiring (application layer)
    let regions = config.analytics.regions.clone();
    let page = PageRegions::new(
        config
            .analytics
            .page_regions
            .clone()
            .unwrap_or_else(|| regions.all()),
    );

    let state = Arc::new(AppState {
        renderer: ChartRenderer::new(regions),
        page,
        analytics: Arc::new(analytics),
        controller: Arc::new(controller),
    });

    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.server.listen_addr))?;
    tracing::info!("Starting sysadmin-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
