// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_server_config, load_widgets_config};
use crate::infrastructure::memory_repository::InMemoryRecordRepository;
use crate::infrastructure::sample_data;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, toggle_nav_panel};
use crate::presentation::nav_panel::NavPanel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let widgets_config = load_widgets_config()?;

    // Create repository (infrastructure layer), seeded with the demo records
    let records = sample_data::seed()?;
    let repository = Arc::new(InMemoryRecordRepository::new(
        records.bookings,
        records.staff_tasks,
        records.financial_samples,
        records.guest_requests,
        records.metrics,
    ));

    // Create service (application layer)
    let dashboard_service = DashboardService::new(
        repository,
        widgets_config,
        server_config.hotel.name.clone(),
    );

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        nav_panel: Mutex::new(NavPanel::default()),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/ui/nav/toggle", post(toggle_nav_panel))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!(
        "{}:{}",
        server_config.server.host, server_config.server.port
    )
    .parse()?;
    tracing::info!("starting hotel-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
