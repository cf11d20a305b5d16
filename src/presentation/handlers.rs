// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::nav_panel::NavPanel;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Serve the full dashboard view model as JSON. A failed build never
/// produces a partial body; the caller gets a 500 and decides its own
/// fallback rendering.
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.get_dashboard().await {
        Ok(view_model) => Json(view_model).into_response(),
        Err(e) => {
            tracing::error!("failed to build dashboard view model: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "dashboard unavailable").into_response()
        }
    }
}

/// Flip the navigation panel open/closed and return the new state.
pub async fn toggle_nav_panel(State(state): State<Arc<AppState>>) -> Json<NavPanel> {
    let mut panel = state.nav_panel.lock().await;
    panel.toggle();
    Json(*panel)
}
