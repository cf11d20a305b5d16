// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::presentation::nav_panel::NavPanel;
use tokio::sync::Mutex;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub nav_panel: Mutex<NavPanel>,
}
