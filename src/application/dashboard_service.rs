// Dashboard service - Use case for assembling the operations dashboard
use crate::application::record_repository::RecordRepository;
use crate::application::view_model_builder::build_view_model;
use crate::domain::view_model::DashboardViewModel;
use crate::infrastructure::config::WidgetsConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn RecordRepository>,
    widgets_config: WidgetsConfig,
    hotel_name: String,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn RecordRepository>,
        widgets_config: WidgetsConfig,
        hotel_name: String,
    ) -> Self {
        Self {
            repository,
            widgets_config,
            hotel_name,
        }
    }

    pub async fn get_dashboard(&self) -> anyhow::Result<DashboardViewModel> {
        let title = format!("{} Operations", self.hotel_name);

        let bookings = self.repository.bookings().await?;
        let staff_tasks = self.repository.staff_tasks().await?;
        let financial_samples = self.repository.financial_samples().await?;
        let guest_requests = self.repository.guest_requests().await?;
        let metrics = self.repository.metrics().await?;

        let view_model = build_view_model(
            &title,
            &bookings,
            &staff_tasks,
            &financial_samples,
            &guest_requests,
            &metrics,
            &self.widgets_config,
        )?;

        Ok(view_model)
    }
}
