// In-memory repository implementation
use crate::application::record_repository::RecordRepository;
use crate::domain::records::{Booking, FinancialSample, GuestRequest, Metrics, StaffTask};
use async_trait::async_trait;

/// Record supplier backed by plain in-memory collections. The dashboard core
/// assumes records are already available in memory; this is the concrete
/// form of that assumption.
#[derive(Debug, Clone)]
pub struct InMemoryRecordRepository {
    bookings: Vec<Booking>,
    staff_tasks: Vec<StaffTask>,
    financial_samples: Vec<FinancialSample>,
    guest_requests: Vec<GuestRequest>,
    metrics: Metrics,
}

impl InMemoryRecordRepository {
    pub fn new(
        bookings: Vec<Booking>,
        staff_tasks: Vec<StaffTask>,
        financial_samples: Vec<FinancialSample>,
        guest_requests: Vec<GuestRequest>,
        metrics: Metrics,
    ) -> Self {
        Self {
            bookings,
            staff_tasks,
            financial_samples,
            guest_requests,
            metrics,
        }
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn bookings(&self) -> anyhow::Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }

    async fn staff_tasks(&self) -> anyhow::Result<Vec<StaffTask>> {
        Ok(self.staff_tasks.clone())
    }

    async fn financial_samples(&self) -> anyhow::Result<Vec<FinancialSample>> {
        Ok(self.financial_samples.clone())
    }

    async fn guest_requests(&self) -> anyhow::Result<Vec<GuestRequest>> {
        Ok(self.guest_requests.clone())
    }

    async fn metrics(&self) -> anyhow::Result<Metrics> {
        Ok(self.metrics.clone())
    }
}
