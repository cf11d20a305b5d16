// Repository trait for hotel record access
use crate::domain::records::{Booking, FinancialSample, GuestRequest, Metrics, StaffTask};
use async_trait::async_trait;

/// Supplier of the five input collections a dashboard is built from. The
/// concrete implementation decides where records live; the build itself
/// only ever sees in-memory values.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn bookings(&self) -> anyhow::Result<Vec<Booking>>;

    async fn staff_tasks(&self) -> anyhow::Result<Vec<StaffTask>>;

    /// Trailing financial window, chronological, oldest first.
    async fn financial_samples(&self) -> anyhow::Result<Vec<FinancialSample>>;

    async fn guest_requests(&self) -> anyhow::Result<Vec<GuestRequest>>;

    /// Pre-aggregated counters for the KPI tiles and the expenditure total.
    async fn metrics(&self) -> anyhow::Result<Metrics>;
}
