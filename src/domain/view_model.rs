// Dashboard view-model - the render-ready output of a build
use crate::domain::records::FinancialSample;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Visual emphasis level a badge or tile accent is classified into. The
/// rendering surface maps each value 1:1 to a fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Positive,
    Informational,
    Neutral,
    Critical,
    Warning,
    Default,
}

/// One labeled scalar metric at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTile {
    pub id: String,
    pub label: String,
    pub value: u32,
    pub category: DisplayCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRow {
    pub guest_name: String,
    pub room: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub badge: DisplayCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffTaskRow {
    pub staff_name: String,
    pub role: String,
    pub priority: String,
    pub badge: DisplayCategory,
    pub description: String,
}

/// Field of `FinancialSample` a chart series is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    Bookings,
    Expenditure,
    Food,
}

/// Static display name and color assigned to one financial-series field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesLegend {
    pub field: SeriesField,
    pub name: String,
    pub color: String,
}

/// Chart-ready financial window: the samples in input order, the legend for
/// the three series, and the formatted grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialOverview {
    pub series: Vec<FinancialSample>,
    pub legend: Vec<SeriesLegend>,
    pub total_expenditure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestFeedItem {
    pub guest_name: String,
    pub room: String,
    pub request: String,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub kpi_tiles: Vec<KpiTile>,
    pub booking_rows: Vec<BookingRow>,
    pub staff_task_rows: Vec<StaffTaskRow>,
    pub staff_total: u32,
    pub financial: FinancialOverview,
    pub requests: Vec<RequestFeedItem>,
}
