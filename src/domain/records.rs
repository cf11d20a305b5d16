// Hotel domain records - immutable inputs supplied by the record repository
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A guest booking. `status` is the raw categorical value as supplied by the
/// data source; it is classified into a display category during the build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub guest_name: String,
    pub room: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffTask {
    pub staff_name: String,
    pub role: String,
    pub priority: String,
    pub description: String,
}

/// One day of the trailing financial window. Sequence order is chronological
/// (oldest first) and display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSample {
    pub day: String,
    pub bookings: u32,
    pub expenditure: f64,
    pub food: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRequest {
    pub guest_name: String,
    pub room: String,
    pub request: String,
}

/// Pre-aggregated operational counters. Supplied as external input; the
/// builder passes these through and never recomputes them from the record
/// collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub vacancy_count: u32,
    pub booked_count: u32,
    pub pending_checkout_count: u32,
    pub guest_count: u32,
    pub staff_count: u32,
    pub total_expenditure: f64,
}

/// Key selecting one scalar counter out of `Metrics` for a KPI tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
    Vacancy,
    Booked,
    PendingCheckout,
    Guests,
}

impl Metrics {
    pub fn value(&self, key: MetricKey) -> u32 {
        match key {
            MetricKey::Vacancy => self.vacancy_count,
            MetricKey::Booked => self.booked_count,
            MetricKey::PendingCheckout => self.pending_checkout_count,
            MetricKey::Guests => self.guest_count,
        }
    }
}
